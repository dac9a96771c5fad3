use super::camera::OrbitCamera;
use super::config::TriggerTarget;
use super::constants::{PARTICLE_SOURCE_SEGMENTS, SPHERE_RADIUS};
use super::geometry::sphere_points;
use super::motion::PointerState;
use super::particles::ParticleField;
use super::scene::SceneTransforms;
use super::style::StyleBatch;
use super::transition::{TransitionEvent, TransitionMachine};
use glam::Vec2;
use rand::Rng;

/// What a tick asks the page to do besides rendering.
#[derive(Clone, Debug, Default)]
pub struct FrameOutput {
    pub styles: StyleBatch,
    pub event: Option<TransitionEvent>,
}

/// Everything the frame update reads and writes.
///
/// Event handlers only call the input methods (`pointer_moved`, `activate`,
/// `return_to_menu`, camera input); [`AppState::tick`] is the single place
/// where per-frame state advances.
pub struct AppState {
    pub particles: ParticleField,
    pub pointer: PointerState,
    pub transition: TransitionMachine,
    pub scene: SceneTransforms,
    pub orbit: OrbitCamera,
}

impl AppState {
    pub fn new<R: Rng + ?Sized>(targets: Vec<TriggerTarget>, rng: &mut R) -> Self {
        let surface = sphere_points(
            SPHERE_RADIUS,
            PARTICLE_SOURCE_SEGMENTS,
            PARTICLE_SOURCE_SEGMENTS,
        );
        Self::with_parts(ParticleField::new(&surface, rng), TransitionMachine::new(targets))
    }

    pub fn with_parts(particles: ParticleField, transition: TransitionMachine) -> Self {
        Self {
            particles,
            pointer: PointerState::default(),
            transition,
            scene: SceneTransforms::default(),
            orbit: OrbitCamera::default(),
        }
    }

    pub fn pointer_moved(&mut self, ndc: Vec2) {
        self.pointer.set_target(ndc);
    }

    pub fn activate(&mut self, target: usize, now_ms: f64) -> Option<StyleBatch> {
        let styles = self.transition.activate(target, now_ms)?;
        self.orbit.enabled = false;
        Some(styles)
    }

    pub fn return_to_menu(&mut self, now_ms: f64) -> Option<StyleBatch> {
        let styles = self.transition.return_to_menu(now_ms, self.scene.sphere)?;
        self.orbit.enabled = true;
        Some(styles)
    }

    pub fn tick(&mut self, now_ms: f64) -> FrameOutput {
        let mut out = FrameOutput::default();
        let running = self.transition.is_running();

        if !running {
            self.pointer.step();
            self.particles.advance(self.pointer.particle_drift());
        }
        self.particles.update_positions();

        if !running {
            if self.transition.active_target().is_none() {
                self.scene.sphere.rotation_y -= self.pointer.spin_speed();
                self.scene.points.rotation_y = self.scene.sphere.rotation_y;
                self.scene.glow.rotation_y = 0.0;
                let eye = self.orbit.camera.eye;
                let step = self.pointer.parallax_step(Vec2::new(eye.x, eye.y));
                self.orbit.camera.eye.x += step.x;
                self.orbit.camera.eye.y += step.y;
            } else {
                self.scene.glow.rotation_y = 0.0;
                self.scene.points.rotation_y = 0.0;
            }
        } else if let Some(frame) = self.transition.tick(now_ms) {
            for t in [&mut self.scene.sphere, &mut self.scene.points] {
                t.position = frame.body_position;
                t.scale = frame.scale;
            }
            self.scene.glow.position = frame.glow_position;
            self.scene.glow.scale = frame.scale;
            out.styles = frame.styles;
            out.event = frame.event;
        }

        self.orbit.update();
        out
    }
}
