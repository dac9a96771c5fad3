use super::constants::{PARTICLE_FRACTION, PARTICLE_MAX_ANGULAR_SPEED};
use glam::Vec3;
use rand::seq::SliceRandom;
use rand::Rng;

/// One particle constrained to a sphere surface.
///
/// `theta`/`phi` drift every idle frame by the per-particle angular velocity;
/// `radius` is fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub theta: f32,
    pub phi: f32,
    pub radius: f32,
    pub d_theta: f32,
    pub d_phi: f32,
}

impl Particle {
    pub fn from_cartesian(p: Vec3, d_theta: f32, d_phi: f32) -> Self {
        let radius = p.length();
        let (theta, phi) = if radius > 0.0 {
            (p.z.atan2(p.x), (p.y / radius).clamp(-1.0, 1.0).acos())
        } else {
            (0.0, 0.0)
        };
        Self {
            theta,
            phi,
            radius,
            d_theta,
            d_phi,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        Vec3::new(
            self.radius * sin_phi * cos_theta,
            self.radius * cos_phi,
            self.radius * sin_phi * sin_theta,
        )
    }
}

/// Number of particles drawn from a cloud of `total` surface points.
#[inline]
pub fn particle_count(total: usize) -> usize {
    (total as f64 * PARTICLE_FRACTION).floor() as usize
}

/// Picks `count` distinct indices from `0..total`.
///
/// Partial Fisher-Yates: cost is bounded by `count` swaps regardless of how
/// close `count` gets to `total`.
pub fn sample_indices<R: Rng + ?Sized>(total: usize, count: usize, rng: &mut R) -> Vec<usize> {
    let count = count.min(total);
    let mut indices: Vec<usize> = (0..total).collect();
    let (picked, _) = indices.partial_shuffle(rng, count);
    picked.to_vec()
}

pub struct ParticleField {
    particles: Vec<Particle>,
    positions: Vec<Vec3>,
}

impl ParticleField {
    /// Samples a fixed subset of `surface` and assigns random angular velocities.
    pub fn new<R: Rng + ?Sized>(surface: &[Vec3], rng: &mut R) -> Self {
        let count = particle_count(surface.len());
        let particles: Vec<Particle> = sample_indices(surface.len(), count, rng)
            .into_iter()
            .map(|i| {
                let d_theta =
                    rng.gen_range(-PARTICLE_MAX_ANGULAR_SPEED..=PARTICLE_MAX_ANGULAR_SPEED);
                let d_phi = rng.gen_range(-PARTICLE_MAX_ANGULAR_SPEED..=PARTICLE_MAX_ANGULAR_SPEED);
                Particle::from_cartesian(surface[i], d_theta, d_phi)
            })
            .collect();
        let positions = particles.iter().map(Particle::position).collect();
        Self {
            particles,
            positions,
        }
    }

    pub fn from_particles(particles: Vec<Particle>) -> Self {
        let positions = particles.iter().map(Particle::position).collect();
        Self {
            particles,
            positions,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Cartesian positions as of the last [`ParticleField::update_positions`].
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Applies one frame of angular velocity plus a shared theta drift.
    pub fn advance(&mut self, theta_drift: f32) {
        for p in &mut self.particles {
            p.theta += p.d_theta + theta_drift;
            p.phi += p.d_phi;
        }
    }

    pub fn update_positions(&mut self) {
        for (out, p) in self.positions.iter_mut().zip(&self.particles) {
            *out = p.position();
        }
    }
}
