use super::config::{OnComplete, TriggerTarget, ABOUT_ME_ID, GALLERY_CONTAINER_ID};
use super::constants::{GLOW_SIDE_OFFSET, TRANSITION_DURATION_MS, TRIGGER_FADE_CUTOFF};
use super::easing::{ease_in_out_quad, lerp, progress};
use super::scene::Transform;
use super::style::{push, Display, StyleBatch, StyleValue};
use glam::Vec3;

/// Menu/panel state machine.
///
/// `Menu` and `Panel` are resting states; the two transitioning states are
/// the only ones in which [`TransitionMachine::tick`] produces output.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Menu,
    TransitioningIn {
        target: usize,
        started_ms: f64,
    },
    Panel {
        target: usize,
    },
    TransitioningOut {
        from: usize,
        started_ms: f64,
        start: Transform,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransitionEvent {
    EnteredPanel {
        target: usize,
        on_complete: OnComplete,
    },
    ReturnedToMenu,
}

/// Output of one running tick.
#[derive(Clone, Debug)]
pub struct TransitionFrame {
    pub progress: f32,
    pub eased: f32,
    /// Shared by the sphere and the particle set.
    pub body_position: Vec3,
    pub scale: f32,
    pub glow_position: Vec3,
    pub styles: StyleBatch,
    /// Set on the tick that reaches `progress == 1`, never again after.
    pub event: Option<TransitionEvent>,
}

pub struct TransitionMachine {
    targets: Vec<TriggerTarget>,
    duration_ms: f64,
    phase: Phase,
}

impl TransitionMachine {
    pub fn new(targets: Vec<TriggerTarget>) -> Self {
        Self::with_duration(targets, TRANSITION_DURATION_MS)
    }

    pub fn with_duration(targets: Vec<TriggerTarget>, duration_ms: f64) -> Self {
        Self {
            targets,
            duration_ms,
            phase: Phase::Menu,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(
            self.phase,
            Phase::TransitioningIn { .. } | Phase::TransitioningOut { .. }
        )
    }

    /// Target whose panel is shown or being shown; `None` in the menu and
    /// while returning to it.
    pub fn active_target(&self) -> Option<usize> {
        match self.phase {
            Phase::TransitioningIn { target, .. } | Phase::Panel { target } => Some(target),
            Phase::Menu | Phase::TransitioningOut { .. } => None,
        }
    }

    pub fn started_at(&self) -> Option<f64> {
        match self.phase {
            Phase::TransitioningIn { started_ms, .. } | Phase::TransitioningOut { started_ms, .. } => {
                Some(started_ms)
            }
            Phase::Menu | Phase::Panel { .. } => None,
        }
    }

    /// Starts the forward transition into `target`.
    ///
    /// Only valid from the menu; returns the immediate style writes, or
    /// `None` when the request is ignored.
    pub fn activate(&mut self, target: usize, now_ms: f64) -> Option<StyleBatch> {
        if self.phase != Phase::Menu {
            log::debug!("[transition] ignoring activate({}) in {:?}", target, self.phase);
            return None;
        }
        let Some(tt) = self.targets.get(target) else {
            log::warn!("[transition] unknown target index {}", target);
            return None;
        };
        log::info!("[transition] {} -> panel {}", tt.id, tt.content_panel_id);
        self.phase = Phase::TransitioningIn {
            target,
            started_ms: now_ms,
        };
        Some(activation_styles(&self.targets, target))
    }

    /// Starts the reverse transition from the shown panel back to the menu.
    ///
    /// `current` is the sphere transform at the moment of the request; the
    /// reverse interpolation starts from it.
    pub fn return_to_menu(&mut self, now_ms: f64, current: Transform) -> Option<StyleBatch> {
        let Phase::Panel { target } = self.phase else {
            log::debug!("[transition] ignoring return in {:?}", self.phase);
            return None;
        };
        log::info!("[transition] {} -> menu", self.targets[target].id);
        self.phase = Phase::TransitioningOut {
            from: target,
            started_ms: now_ms,
            start: current,
        };
        Some(return_styles(&self.targets))
    }

    /// Advances a running transition. Returns `None` in resting states.
    pub fn tick(&mut self, now_ms: f64) -> Option<TransitionFrame> {
        match self.phase {
            Phase::TransitioningIn { target, started_ms } => {
                let t = progress(now_ms - started_ms, self.duration_ms);
                let e = ease_in_out_quad(t);
                let tt = self.targets[target];
                let scale = lerp(1.0, tt.end_scale, e);
                let body_position = Vec3::new(
                    lerp(0.0, tt.destination.x, e),
                    lerp(0.0, tt.destination.y, e),
                    0.0,
                );
                let glow_position = body_position + Vec3::X * (GLOW_SIDE_OFFSET * e);
                let mut styles = forward_styles(&self.targets, target, t, e);
                let mut event = None;
                if t >= 1.0 {
                    self.phase = Phase::Panel { target };
                    styles.extend(completion_styles(tt.on_complete));
                    event = Some(TransitionEvent::EnteredPanel {
                        target,
                        on_complete: tt.on_complete,
                    });
                    log::debug!("[transition] entered panel {}", tt.content_panel_id);
                }
                Some(TransitionFrame {
                    progress: t,
                    eased: e,
                    body_position,
                    scale,
                    glow_position,
                    styles,
                    event,
                })
            }
            Phase::TransitioningOut {
                from,
                started_ms,
                start,
            } => {
                let t = progress(now_ms - started_ms, self.duration_ms);
                let e = ease_in_out_quad(t);
                let scale = lerp(start.scale, 1.0, e);
                let body_position = Vec3::new(
                    lerp(start.position.x, 0.0, e),
                    lerp(start.position.y, 0.0, e),
                    0.0,
                );
                let glow_position = body_position + Vec3::X * (GLOW_SIDE_OFFSET * (1.0 - e));
                let styles = reverse_styles(&self.targets, t, e);
                let mut event = None;
                if t >= 1.0 {
                    self.phase = Phase::Menu;
                    event = Some(TransitionEvent::ReturnedToMenu);
                    log::debug!(
                        "[transition] back in menu from {}",
                        self.targets[from].content_panel_id
                    );
                }
                Some(TransitionFrame {
                    progress: t,
                    eased: e,
                    body_position,
                    scale,
                    glow_position,
                    styles,
                    event,
                })
            }
            Phase::Menu | Phase::Panel { .. } => None,
        }
    }
}

fn activation_styles(targets: &[TriggerTarget], active: usize) -> StyleBatch {
    let mut s = StyleBatch::new();
    for t in targets {
        push(&mut s, t.content_panel_id, StyleValue::Opacity(0.0));
        push(&mut s, t.content_panel_id, StyleValue::PointerEvents(false));
        push(&mut s, t.content_panel_id, StyleValue::Display(Display::None));
    }
    push(
        &mut s,
        targets[active].content_panel_id,
        StyleValue::Display(Display::Flex),
    );
    for t in targets {
        push(&mut s, t.id, StyleValue::Opacity(0.0));
        push(&mut s, t.id, StyleValue::PointerEvents(false));
    }
    push(&mut s, ABOUT_ME_ID, StyleValue::Opacity(0.0));
    push(&mut s, ABOUT_ME_ID, StyleValue::PointerEvents(false));
    push(&mut s, GALLERY_CONTAINER_ID, StyleValue::Display(Display::None));
    s
}

fn forward_styles(targets: &[TriggerTarget], active: usize, t: f32, e: f32) -> StyleBatch {
    let mut s = StyleBatch::new();
    for (i, tt) in targets.iter().enumerate() {
        let panel = tt.content_panel_id;
        if i == active {
            push(&mut s, panel, StyleValue::Opacity(e));
            push(&mut s, panel, StyleValue::PointerEvents(true));
            push(&mut s, panel, StyleValue::Display(Display::Flex));
        } else {
            push(&mut s, panel, StyleValue::Opacity(1.0 - e));
            push(&mut s, panel, StyleValue::PointerEvents(false));
            if t >= 1.0 {
                push(&mut s, panel, StyleValue::Display(Display::None));
            }
        }
    }
    let trigger_opacity = if t > TRIGGER_FADE_CUTOFF { 0.0 } else { 1.0 - e };
    for tt in targets {
        push(&mut s, tt.id, StyleValue::Opacity(trigger_opacity));
    }
    s
}

fn completion_styles(on_complete: OnComplete) -> StyleBatch {
    let mut s = StyleBatch::new();
    match on_complete {
        OnComplete::OpenGallery => {
            push(&mut s, GALLERY_CONTAINER_ID, StyleValue::Display(Display::Block));
        }
        OnComplete::RevealText => {
            push(&mut s, ABOUT_ME_ID, StyleValue::Opacity(1.0));
            push(&mut s, ABOUT_ME_ID, StyleValue::PointerEvents(true));
        }
        OnComplete::None => {}
    }
    s
}

fn return_styles(targets: &[TriggerTarget]) -> StyleBatch {
    let mut s = StyleBatch::new();
    for t in targets {
        push(&mut s, t.content_panel_id, StyleValue::PointerEvents(false));
        push(&mut s, t.id, StyleValue::Opacity(0.0));
    }
    push(&mut s, ABOUT_ME_ID, StyleValue::Opacity(0.0));
    push(&mut s, ABOUT_ME_ID, StyleValue::PointerEvents(false));
    push(&mut s, GALLERY_CONTAINER_ID, StyleValue::Display(Display::None));
    s
}

fn reverse_styles(targets: &[TriggerTarget], t: f32, e: f32) -> StyleBatch {
    let mut s = StyleBatch::new();
    let done = t >= 1.0;
    for tt in targets {
        push(&mut s, tt.content_panel_id, StyleValue::Opacity(1.0 - e));
        if done {
            push(&mut s, tt.content_panel_id, StyleValue::Display(Display::None));
        }
    }
    for tt in targets {
        if done {
            push(&mut s, tt.id, StyleValue::Opacity(1.0));
            push(&mut s, tt.id, StyleValue::PointerEvents(true));
        } else {
            push(&mut s, tt.id, StyleValue::Opacity(0.0));
        }
    }
    s
}
