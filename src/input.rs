use glam::Vec2;

/// What a canvas drag does to the orbit camera.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    #[default]
    Rotate,
    Pan,
}

impl DragMode {
    /// Primary button rotates, secondary pans; other buttons are ignored.
    pub fn from_button(button: i16) -> Option<Self> {
        match button {
            0 => Some(DragMode::Rotate),
            2 => Some(DragMode::Pan),
            _ => None,
        }
    }
}

/// Active orbit drag on the canvas.
#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub mode: DragMode,
    pub pointer_id: i32,
    pub last: Vec2,
}

impl DragState {
    pub fn begin(&mut self, mode: DragMode, pointer_id: i32, at: Vec2) {
        self.active = true;
        self.mode = mode;
        self.pointer_id = pointer_id;
        self.last = at;
    }

    /// Movement since the previous sample, or `None` if this pointer is not
    /// dragging.
    pub fn advance(&mut self, pointer_id: i32, at: Vec2) -> Option<Vec2> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        let delta = at - self.last;
        self.last = at;
        Some(delta)
    }

    pub fn end(&mut self, pointer_id: i32) {
        if pointer_id == self.pointer_id {
            self.active = false;
        }
    }
}

// ---------------- Pointer helpers ----------------
/// Client coordinates to normalized device coordinates (`[-1, 1]`, y up).
#[inline]
pub fn pointer_ndc(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (client_x / width) * 2.0 - 1.0,
        -(client_y / height) * 2.0 + 1.0,
    )
}

/// Wheel delta normalized to notches; line and page modes are scaled to
/// roughly match pixel mode.
#[inline]
pub fn wheel_notches(delta_y: f64, delta_mode: u32) -> f32 {
    let px = match delta_mode {
        1 => delta_y * 16.0,
        2 => delta_y * 400.0,
        _ => delta_y,
    };
    (px / 100.0) as f32
}
