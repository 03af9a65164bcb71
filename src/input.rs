/// Pointer drag bookkeeping for the orbit controls.
///
/// Only the primary button drags. Movement deltas are reported in CSS pixels
/// between successive pointer events.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct DragTracker {
    active: bool,
    last: (f32, f32),
}

impl DragTracker {
    /// Returns true when a drag starts.
    pub fn press(&mut self, button: i16, x: f32, y: f32) -> bool {
        if button != 0 {
            return false;
        }
        self.active = true;
        self.last = (x, y);
        true
    }

    /// Delta since the previous event while dragging.
    pub fn moved(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        if !self.active {
            return None;
        }
        let delta = (x - self.last.0, y - self.last.1);
        self.last = (x, y);
        Some(delta)
    }

    /// Returns true when a drag ends.
    pub fn release(&mut self) -> bool {
        std::mem::replace(&mut self.active, false)
    }

    pub fn is_dragging(&self) -> bool {
        self.active
    }
}

/// Normalise a wheel delta to a notch direction: -1 (zoom in), 0 or 1 (zoom out).
#[inline]
pub fn wheel_notch(delta_y: f64) -> f32 {
    if delta_y > 0.0 {
        1.0
    } else if delta_y < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Backing-store size for a CSS box at the given device pixel ratio.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let w = (css_width * dpr) as u32;
    let h = (css_height * dpr) as u32;
    (w.max(1), h.max(1))
}
