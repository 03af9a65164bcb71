/// Quadratic ease-out on `t` in \[0, 1\].
#[inline]
pub fn ease_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Time-bounded easing of a single scalar from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration_sec: f32,
    elapsed_sec: f32,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration_sec: f32) -> Self {
        Self {
            from,
            to,
            duration_sec,
            elapsed_sec: 0.0,
        }
    }

    /// Advance by `dt_sec` and return the eased value.
    pub fn advance(&mut self, dt_sec: f32) -> f32 {
        self.elapsed_sec = (self.elapsed_sec + dt_sec.max(0.0)).min(self.duration_sec.max(0.0));
        self.value()
    }

    pub fn value(&self) -> f32 {
        if self.duration_sec <= 0.0 {
            return self.to;
        }
        let t = self.elapsed_sec / self.duration_sec;
        self.from + (self.to - self.from) * ease_out_quad(t)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed_sec >= self.duration_sec
    }
}
