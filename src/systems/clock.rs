/// Length of one reference frame; velocities are authored per frame at 60 Hz
pub const REFERENCE_FRAME_MS: f64 = 1000.0 / 60.0;

/// Longest step taken after a stall (e.g. a background tab), in reference frames
pub const MAX_FRAME_DT: f64 = 4.0;

/// Turns `requestAnimationFrame` timestamps into a frame-relative `dt`
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self { last_ms: None }
    }

    /// Timestamp of the last accepted frame
    pub fn now_ms(&self) -> Option<f64> {
        self.last_ms
    }

    /// `dt` in reference frames for a frame stamped `now_ms`.
    /// The first frame counts as exactly one reference frame.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        if !now_ms.is_finite() {
            return 0.0;
        }
        let dt = match self.last_ms {
            None => 1.0,
            Some(prev) => {
                let elapsed = now_ms - prev;
                if elapsed <= 0.0 {
                    // Clock went backwards or duplicate stamp: hold still.
                    0.0
                } else {
                    (elapsed / REFERENCE_FRAME_MS).min(MAX_FRAME_DT)
                }
            }
        };
        if self.last_ms.map_or(true, |prev| now_ms > prev) {
            self.last_ms = Some(now_ms);
        }
        dt
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}
