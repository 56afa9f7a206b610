//! Stopwatch for the phases of one step

#[cfg(target_arch = "wasm32")]
type Stamp = f64;
#[cfg(not(target_arch = "wasm32"))]
type Stamp = std::time::Instant;

#[cfg(target_arch = "wasm32")]
fn stamp() -> Stamp {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn stamp() -> Stamp {
    std::time::Instant::now()
}

#[cfg(target_arch = "wasm32")]
fn ms_since(from: Stamp) -> f64 {
    js_sys::Date::now() - from
}

#[cfg(not(target_arch = "wasm32"))]
fn ms_since(from: Stamp) -> f64 {
    from.elapsed().as_secs_f64() * 1000.0
}

/// Whole-step time plus a lap mark for the current phase
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    started: Stamp,
    lap: Stamp,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        let now = stamp();
        PerfTimer { started: now, lap: now }
    }

    /// Since `start`, unaffected by laps
    pub(crate) fn elapsed_ms(&self) -> f64 {
        ms_since(self.started)
    }

    /// Since the previous lap, then mark a new one
    pub(crate) fn lap_ms(&mut self) -> f64 {
        let ms = ms_since(self.lap);
        self.lap = stamp();
        ms
    }
}

/// Run one step phase, adding its duration to `slot` when timing is on
#[inline]
pub(crate) fn timed<R>(timer: &mut Option<PerfTimer>, slot: &mut f64, phase: impl FnOnce() -> R) -> R {
    let Some(t) = timer else {
        return phase();
    };
    t.lap_ms();
    let out = phase();
    *slot += t.lap_ms();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_time_fits_inside_step_time() {
        let mut timer = Some(PerfTimer::start());
        let mut integrate_ms = 0.0;
        let sum = timed(&mut timer, &mut integrate_ms, || (0..10_000u64).sum::<u64>());
        assert_eq!(sum, 49_995_000);
        assert!(integrate_ms >= 0.0);

        let step_ms = timer.map(|t| t.elapsed_ms()).unwrap_or(-1.0);
        assert!(step_ms >= integrate_ms);
    }

    #[test]
    fn test_disabled_timing_leaves_slot_alone() {
        let mut timer: Option<PerfTimer> = None;
        let mut slot = 0.0;
        assert_eq!(timed(&mut timer, &mut slot, || 7), 7);
        assert_eq!(slot, 0.0);
    }
}
