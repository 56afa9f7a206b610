use crate::domain::{CollisionResponse, PulseConfig};

use super::perf_stats::PerfStats;
use super::SimulationCore;

pub(super) fn enable_perf_metrics(core: &mut SimulationCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(core: &SimulationCore) -> PerfStats {
    core.perf_stats.clone()
}

pub(super) fn set_collisions_enabled(core: &mut SimulationCore, enabled: bool) {
    core.collisions_enabled = enabled;
    core.config.collisions_enabled = enabled;
}

pub(super) fn set_collision_response(core: &mut SimulationCore, response: CollisionResponse) {
    core.collision_response = response;
    core.config.collision_response = response;
}

/// `axis`: 0 = x, 1 = y, 2 = z
pub(super) fn set_restitution(core: &mut SimulationCore, axis: usize, restitution: f64) -> Result<(), String> {
    let mut bounds = core.bounds;
    let (slot, name) = match axis {
        0 => (&mut bounds.x, "x"),
        1 => (&mut bounds.y, "y"),
        2 => (&mut bounds.z, "z"),
        _ => return Err(format!("axis {axis} out of range (0..=2)")),
    };
    slot.restitution = restitution;
    slot.validate(name)?;

    core.bounds = bounds;
    core.config.bounds = bounds;
    Ok(())
}

pub(super) fn set_pulse(core: &mut SimulationCore, scale: f64, duration_ms: f64) -> Result<(), String> {
    if !(scale > 0.0 && scale.is_finite()) {
        return Err(format!("pulse scale {scale} must be positive"));
    }
    if !(duration_ms > 0.0 && duration_ms.is_finite()) {
        return Err(format!("pulse duration {duration_ms} must be positive"));
    }
    let pulse = PulseConfig { scale, duration_ms };
    core.pulses.set_config(pulse);
    core.config.pulse = pulse;
    Ok(())
}

/// Viewport changed: keep the camera aspect and pointer mapping in sync.
pub(super) fn resize(core: &mut SimulationCore, width: u32, height: u32) -> Result<(), String> {
    core.camera.resize(width, height)?;
    core.viewport = (width, height);
    Ok(())
}
