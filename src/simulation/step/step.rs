use crate::systems::{integrate, resolve_boundaries, resolve_collisions, REFERENCE_FRAME_MS};

use super::perf_timer::{timed, PerfTimer};
use super::render_extract;
use super::SimulationCore;

/// Engine time moves by the wall time between stamps. A frame that
/// (re)anchors the clock counts as `dt` reference frames.
pub(super) fn step(core: &mut SimulationCore, now_ms: f64) {
    let last = core.clock.now_ms();
    let dt = core.clock.tick(now_ms);
    core.now_ms += match (last, core.clock.now_ms()) {
        (Some(prev), Some(t)) => t - prev,
        _ => dt * REFERENCE_FRAME_MS,
    };
    advance(core, dt);
}

/// Fixed steps own the time base until the next `step`, which re-anchors.
pub(super) fn step_fixed(core: &mut SimulationCore, dt: f64) {
    let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
    core.now_ms += dt * REFERENCE_FRAME_MS;
    core.clock.reset();
    advance(core, dt);
}

fn advance(core: &mut SimulationCore, dt: f64) {
    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset();
        core.perf_stats.body_count = core.bodies.len() as u32;
        core.perf_stats.dt = dt;
    }
    let mut timer = if perf_on { Some(PerfTimer::start()) } else { None };

    // === MOTION ===
    let mut phase_ms = 0.0;
    timed(&mut timer, &mut phase_ms, || {
        integrate(core.bodies.as_mut_slice(), dt)
    });
    core.perf_stats.integrate_ms += phase_ms;

    // === BOUNDARY BOX ===
    let mut phase_ms = 0.0;
    let bounds = core.bounds;
    let reflections = timed(&mut timer, &mut phase_ms, || {
        resolve_boundaries(core.bodies.as_mut_slice(), &bounds)
    });
    core.perf_stats.boundary_ms += phase_ms;

    // === PAIRWISE COLLISIONS ===
    let mut phase_ms = 0.0;
    let contacts = if core.collisions_enabled {
        let response = core.collision_response;
        timed(&mut timer, &mut phase_ms, || {
            resolve_collisions(core.bodies.as_mut_slice(), response)
        })
    } else {
        0
    };
    core.perf_stats.collision_ms += phase_ms;

    // === ORBITS + CAMERA FOLLOW ===
    let mut phase_ms = 0.0;
    let orbits_updated = timed(&mut timer, &mut phase_ms, || {
        core.orbits.advance(&mut core.bodies, dt)
    });
    if let Some(follow) = core.follow {
        match core.bodies.get(follow.body) {
            Some(body) => core.camera.follow(body.position, follow.offset),
            None => core.follow = None,
        }
    }
    core.perf_stats.orbit_ms += phase_ms;

    // === DEFERRED SCALE REVERTS ===
    let mut phase_ms = 0.0;
    let now_ms = core.now_ms;
    let pulses_fired = timed(&mut timer, &mut phase_ms, || {
        core.pulses.tick(&mut core.bodies, now_ms)
    });
    core.perf_stats.pulse_ms += phase_ms;

    // === RENDER BUFFERS ===
    let mut phase_ms = 0.0;
    timed(&mut timer, &mut phase_ms, || render_extract::extract(core));
    core.perf_stats.extract_ms += phase_ms;

    core.frame += 1;

    if let Some(t) = timer {
        let stats = &mut core.perf_stats;
        stats.step_ms = t.elapsed_ms();
        stats.reflections = reflections;
        stats.contacts = contacts;
        stats.orbits_updated = orbits_updated;
        stats.pulses_fired = pulses_fired;
        stats.pulses_pending = core.pulses.pending_count() as u32;
    }
}
