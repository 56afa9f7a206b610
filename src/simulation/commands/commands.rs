use crate::domain::{pointer_to_ndc, AssetState, BodyId, OrbitConfig, TextureSlot, Vec3};
use crate::systems::pick;

use super::init::{orbit_body, orbit_from_config, populate};
use super::{render_extract, FollowTarget, SimulationCore};

/// Pick the nearest body under the pointer and pulse it.
pub(super) fn click_at(core: &mut SimulationCore, px: f64, py: f64, now_ms: f64) -> Option<BodyId> {
    let (w, h) = core.viewport;
    let (ndc_x, ndc_y) = pointer_to_ndc(px, py, w as f64, h as f64);
    let ray = core.camera.ray_from_ndc(ndc_x, ndc_y);

    let hit = pick(core.bodies.as_slice(), &ray)?;
    let click_texture = core.config.click_texture.clone();
    let body = core.bodies.get_mut(hit.id)?;

    match (&mut body.appearance.texture, click_texture) {
        // Textured body: swap to the click texture; JS reports when it is ready.
        (Some(slot), Some(key)) => {
            *slot = TextureSlot { key, state: AssetState::Pending };
        }
        _ => body.appearance.color = core.rng.color(),
    }
    core.pulses.trigger(body, now_ms);

    render_extract::extract(core);
    Some(hit.id)
}

pub(super) fn texture_loaded(core: &mut SimulationCore, id: BodyId) -> bool {
    let Some(slot) = core
        .bodies
        .get_mut(id)
        .and_then(|b| b.appearance.texture.as_mut())
    else {
        log_warn!("texture loaded for unknown or untextured body {}", id);
        return false;
    };
    slot.state = AssetState::Loaded;
    render_extract::extract(core);
    true
}

/// Asset failure is not fatal: the body keeps its placeholder colour.
pub(super) fn texture_failed(core: &mut SimulationCore, id: BodyId, reason: &str) -> bool {
    let Some(slot) = core
        .bodies
        .get_mut(id)
        .and_then(|b| b.appearance.texture.as_mut())
    else {
        log_warn!("texture failure for unknown or untextured body {}: {}", id, reason);
        return false;
    };
    log_warn!("texture {} for body {} failed to load: {}", slot.key, id, reason);
    slot.state = AssetState::Failed;
    render_extract::extract(core);
    true
}

/// Register one more orbiting body on a running scene.
pub(super) fn add_orbit(core: &mut SimulationCore, cfg: OrbitConfig) -> Result<BodyId, String> {
    if !(cfg.body_radius > 0.0 && cfg.body_radius.is_finite()) {
        return Err(format!("orbit {}: bodyRadius must be positive", cfg.key));
    }
    if core.orbits.body_id(&cfg.key).is_some() {
        return Err(format!("duplicate body key {}", cfg.key));
    }
    if let Some(center) = &cfg.center {
        if core.orbits.body_id(center).is_none() {
            return Err(format!("orbit {}: unknown center {}", cfg.key, center));
        }
    }

    let id = core.bodies.insert(orbit_body(&cfg));
    core.orbits.add_orbit(orbit_from_config(&cfg, id))?;
    core.orbits.place(&mut core.bodies);
    log_info!("orbit {} added as body {}", cfg.key, id);
    core.config.orbits.push(cfg);

    render_extract::extract(core);
    Ok(id)
}

pub(super) fn follow(core: &mut SimulationCore, key: &str, offset: Vec3) -> bool {
    let Some(body) = core.orbits.body_id(key) else {
        log_warn!("follow: no body named {}", key);
        return false;
    };
    core.follow = Some(FollowTarget { body, offset });
    if let Some(b) = core.bodies.get(body) {
        core.camera.follow(b.position, offset);
    }
    true
}

pub(super) fn clear(core: &mut SimulationCore) {
    core.bodies.clear();
    core.orbits.clear();
    core.pulses.clear();
    core.clock.reset();
    core.follow = None;
    core.now_ms = 0.0;
    core.frame = 0;
    render_extract::extract(core);
}

pub(super) fn reseed(core: &mut SimulationCore, seed: u32) -> Result<(), String> {
    let mut config = core.config.clone();
    config.seed = seed;
    let mut rng = crate::core::random::Rng::new(seed);
    let (bodies, orbits) = populate(&config, &mut rng, core.bodies.next_id())?;

    clear(core);
    core.bodies = bodies;
    core.orbits = orbits;
    core.rng = rng;
    core.config = config;
    render_extract::extract(core);
    log_info!("reseeded with {}: {} bodies", seed, core.bodies.len());
    Ok(())
}
