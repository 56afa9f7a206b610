use crate::core::random::Rng;
use crate::domain::{Body, BodyId, BodyRegistry, Motion, OrbitConfig, SceneConfig, Vec2, Vec3};
use crate::systems::{FrameClock, Orbit, OrbitSystem, PulseScheduler};

use super::perf_stats::PerfStats;
use super::{RenderBuffers, SimulationCore};

pub(super) fn create_simulation_core(config: SceneConfig) -> Result<SimulationCore, String> {
    config.validate()?;

    let mut rng = Rng::new(config.seed);
    let (bodies, orbits) = populate(&config, &mut rng, 1)?;

    // Clicks before the first resize map against the configured canvas.
    let viewport = config.viewport;
    let mut camera = config.camera;
    camera.resize(viewport.width, viewport.height)?;

    let mut core = SimulationCore {
        bodies,
        orbits,
        pulses: PulseScheduler::new(config.pulse),
        bounds: config.bounds,
        collisions_enabled: config.collisions_enabled,
        collision_response: config.collision_response,
        camera,
        viewport: (viewport.width, viewport.height),
        follow: None,
        clock: FrameClock::new(),
        now_ms: 0.0,
        frame: 0,
        rng,
        render: RenderBuffers {
            transforms: Vec::new(),
            colors: Vec::new(),
        },
        perf_enabled: false,
        perf_stats: PerfStats::default(),
        config,
    };
    core.extract();

    log_info!(
        "scene ready: {} bodies, {} orbits (seed {})",
        core.bodies.len(),
        core.orbits.len(),
        core.config.seed
    );
    Ok(core)
}

/// Spawn the free bodies, fixed anchors and orbiting bodies of `config`,
/// numbering them from `first_id`.
pub(super) fn populate(
    config: &SceneConfig,
    rng: &mut Rng,
    first_id: BodyId,
) -> Result<(BodyRegistry, OrbitSystem), String> {
    let mut bodies = BodyRegistry::starting_at(first_id);
    let mut orbits = OrbitSystem::new();

    for i in 0..config.body_count {
        let mut body = spawn_free_body(config, rng);
        if !config.textures.is_empty() {
            let key = &config.textures[i % config.textures.len()];
            body = body.with_texture(key.clone());
        }
        bodies.insert(body);
    }

    for fixed in config.fixed.iter() {
        let mut body = Body::new(fixed.position, Vec3::ZERO, Vec2::zero(), fixed.radius)
            .with_motion(Motion::Fixed)
            .with_color(fixed.color);
        if let Some(tex) = &fixed.texture {
            body = body.with_texture(tex.clone());
        }
        let id = bodies.insert(body);
        orbits.add_anchor(&fixed.key, id)?;
    }

    for cfg in config.orbits.iter() {
        let id = bodies.insert(orbit_body(cfg));
        orbits.add_orbit(orbit_from_config(cfg, id))?;
    }
    orbits.place(&mut bodies);

    Ok((bodies, orbits))
}

pub(super) fn orbit_body(cfg: &OrbitConfig) -> Body {
    let body = Body::new(Vec3::ZERO, Vec3::ZERO, Vec2::zero(), cfg.body_radius)
        .with_motion(Motion::Orbit)
        .with_color(cfg.color);
    match &cfg.texture {
        Some(tex) => body.with_texture(tex.clone()),
        None => body,
    }
}

pub(super) fn orbit_from_config(cfg: &OrbitConfig, body: BodyId) -> Orbit {
    Orbit {
        key: cfg.key.clone(),
        body,
        radius: cfg.orbit_radius,
        speed: cfg.speed,
        radian: cfg.phase,
        center: cfg.center.clone(),
    }
}

fn spawn_free_body(config: &SceneConfig, rng: &mut Rng) -> Body {
    let spawn = &config.spawn;
    let color = rng.color();
    let position = Vec3::new(
        rng.range(spawn.min.x, spawn.max.x),
        rng.range(spawn.min.y, spawn.max.y),
        rng.range(spawn.min.z, spawn.max.z),
    );
    let spin = Vec2::new(rng.next_f64() * spawn.max_spin, rng.next_f64() * spawn.max_spin);
    let velocity = Vec3::new(
        (rng.next_f64() - 0.5) * spawn.speed_spread,
        (rng.next_f64() - 0.5) * spawn.speed_spread,
        (rng.next_f64() - 0.5) * spawn.speed_spread,
    );

    Body::new(position, velocity, spin, config.body_radius).with_color(color)
}
