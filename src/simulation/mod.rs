//! Simulation - the context object every system runs against
//!
//! Owns the body registry, boundary box, camera, orbits, pulse scheduler and
//! frame clock. Nothing lives in globals; the wasm facade wraps one of these.
//!
//! Frame order (see step/step.rs):
//! clock -> integrate -> boundaries -> collisions -> orbits -> camera follow
//! -> pulse reverts -> render extract

use crate::core::random::Rng;
use crate::domain::{
    BodyId, BodyRegistry, BoundaryBox, Camera, CollisionResponse, OrbitConfig, SceneConfig, Vec3,
};
use crate::systems::{FrameClock, OrbitSystem, PulseScheduler};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use facade::Simulation;
pub use perf_stats::PerfStats;
pub use render_extract::{TEXTURE_STATE_SHIFT, TRANSFORM_STRIDE};

/// Flat buffers the JS renderer reads after each step
pub(crate) struct RenderBuffers {
    /// TRANSFORM_STRIDE f32 per body
    transforms: Vec<f32>,
    /// 0xSSRRGGBB per body, SS = texture state
    colors: Vec<u32>,
}

/// Camera locked onto a body
#[derive(Clone, Copy, Debug)]
pub(crate) struct FollowTarget {
    body: BodyId,
    offset: Vec3,
}

pub struct SimulationCore {
    config: SceneConfig,
    bodies: BodyRegistry,
    orbits: OrbitSystem,
    pulses: PulseScheduler,

    // Settings
    bounds: BoundaryBox,
    collisions_enabled: bool,
    collision_response: CollisionResponse,
    camera: Camera,
    viewport: (u32, u32),
    follow: Option<FollowTarget>,

    // State
    clock: FrameClock,
    /// Engine time (ms) at the last step, drives pulse reverts.
    /// Never goes backwards, whichever step mode is used.
    now_ms: f64,
    frame: u64,
    rng: Rng,

    render: RenderBuffers,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SimulationCore {
    /// Build the scene described by `config` (validated first).
    pub fn new(config: SceneConfig) -> Result<Self, String> {
        init::create_simulation_core(config)
    }

    pub fn from_config_json(json: &str) -> Result<Self, String> {
        Self::new(SceneConfig::from_json(json)?)
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn bodies(&self) -> &BodyRegistry {
        &self.bodies
    }

    pub fn bodies_mut(&mut self) -> &mut BodyRegistry {
        &mut self.bodies
    }

    pub fn orbits(&self) -> &OrbitSystem {
        &self.orbits
    }

    pub fn pulses(&self) -> &PulseScheduler {
        &self.pulses
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn bounds(&self) -> &BoundaryBox {
        &self.bounds
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Engine time in ms (starts at 0, not a wall-clock stamp)
    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    // === FRAME LOOP ===

    /// Step with a `requestAnimationFrame` timestamp; dt comes from the clock.
    /// Engine time advances by the gap since the previous stamp, so it stays
    /// continuous when mixed with `step_fixed`.
    pub fn step(&mut self, now_ms: f64) {
        step::step(self, now_ms);
    }

    /// Step by an explicit dt (reference frames), advancing time to match.
    /// The next `step` re-anchors the clock and counts as one frame.
    pub fn step_fixed(&mut self, dt: f64) {
        step::step_fixed(self, dt);
    }

    // === INPUT ===

    /// Pointer click in device pixels at engine time `now_ms`. Returns the body hit.
    pub fn click_at(&mut self, px: f64, py: f64, now_ms: f64) -> Option<BodyId> {
        commands::click_at(self, px, py, now_ms)
    }

    /// Pointer click at the engine time of the last step.
    pub fn click(&mut self, px: f64, py: f64) -> Option<BodyId> {
        let now_ms = self.now_ms;
        commands::click_at(self, px, py, now_ms)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), String> {
        settings::resize(self, width, height)
    }

    // === ASSETS ===

    pub fn texture_loaded(&mut self, id: BodyId) -> bool {
        commands::texture_loaded(self, id)
    }

    pub fn texture_failed(&mut self, id: BodyId, reason: &str) -> bool {
        commands::texture_failed(self, id, reason)
    }

    // === ORBITS ===

    /// Add an orbiting body; its center (if any) must already exist.
    pub fn add_orbit(&mut self, orbit: OrbitConfig) -> Result<BodyId, String> {
        commands::add_orbit(self, orbit)
    }

    // === CAMERA ===

    pub fn follow(&mut self, key: &str, offset: Vec3) -> bool {
        commands::follow(self, key, offset)
    }

    pub fn unfollow(&mut self) {
        self.follow = None;
    }

    // === SETTINGS ===

    pub fn set_collisions_enabled(&mut self, enabled: bool) {
        settings::set_collisions_enabled(self, enabled);
    }

    pub fn set_collision_response(&mut self, response: CollisionResponse) {
        settings::set_collision_response(self, response);
    }

    pub fn set_restitution(&mut self, axis: usize, restitution: f64) -> Result<(), String> {
        settings::set_restitution(self, axis, restitution)
    }

    pub fn set_pulse(&mut self, scale: f64, duration_ms: f64) -> Result<(), String> {
        settings::set_pulse(self, scale, duration_ms)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === LIFECYCLE ===

    /// Remove every body and orbit
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    /// Rebuild the scene from the current config with a new seed
    pub fn reseed(&mut self, seed: u32) -> Result<(), String> {
        commands::reseed(self, seed)
    }

    // === RENDER BUFFERS ===

    pub fn transforms(&self) -> &[f32] {
        &self.render.transforms
    }

    pub fn colors(&self) -> &[u32] {
        &self.render.colors
    }

    /// Refresh render buffers without stepping (after init or input)
    pub fn extract(&mut self) {
        render_extract::extract(self);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
