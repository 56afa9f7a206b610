use wasm_bindgen::prelude::*;

use crate::domain::{CollisionResponse, OrbitConfig, SceneConfig, Vec3};

use super::perf_stats::PerfStats;
use super::SimulationCore;

#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

fn js_err(e: String) -> JsValue {
    JsValue::from_str(&e)
}

#[wasm_bindgen]
impl Simulation {
    /// Default bouncing-spheres scene for a `width` x `height` viewport
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Result<Simulation, JsValue> {
        Self::build(SceneConfig::default(), width, height)
    }

    /// Scene from a JSON config (missing fields take defaults)
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: String, width: u32, height: u32) -> Result<Simulation, JsValue> {
        let config = SceneConfig::from_json(&json).map_err(js_err)?;
        Self::build(config, width, height)
    }

    /// Sun, planets and moon
    #[wasm_bindgen(js_name = solarSystem)]
    pub fn solar_system(width: u32, height: u32) -> Result<Simulation, JsValue> {
        Self::build(SceneConfig::solar_system(), width, height)
    }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    #[wasm_bindgen(getter)]
    pub fn orbit_count(&self) -> usize { self.core.orbits().len() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Effective config as JSON
    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Advance one display frame; `now_ms` is the requestAnimationFrame timestamp
    pub fn step(&mut self, now_ms: f64) {
        self.core.step(now_ms);
    }

    /// Advance by `dt` reference frames (1.0 = 1/60 s)
    pub fn step_fixed(&mut self, dt: f64) {
        self.core.step_fixed(dt);
    }

    /// Pointer click in device pixels. Returns the body id hit, 0 for a miss.
    pub fn click(&mut self, px: f64, py: f64) -> u32 {
        self.core.click(px, py).unwrap_or(0)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), JsValue> {
        self.core.resize(width, height).map_err(js_err)
    }

    // === ASSETS ===

    pub fn texture_loaded(&mut self, id: u32) -> bool {
        self.core.texture_loaded(id)
    }

    pub fn texture_failed(&mut self, id: u32, reason: String) -> bool {
        self.core.texture_failed(id, &reason)
    }

    /// Register an orbit from JSON (`{"key", "bodyRadius", "orbitRadius", "speed", ...}`).
    /// Returns the new body id.
    pub fn add_orbit(&mut self, json: String) -> Result<u32, JsValue> {
        let orbit: OrbitConfig = serde_json::from_str(&json).map_err(|e| js_err(e.to_string()))?;
        self.core.add_orbit(orbit).map_err(js_err)
    }

    /// Body id for an orbit or fixed body key, 0 if unknown
    pub fn body_id(&self, key: String) -> u32 {
        self.core.orbits().body_id(&key).unwrap_or(0)
    }

    // === CAMERA ===

    pub fn follow(&mut self, key: String, offset_x: f64, offset_y: f64, offset_z: f64) -> bool {
        self.core.follow(&key, Vec3::new(offset_x, offset_y, offset_z))
    }

    pub fn unfollow(&mut self) {
        self.core.unfollow();
    }

    /// `[x, y, z]`
    pub fn camera_position(&self) -> Vec<f64> {
        let p = self.core.camera().position;
        vec![p.x, p.y, p.z]
    }

    /// `[x, y, z]`
    pub fn camera_target(&self) -> Vec<f64> {
        let t = self.core.camera().target;
        vec![t.x, t.y, t.z]
    }

    #[wasm_bindgen(getter)]
    pub fn camera_aspect(&self) -> f64 { self.core.camera().aspect }

    // === SETTINGS ===

    pub fn set_collisions_enabled(&mut self, enabled: bool) {
        self.core.set_collisions_enabled(enabled);
    }

    /// "equalMassExchange" or "sourceLiteral"
    pub fn set_collision_response(&mut self, name: String) -> Result<(), JsValue> {
        let response = match name.as_str() {
            "equalMassExchange" => CollisionResponse::EqualMassExchange,
            "sourceLiteral" => CollisionResponse::SourceLiteral,
            other => return Err(js_err(format!("unknown collision response {other}"))),
        };
        self.core.set_collision_response(response);
        Ok(())
    }

    pub fn set_restitution(&mut self, axis: usize, restitution: f64) -> Result<(), JsValue> {
        self.core.set_restitution(axis, restitution).map_err(js_err)
    }

    pub fn set_pulse(&mut self, scale: f64, duration_ms: f64) -> Result<(), JsValue> {
        self.core.set_pulse(scale, duration_ms).map_err(js_err)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    // === LIFECYCLE ===

    pub fn clear(&mut self) {
        self.core.clear();
    }

    pub fn reseed(&mut self, seed: u32) -> Result<(), JsValue> {
        self.core.reseed(seed).map_err(js_err)
    }

    // === RENDER BUFFERS (zero-copy views over wasm memory) ===

    pub fn transforms_ptr(&self) -> *const f32 {
        self.core.transforms().as_ptr()
    }

    pub fn transforms_len(&self) -> usize {
        self.core.transforms().len()
    }

    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors().as_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.core.colors().len()
    }
}

impl Simulation {
    fn build(config: SceneConfig, width: u32, height: u32) -> Result<Simulation, JsValue> {
        let mut core = SimulationCore::new(config).map_err(js_err)?;
        core.resize(width, height).map_err(js_err)?;
        Ok(Self { core })
    }

    /// Native access for tests and embedding
    pub fn core(&self) -> &SimulationCore {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut SimulationCore {
        &mut self.core
    }
}
