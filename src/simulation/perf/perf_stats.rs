use wasm_bindgen::prelude::*;

/// Snapshot of the last step. All zeros while perf metrics are disabled.
#[wasm_bindgen]
#[derive(Clone, Default, Debug)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) boundary_ms: f64,
    pub(super) collision_ms: f64,
    pub(super) orbit_ms: f64,
    pub(super) pulse_ms: f64,
    pub(super) extract_ms: f64,
    pub(super) dt: f64,
    pub(super) contacts: u32,
    pub(super) reflections: u32,
    pub(super) orbits_updated: u32,
    pub(super) pulses_fired: u32,
    pub(super) pulses_pending: u32,
    pub(super) body_count: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn boundary_ms(&self) -> f64 { self.boundary_ms }
    #[wasm_bindgen(getter)]
    pub fn collision_ms(&self) -> f64 { self.collision_ms }
    #[wasm_bindgen(getter)]
    pub fn orbit_ms(&self) -> f64 { self.orbit_ms }
    #[wasm_bindgen(getter)]
    pub fn pulse_ms(&self) -> f64 { self.pulse_ms }
    #[wasm_bindgen(getter)]
    pub fn extract_ms(&self) -> f64 { self.extract_ms }
    /// Reference frames advanced by the step
    #[wasm_bindgen(getter)]
    pub fn dt(&self) -> f64 { self.dt }
    #[wasm_bindgen(getter)]
    pub fn contacts(&self) -> u32 { self.contacts }
    #[wasm_bindgen(getter)]
    pub fn reflections(&self) -> u32 { self.reflections }
    #[wasm_bindgen(getter)]
    pub fn orbits_updated(&self) -> u32 { self.orbits_updated }
    #[wasm_bindgen(getter)]
    pub fn pulses_fired(&self) -> u32 { self.pulses_fired }
    #[wasm_bindgen(getter)]
    pub fn pulses_pending(&self) -> u32 { self.pulses_pending }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
}
