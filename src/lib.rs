//! Orbit Bounce Engine - motion core for the WebGL sphere demos, in WASM
//!
//! Two scenes share one engine: spheres bouncing inside a box, and a sun
//! with planets (and a moon) on circular orbits. JS owns the canvas, the
//! Three.js scene and texture loading; this crate owns every position.
//!
//! Architecture:
//! - core/        - logging macros, seeded RNG
//! - domain/      - bodies, bounds, camera, scene config
//! - systems/     - integrate, boundaries, collisions, orbits, picking, pulses
//! - simulation/  - per-scene context, frame order, wasm facade

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    log_info!("orbit-bounce engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// f32 per body in the transform buffer
#[wasm_bindgen]
pub fn transform_stride() -> usize {
    simulation::TRANSFORM_STRIDE
}

// Re-export main types
pub use domain::{Body, BodyId, BoundaryBox, Camera, CollisionResponse, SceneConfig, Vec3, Viewport};
pub use simulation::{PerfStats, Simulation, SimulationCore};
