//! Per-frame systems. Each is a free function or small struct over the body
//! slice; `simulation` decides the order they run in.

pub mod boundary;
pub mod clock;
pub mod collision;
pub mod integrator;
pub mod orbit;
pub mod picking;
pub mod pulse;

pub use boundary::resolve_boundaries;
pub use clock::{FrameClock, MAX_FRAME_DT, REFERENCE_FRAME_MS};
pub use collision::{resolve_collisions, Contact};
pub use integrator::integrate;
pub use orbit::{Orbit, OrbitSystem};
pub use picking::{pick, ray_sphere, PickHit};
pub use pulse::{PendingRevert, PulseScheduler};
