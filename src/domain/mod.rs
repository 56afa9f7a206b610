//! Data model: bodies, boundary box, camera, scene configuration

pub mod body;
pub mod bounds;
pub mod camera;
pub mod config;
pub mod vec;

pub use body::{AssetState, Appearance, Body, BodyId, BodyRegistry, Motion, TextureSlot};
pub use bounds::{AxisBounds, BoundaryBox, Contact};
pub use camera::{pointer_to_ndc, Camera, Ray, Viewport};
pub use config::{CollisionResponse, FixedConfig, OrbitConfig, PulseConfig, SceneConfig, SpawnConfig};
pub use vec::{Vec2, Vec3};
