use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::bounds::BoundaryBox;
use super::camera::{Camera, Viewport};
use super::vec::Vec3;

/// Velocity response used by the pairwise resolver
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CollisionResponse {
    /// Textbook equal-mass exchange of the normal components; tangents untouched
    EqualMassExchange,
    /// `v' = (other·n)n - (v - (v·n)n)`, kept for parity with the first demo
    SourceLiteral,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpawnConfig {
    /// Spawn region (half-open per axis)
    pub min: Vec3,
    pub max: Vec3,
    /// Each velocity component is `(u - 0.5) * speed_spread`
    pub speed_spread: f64,
    /// Each spin component is `u * max_spin`
    pub max_spin: f64,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            min: Vec3::new(-5.0, 0.0, -5.0),
            max: Vec3::new(5.0, 2.0, 5.0),
            speed_spread: 0.05,
            max_spin: 0.02,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PulseConfig {
    pub scale: f64,
    pub duration_ms: f64,
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self { scale: 2.0, duration_ms: 500.0 }
    }
}

/// One named orbiting body
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitConfig {
    pub key: String,
    pub body_radius: f64,
    pub orbit_radius: f64,
    /// Radians per reference frame
    pub speed: f64,
    #[serde(default)]
    pub phase: f64,
    /// Key of an earlier orbit to circle instead of the origin
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<String>,
    #[serde(default = "default_orbit_color")]
    pub color: u32,
}

fn default_orbit_color() -> u32 {
    0xFFFFFF
}

/// Body pinned in place (the sun)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedConfig {
    pub key: String,
    pub position: Vec3,
    pub radius: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<String>,
    #[serde(default = "default_orbit_color")]
    pub color: u32,
}

/// Everything needed to build a scene
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SceneConfig {
    pub seed: u32,
    pub body_count: usize,
    pub body_radius: f64,
    pub spawn: SpawnConfig,
    pub bounds: BoundaryBox,
    pub collisions_enabled: bool,
    pub collision_response: CollisionResponse,
    pub pulse: PulseConfig,
    /// `camera.aspect` is replaced by the viewport's on init
    pub camera: Camera,
    /// Canvas size until the first resize
    pub viewport: Viewport,
    /// Texture per spawned body (cycled); empty = solid colours
    pub textures: Vec<String>,
    /// Texture swapped in on click for textured bodies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_texture: Option<String>,
    pub fixed: Vec<FixedConfig>,
    pub orbits: Vec<OrbitConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            body_count: 5,
            body_radius: 1.5,
            spawn: SpawnConfig::default(),
            bounds: BoundaryBox::default(),
            collisions_enabled: true,
            collision_response: CollisionResponse::EqualMassExchange,
            pulse: PulseConfig::default(),
            camera: Camera::default(),
            viewport: Viewport::default(),
            textures: Vec::new(),
            click_texture: None,
            fixed: Vec::new(),
            orbits: Vec::new(),
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SceneConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Sun, nine planets and the moon circling the earth
    pub fn solar_system() -> Self {
        let planet = |key: &str, body_radius: f64, orbit_radius: f64, speed: f64, tex: &str| OrbitConfig {
            key: key.to_string(),
            body_radius,
            orbit_radius,
            speed,
            phase: 0.0,
            center: None,
            texture: Some(format!("./assets/{tex}")),
            color: 0xFFFFFF,
        };

        let mut moon = planet("moon", 1.5, 20.0, 0.1, "moonmap1k.jpg");
        moon.center = Some("earth".to_string());

        Self {
            body_count: 0,
            camera: Camera {
                fov_deg: 50.0,
                near: 1.0,
                far: 3000.0,
                position: Vec3::new(800.0, 600.0, 800.0),
                ..Camera::default()
            },
            fixed: vec![FixedConfig {
                key: "sun".to_string(),
                position: Vec3::ZERO,
                radius: 100.0,
                texture: Some("./assets/sun_tx.jpg".to_string()),
                color: 0xFFFFFF,
            }],
            orbits: vec![
                planet("mercury", 3.0, 200.0, 0.04, "mercury_tx.jpg"),
                planet("venus", 6.0, 250.0, 0.03, "venus_tx.jpg"),
                planet("earth", 6.5, 300.0, 0.02, "earth_tx.jpg"),
                moon,
                planet("mars", 4.0, 350.0, 0.015, "mars_tk.jpg"),
                planet("jupiter", 14.0, 450.0, 0.01, "jupiter_tx.jpg"),
                planet("saturn", 12.0, 500.0, 0.008, "saturn_tx.jpg"),
                planet("uranus", 9.0, 550.0, 0.007, "uranus_tx.jpg"),
                planet("neptune", 9.0, 600.0, 0.006, "neptune_tx.jpg"),
                planet("pluto", 2.5, 650.0, 0.005, "pluto_tx.jpg"),
            ],
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        self.bounds.validate()?;
        self.camera.validate()?;
        self.viewport.validate()?;

        if self.body_count > 0 {
            if !(self.body_radius > 0.0 && self.body_radius.is_finite()) {
                return Err(format!("bodyRadius {} must be positive", self.body_radius));
            }
            if !self.bounds.fits(self.body_radius) {
                return Err(format!(
                    "bodies of radius {} do not fit inside the boundary box",
                    self.body_radius
                ));
            }
        }
        if !(self.pulse.duration_ms > 0.0) {
            return Err(format!("pulse.durationMs {} must be positive", self.pulse.duration_ms));
        }
        if !(self.pulse.scale > 0.0) {
            return Err(format!("pulse.scale {} must be positive", self.pulse.scale));
        }

        let mut keys: HashSet<&str> = HashSet::new();
        for fixed in self.fixed.iter() {
            if !(fixed.radius > 0.0) {
                return Err(format!("fixed body {}: radius must be positive", fixed.key));
            }
            if !keys.insert(fixed.key.as_str()) {
                return Err(format!("duplicate body key {}", fixed.key));
            }
        }
        for orbit in self.orbits.iter() {
            if !(orbit.body_radius > 0.0) {
                return Err(format!("orbit {}: bodyRadius must be positive", orbit.key));
            }
            if let Some(center) = &orbit.center {
                // Parents must come first so they are already updated this frame.
                if !keys.contains(center.as_str()) {
                    return Err(format!(
                        "orbit {}: center {} is not declared before it",
                        orbit.key, center
                    ));
                }
            }
            if !keys.insert(orbit.key.as_str()) {
                return Err(format!("duplicate body key {}", orbit.key));
            }
        }
        Ok(())
    }
}
