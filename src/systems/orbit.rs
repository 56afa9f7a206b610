//! Keyed circular orbits in the XZ plane
//!
//! Orbits are updated in declaration order, so a body orbiting another
//! (moon around earth) always reads its parent's position from this frame.

use std::collections::HashMap;

use crate::domain::{BodyId, BodyRegistry, Vec3};

#[derive(Clone, Debug, PartialEq)]
pub struct Orbit {
    pub key: String,
    pub body: BodyId,
    pub radius: f64,
    /// Radians per reference frame
    pub speed: f64,
    /// Current angle
    pub radian: f64,
    /// Key of the body circled; `None` = origin
    pub center: Option<String>,
}

impl Orbit {
    #[inline]
    pub fn offset(&self) -> Vec3 {
        Vec3::new(self.radius * self.radian.cos(), 0.0, self.radius * self.radian.sin())
    }
}

#[derive(Clone, Debug, Default)]
pub struct OrbitSystem {
    orbits: Vec<Orbit>,
    by_key: HashMap<String, BodyId>,
}

impl OrbitSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a non-orbiting body (the sun) addressable as an orbit center.
    pub fn add_anchor(&mut self, key: &str, body: BodyId) -> Result<(), String> {
        if self.by_key.contains_key(key) {
            return Err(format!("duplicate body key {key}"));
        }
        self.by_key.insert(key.to_string(), body);
        Ok(())
    }

    pub fn add_orbit(&mut self, orbit: Orbit) -> Result<(), String> {
        if let Some(center) = &orbit.center {
            if !self.by_key.contains_key(center) {
                return Err(format!("orbit {}: unknown center {}", orbit.key, center));
            }
        }
        self.add_anchor(&orbit.key, orbit.body)?;
        self.orbits.push(orbit);
        Ok(())
    }

    pub fn body_id(&self, key: &str) -> Option<BodyId> {
        self.by_key.get(key).copied()
    }

    pub fn orbit(&self, key: &str) -> Option<&Orbit> {
        self.orbits.iter().find(|o| o.key == key)
    }

    pub fn len(&self) -> usize {
        self.orbits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orbits.is_empty()
    }

    fn center_position(&self, center: Option<&str>, bodies: &BodyRegistry) -> Vec3 {
        center
            .and_then(|key| self.body_id(key))
            .and_then(|id| bodies.get(id))
            .map(|b| b.position)
            .unwrap_or(Vec3::ZERO)
    }

    /// Place every orbiting body at its current angle without advancing it.
    pub fn place(&self, bodies: &mut BodyRegistry) {
        for orbit in self.orbits.iter() {
            let center = self.center_position(orbit.center.as_deref(), bodies);
            if let Some(body) = bodies.get_mut(orbit.body) {
                body.position = center + orbit.offset();
            }
        }
    }

    /// Advance angles by `speed * dt` and reposition bodies. Returns orbits updated.
    pub fn advance(&mut self, bodies: &mut BodyRegistry, dt: f64) -> u32 {
        let mut updated = 0u32;
        for i in 0..self.orbits.len() {
            self.orbits[i].radian += self.orbits[i].speed * dt;
            let orbit = &self.orbits[i];
            let center = self.center_position(orbit.center.as_deref(), bodies);
            if let Some(body) = bodies.get_mut(orbit.body) {
                body.position = center + orbit.offset();
                updated += 1;
            }
        }
        updated
    }

    pub fn clear(&mut self) {
        self.orbits.clear();
        self.by_key.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Body, Motion, Vec2};

    fn orbiting(reg: &mut BodyRegistry) -> BodyId {
        reg.insert(Body::new(Vec3::ZERO, Vec3::ZERO, Vec2::zero(), 1.0).with_motion(Motion::Orbit))
    }

    #[test]
    fn test_position_follows_angle() {
        let mut reg = BodyRegistry::new();
        let earth = orbiting(&mut reg);
        let mut orbits = OrbitSystem::new();
        orbits
            .add_orbit(Orbit {
                key: "earth".into(),
                body: earth,
                radius: 300.0,
                speed: 0.02,
                radian: 0.0,
                center: None,
            })
            .unwrap();

        for _ in 0..10 {
            orbits.advance(&mut reg, 1.0);
        }
        let theta: f64 = 0.2;
        let pos = reg.get(earth).unwrap().position;
        assert!((pos.x - 300.0 * theta.cos()).abs() < 1e-9);
        assert!((pos.z - 300.0 * theta.sin()).abs() < 1e-9);
        assert_eq!(pos.y, 0.0);
    }

    #[test]
    fn test_moon_uses_parent_position_from_same_frame() {
        let mut reg = BodyRegistry::new();
        let earth = orbiting(&mut reg);
        let moon = orbiting(&mut reg);
        let mut orbits = OrbitSystem::new();
        orbits
            .add_orbit(Orbit { key: "earth".into(), body: earth, radius: 300.0, speed: 0.02, radian: 0.0, center: None })
            .unwrap();
        orbits
            .add_orbit(Orbit {
                key: "moon".into(),
                body: moon,
                radius: 20.0,
                speed: 0.1,
                radian: 0.0,
                center: Some("earth".into()),
            })
            .unwrap();

        orbits.advance(&mut reg, 1.0);
        let e = reg.get(earth).unwrap().position;
        let m = reg.get(moon).unwrap().position;
        let expected = e + Vec3::new(20.0 * 0.1f64.cos(), 0.0, 20.0 * 0.1f64.sin());
        assert!((m - expected).length() < 1e-9);
    }

    #[test]
    fn test_unknown_center_and_duplicate_key_rejected() {
        let mut orbits = OrbitSystem::new();
        let bad = Orbit { key: "moon".into(), body: 1, radius: 1.0, speed: 0.1, radian: 0.0, center: Some("earth".into()) };
        assert!(orbits.add_orbit(bad).is_err());
        orbits.add_anchor("sun", 1).unwrap();
        assert!(orbits.add_anchor("sun", 2).is_err());
        assert_eq!(orbits.body_id("sun"), Some(1));
    }
}
