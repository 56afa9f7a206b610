//! Axis-aligned boundary box the bouncing bodies live in

use serde::{Deserialize, Serialize};

/// Which part of the body must stay inside an axis' range
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Contact {
    /// Center kept in [min, max]; the sphere may overhang the face
    Center,
    /// Surface kept inside: center in [min + r, max - r]
    Surface,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
    /// Fraction of speed kept on reflection (1.0 = elastic)
    #[serde(default = "default_restitution")]
    pub restitution: f64,
    #[serde(default = "default_contact")]
    pub contact: Contact,
}

fn default_restitution() -> f64 {
    1.0
}

fn default_contact() -> Contact {
    Contact::Center
}

impl AxisBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max, restitution: 1.0, contact: Contact::Center }
    }

    /// Range the center of a body with `radius` is clamped to
    #[inline]
    pub fn effective(&self, radius: f64) -> (f64, f64) {
        match self.contact {
            Contact::Center => (self.min, self.max),
            Contact::Surface => (self.min + radius, self.max - radius),
        }
    }

    pub fn validate(&self, axis: &str) -> Result<(), String> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
            return Err(format!("bounds.{axis}: min {} must be below max {}", self.min, self.max));
        }
        if !(self.restitution > 0.0 && self.restitution <= 1.0) {
            return Err(format!(
                "bounds.{axis}: restitution {} outside (0, 1]",
                self.restitution
            ));
        }
        Ok(())
    }

    /// Can a body of `radius` sit inside this axis at all?
    pub fn fits(&self, radius: f64) -> bool {
        let (lo, hi) = self.effective(radius);
        lo <= hi
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundaryBox {
    pub x: AxisBounds,
    pub y: AxisBounds,
    pub z: AxisBounds,
}

impl BoundaryBox {
    /// Axes in resolution order
    pub fn axes(&self) -> [&AxisBounds; 3] {
        [&self.x, &self.y, &self.z]
    }

    pub fn validate(&self) -> Result<(), String> {
        self.x.validate("x")?;
        self.y.validate("y")?;
        self.z.validate("z")
    }

    pub fn fits(&self, radius: f64) -> bool {
        self.axes().iter().all(|a| a.fits(radius))
    }
}

impl Default for BoundaryBox {
    fn default() -> Self {
        Self {
            x: AxisBounds::new(-10.0, 10.0),
            y: AxisBounds::new(-2.0, 10.0),
            z: AxisBounds::new(-10.0, 10.0),
        }
    }
}
