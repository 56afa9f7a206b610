//! Perspective camera mirrored from the JS renderer
//!
//! The renderer owns the real projection matrix. We keep just enough
//! (fov, aspect, eye, target) to turn a pointer position into a world ray.

use serde::{Deserialize, Serialize};

use super::vec::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length
    pub dir: Vec3,
}

impl Ray {
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.dir * t
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Camera {
    /// Vertical field of view (degrees)
    pub fov_deg: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov_deg: 65.0,
            aspect: 16.0 / 9.0,
            near: 0.1,
            far: 1000.0,
            position: Vec3::new(0.0, 0.0, 15.0),
            target: Vec3::ZERO,
            up: Vec3::UP,
        }
    }
}

impl Camera {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.fov_deg > 0.0 && self.fov_deg < 180.0) {
            return Err(format!("camera.fovDeg {} outside (0, 180)", self.fov_deg));
        }
        if !(self.near > 0.0 && self.near < self.far) {
            return Err(format!("camera near {} / far {} invalid", self.near, self.far));
        }
        if (self.target - self.position).length_squared() == 0.0 {
            return Err("camera target coincides with position".to_string());
        }
        Ok(())
    }

    /// Viewport changed: only the aspect ratio depends on it.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), String> {
        Viewport { width, height }.validate()?;
        self.aspect = width as f64 / height as f64;
        Ok(())
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Place the eye at `target + offset`, looking at `target`
    pub fn follow(&mut self, target: Vec3, offset: Vec3) {
        self.position = target + offset;
        self.target = target;
    }

    /// Ray through normalized device coordinates (x right, y up, both in [-1, 1])
    pub fn ray_from_ndc(&self, ndc_x: f64, ndc_y: f64) -> Ray {
        let tan_half_fov = (self.fov_deg.to_radians() * 0.5).tan();
        let ray_x = ndc_x * tan_half_fov * self.aspect;
        let ray_y = ndc_y * tan_half_fov;

        let forward = (self.target - self.position).normalize();
        let mut right = forward.cross(self.up).normalize();
        if right == Vec3::ZERO {
            // Looking straight along `up`
            right = Vec3::new(1.0, 0.0, 0.0);
        }
        let cam_up = right.cross(forward).normalize();

        Ray {
            origin: self.position,
            dir: (forward + right * ray_x + cam_up * ray_y).normalize(),
        }
    }
}

/// Canvas size in device pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 1280, height: 720 }
    }
}

impl Viewport {
    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!("viewport {}x{} has zero extent", self.width, self.height));
        }
        Ok(())
    }
}

/// Device pixels -> NDC. Pixel y grows downward, NDC y grows upward.
pub fn pointer_to_ndc(px: f64, py: f64, width: f64, height: f64) -> (f64, f64) {
    ((px / width) * 2.0 - 1.0, -(py / height) * 2.0 + 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_points_at_target() {
        let cam = Camera::default();
        let ray = cam.ray_from_ndc(0.0, 0.0);
        assert_eq!(ray.origin, Vec3::new(0.0, 0.0, 15.0));
        assert!((ray.dir.z + 1.0).abs() < 1e-12);
        assert!(ray.dir.x.abs() < 1e-12 && ray.dir.y.abs() < 1e-12);
    }

    #[test]
    fn test_top_right_ray_leans_right_and_up() {
        let cam = Camera::default();
        let ray = cam.ray_from_ndc(1.0, 1.0);
        assert!(ray.dir.x > 0.0);
        assert!(ray.dir.y > 0.0);
        assert!((ray.dir.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_pointer_to_ndc_corners() {
        assert_eq!(pointer_to_ndc(0.0, 0.0, 800.0, 600.0), (-1.0, 1.0));
        assert_eq!(pointer_to_ndc(400.0, 300.0, 800.0, 600.0), (0.0, 0.0));
        assert_eq!(pointer_to_ndc(800.0, 600.0, 800.0, 600.0), (1.0, -1.0));
    }

    #[test]
    fn test_resize_updates_aspect() {
        let mut cam = Camera::default();
        cam.resize(1200, 600).unwrap();
        assert_eq!(cam.aspect, 2.0);
        assert!(cam.resize(0, 600).is_err());
    }

    #[test]
    fn test_follow_keeps_offset() {
        let mut cam = Camera::default();
        cam.follow(Vec3::new(300.0, 0.0, 0.0), Vec3::new(0.0, 50.0, 80.0));
        assert_eq!(cam.position, Vec3::new(300.0, 50.0, 80.0));
        assert_eq!(cam.target, Vec3::new(300.0, 0.0, 0.0));
    }
}
