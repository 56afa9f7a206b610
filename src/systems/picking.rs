use crate::domain::{Body, BodyId, Ray, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickHit {
    pub id: BodyId,
    /// Distance along the ray
    pub t: f64,
    pub point: Vec3,
}

/// Nearest non-negative `t` where `ray` enters the sphere, if any.
/// A ray starting inside the sphere reports the exit point.
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f64) -> Option<f64> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.dir);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t0 = -b - sq;
    if t0 >= 0.0 {
        return Some(t0);
    }
    let t1 = -b + sq;
    if t1 >= 0.0 {
        Some(t1)
    } else {
        None
    }
}

/// Closest body hit by `ray`, using each body's drawn size
pub fn pick(bodies: &[Body], ray: &Ray) -> Option<PickHit> {
    let mut best: Option<PickHit> = None;
    for body in bodies.iter() {
        let Some(t) = ray_sphere(ray, body.position, body.visual_radius()) else {
            continue;
        };
        if best.map_or(true, |h| t < h.t) {
            best = Some(PickHit { id: body.id, t, point: ray.at(t) });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BodyRegistry, Vec2};

    fn ray_down_z() -> Ray {
        Ray { origin: Vec3::new(0.0, 0.0, 15.0), dir: Vec3::new(0.0, 0.0, -1.0) }
    }

    #[test]
    fn test_ray_sphere_hit_and_miss() {
        let ray = ray_down_z();
        assert_eq!(ray_sphere(&ray, Vec3::ZERO, 1.5), Some(13.5));
        assert_eq!(ray_sphere(&ray, Vec3::new(5.0, 0.0, 0.0), 1.5), None);
        // sphere behind the origin
        assert_eq!(ray_sphere(&ray, Vec3::new(0.0, 0.0, 20.0), 1.5), None);
        // origin inside
        assert_eq!(ray_sphere(&ray, Vec3::new(0.0, 0.0, 15.0), 1.0), Some(1.0));
    }

    #[test]
    fn test_pick_returns_nearest() {
        let mut reg = BodyRegistry::new();
        let far = reg.insert(Body::new(Vec3::new(0.0, 0.0, -5.0), Vec3::ZERO, Vec2::zero(), 1.5));
        let near = reg.insert(Body::new(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec2::zero(), 1.5));
        let hit = pick(reg.as_slice(), &ray_down_z()).unwrap();
        assert_eq!(hit.id, near);
        assert_ne!(hit.id, far);
        assert_eq!(hit.t, 8.5);
        assert_eq!(hit.point, Vec3::new(0.0, 0.0, 6.5));
    }

    #[test]
    fn test_pick_uses_scaled_radius() {
        let mut reg = BodyRegistry::new();
        let id = reg.insert(Body::new(Vec3::new(2.5, 0.0, 0.0), Vec3::ZERO, Vec2::zero(), 1.5));
        assert!(pick(reg.as_slice(), &ray_down_z()).is_none());
        if let Some(b) = reg.get_mut(id) {
            b.scale = 2.0;
        }
        assert_eq!(pick(reg.as_slice(), &ray_down_z()).map(|h| h.id), Some(id));
    }
}
