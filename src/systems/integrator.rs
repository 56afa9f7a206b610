//! Explicit Euler advance: `position += velocity * dt`, `rotation += spin * dt`
//!
//! `dt` is in reference frames (1.0 = one 60 Hz frame), matching the unit the
//! velocities are authored in. No bounds checks here; the boundary resolver
//! runs right after.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::{Body, Motion};

#[inline]
fn advance(body: &mut Body, dt: f64) {
    body.rotation = body.rotation + body.angular_velocity * dt;
    if body.motion == Motion::Free {
        body.position += body.velocity * dt;
    }
}

/// Advance every body by `dt`. Bodies are independent, so order does not matter.
pub fn integrate(bodies: &mut [Body], dt: f64) {
    #[cfg(feature = "parallel")]
    {
        bodies.par_iter_mut().for_each(|b| advance(b, dt));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for b in bodies.iter_mut() {
            advance(b, dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Vec2, Vec3};

    #[test]
    fn test_linear_advance() {
        let mut bodies = vec![Body::new(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(0.5, -0.25, 0.0),
            Vec2::new(0.01, 0.02),
            1.0,
        )];
        integrate(&mut bodies, 2.0);
        assert_eq!(bodies[0].position, Vec3::new(2.0, 1.5, 3.0));
        assert_eq!(bodies[0].rotation, Vec2::new(0.02, 0.04));
        // velocity untouched
        assert_eq!(bodies[0].velocity, Vec3::new(0.5, -0.25, 0.0));
    }

    #[test]
    fn test_zero_dt_is_noop() {
        let mut bodies = vec![Body::new(Vec3::UP, Vec3::UP, Vec2::new(1.0, 1.0), 1.0)];
        integrate(&mut bodies, 0.0);
        assert_eq!(bodies[0].position, Vec3::UP);
        assert_eq!(bodies[0].rotation, Vec2::zero());
    }

    #[test]
    fn test_fixed_and_orbit_bodies_only_spin() {
        let mut bodies = vec![
            Body::new(Vec3::ZERO, Vec3::UP, Vec2::new(0.1, 0.0), 1.0).with_motion(Motion::Fixed),
            Body::new(Vec3::ZERO, Vec3::UP, Vec2::new(0.1, 0.0), 1.0).with_motion(Motion::Orbit),
        ];
        integrate(&mut bodies, 1.0);
        for b in bodies.iter() {
            assert_eq!(b.position, Vec3::ZERO);
            assert_eq!(b.rotation.x, 0.1);
        }
    }
}
