use crate::domain::{AxisBounds, BoundaryBox, Body};

/// Clamp one coordinate into the axis' effective range, reflecting the
/// velocity component only when it points out of the box.
///
/// Returns true if the velocity was reflected.
#[inline]
fn resolve_axis(pos: &mut f64, vel: &mut f64, axis: &AxisBounds, radius: f64) -> bool {
    let (lo, hi) = axis.effective(radius);

    if *pos <= lo {
        *pos = lo;
        if *vel < 0.0 {
            *vel = -*vel * axis.restitution;
            return true;
        }
    } else if *pos >= hi {
        *pos = hi;
        if *vel > 0.0 {
            *vel = -*vel * axis.restitution;
            return true;
        }
    }
    false
}

/// Resolve x, then y, then z for every free body. Returns the reflection count.
pub fn resolve_boundaries(bodies: &mut [Body], bounds: &BoundaryBox) -> u32 {
    let mut reflections = 0u32;
    for body in bodies.iter_mut() {
        if !body.is_free() {
            continue;
        }
        let Body { position, velocity, radius, .. } = body;
        for (i, axis) in bounds.axes().into_iter().enumerate() {
            if resolve_axis(position.axis_mut(i), velocity.axis_mut(i), axis, *radius) {
                reflections += 1;
            }
        }
    }
    reflections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Contact, Motion, Vec2, Vec3};

    fn body(pos: Vec3, vel: Vec3) -> Body {
        Body::new(pos, vel, Vec2::zero(), 1.5)
    }

    #[test]
    fn test_crossing_max_flips_and_clamps() {
        let bounds = BoundaryBox::default();
        let mut bodies = vec![body(Vec3::new(10.02, 0.0, 0.0), Vec3::new(0.03, 0.0, 0.0))];

        assert_eq!(resolve_boundaries(&mut bodies, &bounds), 1);
        assert_eq!(bodies[0].position.x, 10.0);
        assert_eq!(bodies[0].velocity.x, -0.03);

        // Still on the face, now heading inward: clamped again, not re-flipped.
        assert_eq!(resolve_boundaries(&mut bodies, &bounds), 0);
        assert_eq!(bodies[0].velocity.x, -0.03);
    }

    #[test]
    fn test_resting_on_face_with_zero_velocity_is_not_reflected() {
        let bounds = BoundaryBox::default();
        let mut bodies = vec![body(Vec3::new(0.0, -2.0, 0.0), Vec3::ZERO)];
        assert_eq!(resolve_boundaries(&mut bodies, &bounds), 0);
        assert_eq!(bodies[0].position.y, -2.0);
        assert_eq!(bodies[0].velocity.y, 0.0);
    }

    #[test]
    fn test_surface_contact_uses_radius_and_restitution() {
        let mut bounds = BoundaryBox::default();
        bounds.y.contact = Contact::Surface;
        bounds.y.restitution = 0.5;
        let mut bodies = vec![body(Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.0, -0.04, 0.0))];

        resolve_boundaries(&mut bodies, &bounds);
        assert_eq!(bodies[0].position.y, -0.5);
        assert_eq!(bodies[0].velocity.y, 0.02);
    }

    #[test]
    fn test_corner_resolves_each_axis_independently() {
        let bounds = BoundaryBox::default();
        let mut bodies = vec![body(
            Vec3::new(-11.0, 12.0, 10.5),
            Vec3::new(-0.01, 0.02, 0.03),
        )];
        assert_eq!(resolve_boundaries(&mut bodies, &bounds), 3);
        assert_eq!(bodies[0].position, Vec3::new(-10.0, 10.0, 10.0));
        assert_eq!(bodies[0].velocity, Vec3::new(0.01, -0.02, -0.03));
    }

    #[test]
    fn test_non_free_bodies_are_ignored() {
        let bounds = BoundaryBox::default();
        let far = Vec3::new(300.0, 0.0, 0.0);
        let mut bodies = vec![body(far, Vec3::ZERO).with_motion(Motion::Orbit)];
        assert_eq!(resolve_boundaries(&mut bodies, &bounds), 0);
        assert_eq!(bodies[0].position, far);
    }
}
