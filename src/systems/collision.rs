//! Pairwise sphere-sphere collision
//!
//! Sequential nested loop (i < j, both ascending). Each pair sees positions
//! and velocities already adjusted by earlier pairs in the same pass.
//! Passes repeat until one finds no contact, so a push that creates a new
//! overlap is resolved in the same frame.

use crate::domain::{Body, CollisionResponse, Vec3};

/// Below this center distance the contact normal is undefined
const DEGENERATE_DISTANCE: f64 = 1e-9;

/// Used when two centers coincide
const FALLBACK_NORMAL: Vec3 = Vec3::UP;

/// Overlap this small counts as touching, not penetrating
pub const CONTACT_SLOP: f64 = 1e-7;

/// Upper bound on resolution passes per frame
pub const MAX_COLLISION_PASSES: usize = 64;

/// Overlap between two spheres, if any
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// Unit vector from `a` toward `b`
    pub normal: Vec3,
    /// `(r_a + r_b) - distance`, always > `CONTACT_SLOP`
    pub depth: f64,
}

pub fn detect(a: &Body, b: &Body) -> Option<Contact> {
    let delta = b.position - a.position;
    let min_distance = a.radius + b.radius;
    let distance_squared = delta.length_squared();

    if distance_squared >= min_distance * min_distance {
        return None;
    }

    let distance = distance_squared.sqrt();
    let depth = min_distance - distance;
    if depth <= CONTACT_SLOP {
        return None;
    }
    let normal = if distance > DEGENERATE_DISTANCE {
        delta * (1.0 / distance)
    } else {
        FALLBACK_NORMAL
    };

    Some(Contact { normal, depth })
}

/// New velocities for the pair along `n`
#[inline]
pub fn exchange(va: Vec3, vb: Vec3, n: Vec3, response: CollisionResponse) -> (Vec3, Vec3) {
    match response {
        CollisionResponse::EqualMassExchange => {
            let j = (va - vb).dot(n);
            (va - n * j, vb + n * j)
        }
        CollisionResponse::SourceLiteral => {
            let an = n * va.dot(n);
            let bn = n * vb.dot(n);
            (bn - (va - an), an - (vb - bn))
        }
    }
}

fn resolve_pair(a: &mut Body, b: &mut Body, contact: &Contact, response: CollisionResponse) {
    let n = contact.normal;

    let (va, vb) = exchange(a.velocity, b.velocity, n, response);
    a.velocity = va;
    b.velocity = vb;

    // Split the penetration evenly.
    let push = n * (contact.depth * 0.5);
    a.position -= push;
    b.position += push;
}

/// Resolve until no free pair overlaps (or `MAX_COLLISION_PASSES` is hit).
/// Returns the number of contacts resolved over all passes.
pub fn resolve_collisions(bodies: &mut [Body], response: CollisionResponse) -> u32 {
    let mut contacts = 0u32;
    for _ in 0..MAX_COLLISION_PASSES {
        let found = resolve_pass(bodies, response);
        if found == 0 {
            break;
        }
        contacts += found;
    }
    contacts
}

/// One pass over all free pairs
fn resolve_pass(bodies: &mut [Body], response: CollisionResponse) -> u32 {
    let mut contacts = 0u32;
    let n = bodies.len();

    for i in 0..n {
        if !bodies[i].is_free() {
            continue;
        }
        for j in (i + 1)..n {
            // i < j, so `head` ends right before j.
            let (head, tail) = bodies.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];
            if !b.is_free() {
                continue;
            }
            if let Some(contact) = detect(a, b) {
                resolve_pair(a, b, &contact, response);
                contacts += 1;
            }
        }
    }

    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Motion, Vec2};

    const EPS: f64 = 1e-12;

    fn sphere(x: f64, vx: f64) -> Body {
        Body::new(Vec3::new(x, 0.0, 0.0), Vec3::new(vx, 0.0, 0.0), Vec2::zero(), 1.5)
    }

    #[test]
    fn test_separated_pair_untouched() {
        let mut bodies = vec![sphere(0.0, 0.1), sphere(3.0, -0.1)];
        assert_eq!(resolve_collisions(&mut bodies, CollisionResponse::EqualMassExchange), 0);
        assert_eq!(bodies[0].velocity.x, 0.1);
    }

    #[test]
    fn test_head_on_swaps_velocities_both_models() {
        for response in [CollisionResponse::EqualMassExchange, CollisionResponse::SourceLiteral] {
            let mut bodies = vec![sphere(0.0, 0.02), sphere(2.9, -0.02)];
            assert_eq!(resolve_collisions(&mut bodies, response), 1);
            assert!((bodies[0].velocity.x + 0.02).abs() < EPS);
            assert!((bodies[1].velocity.x - 0.02).abs() < EPS);
            let d = (bodies[1].position - bodies[0].position).length();
            assert!((d - 3.0).abs() < 1e-9);
            // de-penetration is symmetric
            assert!((bodies[0].position.x + 0.05).abs() < 1e-9);
            assert!((bodies[1].position.x - 2.95).abs() < 1e-9);
        }
    }

    #[test]
    fn test_equal_mass_keeps_tangential_components() {
        let n = Vec3::new(1.0, 0.0, 0.0);
        let va = Vec3::new(0.3, 0.2, 0.0);
        let vb = Vec3::new(-0.1, 0.0, 0.5);
        let (a2, b2) = exchange(va, vb, n, CollisionResponse::EqualMassExchange);
        assert!((a2 - Vec3::new(-0.1, 0.2, 0.0)).length() < EPS);
        assert!((b2 - Vec3::new(0.3, 0.0, 0.5)).length() < EPS);
    }

    #[test]
    fn test_source_literal_negates_tangential_components() {
        let n = Vec3::new(1.0, 0.0, 0.0);
        let va = Vec3::new(0.3, 0.2, 0.0);
        let vb = Vec3::new(-0.1, 0.0, 0.5);
        let (a2, b2) = exchange(va, vb, n, CollisionResponse::SourceLiteral);
        assert!((a2 - Vec3::new(-0.1, -0.2, 0.0)).length() < EPS);
        assert!((b2 - Vec3::new(0.3, 0.0, -0.5)).length() < EPS);
    }

    #[test]
    fn test_coincident_centers_stay_finite() {
        let mut bodies = vec![sphere(1.0, 0.01), sphere(1.0, -0.01)];
        assert_eq!(resolve_collisions(&mut bodies, CollisionResponse::EqualMassExchange), 1);
        for b in bodies.iter() {
            assert!(b.position.is_finite());
            assert!(b.velocity.is_finite());
        }
        // pushed apart along +Y by the full diameter sum
        assert!((bodies[0].position.y + 1.5).abs() < EPS);
        assert!((bodies[1].position.y - 1.5).abs() < EPS);
    }

    #[test]
    fn test_later_pairs_see_earlier_adjustments() {
        // Three in a row, all overlapping their neighbour.
        let mut bodies = vec![sphere(0.0, 0.0), sphere(2.8, 0.0), sphere(5.6, 0.0)];
        assert_eq!(resolve_pass(&mut bodies, CollisionResponse::EqualMassExchange), 2);
        // (0,1) pushes body 1 right by 0.1, so (1,2) sees 0.3 of overlap instead of 0.2
        assert!((bodies[0].position.x + 0.1).abs() < 1e-9);
        assert!((bodies[1].position.x - 2.75).abs() < 1e-9);
        assert!((bodies[2].position.x - 5.75).abs() < 1e-9);
    }

    #[test]
    fn test_pushes_that_reopen_an_overlap_are_resolved() {
        // After one pass (0,1) overlaps again by 0.15; later passes clear it.
        let mut bodies = vec![sphere(0.0, 0.0), sphere(2.8, 0.0), sphere(5.6, 0.0)];
        assert!(resolve_collisions(&mut bodies, CollisionResponse::EqualMassExchange) > 2);
        assert_no_overlap(&bodies);
    }

    #[test]
    fn test_packed_cluster_is_separated() {
        // 27 spheres of radius 1.5 on a grid with spacing 1.0
        let mut bodies = Vec::new();
        for i in 0..27 {
            let p = Vec3::new((i % 3) as f64, ((i / 3) % 3) as f64, (i / 9) as f64);
            let v = Vec3::new(0.01 * (i % 5) as f64, -0.02, 0.0);
            bodies.push(Body::new(p, v, Vec2::zero(), 1.5));
        }
        assert!(resolve_collisions(&mut bodies, CollisionResponse::EqualMassExchange) > 0);
        for b in bodies.iter() {
            assert!(b.position.is_finite());
        }
        assert_no_overlap(&bodies);
        assert_eq!(resolve_collisions(&mut bodies, CollisionResponse::EqualMassExchange), 0);
    }

    #[test]
    fn test_overlap_within_slop_is_touching() {
        let mut bodies = vec![sphere(0.0, 0.1), sphere(3.0 - CONTACT_SLOP * 0.5, -0.1)];
        assert_eq!(resolve_collisions(&mut bodies, CollisionResponse::EqualMassExchange), 0);
        assert_eq!(bodies[0].velocity.x, 0.1);
    }

    fn assert_no_overlap(bodies: &[Body]) {
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let d = (bodies[j].position - bodies[i].position).length();
                let min = bodies[i].radius + bodies[j].radius;
                assert!(d >= min - 1e-6, "bodies {i} and {j}: distance {d} < {min}");
            }
        }
    }

    #[test]
    fn test_orbit_bodies_do_not_collide() {
        let mut bodies = vec![sphere(0.0, 0.0), sphere(0.5, 0.0).with_motion(Motion::Orbit)];
        assert_eq!(resolve_collisions(&mut bodies, CollisionResponse::EqualMassExchange), 0);
    }
}
