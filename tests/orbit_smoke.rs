use orbit_bounce_engine::{SceneConfig, Simulation};

#[test]
fn solar_system_runs_and_follows_earth() {
    let mut sim = Simulation::solar_system(1024, 768).unwrap();
    assert_eq!(sim.body_count(), 11);
    assert_eq!(sim.orbit_count(), 10);

    let earth = sim.body_id("earth".to_string());
    assert_ne!(earth, 0);
    assert_eq!(sim.body_id("vulcan".to_string()), 0);

    assert!(sim.follow("earth".to_string(), 0.0, 40.0, 80.0));
    for i in 0..300 {
        sim.step(i as f64 * 1000.0 / 60.0);
    }

    let pos = sim.core().bodies().get(earth).unwrap().position;
    assert_eq!(sim.camera_target(), vec![pos.x, pos.y, pos.z]);
    let eye = sim.camera_position();
    assert!((eye[1] - 40.0).abs() < 1e-9);

    // Every orbit keeps its radius.
    let r = (pos.x * pos.x + pos.z * pos.z).sqrt();
    assert!((r - 300.0).abs() < 1e-6);
}

#[test]
fn config_json_round_trips_through_the_facade() {
    let sim = Simulation::solar_system(800, 600).unwrap();
    let config = SceneConfig::from_json(&sim.config_json()).unwrap();
    assert_eq!(config, SceneConfig::solar_system());
}
