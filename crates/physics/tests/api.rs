use physics::{BodyType, PhysParams, PhysicsError, PhysicsSim, Vec3};

#[test]
fn add_body_returns_sequential_indices() {
    let mut sim = PhysicsSim::new();
    assert_eq!(sim.bodies.len(), 0);
    let a = sim.add_dynamic_body(Vec3::ZERO, 0.5, 2.0);
    let b = sim.add_kinematic_body(Vec3::new(1.0, 0.0, 0.0), 0.5);
    assert_eq!((a, b), (0, 1));
    assert_eq!(sim.bodies[a].body_type, BodyType::Dynamic);
    assert_eq!(sim.bodies[b].body_type, BodyType::Kinematic);
}

#[test]
fn unknown_body_is_an_error() {
    let mut sim = PhysicsSim::new();
    assert_eq!(sim.add_torque(3, Vec3::ZERO), Err(PhysicsError::UnknownBody(3)));
    assert!(sim.body(0).is_err());
    assert!(sim.overlaps(0, 1).is_err());
}

#[test]
fn torque_spins_dynamic_body_and_is_consumed() {
    let mut sim = PhysicsSim::with_params(PhysParams {
        dt: 0.1,
        angular_damping: 0.0,
        max_angular_speed: 100.0,
    });
    let idx = sim.add_dynamic_body(Vec3::ZERO, 0.5, 2.0);
    sim.add_torque(idx, Vec3::new(0.0, 0.0, 10.0)).unwrap();
    sim.step();
    let body = sim.body(idx).unwrap();
    // 10 / 2 * 0.1
    assert!((body.angular_vel.z - 0.5).abs() < 1e-6);
    assert_eq!(body.torque, Vec3::ZERO);
    assert_ne!(body.orientation, [0.0, 0.0, 0.0, 1.0]);

    // No new torque: speed holds without damping.
    sim.step();
    assert!((sim.body(idx).unwrap().angular_vel.z - 0.5).abs() < 1e-6);
}

#[test]
fn kinematic_body_ignores_torque() {
    let mut sim = PhysicsSim::new();
    let idx = sim.add_kinematic_body(Vec3::ZERO, 0.5);
    sim.add_torque(idx, Vec3::new(100.0, 0.0, 0.0)).unwrap();
    sim.step();
    let body = sim.body(idx).unwrap();
    assert_eq!(body.angular_vel, Vec3::ZERO);
    assert_eq!(body.torque, Vec3::ZERO);
}

#[test]
fn angular_speed_is_capped() {
    let mut sim = PhysicsSim::new();
    let idx = sim.add_dynamic_body(Vec3::ZERO, 0.5, 0.01);
    sim.add_torque(idx, Vec3::new(1000.0, 0.0, 0.0)).unwrap();
    sim.step();
    let speed = sim.body(idx).unwrap().angular_vel.length();
    assert!(speed <= sim.params.max_angular_speed + 1e-4);
}

#[test]
fn overlap_uses_scaled_radius() {
    let mut sim = PhysicsSim::new();
    let a = sim.add_kinematic_body(Vec3::ZERO, 0.5);
    let b = sim.add_kinematic_body(Vec3::new(2.0, 0.0, 0.0), 0.5);
    assert!(!sim.overlaps(a, b).unwrap());
    sim.set_scale(b, Vec3::splat(4.0)).unwrap();
    assert!(sim.overlaps(a, b).unwrap());
}

#[test]
fn frame_count_tracks_steps() {
    let mut sim = PhysicsSim::new();
    sim.run(7);
    sim.step();
    assert_eq!(sim.frame_count(), 8);
}
