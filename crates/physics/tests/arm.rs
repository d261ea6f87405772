use physics::{ArmConfig, ArmRig, PhysicsSim, Vec3};

fn close(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

#[test]
fn rest_pose_hangs_straight_down() {
    let mut sim = PhysicsSim::new();
    let anchor = Vec3::new(10.0, 2.0, -3.0);
    let arm = ArmRig::new(&mut sim, anchor, ArmConfig::default());

    assert!(close(sim.bodies[arm.upper].pos, anchor + Vec3::new(0.0, -4.0, 0.0)));
    assert!(close(sim.bodies[arm.lower].pos, anchor + Vec3::new(0.0, -10.0, 0.0)));
    assert!(close(sim.bodies[arm.hand].pos, anchor + Vec3::new(0.0, -12.0, 0.0)));
    assert!(close(sim.bodies[arm.base].pos, anchor));
    for idx in arm.bodies() {
        assert_eq!(sim.bodies[idx].vel, Vec3::ZERO);
    }
}

#[test]
fn stepping_without_torque_keeps_rest_pose() {
    let mut sim = PhysicsSim::new();
    let arm = ArmRig::new(&mut sim, Vec3::ZERO, ArmConfig::default());
    sim.run(20);
    assert!(close(sim.bodies[arm.hand].pos, Vec3::new(0.0, -12.0, 0.0)));
    assert!(sim.bodies[arm.upper].vel.length() < 1e-4);
}

#[test]
fn links_stay_attached_under_torque() {
    let mut sim = PhysicsSim::new();
    let config = ArmConfig::default();
    let arm = ArmRig::new(&mut sim, Vec3::ZERO, config.clone());
    for _ in 0..50 {
        sim.add_torque(arm.upper, Vec3::new(150.0, 0.0, -80.0)).unwrap();
        sim.add_torque(arm.lower, Vec3::new(-40.0, 0.0, 150.0)).unwrap();
        sim.step();
    }

    let upper = sim.bodies[arm.upper].pos;
    let lower = sim.bodies[arm.lower].pos;
    let hand = sim.bodies[arm.hand].pos;
    // Upper centre sits half a link from the shoulder.
    assert!((upper.length() - config.upper_length / 2.0).abs() < 1e-3);
    // Elbow is shared: hand minus lower centre equals half the lower link.
    assert!((hand.distance(lower) - config.lower_length / 2.0).abs() < 1e-3);
    let elbow = upper * 2.0;
    assert!((elbow.distance(hand) - config.lower_length).abs() < 1e-3);
}

#[test]
fn linear_velocity_follows_motion() {
    let mut sim = PhysicsSim::new();
    let arm = ArmRig::new(&mut sim, Vec3::ZERO, ArmConfig::default());
    sim.add_torque(arm.upper, Vec3::new(150.0, 0.0, 0.0)).unwrap();
    let before = sim.bodies[arm.upper].pos;
    sim.step();
    let body = sim.bodies[arm.upper];
    let expected = (body.pos - before) / sim.params.dt;
    assert!(close(body.vel, expected));
    assert!(body.vel.length() > 0.0);
}

#[test]
fn local_position_is_relative_to_anchor() {
    let mut sim = PhysicsSim::new();
    let anchor = Vec3::new(5.0, 0.0, 0.0);
    let arm = ArmRig::new(&mut sim, anchor, ArmConfig::default());
    let local = arm.local_position(&sim, arm.upper).unwrap();
    assert!(close(local, Vec3::new(0.0, -4.0, 0.0)));
    assert!(arm.local_position(&sim, 99).is_none());
    assert!(arm.is_bound(&sim));
}

#[test]
fn solve_chains_brings_hand_along_with_posed_links() {
    let mut sim = PhysicsSim::new();
    let arm = ArmRig::new(&mut sim, Vec3::ZERO, ArmConfig::default());
    for _ in 0..40 {
        sim.add_torque(arm.upper, Vec3::new(150.0, 0.0, 150.0)).unwrap();
        sim.step();
    }
    assert!(!close(sim.bodies[arm.hand].pos, Vec3::new(0.0, -12.0, 0.0)));

    let flipped = physics::transform::from_euler_degrees(180.0, 0.0, 0.0);
    sim.set_pose(arm.upper, Vec3::new(0.0, -4.0, 0.0), flipped).unwrap();
    sim.set_pose(arm.lower, Vec3::new(0.0, -10.0, 0.0), flipped).unwrap();
    sim.set_velocity(arm.upper, Vec3::ZERO, Vec3::ZERO).unwrap();
    sim.set_velocity(arm.lower, Vec3::ZERO, Vec3::ZERO).unwrap();
    sim.solve_chains();

    let hand = sim.bodies[arm.hand];
    assert!(close(hand.pos, Vec3::new(0.0, -12.0, 0.0)));
    assert_eq!(hand.prev_pos, hand.pos);
    assert_eq!(hand.vel, Vec3::ZERO);

    // No spurious velocity on the step after the snap.
    sim.step();
    assert!(sim.bodies[arm.hand].vel.length() < 1e-3);
}
