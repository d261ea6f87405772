use std::cell::RefCell;
use std::rc::Rc;

use physics::{ArmConfig, ArmRig, PhysicsSim, Vec3};
use reacher::{Agent, ParameterStore, ReacherAgent, SharedStats, StatsCollector};

pub struct Fixture {
    pub sim: PhysicsSim,
    pub agent: ReacherAgent,
    pub stats: Rc<RefCell<StatsCollector>>,
}

pub fn fixture_with(params: ParameterStore, anchor: Vec3, seed: u64) -> Fixture {
    let mut sim = PhysicsSim::new();
    let rig = ArmRig::new(&mut sim, anchor, ArmConfig::default());
    let stats = StatsCollector::shared();
    let shared: SharedStats = stats.clone();
    let mut agent = ReacherAgent::new(rig, Box::new(params), shared, seed);
    agent.init(&sim).unwrap();
    agent.reset(&mut sim).unwrap();
    Fixture { sim, agent, stats }
}

pub fn fixture() -> Fixture {
    fixture_with(ParameterStore::new(), Vec3::ZERO, 42)
}

pub fn close(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}
