use physics::Vec3;
use reacher::arena::{CUMULATIVE_REWARD, EPISODE_LENGTH};
use reacher::{AgentError, Arena, ArenaConfig, ParameterStore, Policy, RandomPolicy, ZeroPolicy};

fn short_config(max_steps: u32) -> ArenaConfig {
    ArenaConfig { max_steps, ..ArenaConfig::default() }
}

struct CountingPolicy {
    calls: u32,
}

impl Policy for CountingPolicy {
    fn act(&mut self, observation: &[f32], actions: &mut [f32]) {
        assert_eq!(observation.len(), 33);
        self.calls += 1;
        actions.fill(0.5);
    }
}

#[test]
fn rejects_invalid_config() {
    assert!(matches!(
        Arena::new(short_config(0), ParameterStore::new()),
        Err(AgentError::InvalidEpisodeLength)
    ));
    let config = ArenaConfig { decision_period: 0, ..short_config(10) };
    assert!(matches!(Arena::new(config, ParameterStore::new()), Err(AgentError::InvalidParameter(_))));
    let config = ArenaConfig { dt: 0.0, ..short_config(10) };
    assert!(matches!(Arena::new(config, ParameterStore::new()), Err(AgentError::InvalidParameter(_))));
}

#[test]
fn idle_episode_has_no_penalty() -> anyhow::Result<()> {
    let mut arena = Arena::new(short_config(100), ParameterStore::new())?;
    let summary = arena.run_episode(&mut ZeroPolicy)?;
    assert_eq!(summary.steps, 100);
    assert_eq!(summary.episode, 0);
    assert!(summary.cumulative_reward.abs() < 1e-9);
    assert_eq!(arena.sim().frame_count(), 100);
    assert_eq!(arena.episodes(), 1);
    Ok(())
}

#[test]
fn moving_arm_is_penalised() -> anyhow::Result<()> {
    let mut arena = Arena::new(short_config(200), ParameterStore::new())?;
    let summary = arena.run_episode(&mut RandomPolicy::new(11))?;
    assert!(summary.cumulative_reward < 0.0);
    assert_eq!(arena.observation().len(), 33);

    let stats = arena.stats();
    assert_eq!(stats.get("Distance to base").unwrap().count, 200);
    assert_eq!(stats.get(EPISODE_LENGTH).unwrap().value(), 200.0);
    assert!(stats.get(CUMULATIVE_REWARD).unwrap().value() < 0.0);
    Ok(())
}

#[test]
fn decision_period_repeats_actions() -> anyhow::Result<()> {
    let config = ArenaConfig { decision_period: 5, ..short_config(20) };
    let mut arena = Arena::new(config, ParameterStore::new())?;
    let mut policy = CountingPolicy { calls: 0 };
    arena.run_episode(&mut policy)?;
    assert_eq!(policy.calls, 4);
    Ok(())
}

#[test]
fn episodes_restart_from_rest() -> anyhow::Result<()> {
    let mut arena = Arena::new(short_config(50), ParameterStore::new())?;
    let mut policy = RandomPolicy::new(3);
    arena.run_episode(&mut policy)?;
    arena.begin_episode()?;
    let agent = arena.agent();
    let upper = arena.sim().bodies[agent.rig().upper];
    assert!((upper.pos.y + 4.0).abs() < 1e-4);
    assert_eq!(agent.step_count(), 0);

    // The hand follows the links back to rest before anything is observed.
    let hand = arena.sim().bodies[agent.rig().hand];
    assert!((hand.pos - Vec3::new(0.0, -12.0, 0.0)).length() < 1e-4);
    assert_eq!(hand.vel, Vec3::ZERO);

    arena.step(&mut ZeroPolicy)?;
    let obs = arena.observation();
    assert!((Vec3::new(obs[29], obs[30], obs[31]) - Vec3::new(0.0, -12.0, 0.0)).length() < 1e-4);
    Ok(())
}

#[test]
fn fresh_arena_is_ready_to_step() -> anyhow::Result<()> {
    let mut arena = Arena::new(short_config(10), ParameterStore::new())?;
    let goal = arena.sim().bodies[arena.agent().rig().goal];
    assert!((goal.pos.length() - 8.0).abs() < 1e-4);
    assert_eq!(goal.scale, Vec3::splat(5.0));
    arena.step(&mut ZeroPolicy)?;
    assert_eq!(arena.agent().step_count(), 1);
    Ok(())
}

#[test]
fn same_seeds_give_same_episodes() -> anyhow::Result<()> {
    let run = || -> anyhow::Result<_> {
        let mut params = ParameterStore::new();
        params.set("goal_speed", 1.0);
        params.set("deviation", 2.0);
        params.set("deviation_freq", 1.0);
        let config = ArenaConfig { seed: 17, ..short_config(300) };
        let mut arena = Arena::new(config, params)?;
        let mut policy = RandomPolicy::new(5);
        let first = arena.run_episode(&mut policy)?;
        let second = arena.run_episode(&mut policy)?;
        Ok((first, second))
    };
    assert_eq!(run()?, run()?);
    Ok(())
}

#[test]
fn touching_goal_is_counted() -> anyhow::Result<()> {
    // A goal large enough to swallow the hand is touched on the first step.
    let mut params = ParameterStore::new();
    params.set("goal_size", 40.0);
    let mut arena = Arena::new(short_config(120), params)?;
    let summary = arena.run_episode(&mut ZeroPolicy)?;
    assert!(summary.touches >= 1);
    // Every relocation needs a fresh touch plus the cooldown.
    assert!(summary.relocations >= 1);
    assert!(summary.relocations <= summary.touches);
    Ok(())
}

#[test]
fn updated_parameters_apply_on_next_episode() -> anyhow::Result<()> {
    let mut arena = Arena::new(short_config(10), ParameterStore::new())?;
    arena.run_episode(&mut ZeroPolicy)?;
    assert_eq!(arena.agent().reset_parameters().goal_size, 5.0);

    let mut params = ParameterStore::new();
    params.set("goal_size", 2.0);
    arena.update_parameters(params);
    assert_eq!(arena.agent().reset_parameters().goal_size, 5.0);

    arena.run_episode(&mut ZeroPolicy)?;
    assert_eq!(arena.agent().reset_parameters().goal_size, 2.0);
    let goal = arena.agent().rig().goal;
    assert_eq!(arena.sim().bodies[goal].scale.x, 2.0);
    Ok(())
}
