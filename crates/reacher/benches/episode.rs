use criterion::{criterion_group, criterion_main, Criterion};
use reacher::{Arena, ArenaConfig, ParameterStore, RandomPolicy};

fn bench_episode(c: &mut Criterion) {
    let config = ArenaConfig { max_steps: 1000, ..ArenaConfig::default() };
    let mut arena = Arena::new(config, ParameterStore::new()).expect("valid arena config");
    let mut policy = RandomPolicy::new(0);
    c.bench_function("reacher_episode_1000_steps", |b| {
        b.iter(|| arena.run_episode(&mut policy).expect("episode runs"));
    });
}

criterion_group!(benches, bench_episode);
criterion_main!(benches);
