//! Action sources for driving an agent without a trained model.

use serde::{Deserialize, Serialize};

pub trait Policy {
    /// Fill `actions` from the current observation.
    fn act(&mut self, observation: &[f32], actions: &mut [f32]);
}

/// Uniform actions in `[-1, 1)`.
pub struct RandomPolicy {
    rng: fastrand::Rng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: fastrand::Rng::with_seed(seed) }
    }
}

impl Policy for RandomPolicy {
    fn act(&mut self, _observation: &[f32], actions: &mut [f32]) {
        for a in actions.iter_mut() {
            *a = self.rng.f32() * 2.0 - 1.0;
        }
    }
}

/// Always outputs zero torque.
#[derive(Default)]
pub struct ZeroPolicy;

impl Policy for ZeroPolicy {
    fn act(&mut self, _observation: &[f32], actions: &mut [f32]) {
        actions.fill(0.0);
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    #[default]
    Random,
    Zero,
}

impl PolicyKind {
    #[must_use]
    pub fn build(self, seed: u64) -> Box<dyn Policy> {
        match self {
            Self::Random => Box::new(RandomPolicy::new(seed)),
            Self::Zero => Box::new(ZeroPolicy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_actions_are_in_range() {
        let mut policy = RandomPolicy::new(7);
        let mut actions = [0.0; 4];
        for _ in 0..100 {
            policy.act(&[], &mut actions);
            assert!(actions.iter().all(|a| (-1.0..1.0).contains(a)));
        }
    }

    #[test]
    fn zero_policy_clears_actions() {
        let mut actions = [0.3; 4];
        ZeroPolicy.act(&[], &mut actions);
        assert_eq!(actions, [0.0; 4]);
    }
}
