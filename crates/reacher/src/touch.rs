use physics::PhysicsSim;

use crate::error::AgentError;
use crate::reacher::ReacherAgent;

/// Watches for contact between the hand and the goal and reports it to the
/// agent after each physics step.
#[derive(Clone, Debug)]
pub struct GoalTouchDetector {
    hand: usize,
    goal: usize,
    contacts: u32,
}

impl GoalTouchDetector {
    #[must_use]
    pub fn new(hand: usize, goal: usize) -> Self {
        Self { hand, goal, contacts: 0 }
    }

    /// Detector for the hand and goal of `agent`'s arm.
    #[must_use]
    pub fn for_agent(agent: &ReacherAgent) -> Self {
        Self::new(agent.rig().hand, agent.rig().goal)
    }

    /// Returns `true` if this check flagged a new touch.
    ///
    /// # Errors
    ///
    /// Fails if the hand or goal body is missing.
    pub fn check(&mut self, sim: &PhysicsSim, agent: &mut ReacherAgent) -> Result<bool, AgentError> {
        if !sim.overlaps(self.hand, self.goal)? {
            return Ok(false);
        }
        let fresh = agent.notify_touch(sim.frame_count());
        if fresh {
            self.contacts += 1;
        }
        Ok(fresh)
    }

    /// New touches flagged since the last [`reset_count`](Self::reset_count).
    #[must_use]
    pub fn contacts(&self) -> u32 {
        self.contacts
    }

    pub fn reset_count(&mut self) {
        self.contacts = 0;
    }
}
