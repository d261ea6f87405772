//! Goal placement and reward shaping math.
//!
//! Everything here is free of simulation state so it can be checked in
//! isolation; [`ReacherAgent`](crate::ReacherAgent) wires it to the bodies.

use physics::Vec3;

/// Torque applied per unit of action.
pub const TORQUE_SCALE: f32 = 150.0;
/// Radius of the circle the goal travels on.
pub const GOAL_ORBIT_RADIUS: f32 = 8.0;
/// Frames that must pass after a touch before the goal jumps.
pub const RELOCATE_DELAY: u64 = 50;
/// Reward lost per unit of summed link speed, each update.
pub const MOVE_PENALTY: f32 = 0.0001;
pub const SLOT_COUNT: u8 = 4;

/// Clamp an action to `[-1, 1]` and scale it to a torque component.
///
/// NaN maps to zero so the output is always bounded.
#[must_use]
pub fn scaled_torque(action: f32) -> f32 {
    if action.is_nan() {
        return 0.0;
    }
    action.clamp(-1.0, 1.0) * TORQUE_SCALE
}

/// Goal offset from the reference position for an angle in degrees.
///
/// The goal runs on a horizontal circle of radius [`GOAL_ORBIT_RADIUS`] with a
/// vertical cosine wobble of amplitude `deviation` and `deviation_freq` cycles
/// per revolution.
#[must_use]
pub fn goal_offset(degrees: f32, deviation: f32, deviation_freq: f32) -> Vec3 {
    let radians = degrees * std::f32::consts::PI / 180.0;
    let along_z = GOAL_ORBIT_RADIUS * radians.cos();
    let along_x = GOAL_ORBIT_RADIUS * radians.sin();
    let vertical = deviation * (deviation_freq * radians).cos();
    Vec3::new(along_x, vertical, along_z)
}

#[must_use]
pub fn goal_position(reference: Vec3, degrees: f32, deviation: f32, deviation_freq: f32) -> Vec3 {
    goal_offset(degrees, deviation, deviation_freq) + reference
}

/// Per-update reward for moving the links at `move_speed`, a sum of speeds.
#[must_use]
pub fn move_penalty(move_speed: f32) -> f32 {
    -MOVE_PENALTY * move_speed
}

/// One of the four quadrant positions of the goal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct TargetSlot(u8);

impl TargetSlot {
    /// `None` if `index` is not below [`SLOT_COUNT`].
    #[must_use]
    pub fn new(index: u8) -> Option<Self> {
        (index < SLOT_COUNT).then_some(Self(index))
    }

    /// Uniform draw over all slots.
    #[must_use]
    pub fn random(rng: &fastrand::Rng) -> Self {
        Self(rng.u8(0..SLOT_COUNT))
    }

    /// Uniform draw over every slot except `self`, by redrawing until different.
    #[must_use]
    pub fn reselect(self, rng: &fastrand::Rng) -> Self {
        loop {
            let candidate = Self::random(rng);
            if candidate != self {
                return candidate;
            }
        }
    }

    #[must_use]
    pub fn index(self) -> u8 {
        self.0
    }

    /// Goal angle for this slot.
    #[must_use]
    pub fn degrees(self) -> f32 {
        f32::from(self.0) * 90.0
    }
}

/// Touch flag and the frame stamps around it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TouchState {
    pub just_touched: bool,
    /// Frame of the first contact since the goal last moved.
    pub time_touched: u64,
    /// Frame at which the current slot became active.
    pub time_active: u64,
}

impl TouchState {
    /// Register a contact. Returns `true` on the first contact only; the
    /// timestamp is not refreshed while the flag is already set.
    pub fn touch(&mut self, frame: u64) -> bool {
        if self.just_touched {
            return false;
        }
        self.just_touched = true;
        self.time_touched = frame;
        true
    }

    /// Whether the goal should jump at `frame`.
    #[must_use]
    pub fn should_relocate(&self, frame: u64) -> bool {
        self.just_touched && frame.saturating_sub(self.time_touched) >= RELOCATE_DELAY
    }

    /// Mark a new slot active and clear the touch.
    pub fn activate(&mut self, frame: u64) {
        self.just_touched = false;
        self.time_active = frame;
    }
}
