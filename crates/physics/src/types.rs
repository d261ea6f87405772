//! Core value types shared by the simulation and its callers.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Sub};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[must_use]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[must_use]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean length, the `magnitude` of the vector.
    #[must_use]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        (other - self).length()
    }

    #[must_use]
    pub fn max_element(self) -> f32 {
        self.x.max(self.y).max(self.z)
    }

    #[must_use]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl MulAssign<f32> for Vec3 {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Div<f32> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

/// How the integrator treats a body.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BodyType {
    /// Torques are integrated into angular velocity.
    Dynamic,
    /// Pose is only changed by the caller or by a kinematic chain.
    Kinematic,
}

/// A rigid body with a spherical collision volume.
#[derive(Copy, Clone, Debug)]
pub struct Body {
    pub pos: Vec3,
    /// Position at the start of the current step, used for finite-difference velocity.
    pub prev_pos: Vec3,
    pub vel: Vec3,
    /// Orientation quaternion as `[x, y, z, w]`.
    pub orientation: [f32; 4],
    pub angular_vel: Vec3,
    /// Collision radius before scaling.
    pub radius: f32,
    pub scale: Vec3,
    /// Scalar moment of inertia.
    pub inertia: f32,
    pub body_type: BodyType,
    /// Torque accumulated since the last step.
    pub torque: Vec3,
}

impl Body {
    pub const IDENTITY: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

    #[must_use]
    pub fn new(pos: Vec3, radius: f32, body_type: BodyType) -> Self {
        Self {
            pos,
            prev_pos: pos,
            vel: Vec3::ZERO,
            orientation: Self::IDENTITY,
            angular_vel: Vec3::ZERO,
            radius,
            scale: Vec3::ONE,
            inertia: 1.0,
            body_type,
            torque: Vec3::ZERO,
        }
    }

    /// Collision radius after applying the largest scale component.
    #[must_use]
    pub fn scaled_radius(&self) -> f32 {
        self.radius * self.scale.max_element()
    }
}

/// Global integration parameters.
#[derive(Copy, Clone, Debug)]
pub struct PhysParams {
    /// Fixed time step in seconds.
    pub dt: f32,
    /// Angular drag coefficient.
    pub angular_damping: f32,
    /// Angular speed cap in rad/s.
    pub max_angular_speed: f32,
}

impl Default for PhysParams {
    fn default() -> Self {
        Self {
            dt: 0.02,
            angular_damping: 0.05,
            max_angular_speed: 7.0,
        }
    }
}
