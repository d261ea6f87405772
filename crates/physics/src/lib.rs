#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Reacher Physics Host
//!
//! A minimal rigid-body host for articulated reaching tasks.
//!
//! The crate does not try to be a general solver. It integrates torques on
//! dynamic bodies into angular velocity and orientation, and re-derives the
//! positions of articulated bodies from their orientations through kinematic
//! chains, so a two-link arm stays attached at its shoulder and elbow.
//!
//! ## Key Components
//!
//! -   **Bodies:** [`Body`] carries pose, velocities, a spherical collision
//!     radius and a scale. See the [`types`] module.
//! -   **Simulation:** [`PhysicsSim`] owns the bodies, steps them at a fixed
//!     time step and counts frames.
//! -   **Arm:** [`ArmRig`] builds the shoulder link, elbow link, hand, base
//!     marker and goal marker and registers the chain that ties them together.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{ArmConfig, ArmRig, PhysicsSim, Vec3};
//!
//! let mut sim = PhysicsSim::new();
//! let arm = ArmRig::new(&mut sim, Vec3::ZERO, ArmConfig::default());
//! sim.add_torque(arm.upper, Vec3::new(150.0, 0.0, 0.0))?;
//! sim.run(10);
//! assert_eq!(sim.frame_count(), 10);
//! # Ok::<(), physics::PhysicsError>(())
//! ```

mod builder;
pub mod error;
pub mod integrator;
pub mod rig;
pub mod simulation;
pub mod transform;
pub mod types;

pub use error::PhysicsError;
pub use rig::{ArmConfig, ArmRig};
pub use simulation::PhysicsSim;
pub use types::{Body, BodyType, PhysParams, Vec3};
