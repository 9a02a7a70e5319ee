//! Configuration contract for manager-style RL task bundles.
//!
//! A task bundle is inert data: scene entity specs, MDP term declarations,
//! and simulation parameters that the consuming runtime reads once at
//! environment construction. This crate defines the types those bundles are
//! assembled from; it executes nothing itself.
//!
//! - [`terms`] — action/observation/event/reward/termination term configs,
//!   each pairing a function identifier with its parameters.
//! - [`spawn`] — articulation, light, and transform-node spawn specs.
//! - [`camera`] — RGB camera and pinhole lens specs.
//! - [`scene`] — environment replication conventions (namespace templating,
//!   grid placement).
//! - [`ranges`] — reset-time uniform sampling intervals.
//! - [`noise`] — observation corruption models.
//! - [`sim`] — simulation stepping and viewer parameters.
//! - [`error`] — the construction-time failures a runtime raises for a
//!   malformed bundle.

pub mod camera;
pub mod error;
pub mod noise;
pub mod ranges;
pub mod scene;
pub mod sim;
pub mod spawn;
pub mod terms;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::camera::{CameraCfg, CameraRigCfg, PinholeCfg, PixelFormat};
    pub use crate::error::{ConfigError, CoreError};
    pub use crate::noise::NoiseCfg;
    pub use crate::ranges::{RangeError, ResetRange};
    pub use crate::scene::{env_ns_path, grid_origin, resolve_env_path, ENV_NS};
    pub use crate::sim::{SimulationCfg, ViewerCfg};
    pub use crate::spawn::{ArticulationCfg, LightCfg, LightKind, XformCfg};
    pub use crate::terms::{
        EventFn, EventMode, EventTermCfg, JointEffortActionCfg, NullCommandCfg, ObservationFn,
        ObservationGroupCfg, ObservationTermCfg, RewardFn, RewardTermCfg, SceneEntityCfg,
        TerminationFn, TerminationTermCfg,
    };
}
