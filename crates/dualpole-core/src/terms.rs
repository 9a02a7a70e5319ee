//! Term configuration types for the manager-style MDP contract.
//!
//! A *term* is one named declarative unit (action, observation, event,
//! reward, termination) pairing a function identifier with its parameters.
//! The runtime resolves the identifiers against its registries at
//! environment construction and evaluates the terms while stepping; the
//! types here only describe what to evaluate.

use serde::{Deserialize, Serialize};

use crate::noise::NoiseCfg;
use crate::ranges::ResetRange;

// ---------------------------------------------------------------------------
// SceneEntityCfg
// ---------------------------------------------------------------------------

/// Reference to a scene entity, optionally narrowed to a joint subset.
///
/// An empty `joint_names` selects the whole articulation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneEntityCfg {
    pub name: String,
    #[serde(default)]
    pub joint_names: Vec<String>,
}

impl SceneEntityCfg {
    /// Reference an entity with all of its joints.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            joint_names: Vec::new(),
        }
    }

    /// Reference a subset of an entity's joints.
    #[must_use]
    pub fn with_joints(name: impl Into<String>, joints: &[&str]) -> Self {
        Self {
            name: name.into(),
            joint_names: joints.iter().map(|j| (*j).to_string()).collect(),
        }
    }

    /// Whether the reference covers the whole articulation.
    #[must_use]
    pub fn is_whole_articulation(&self) -> bool {
        self.joint_names.is_empty()
    }
}

// ---------------------------------------------------------------------------
// JointEffortActionCfg
// ---------------------------------------------------------------------------

/// Effort (force/torque) control over a set of joints.
///
/// The runtime maps an external scalar action `a` on each listed joint to
/// a joint effort `a * scale`.  Clamping out-of-range actions is the
/// runtime's job, not the term's.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JointEffortActionCfg {
    pub asset_name: String,
    pub joint_names: Vec<String>,
    pub scale: f32,
}

impl JointEffortActionCfg {
    #[must_use]
    pub fn new(asset_name: impl Into<String>, joints: &[&str], scale: f32) -> Self {
        Self {
            asset_name: asset_name.into(),
            joint_names: joints.iter().map(|j| (*j).to_string()).collect(),
            scale,
        }
    }

    /// Dimension of the external action vector this term consumes.
    #[must_use]
    pub fn action_dim(&self) -> usize {
        self.joint_names.len()
    }
}

// ---------------------------------------------------------------------------
// Observations
// ---------------------------------------------------------------------------

/// Observation source functions the runtime can resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservationFn {
    /// Joint positions relative to the articulation's default pose.
    JointPosRel,
    /// Joint velocities relative to the articulation's default velocities.
    JointVelRel,
}

impl ObservationFn {
    /// Values this function contributes for an articulation with `n_joints`.
    #[must_use]
    pub const fn dim(self, n_joints: usize) -> usize {
        match self {
            Self::JointPosRel | Self::JointVelRel => n_joints,
        }
    }
}

/// One entry of an observation group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObservationTermCfg {
    pub name: String,
    pub func: ObservationFn,
    pub asset: SceneEntityCfg,
    /// Additive corruption, applied only when the group enables it.
    #[serde(default)]
    pub noise: Option<NoiseCfg>,
}

impl ObservationTermCfg {
    #[must_use]
    pub fn new(name: impl Into<String>, func: ObservationFn, asset: SceneEntityCfg) -> Self {
        Self {
            name: name.into(),
            func,
            asset,
            noise: None,
        }
    }
}

/// Ordered collection of observation terms.
///
/// When `concatenate_terms` is set the terms are flattened into one vector
/// in declared order — the order *is* the observation layout, and
/// reordering breaks any policy trained against the group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObservationGroupCfg {
    #[serde(default)]
    pub enable_corruption: bool,
    #[serde(default = "default_true")]
    pub concatenate_terms: bool,
    pub terms: Vec<ObservationTermCfg>,
}

const fn default_true() -> bool {
    true
}

impl ObservationGroupCfg {
    /// Empty group: corruption off, concatenation on.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            enable_corruption: false,
            concatenate_terms: true,
            terms: Vec::new(),
        }
    }

    /// Append a term.  Returns `self` for chaining.
    #[must_use]
    pub fn with_term(mut self, term: ObservationTermCfg) -> Self {
        self.terms.push(term);
        self
    }

    /// Set the corruption flag.
    #[must_use]
    pub const fn with_corruption(mut self, enable: bool) -> Self {
        self.enable_corruption = enable;
        self
    }

    /// Term names in declared order.
    #[must_use]
    pub fn term_names(&self) -> Vec<&str> {
        self.terms.iter().map(|t| t.name.as_str()).collect()
    }

    /// Flattened observation dimension for an articulation with `n_joints`.
    #[must_use]
    pub fn dim(&self, n_joints: usize) -> usize {
        self.terms.iter().map(|t| t.func.dim(n_joints)).sum()
    }
}

impl Default for ObservationGroupCfg {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// When an event term fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventMode {
    /// Once, when the environment is first built.
    Startup,
    /// At the start of every episode.
    Reset,
    /// Every fixed number of steps while an episode runs.
    Interval,
}

/// Event routines the runtime can resolve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventFn {
    /// Restore every selected joint to its default position and velocity.
    ResetJointsToDefault { asset: SceneEntityCfg },
    /// Draw a position and a velocity for each selected joint from the
    /// given ranges.
    ResetJointsUniform {
        asset: SceneEntityCfg,
        position_range: ResetRange,
        velocity_range: ResetRange,
    },
}

impl EventFn {
    /// The entity the routine targets.
    #[must_use]
    pub const fn asset(&self) -> &SceneEntityCfg {
        match self {
            Self::ResetJointsToDefault { asset } | Self::ResetJointsUniform { asset, .. } => asset,
        }
    }
}

/// One event term: a routine bound to a trigger mode.
///
/// Terms sharing a mode apply in declared order; a full-articulation reset
/// must precede per-joint overrides or it clobbers them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventTermCfg {
    pub name: String,
    pub mode: EventMode,
    pub func: EventFn,
}

impl EventTermCfg {
    /// Event fired at the start of every episode.
    #[must_use]
    pub fn on_reset(name: impl Into<String>, func: EventFn) -> Self {
        Self {
            name: name.into(),
            mode: EventMode::Reset,
            func,
        }
    }
}

// ---------------------------------------------------------------------------
// Rewards
// ---------------------------------------------------------------------------

/// Reward functions the runtime can resolve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardFn {
    /// 1 while the episode runs, 0 once it has ended.
    IsAlive,
    /// 1 on the step a failure termination fires, 0 otherwise.
    IsTerminated,
    /// Squared deviation of the selected joint positions from `target`.
    JointPosTargetL2 { asset: SceneEntityCfg, target: f32 },
    /// L1 norm of the selected joint velocities.
    JointVelL1 { asset: SceneEntityCfg },
}

impl RewardFn {
    /// The entity the function reads, if any.
    #[must_use]
    pub const fn asset(&self) -> Option<&SceneEntityCfg> {
        match self {
            Self::IsAlive | Self::IsTerminated => None,
            Self::JointPosTargetL2 { asset, .. } | Self::JointVelL1 { asset } => Some(asset),
        }
    }
}

/// One weighted summand of the step reward.
///
/// The runtime computes `weight * value` per term and sums over all terms;
/// terms do not interact beyond the sum.  Sign and magnitude of the weight
/// encode task priority.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardTermCfg {
    pub func: RewardFn,
    pub weight: f32,
}

impl RewardTermCfg {
    #[must_use]
    pub const fn new(func: RewardFn, weight: f32) -> Self {
        Self { func, weight }
    }
}

// ---------------------------------------------------------------------------
// Terminations
// ---------------------------------------------------------------------------

/// Episode-ending predicates the runtime can resolve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationFn {
    /// Elapsed episode time reached the configured episode length.
    TimeOut,
    /// A selected joint position left `bounds`.
    JointPosOutOfLimit {
        asset: SceneEntityCfg,
        bounds: (f32, f32),
    },
}

impl TerminationFn {
    /// The entity the predicate reads, if any.
    #[must_use]
    pub const fn asset(&self) -> Option<&SceneEntityCfg> {
        match self {
            Self::TimeOut => None,
            Self::JointPosOutOfLimit { asset, .. } => Some(asset),
        }
    }
}

/// One episode-ending predicate.  The episode ends when any term fires.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerminationTermCfg {
    pub func: TerminationFn,
    /// Marks a time-based ending (truncation) rather than a task failure.
    #[serde(default)]
    pub time_out: bool,
}

impl TerminationTermCfg {
    /// Failure predicate (`time_out = false`).
    #[must_use]
    pub const fn failure(func: TerminationFn) -> Self {
        Self {
            func,
            time_out: false,
        }
    }

    /// Time-limit predicate (`time_out = true`).
    #[must_use]
    pub const fn timeout() -> Self {
        Self {
            func: TerminationFn::TimeOut,
            time_out: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Placeholder command generator for tasks with no externally varying goal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NullCommandCfg {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
