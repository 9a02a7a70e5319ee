//! Declarative task bundle for a cart balancing two stacked poles.
//!
//! The crate defines no runtime behaviour.  It assembles the scene layout,
//! MDP terms (actions, observations, events, rewards, terminations), and
//! simulation parameters that a manager-style RL runtime reads once at
//! environment construction; the runtime owns physics, rendering, and
//! training.
//!
//! The aggregate lives in [`env::DualPoleEnvCfg`]: framework defaults are
//! constructed first, then [`post_init`](env::DualPoleEnvCfg::post_init)
//! applies the task's overrides.

pub mod actions;
pub mod assets;
pub mod commands;
pub mod env;
pub mod events;
pub mod lint;
pub mod observations;
pub mod rewards;
pub mod scene;
pub mod terminations;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::actions::ActionsCfg;
    pub use crate::commands::{CommandsCfg, CurriculumCfg};
    pub use crate::env::DualPoleEnvCfg;
    pub use crate::events::EventsCfg;
    pub use crate::lint::{lint, Lint};
    pub use crate::observations::ObservationsCfg;
    pub use crate::rewards::RewardsCfg;
    pub use crate::scene::DualPoleSceneCfg;
    pub use crate::terminations::TerminationsCfg;
}
