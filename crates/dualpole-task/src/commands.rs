//! Command and curriculum managers, both deliberately inert for this task.

use serde::{Deserialize, Serialize};

use dualpole_core::terms::NullCommandCfg;

/// Command terms.  The task has no externally varying goal, so the only
/// entry is the null generator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandsCfg {
    pub null: NullCommandCfg,
}

/// Curriculum terms.  None: difficulty is constant across training.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurriculumCfg {}

impl CurriculumCfg {
    /// The curriculum declares no terms.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        true
    }
}
