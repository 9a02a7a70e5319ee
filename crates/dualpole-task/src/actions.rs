//! Action specification: which joints the policy drives and how.

use serde::{Deserialize, Serialize};

use dualpole_core::terms::JointEffortActionCfg;

use crate::assets::{RAIL_TO_CART, ROBOT};

/// Action terms exposed to the policy.
///
/// A single scalar action: effort on the cart's rail joint, scaled by 10.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionsCfg {
    pub joint_effort: JointEffortActionCfg,
}

impl Default for ActionsCfg {
    fn default() -> Self {
        Self {
            joint_effort: JointEffortActionCfg::new(ROBOT, &[RAIL_TO_CART], 10.0),
        }
    }
}
