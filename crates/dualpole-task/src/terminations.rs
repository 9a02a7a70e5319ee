//! Termination specification: time limit and cart travel bounds.

use serde::{Deserialize, Serialize};

use dualpole_core::terms::{SceneEntityCfg, TerminationFn, TerminationTermCfg};

use crate::assets::{RAIL_TO_CART, ROBOT};

/// Episode-ending predicates.  The episode ends when either fires.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerminationsCfg {
    /// Elapsed time reached the configured episode length (non-failure).
    pub time_out: TerminationTermCfg,
    /// Cart left the usable rail travel.
    pub cart_out_of_bounds: TerminationTermCfg,
}

impl TerminationsCfg {
    /// Terms with their names, in declared order.
    #[must_use]
    pub fn terms(&self) -> [(&'static str, &TerminationTermCfg); 2] {
        [
            ("time_out", &self.time_out),
            ("cart_out_of_bounds", &self.cart_out_of_bounds),
        ]
    }

    /// Whether any predicate signals a task failure rather than a time
    /// limit.  Without one, episodes only ever end by timeout.
    #[must_use]
    pub fn has_failure_condition(&self) -> bool {
        self.terms().iter().any(|(_, term)| !term.time_out)
    }
}

impl Default for TerminationsCfg {
    fn default() -> Self {
        Self {
            time_out: TerminationTermCfg::timeout(),
            cart_out_of_bounds: TerminationTermCfg::failure(
                TerminationFn::JointPosOutOfLimit {
                    asset: SceneEntityCfg::with_joints(ROBOT, &[RAIL_TO_CART]),
                    bounds: (-1.24, 1.24),
                },
            ),
        }
    }
}
