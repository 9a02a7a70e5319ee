//! Reset events applied at the start of every episode.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use dualpole_core::ranges::ResetRange;
use dualpole_core::terms::{EventFn, EventTermCfg, SceneEntityCfg};

use crate::assets::{CART_TO_POLE, POLE_TO_DOUBLE, ROBOT};

/// Reset-time events, applied in declared order.
///
/// The full default reset runs first; the per-joint terms then pin the two
/// pole joints.  Swapping the order would let the full reset clobber the
/// pinned values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventsCfg {
    /// Restore every joint to its default position and velocity.
    pub reset_to_default: EventTermCfg,
    /// Pin the first pole hanging straight down.
    pub reset_pole_position: EventTermCfg,
    /// Pin the second pole aligned with the first.
    pub reset_pole_double_position: EventTermCfg,
}

impl EventsCfg {
    /// Reset terms in application order.
    #[must_use]
    pub fn reset_terms(&self) -> [&EventTermCfg; 3] {
        [
            &self.reset_to_default,
            &self.reset_pole_position,
            &self.reset_pole_double_position,
        ]
    }
}

impl Default for EventsCfg {
    fn default() -> Self {
        Self {
            reset_to_default: EventTermCfg::on_reset(
                "reset_to_default",
                EventFn::ResetJointsToDefault {
                    asset: SceneEntityCfg::new(ROBOT),
                },
            ),
            reset_pole_position: EventTermCfg::on_reset(
                "reset_pole_position",
                EventFn::ResetJointsUniform {
                    asset: SceneEntityCfg::with_joints(ROBOT, &[CART_TO_POLE]),
                    position_range: ResetRange::fixed(PI),
                    velocity_range: ResetRange::fixed(0.0),
                },
            ),
            reset_pole_double_position: EventTermCfg::on_reset(
                "reset_pole_double_position",
                EventFn::ResetJointsUniform {
                    asset: SceneEntityCfg::with_joints(ROBOT, &[POLE_TO_DOUBLE]),
                    position_range: ResetRange::fixed(0.0),
                    velocity_range: ResetRange::fixed(0.0),
                },
            ),
        }
    }
}
