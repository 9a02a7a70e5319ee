//! Observation specification for the policy group.

use serde::{Deserialize, Serialize};

use dualpole_core::terms::{
    ObservationFn, ObservationGroupCfg, ObservationTermCfg, SceneEntityCfg,
};

use crate::assets::ROBOT;

/// Observation groups read by the runtime.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObservationsCfg {
    pub policy: ObservationGroupCfg,
}

impl Default for ObservationsCfg {
    fn default() -> Self {
        // Term order is the observation layout: positions, then velocities.
        let policy = ObservationGroupCfg::new()
            .with_term(ObservationTermCfg::new(
                "joint_pos_rel",
                ObservationFn::JointPosRel,
                SceneEntityCfg::new(ROBOT),
            ))
            .with_term(ObservationTermCfg::new(
                "joint_vel_rel",
                ObservationFn::JointVelRel,
                SceneEntityCfg::new(ROBOT),
            ))
            .with_corruption(false);
        Self { policy }
    }
}
