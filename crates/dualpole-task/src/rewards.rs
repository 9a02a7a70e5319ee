//! Reward shaping: survival bonus, failure penalty, posture and damping
//! terms.

use serde::{Deserialize, Serialize};

use dualpole_core::terms::{RewardFn, RewardTermCfg, SceneEntityCfg};

use crate::assets::{CART_TO_POLE, POLE_TO_DOUBLE, RAIL_TO_CART, ROBOT};

/// Weighted reward terms, summed every step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardsCfg {
    /// Per-step survival bonus.
    pub alive: RewardTermCfg,
    /// One-time failure penalty.
    pub terminating: RewardTermCfg,
    /// Keep the first pole upright.
    pub pole_pos: RewardTermCfg,
    /// Keep the second pole upright.
    pub pole_pos_double: RewardTermCfg,
    /// Damp cart speed.
    pub cart_vel: RewardTermCfg,
    /// Damp the first pole's angular speed.
    pub pole_vel: RewardTermCfg,
    /// Keep the cart centred.
    pub cart_pos: RewardTermCfg,
}

impl RewardsCfg {
    /// Terms with their names, in declared order.
    #[must_use]
    pub fn terms(&self) -> [(&'static str, &RewardTermCfg); 7] {
        [
            ("alive", &self.alive),
            ("terminating", &self.terminating),
            ("pole_pos", &self.pole_pos),
            ("pole_pos_double", &self.pole_pos_double),
            ("cart_vel", &self.cart_vel),
            ("pole_vel", &self.pole_vel),
            ("cart_pos", &self.cart_pos),
        ]
    }

    /// Weighted sum over per-term values given in `terms()` order.
    ///
    /// Restates the runtime contract: `reward = sum(weight * value)`, with
    /// no coupling between terms.
    #[must_use]
    pub fn total_for(&self, values: &[f32; 7]) -> f32 {
        self.terms()
            .iter()
            .zip(values.iter())
            .map(|((_, term), value)| term.weight * value)
            .sum()
    }
}

impl Default for RewardsCfg {
    fn default() -> Self {
        Self {
            alive: RewardTermCfg::new(RewardFn::IsAlive, 250.0),
            terminating: RewardTermCfg::new(RewardFn::IsTerminated, -800.0),
            pole_pos: RewardTermCfg::new(
                RewardFn::JointPosTargetL2 {
                    asset: SceneEntityCfg::with_joints(ROBOT, &[CART_TO_POLE]),
                    target: 0.0,
                },
                -30.0,
            ),
            pole_pos_double: RewardTermCfg::new(
                RewardFn::JointPosTargetL2 {
                    asset: SceneEntityCfg::with_joints(ROBOT, &[POLE_TO_DOUBLE]),
                    target: 0.0,
                },
                -30.0,
            ),
            cart_vel: RewardTermCfg::new(
                RewardFn::JointVelL1 {
                    asset: SceneEntityCfg::with_joints(ROBOT, &[RAIL_TO_CART]),
                },
                -10.0,
            ),
            pole_vel: RewardTermCfg::new(
                RewardFn::JointVelL1 {
                    asset: SceneEntityCfg::with_joints(ROBOT, &[CART_TO_POLE]),
                },
                -10.0,
            ),
            cart_pos: RewardTermCfg::new(
                RewardFn::JointPosTargetL2 {
                    asset: SceneEntityCfg::with_joints(ROBOT, &[RAIL_TO_CART]),
                    target: 0.0,
                },
                -5.0,
            ),
        }
    }
}
