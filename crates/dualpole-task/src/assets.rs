//! Robot template shared by the task modules.

use std::path::PathBuf;

use dualpole_core::spawn::ArticulationCfg;

/// Name the scene exposes the robot under.
pub const ROBOT: &str = "robot";

/// Prismatic joint driving the cart along the rail.
pub const RAIL_TO_CART: &str = "RailToCart";
/// Revolute joint between the cart and the first pole.
pub const CART_TO_POLE: &str = "CartToPole";
/// Revolute joint between the first and the second pole.
pub const POLE_TO_DOUBLE: &str = "PoleToDouble";

/// Base articulation template: a cart on a rail carrying two stacked poles.
///
/// Attaches a single robot at `/World/Robot`; task scenes re-attach it
/// under the environment namespace.  All joints default to zero position
/// and velocity.
#[must_use]
pub fn dual_pole_cartpole() -> ArticulationCfg {
    let joints = [RAIL_TO_CART, CART_TO_POLE, POLE_TO_DOUBLE];
    ArticulationCfg {
        prim_path: "/World/Robot".into(),
        urdf_path: PathBuf::from("robots/dual_pole_cartpole.urdf"),
        fixed_base: true,
        footprint: [2.6, 0.4],
        joint_names: joints.iter().map(|j| (*j).to_string()).collect(),
        default_joint_positions: joints.iter().map(|j| ((*j).to_string(), 0.0)).collect(),
        default_joint_velocities: joints.iter().map(|j| ((*j).to_string(), 0.0)).collect(),
    }
}
