//! Aggregated environment configuration.

use std::path::Path;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use dualpole_core::error::ConfigError;
use dualpole_core::sim::{SimulationCfg, ViewerCfg};
use dualpole_core::terms::{EventFn, SceneEntityCfg};

use crate::actions::ActionsCfg;
use crate::assets::ROBOT;
use crate::commands::{CommandsCfg, CurriculumCfg};
use crate::events::EventsCfg;
use crate::observations::ObservationsCfg;
use crate::rewards::RewardsCfg;
use crate::scene::DualPoleSceneCfg;
use crate::terminations::TerminationsCfg;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_decimation() -> u32 {
    2
}
const fn default_episode_length_s() -> f64 {
    5.0
}

// ---------------------------------------------------------------------------
// DualPoleEnvCfg
// ---------------------------------------------------------------------------

/// Complete task bundle handed to the runtime at environment construction.
///
/// Construction runs in two stages: framework defaults first, then
/// [`post_init`](Self::post_init) applies the task's overrides.  Overrides
/// are plain field writes — last write wins, there is no merging.  The
/// runtime inserts the finished bundle as a resource and only reads it.
#[derive(Resource, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DualPoleEnvCfg {
    // scene settings
    #[serde(default)]
    pub scene: DualPoleSceneCfg,
    // basic settings
    #[serde(default)]
    pub observations: ObservationsCfg,
    #[serde(default)]
    pub actions: ActionsCfg,
    #[serde(default)]
    pub events: EventsCfg,
    // mdp settings
    #[serde(default)]
    pub curriculum: CurriculumCfg,
    #[serde(default)]
    pub rewards: RewardsCfg,
    #[serde(default)]
    pub terminations: TerminationsCfg,
    #[serde(default)]
    pub commands: CommandsCfg,
    /// Physics steps per control step.
    #[serde(default = "default_decimation")]
    pub decimation: u32,
    #[serde(default = "default_episode_length_s")]
    pub episode_length_s: f64,
    #[serde(default)]
    pub viewer: ViewerCfg,
    #[serde(default)]
    pub sim: SimulationCfg,
}

impl DualPoleEnvCfg {
    /// Framework defaults with no task overrides applied.
    #[must_use]
    pub fn base() -> Self {
        Self {
            scene: DualPoleSceneCfg::default(),
            observations: ObservationsCfg::default(),
            actions: ActionsCfg::default(),
            events: EventsCfg::default(),
            curriculum: CurriculumCfg::default(),
            rewards: RewardsCfg::default(),
            terminations: TerminationsCfg::default(),
            commands: CommandsCfg::default(),
            decimation: default_decimation(),
            episode_length_s: default_episode_length_s(),
            viewer: ViewerCfg::default(),
            sim: SimulationCfg::default(),
        }
    }

    /// Fully configured bundle: defaults, then task overrides.
    #[must_use]
    pub fn new() -> Self {
        let mut cfg = Self::base();
        cfg.post_init();
        cfg
    }

    /// Task-level overrides applied after default construction, before the
    /// bundle reaches the runtime.
    pub fn post_init(&mut self) {
        // general settings
        self.decimation = 1;
        self.episode_length_s = 10.0;
        // viewer settings
        self.viewer.eye = [1.4, 0.0, 2.8];
        self.viewer.lookat = [-10.0, 0.0, 0.0];
        // simulation settings
        self.sim.dt = 1.0 / 120.0;
        self.sim.gravity = [0.0, 0.0, -9.8];
        self.sim.render_interval = 2;
        self.sim.use_fabric = true;
    }

    /// Seconds of simulated time per control step.
    #[must_use]
    pub fn control_dt(&self) -> f64 {
        self.sim.dt * f64::from(self.decimation)
    }

    /// Episode length in control steps.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn episode_length_steps(&self) -> u32 {
        (self.episode_length_s / self.control_dt()).round() as u32
    }

    /// Construction-time checks the runtime runs before building the
    /// scene.  Fails fast on the first malformed entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sim.validate()?;
        if self.decimation == 0 {
            return Err(ConfigError::InvalidDecimation(self.decimation));
        }
        if self.episode_length_s <= 0.0 {
            return Err(ConfigError::InvalidEpisodeLength(self.episode_length_s));
        }
        self.scene.validate()?;

        // action joints must exist on the articulation
        if self.actions.joint_effort.asset_name != ROBOT {
            return Err(ConfigError::UnknownEntity(
                self.actions.joint_effort.asset_name.clone(),
            ));
        }
        for joint in &self.actions.joint_effort.joint_names {
            if !self.scene.robot.has_joint(joint) {
                return Err(ConfigError::UnknownJoint {
                    asset: self.actions.joint_effort.asset_name.clone(),
                    joint: joint.clone(),
                });
            }
        }

        // observation terms
        for term in &self.observations.policy.terms {
            self.check_entity(&term.asset)?;
        }

        // event targets and ranges
        for term in self.events.reset_terms() {
            self.check_entity(term.func.asset())?;
            if let EventFn::ResetJointsUniform {
                position_range,
                velocity_range,
                ..
            } = &term.func
            {
                position_range
                    .validate()
                    .map_err(|source| ConfigError::Range {
                        field: format!("{}.position_range", term.name),
                        source,
                    })?;
                velocity_range
                    .validate()
                    .map_err(|source| ConfigError::Range {
                        field: format!("{}.velocity_range", term.name),
                        source,
                    })?;
            }
        }

        // reward and termination targets
        for (_, term) in self.rewards.terms() {
            if let Some(asset) = term.func.asset() {
                self.check_entity(asset)?;
            }
        }
        for (_, term) in self.terminations.terms() {
            if let Some(asset) = term.func.asset() {
                self.check_entity(asset)?;
            }
        }

        Ok(())
    }

    fn check_entity(&self, asset: &SceneEntityCfg) -> Result<(), ConfigError> {
        if asset.name != ROBOT {
            return Err(ConfigError::UnknownEntity(asset.name.clone()));
        }
        for joint in &asset.joint_names {
            if !self.scene.robot.has_joint(joint) {
                return Err(ConfigError::UnknownJoint {
                    asset: asset.name.clone(),
                    joint: joint.clone(),
                });
            }
        }
        Ok(())
    }

    /// Load a bundle from a TOML file and run the construction checks.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let cfg: Self = toml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }
}

impl Default for DualPoleEnvCfg {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::RAIL_TO_CART;

    // -- Construction stages --

    #[test]
    fn base_uses_framework_defaults() {
        let cfg = DualPoleEnvCfg::base();
        assert_eq!(cfg.decimation, 2);
        assert!((cfg.episode_length_s - 5.0).abs() < f64::EPSILON);
        assert!((cfg.sim.dt - 1.0 / 60.0).abs() < f64::EPSILON);
        assert_eq!(cfg.sim.render_interval, 1);
        assert!((cfg.viewer.eye[0] - 7.5).abs() < f32::EPSILON);
    }

    #[test]
    fn post_init_overrides_defaults() {
        let cfg = DualPoleEnvCfg::new();
        assert_eq!(cfg.decimation, 1);
        assert!((cfg.episode_length_s - 10.0).abs() < f64::EPSILON);
        assert!((cfg.sim.dt - 1.0 / 120.0).abs() < f64::EPSILON);
        assert!((cfg.sim.gravity[2] - (-9.8)).abs() < f32::EPSILON);
        assert_eq!(cfg.sim.render_interval, 2);
        assert!(cfg.sim.use_fabric);
        assert!((cfg.viewer.eye[0] - 1.4).abs() < f32::EPSILON);
        assert!((cfg.viewer.eye[2] - 2.8).abs() < f32::EPSILON);
        assert!((cfg.viewer.lookat[0] - (-10.0)).abs() < f32::EPSILON);
    }

    #[test]
    fn post_init_is_idempotent() {
        let mut cfg = DualPoleEnvCfg::new();
        let snapshot = cfg.clone();
        cfg.post_init();
        assert_eq!(cfg, snapshot);
    }

    #[test]
    fn post_init_wins_over_field_writes() {
        let mut cfg = DualPoleEnvCfg::base();
        cfg.sim.dt = 0.25;
        cfg.post_init();
        assert!((cfg.sim.dt - 1.0 / 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn default_equals_new() {
        assert_eq!(DualPoleEnvCfg::default(), DualPoleEnvCfg::new());
    }

    // -- Derived quantities --

    #[test]
    fn control_dt_is_dt_times_decimation() {
        let cfg = DualPoleEnvCfg::new();
        assert!((cfg.control_dt() - 1.0 / 120.0).abs() < f64::EPSILON);
        let mut cfg = cfg;
        cfg.decimation = 4;
        assert!((cfg.control_dt() - 4.0 / 120.0).abs() < f64::EPSILON);
    }

    #[test]
    fn episode_length_in_steps() {
        let cfg = DualPoleEnvCfg::new();
        // 10 s at 120 Hz control
        assert_eq!(cfg.episode_length_steps(), 1200);
    }

    // -- Validation --

    #[test]
    fn configured_bundle_validates() {
        assert!(DualPoleEnvCfg::new().validate().is_ok());
    }

    #[test]
    fn unknown_action_joint_rejected() {
        let mut cfg = DualPoleEnvCfg::new();
        cfg.actions.joint_effort.joint_names = vec!["Elbow".into()];
        assert!(matches!(
            cfg.validate().unwrap_err(),
            ConfigError::UnknownJoint { .. }
        ));
    }

    #[test]
    fn unknown_entity_rejected() {
        let mut cfg = DualPoleEnvCfg::new();
        cfg.actions.joint_effort.asset_name = "gripper".into();
        assert!(matches!(
            cfg.validate().unwrap_err(),
            ConfigError::UnknownEntity(_)
        ));
    }

    #[test]
    fn unknown_reward_joint_rejected() {
        let mut cfg = DualPoleEnvCfg::new();
        cfg.rewards.cart_vel.func = dualpole_core::terms::RewardFn::JointVelL1 {
            asset: SceneEntityCfg::with_joints(ROBOT, &["Wrist"]),
        };
        assert!(matches!(
            cfg.validate().unwrap_err(),
            ConfigError::UnknownJoint { .. }
        ));
    }

    #[test]
    fn reversed_event_range_rejected() {
        let mut cfg = DualPoleEnvCfg::new();
        cfg.events.reset_pole_position.func = EventFn::ResetJointsUniform {
            asset: SceneEntityCfg::with_joints(ROBOT, &[crate::assets::CART_TO_POLE]),
            position_range: dualpole_core::ranges::ResetRange::uniform(1.0, -1.0),
            velocity_range: dualpole_core::ranges::ResetRange::fixed(0.0),
        };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Range { .. }));
        assert!(err.to_string().contains("reset_pole_position"));
    }

    #[test]
    fn zero_decimation_rejected() {
        let mut cfg = DualPoleEnvCfg::new();
        cfg.decimation = 0;
        assert!(matches!(
            cfg.validate().unwrap_err(),
            ConfigError::InvalidDecimation(0)
        ));
    }

    #[test]
    fn non_positive_episode_length_rejected() {
        let mut cfg = DualPoleEnvCfg::new();
        cfg.episode_length_s = 0.0;
        assert!(matches!(
            cfg.validate().unwrap_err(),
            ConfigError::InvalidEpisodeLength(_)
        ));
    }

    // -- from_file --

    #[test]
    fn from_file_applies_serde_defaults() {
        let dir = std::env::temp_dir().join("dualpole_test_env_cfg");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("minimal.toml");
        std::fs::write(
            &path,
            r"
            decimation = 1
            episode_length_s = 10.0
        ",
        )
        .unwrap();

        let cfg = DualPoleEnvCfg::from_file(&path).unwrap();
        assert_eq!(cfg.decimation, 1);
        assert_eq!(cfg.scene.num_envs, 4096);
        assert!((cfg.actions.joint_effort.scale - 10.0).abs() < f32::EPSILON);

        let _ = std::fs::remove_file(&path);
        let _ = std::fs::remove_dir(&dir);
    }

    #[test]
    fn from_file_rejects_invalid_values() {
        let dir = std::env::temp_dir().join("dualpole_test_env_cfg_invalid");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("invalid.toml");
        std::fs::write(
            &path,
            r"
            decimation = 0
        ",
        )
        .unwrap();

        assert!(DualPoleEnvCfg::from_file(&path).is_err());

        let _ = std::fs::remove_file(&path);
        let _ = std::fs::remove_dir(&dir);
    }

    #[test]
    fn from_file_not_found() {
        assert!(DualPoleEnvCfg::from_file("/nonexistent/path/task.toml").is_err());
    }

    // -- Action joints resolve --

    #[test]
    fn action_targets_the_rail_joint() {
        let cfg = DualPoleEnvCfg::new();
        assert_eq!(
            cfg.actions.joint_effort.joint_names,
            vec![RAIL_TO_CART.to_string()]
        );
        assert!(cfg.scene.robot.has_joint(RAIL_TO_CART));
    }
}
