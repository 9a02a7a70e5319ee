//! Scene layout: robot, lights, and the optional recording camera.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use dualpole_core::camera::{CameraCfg, CameraRigCfg};
use dualpole_core::error::ConfigError;
use dualpole_core::scene::{self, ENV_NS};
use dualpole_core::spawn::{ArticulationCfg, LightCfg, XformCfg};

use crate::assets;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_num_envs() -> u32 {
    4096
}
const fn default_env_spacing() -> f32 {
    2.8
}

// ---------------------------------------------------------------------------
// DualPoleSceneCfg
// ---------------------------------------------------------------------------

/// Scene replicated once per environment instance.
///
/// The robot attaches under the per-replica namespace; both lights are
/// global and shared across replicas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DualPoleSceneCfg {
    #[serde(default = "default_num_envs")]
    pub num_envs: u32,
    /// Distance between neighbouring replica origins, in metres.
    #[serde(default = "default_env_spacing")]
    pub env_spacing: f32,
    pub robot: ArticulationCfg,
    pub dome_light: LightCfg,
    pub distant_light: LightCfg,
    #[serde(default)]
    pub camera: Option<CameraRigCfg>,
}

impl DualPoleSceneCfg {
    /// Scene with the given replication parameters and no camera.
    #[must_use]
    pub fn new(num_envs: u32, env_spacing: f32) -> Self {
        Self {
            num_envs,
            env_spacing,
            robot: assets::dual_pole_cartpole().with_prim_path(format!("{ENV_NS}/Robot")),
            dome_light: LightCfg::dome("/World/DomeLight", [0.9, 0.9, 0.9], 500.0),
            distant_light: LightCfg::distant("/World/DistantLight", [0.9, 0.9, 0.9], 2500.0)
                .with_rotation([0.738, 0.477, 0.477, 0.0]),
            camera: None,
        }
    }

    /// Attach the recording camera rig.
    #[must_use]
    pub fn with_recording_camera(mut self) -> Self {
        self.camera = Some(recording_camera_rig());
        self
    }

    /// Robot attachment path for replica `index`.
    #[must_use]
    pub fn instance_robot_path(&self, index: u32) -> String {
        self.robot.resolve_prim_path(index)
    }

    /// Origin of replica `index` on the placement grid.
    #[must_use]
    pub fn grid_origin(&self, index: u32) -> [f32; 3] {
        scene::grid_origin(index, self.num_envs, self.env_spacing)
    }

    /// Construction-time checks: prim paths unique, spacing clears the
    /// robot footprint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut paths: Vec<&str> = vec![
            self.robot.prim_path.as_str(),
            self.dome_light.prim_path.as_str(),
            self.distant_light.prim_path.as_str(),
        ];
        if let Some(rig) = &self.camera {
            paths.extend(rig.prim_paths());
        }
        let mut seen = HashSet::new();
        for path in paths {
            if !seen.insert(path) {
                return Err(ConfigError::DuplicatePrimPath(path.to_string()));
            }
        }

        let footprint = self.robot.max_footprint_extent();
        if self.env_spacing < footprint {
            return Err(ConfigError::SpacingBelowFootprint {
                spacing: self.env_spacing,
                footprint,
            });
        }
        Ok(())
    }
}

impl Default for DualPoleSceneCfg {
    fn default() -> Self {
        Self::new(default_num_envs(), default_env_spacing())
    }
}

// ---------------------------------------------------------------------------
// Recording camera
// ---------------------------------------------------------------------------

/// Camera rig for offline RGB capture.
///
/// Two placeholder transform nodes anchor the sensor in the world
/// hierarchy; the camera spec attaches beneath both through the pattern
/// path.  640x480 RGB, captured every step, default pinhole lens.
#[must_use]
pub fn recording_camera_rig() -> CameraRigCfg {
    CameraRigCfg {
        origins: vec![
            XformCfg::new("/World/Origin_00"),
            XformCfg::new("/World/Origin_01"),
        ],
        camera: CameraCfg::new("/World/Origin_.*/CameraSensor", 640, 480),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use dualpole_core::camera::PixelFormat;

    // -- Layout --

    #[test]
    fn default_replication_parameters() {
        let scene = DualPoleSceneCfg::default();
        assert_eq!(scene.num_envs, 4096);
        assert!((scene.env_spacing - 2.8).abs() < f32::EPSILON);
        assert!(scene.camera.is_none());
    }

    #[test]
    fn robot_attaches_under_env_namespace() {
        let scene = DualPoleSceneCfg::default();
        assert_eq!(scene.robot.prim_path, format!("{ENV_NS}/Robot"));
        assert_eq!(scene.instance_robot_path(0), "/World/envs/env_0/Robot");
        assert_eq!(
            scene.instance_robot_path(4095),
            "/World/envs/env_4095/Robot"
        );
    }

    #[test]
    fn lights_are_global() {
        let scene = DualPoleSceneCfg::default();
        assert_eq!(scene.dome_light.prim_path, "/World/DomeLight");
        assert!((scene.dome_light.intensity - 500.0).abs() < f32::EPSILON);
        assert_eq!(scene.distant_light.prim_path, "/World/DistantLight");
        assert!((scene.distant_light.intensity - 2500.0).abs() < f32::EPSILON);
        assert!((scene.distant_light.rotation[0] - 0.738).abs() < f32::EPSILON);
    }

    // -- Camera rig --

    #[test]
    fn recording_camera_spec() {
        let rig = recording_camera_rig();
        assert_eq!(rig.origins.len(), 2);
        assert_eq!(rig.origins[0].prim_path, "/World/Origin_00");
        assert_eq!(rig.origins[1].prim_path, "/World/Origin_01");
        assert_eq!(rig.camera.prim_path, "/World/Origin_.*/CameraSensor");
        assert_eq!(rig.camera.width, 640);
        assert_eq!(rig.camera.height, 480);
        assert_eq!(rig.camera.format, PixelFormat::Rgb8);
        assert!(rig.camera.captures_every_step());
        assert!((rig.camera.spawn.focal_length - 24.0).abs() < f32::EPSILON);
        assert!((rig.camera.spawn.focus_distance - 400.0).abs() < f32::EPSILON);
        assert!((rig.camera.spawn.horizontal_aperture - 20.955).abs() < f32::EPSILON);
        assert!((rig.camera.spawn.clipping_range.0 - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn with_recording_camera_attaches_rig() {
        let scene = DualPoleSceneCfg::default().with_recording_camera();
        assert!(scene.camera.is_some());
        assert!(scene.validate().is_ok());
    }

    // -- Validation --

    #[test]
    fn default_scene_validates() {
        assert!(DualPoleSceneCfg::default().validate().is_ok());
    }

    #[test]
    fn duplicate_prim_path_rejected() {
        let mut scene = DualPoleSceneCfg::default();
        scene.distant_light.prim_path = scene.dome_light.prim_path.clone();
        assert!(matches!(
            scene.validate().unwrap_err(),
            ConfigError::DuplicatePrimPath(_)
        ));
    }

    #[test]
    fn spacing_below_footprint_rejected() {
        let scene = DualPoleSceneCfg::new(4096, 1.0);
        assert!(matches!(
            scene.validate().unwrap_err(),
            ConfigError::SpacingBelowFootprint { .. }
        ));
    }

    // -- Grid --

    #[test]
    fn grid_origin_delegates_to_replication_parameters() {
        let scene = DualPoleSceneCfg::default();
        let a = scene.grid_origin(0);
        let b = scene.grid_origin(1);
        let dx = b[0] - a[0];
        assert!((dx - 2.8).abs() < 1e-4);
    }

    // -- Serde --

    #[test]
    fn scene_serde_roundtrip() {
        let scene = DualPoleSceneCfg::default().with_recording_camera();
        let json = serde_json::to_string(&scene).unwrap();
        let scene2: DualPoleSceneCfg = serde_json::from_str(&json).unwrap();
        assert_eq!(scene, scene2);
    }
}
