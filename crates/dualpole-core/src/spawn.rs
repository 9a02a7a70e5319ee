//! Spawnable entity specs for scene assembly.
//!
//! Each spec describes one prim the runtime creates when the scene is
//! built: an articulated robot, a light, or a bare transform node.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::scene;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_rotation() -> [f32; 4] {
    [0.0, 0.0, 0.0, 1.0]
}
const fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// ArticulationCfg
// ---------------------------------------------------------------------------

/// Spawn spec for a multi-body robot.
///
/// The attachment path may contain the [`ENV_NS`](crate::scene::ENV_NS)
/// placeholder; each environment replica substitutes its own namespace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArticulationCfg {
    pub prim_path: String,
    pub urdf_path: PathBuf,
    #[serde(default = "default_true")]
    pub fixed_base: bool,
    /// Ground-plane extent `[x, y]` in metres, used for replication
    /// spacing checks.
    pub footprint: [f32; 2],
    pub joint_names: Vec<String>,
    #[serde(default)]
    pub default_joint_positions: HashMap<String, f32>,
    #[serde(default)]
    pub default_joint_velocities: HashMap<String, f32>,
}

impl ArticulationCfg {
    /// Whether the articulation declares a joint with this name.
    #[must_use]
    pub fn has_joint(&self, name: &str) -> bool {
        self.joint_names.iter().any(|j| j == name)
    }

    /// Re-attach a base template at a different path.
    #[must_use]
    pub fn with_prim_path(mut self, prim_path: impl Into<String>) -> Self {
        self.prim_path = prim_path.into();
        self
    }

    /// Attachment path for environment replica `index`.
    #[must_use]
    pub fn resolve_prim_path(&self, index: u32) -> String {
        scene::resolve_env_path(&self.prim_path, index)
    }

    /// Default position of a joint; joints without an entry default to 0.
    #[must_use]
    pub fn default_joint_position(&self, joint: &str) -> f32 {
        self.default_joint_positions.get(joint).copied().unwrap_or(0.0)
    }

    /// Largest ground-plane extent.
    #[must_use]
    pub fn max_footprint_extent(&self) -> f32 {
        self.footprint[0].max(self.footprint[1])
    }
}

// ---------------------------------------------------------------------------
// LightCfg
// ---------------------------------------------------------------------------

/// Kind of light source to spawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightKind {
    /// Environment dome emitting from all directions.
    Dome,
    /// Parallel rays from an infinitely distant source.
    Distant,
}

/// Spawn spec for a scene light.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightCfg {
    pub prim_path: String,
    pub kind: LightKind,
    pub color: [f32; 3],
    pub intensity: f32,
    #[serde(default = "default_rotation")]
    pub rotation: [f32; 4],
}

impl LightCfg {
    /// Dome light with identity rotation.
    #[must_use]
    pub fn dome(prim_path: impl Into<String>, color: [f32; 3], intensity: f32) -> Self {
        Self {
            prim_path: prim_path.into(),
            kind: LightKind::Dome,
            color,
            intensity,
            rotation: default_rotation(),
        }
    }

    /// Distant light with identity rotation.
    #[must_use]
    pub fn distant(prim_path: impl Into<String>, color: [f32; 3], intensity: f32) -> Self {
        Self {
            prim_path: prim_path.into(),
            kind: LightKind::Distant,
            color,
            intensity,
            rotation: default_rotation(),
        }
    }

    /// Set the spawn rotation quaternion `[w, x, y, z]`.
    #[must_use]
    pub const fn with_rotation(mut self, rotation: [f32; 4]) -> Self {
        self.rotation = rotation;
        self
    }
}

// ---------------------------------------------------------------------------
// XformCfg
// ---------------------------------------------------------------------------

/// Bare transform node, used to anchor sensors in the world hierarchy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct XformCfg {
    pub prim_path: String,
    #[serde(default)]
    pub translation: [f32; 3],
}

impl XformCfg {
    #[must_use]
    pub fn new(prim_path: impl Into<String>) -> Self {
        Self {
            prim_path: prim_path.into(),
            translation: [0.0; 3],
        }
    }

    /// Set the node translation.
    #[must_use]
    pub const fn at(mut self, translation: [f32; 3]) -> Self {
        self.translation = translation;
        self
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
