//! Simulation stepping and viewer parameters.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_dt() -> f64 {
    1.0 / 60.0
}
const fn default_gravity() -> [f32; 3] {
    [0.0, 0.0, -9.81]
}
const fn default_render_interval() -> u32 {
    1
}
const fn default_true() -> bool {
    true
}
const fn default_eye() -> [f32; 3] {
    [7.5, 7.5, 7.5]
}

// ---------------------------------------------------------------------------
// SimulationCfg
// ---------------------------------------------------------------------------

/// Physics stepping parameters handed to the simulation runtime.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationCfg {
    /// Physics timestep in seconds (default: 1/60).
    #[serde(default = "default_dt")]
    pub dt: f64,

    /// Gravity vector `[x, y, z]` in m/s^2.
    #[serde(default = "default_gravity")]
    pub gravity: [f32; 3],

    /// Physics steps per rendered frame (default: 1).
    #[serde(default = "default_render_interval")]
    pub render_interval: u32,

    /// Read scene data through the accelerated fabric layer.
    #[serde(default = "default_true")]
    pub use_fabric: bool,
}

impl Default for SimulationCfg {
    fn default() -> Self {
        Self {
            dt: default_dt(),
            gravity: default_gravity(),
            render_interval: default_render_interval(),
            use_fabric: true,
        }
    }
}

impl SimulationCfg {
    /// Validate stepping parameters.  Returns Err on invalid values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dt <= 0.0 {
            return Err(ConfigError::InvalidDt(self.dt));
        }
        if self.render_interval == 0 {
            return Err(ConfigError::InvalidRenderInterval(self.render_interval));
        }
        Ok(())
    }

    /// Physics rate in Hz.
    #[must_use]
    pub fn physics_hz(&self) -> f64 {
        1.0 / self.dt
    }
}

// ---------------------------------------------------------------------------
// ViewerCfg
// ---------------------------------------------------------------------------

/// Default viewer pose.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewerCfg {
    /// Camera position.
    #[serde(default = "default_eye")]
    pub eye: [f32; 3],
    /// Point the camera looks at.
    #[serde(default)]
    pub lookat: [f32; 3],
}

impl Default for ViewerCfg {
    fn default() -> Self {
        Self {
            eye: default_eye(),
            lookat: [0.0; 3],
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
