//! RGB camera sensor specs.
//!
//! [`CameraCfg`] declares resolution, capture cadence, and pixel format;
//! [`PinholeCfg`] holds the lens model.  A [`CameraRigCfg`] bundles a
//! camera with the transform nodes that anchor it in the world hierarchy.

use serde::{Deserialize, Serialize};

use crate::spawn::XformCfg;

// ---------------------------------------------------------------------------
// PixelFormat
// ---------------------------------------------------------------------------

/// Pixel storage format for captured frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelFormat {
    /// 3 bytes per pixel (red, green, blue).
    #[default]
    Rgb8,
    /// 4 bytes per pixel (red, green, blue, alpha).
    Rgba8,
}

impl PixelFormat {
    /// Number of bytes per pixel.
    #[must_use]
    pub const fn bytes_per_pixel(self) -> u32 {
        match self {
            Self::Rgb8 => 3,
            Self::Rgba8 => 4,
        }
    }

    /// Number of colour channels.
    #[must_use]
    pub const fn channels(self) -> u32 {
        match self {
            Self::Rgb8 => 3,
            Self::Rgba8 => 4,
        }
    }
}

// ---------------------------------------------------------------------------
// PinholeCfg
// ---------------------------------------------------------------------------

/// Pinhole lens model.
///
/// Defaults to a 24 mm lens focused at 400 units with a 20.955 mm
/// horizontal aperture and a `[0.1, 1e5]` clip range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PinholeCfg {
    pub focal_length: f32,
    pub focus_distance: f32,
    pub horizontal_aperture: f32,
    pub clipping_range: (f32, f32),
}

impl PinholeCfg {
    /// Set the focal length in millimetres.
    #[must_use]
    pub const fn with_focal_length(mut self, focal_length: f32) -> Self {
        self.focal_length = focal_length;
        self
    }

    /// Set the near/far clip planes.
    #[must_use]
    pub const fn with_clipping_range(mut self, near: f32, far: f32) -> Self {
        self.clipping_range = (near, far);
        self
    }
}

impl Default for PinholeCfg {
    fn default() -> Self {
        Self {
            focal_length: 24.0,
            focus_distance: 400.0,
            horizontal_aperture: 20.955,
            clipping_range: (0.1, 1.0e5),
        }
    }
}

// ---------------------------------------------------------------------------
// CameraCfg
// ---------------------------------------------------------------------------

/// Spawn spec for an RGB camera sensor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraCfg {
    pub prim_path: String,
    /// Seconds between captures; `0` captures every step.
    #[serde(default)]
    pub update_period: f64,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub format: PixelFormat,
    #[serde(default)]
    pub spawn: PinholeCfg,
}

impl CameraCfg {
    /// Camera capturing every step in the default RGB format.
    #[must_use]
    pub fn new(prim_path: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            prim_path: prim_path.into(),
            update_period: 0.0,
            width,
            height,
            format: PixelFormat::default(),
            spawn: PinholeCfg::default(),
        }
    }

    /// Set the pixel format.
    #[must_use]
    pub const fn with_format(mut self, format: PixelFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the lens model.
    #[must_use]
    pub const fn with_spawn(mut self, spawn: PinholeCfg) -> Self {
        self.spawn = spawn;
        self
    }

    /// Whether the camera captures on every step.
    #[must_use]
    pub fn captures_every_step(&self) -> bool {
        self.update_period == 0.0
    }

    /// Total number of bytes required for one frame.
    #[must_use]
    pub const fn frame_byte_count(&self) -> usize {
        (self.width * self.height * self.format.bytes_per_pixel()) as usize
    }
}

// ---------------------------------------------------------------------------
// CameraRigCfg
// ---------------------------------------------------------------------------

/// A camera plus the placeholder transform nodes it attaches beneath.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraRigCfg {
    pub origins: Vec<XformCfg>,
    pub camera: CameraCfg,
}

impl CameraRigCfg {
    /// All prim paths the rig claims in the world hierarchy.
    #[must_use]
    pub fn prim_paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.origins.iter().map(|o| o.prim_path.as_str()).collect();
        paths.push(self.camera.prim_path.as_str());
        paths
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
