//! Environment replication conventions.
//!
//! A scene is declared once and instantiated `num_envs` times.  Entity
//! attachment paths may contain the [`ENV_NS`] placeholder; each replica
//! substitutes its own namespace path.  Replica origins sit on a centred
//! square grid with a fixed spacing.

// ---------------------------------------------------------------------------
// Namespace templating
// ---------------------------------------------------------------------------

/// Placeholder substituted with a replica's namespace path.
pub const ENV_NS: &str = "{ENV_NS}";

/// Namespace path of environment replica `index`.
///
/// # Example
///
/// ```
/// use dualpole_core::scene::env_ns_path;
///
/// assert_eq!(env_ns_path(0), "/World/envs/env_0");
/// ```
#[must_use]
pub fn env_ns_path(index: u32) -> String {
    format!("/World/envs/env_{index}")
}

/// Substitute the namespace placeholder for replica `index`.
///
/// Templates without the placeholder resolve to themselves: such paths are
/// shared across replicas rather than instantiated per replica.
#[must_use]
pub fn resolve_env_path(template: &str, index: u32) -> String {
    template.replace(ENV_NS, &env_ns_path(index))
}

// ---------------------------------------------------------------------------
// Grid placement
// ---------------------------------------------------------------------------

/// Number of grid columns for `num_envs` replicas (square-ish grid).
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn grid_columns(num_envs: u32) -> u32 {
    if num_envs == 0 {
        return 0;
    }
    f64::from(num_envs).sqrt().ceil() as u32
}

/// Origin of replica `index` on a centred grid with `spacing` metres
/// between neighbours.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn grid_origin(index: u32, num_envs: u32, spacing: f32) -> [f32; 3] {
    let cols = grid_columns(num_envs);
    if cols == 0 {
        return [0.0; 3];
    }
    let rows = num_envs.div_ceil(cols);
    let row = index / cols;
    let col = index % cols;
    let x = (f64::from(col) - f64::from(cols - 1) / 2.0) * f64::from(spacing);
    let y = (f64::from(row) - f64::from(rows - 1) / 2.0) * f64::from(spacing);
    [x as f32, y as f32, 0.0]
}

/// Smallest spacing that keeps neighbouring replicas' footprints apart.
///
/// Grid neighbours are exactly `spacing` apart, so instances do not overlap
/// iff the spacing is at least the largest footprint extent.
#[must_use]
pub fn min_spacing(footprint: [f32; 2]) -> f32 {
    footprint[0].max(footprint[1])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- Namespace templating --

    #[test]
    fn env_ns_path_indexed() {
        assert_eq!(env_ns_path(0), "/World/envs/env_0");
        assert_eq!(env_ns_path(4095), "/World/envs/env_4095");
    }

    #[test]
    fn resolve_substitutes_placeholder() {
        let template = format!("{ENV_NS}/Robot");
        assert_eq!(resolve_env_path(&template, 3), "/World/envs/env_3/Robot");
    }

    #[test]
    fn resolve_leaves_global_paths_alone() {
        assert_eq!(
            resolve_env_path("/World/DomeLight", 7),
            "/World/DomeLight"
        );
    }

    #[test]
    fn resolved_paths_are_unique_per_replica() {
        let template = format!("{ENV_NS}/Robot");
        let a = resolve_env_path(&template, 0);
        let b = resolve_env_path(&template, 1);
        assert_ne!(a, b);
    }

    // -- Grid placement --

    #[test]
    fn grid_columns_square() {
        assert_eq!(grid_columns(0), 0);
        assert_eq!(grid_columns(1), 1);
        assert_eq!(grid_columns(4), 2);
        assert_eq!(grid_columns(5), 3);
        assert_eq!(grid_columns(4096), 64);
    }

    #[test]
    fn grid_origin_single_env_is_centred() {
        let origin = grid_origin(0, 1, 2.8);
        for v in &origin {
            assert!(v.abs() < f32::EPSILON);
        }
    }

    #[test]
    fn grid_neighbours_are_spacing_apart() {
        let spacing = 2.8;
        let a = grid_origin(0, 4096, spacing);
        let b = grid_origin(1, 4096, spacing); // same row, next column
        let c = grid_origin(64, 4096, spacing); // next row, same column
        assert!((b[0] - a[0] - spacing).abs() < 1e-4);
        assert!((b[1] - a[1]).abs() < 1e-4);
        assert!((c[1] - a[1] - spacing).abs() < 1e-4);
        assert!((c[0] - a[0]).abs() < 1e-4);
    }

    #[test]
    fn grid_is_centred_on_origin() {
        // 4096 envs form a 64x64 grid; the mean origin is the world origin.
        let n = 4096;
        let spacing = 2.8;
        let (mut sum_x, mut sum_y) = (0.0f64, 0.0f64);
        for i in 0..n {
            let o = grid_origin(i, n, spacing);
            sum_x += f64::from(o[0]);
            sum_y += f64::from(o[1]);
        }
        assert!((sum_x / f64::from(n)).abs() < 1e-3);
        assert!((sum_y / f64::from(n)).abs() < 1e-3);
    }

    #[test]
    fn grid_origins_are_unique() {
        use std::collections::HashSet;
        let mut seen = HashSet::new();
        for i in 0..4096 {
            let o = grid_origin(i, 4096, 2.8);
            let key = (o[0].to_bits(), o[1].to_bits());
            assert!(seen.insert(key), "duplicate origin for index {i}");
        }
    }

    // -- Spacing --

    #[test]
    fn min_spacing_is_largest_extent() {
        assert!((min_spacing([2.6, 0.4]) - 2.6).abs() < f32::EPSILON);
        assert!((min_spacing([0.4, 2.6]) - 2.6).abs() < f32::EPSILON);
    }

    #[test]
    fn default_replication_does_not_overlap() {
        // 4096 envs at 2.8 m spacing clear a 2.6 m footprint.
        assert!(2.8 >= min_spacing([2.6, 0.4]));
    }
}
