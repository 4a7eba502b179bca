use std::f64::consts::PI;

use crate::data::model::Bounds;

// ---------------------------------------------------------------------------
// Orbit camera – orthographic projection of the unit data cube
// ---------------------------------------------------------------------------

const DEFAULT_AZIMUTH_DEG: f64 = -60.0;
const DEFAULT_ELEVATION_DEG: f64 = 30.0;
const MAX_ELEVATION_DEG: f64 = 89.0;

/// Radians of rotation per dragged point.
const DRAG_SENSITIVITY: f64 = 0.01;

/// Camera looking at the origin from (azimuth, elevation), z up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Rotation about +z, radians.
    pub azimuth: f64,
    /// Angle above the xy plane, radians.
    pub elevation: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            azimuth: DEFAULT_AZIMUTH_DEG.to_radians(),
            elevation: DEFAULT_ELEVATION_DEG.to_radians(),
        }
    }
}

impl Camera {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Rotate by a mouse drag (screen points). Dragging right spins the
    /// scene left-to-right, dragging down tilts it towards the viewer.
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        let limit = MAX_ELEVATION_DEG.to_radians();
        self.azimuth = (self.azimuth - dx as f64 * DRAG_SENSITIVITY).rem_euclid(2.0 * PI);
        self.elevation = (self.elevation + dy as f64 * DRAG_SENSITIVITY).clamp(-limit, limit);
    }

    /// Project a point onto the screen plane: `[right, up]`.
    pub fn project(&self, p: [f64; 3]) -> [f64; 2] {
        let (sin_az, cos_az) = self.azimuth.sin_cos();
        let (sin_el, cos_el) = self.elevation.sin_cos();

        let right = -p[0] * sin_az + p[1] * cos_az;
        let up = -p[0] * sin_el * cos_az - p[1] * sin_el * sin_az + p[2] * cos_el;
        [right, up]
    }

    /// Normalise into the data cube, then project.
    pub fn project_in(&self, bounds: &Bounds, p: [f64; 3]) -> [f64; 2] {
        self.project(bounds.normalize(p))
    }
}

/// Corners of the unit cube `[-0.5, 0.5]³`, indexed by bit pattern `zyx`.
pub fn cube_corners() -> [[f64; 3]; 8] {
    std::array::from_fn(|i| {
        let bit = |b: usize| if i & (1 << b) == 0 { -0.5 } else { 0.5 };
        [bit(0), bit(1), bit(2)]
    })
}

/// The 12 cube edges as index pairs into [`cube_corners`].
pub fn cube_edges() -> Vec<(usize, usize)> {
    let mut edges = Vec::with_capacity(12);
    for i in 0..8usize {
        for b in 0..3 {
            let j = i | (1 << b);
            if j != i {
                edges.push((i, j));
            }
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f64; 2], b: [f64; 2]) -> bool {
        (a[0] - b[0]).abs() < 1e-12 && (a[1] - b[1]).abs() < 1e-12
    }

    #[test]
    fn front_view_axes() {
        let cam = Camera {
            azimuth: 0.0,
            elevation: 0.0,
        };
        // +x points at the viewer
        assert!(close(cam.project([1.0, 0.0, 0.0]), [0.0, 0.0]));
        assert!(close(cam.project([0.0, 1.0, 0.0]), [1.0, 0.0]));
        assert!(close(cam.project([0.0, 0.0, 1.0]), [0.0, 1.0]));
    }

    #[test]
    fn top_view_hides_z() {
        let cam = Camera {
            azimuth: 0.0,
            elevation: PI / 2.0,
        };
        assert!(close(cam.project([0.0, 0.0, 1.0]), [0.0, 0.0]));
        assert!(close(cam.project([1.0, 0.0, 0.0]), [0.0, -1.0]));
    }

    #[test]
    fn projection_preserves_row_order() {
        let cam = Camera::default();
        let pts = [[0.0, 0.0, 0.0], [1.0, 2.0, 3.0], [-1.0, 0.5, 0.0]];
        let projected: Vec<_> = pts.iter().map(|&p| cam.project(p)).collect();
        assert_eq!(projected.len(), 3);
        assert!(close(projected[0], [0.0, 0.0]));
    }

    #[test]
    fn orbit_clamps_elevation_and_reset_restores() {
        let mut cam = Camera::default();
        cam.orbit(0.0, 10_000.0);
        assert!((cam.elevation - MAX_ELEVATION_DEG.to_radians()).abs() < 1e-12);
        cam.orbit(0.0, -20_000.0);
        assert!((cam.elevation + MAX_ELEVATION_DEG.to_radians()).abs() < 1e-12);
        cam.orbit(123.0, 0.0);
        assert!((0.0..2.0 * PI).contains(&cam.azimuth));

        cam.reset();
        assert_eq!(cam, Camera::default());
    }

    #[test]
    fn cube_has_twelve_unit_edges() {
        let corners = cube_corners();
        let edges = cube_edges();
        assert_eq!(edges.len(), 12);
        for (a, b) in edges {
            let d: f64 = (0..3).map(|i| (corners[a][i] - corners[b][i]).abs()).sum();
            assert_eq!(d, 1.0);
        }
        assert_eq!(corners[0], [-0.5, -0.5, -0.5]);
        assert_eq!(corners[7], [0.5, 0.5, 0.5]);
    }
}
