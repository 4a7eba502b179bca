use std::path::PathBuf;

use crate::data::model::{Bounds, TrajectoryTable};
use crate::theme::Theme;
use crate::ui::camera::Camera;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full viewer state, independent of rendering.
pub struct AppState {
    /// Loaded trajectory. Fixed for the lifetime of the window.
    pub table: TrajectoryTable,

    /// File the table came from, shown in the top bar.
    pub source: PathBuf,

    /// Cached bounding box of the positions.
    pub bounds: Bounds,

    pub camera: Camera,

    pub theme: Theme,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Where to write the next viewport screenshot, once egui delivers it.
    pub pending_screenshot: Option<PathBuf>,
}

impl AppState {
    pub fn new(table: TrajectoryTable, source: PathBuf, theme: Theme) -> Self {
        let bounds = table.bounds();
        Self {
            table,
            source,
            bounds,
            camera: Camera::default(),
            theme,
            status_message: None,
            pending_screenshot: None,
        }
    }

    /// Trajectory positions projected through the current camera, row order.
    pub fn projected_path(&self) -> Vec<[f64; 2]> {
        self.table
            .positions()
            .map(|p| self.camera.project_in(&self.bounds, p))
            .collect()
    }

    pub fn reset_view(&mut self) {
        self.camera.reset();
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::TrajectorySample;

    fn state() -> AppState {
        let table = TrajectoryTable::from_samples(vec![
            TrajectorySample::new(0.0, 0.0, 0.0, 0.0),
            TrajectorySample::new(0.1, 1.0, 0.98, 0.0),
            TrajectorySample::new(0.2, 2.0, 1.92, 0.0),
        ])
        .unwrap();
        AppState::new(table, PathBuf::from("levelthree.txt"), Theme::default())
    }

    #[test]
    fn path_has_one_point_per_sample() {
        let st = state();
        assert_eq!(st.projected_path().len(), 3);
    }

    #[test]
    fn projected_path_fits_the_cube() {
        let st = state();
        // Orthographic projection of [-0.5, 0.5]³ stays within √3 / 2.
        let limit = 3f64.sqrt() / 2.0 + 1e-9;
        for [u, v] in st.projected_path() {
            assert!(u.abs() <= limit && v.abs() <= limit);
        }
    }

    #[test]
    fn reset_view_restores_camera() {
        let mut st = state();
        st.camera.orbit(40.0, 25.0);
        assert_ne!(st.camera, Camera::default());
        st.reset_view();
        assert_eq!(st.camera, Camera::default());
    }
}
