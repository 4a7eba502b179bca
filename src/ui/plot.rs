use eframe::egui::{Align2, RichText, Ui};
use egui_plot::{Line, Plot, PlotPoint, PlotPoints, Text};

use crate::state::AppState;
use crate::ui::camera::{cube_corners, cube_edges};

/// Margin around the projected cube, in normalised units.
const VIEW_MARGIN: f64 = 0.95;

// ---------------------------------------------------------------------------
// Trajectory plot (central panel)
// ---------------------------------------------------------------------------

/// Render the 3D trajectory in the central panel. Dragging orbits the camera.
pub fn trajectory_plot(ui: &mut Ui, state: &mut AppState) {
    let theme = state.theme.clone();

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(RichText::new(&theme.title).color(theme.text));
    });

    let corners = cube_corners().map(|c| state.camera.project(c));
    let path = state.projected_path();
    let grid = theme.grid();
    let bounds = state.bounds;

    let response = Plot::new("trajectory_plot")
        .show_axes(false)
        .show_grid(false)
        .show_background(false)
        .data_aspect(1.0)
        .allow_drag(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(true)
        .include_x(-VIEW_MARGIN)
        .include_x(VIEW_MARGIN)
        .include_y(-VIEW_MARGIN)
        .include_y(VIEW_MARGIN)
        .show_x(false)
        .show_y(false)
        .show(ui, |plot_ui| {
            for (a, b) in cube_edges() {
                let edge: PlotPoints = vec![corners[a], corners[b]].into();
                plot_ui.line(Line::new(edge).color(grid).width(1.0));
            }

            // Axes run from the minimum corner along x, y and z.
            let axes = [("X", 1usize, 0usize), ("Y", 2, 1), ("Z", 4, 2)];
            for (label, end, axis) in axes {
                let axis_line: PlotPoints = vec![corners[0], corners[end]].into();
                plot_ui.line(Line::new(axis_line).color(theme.text).width(1.5));

                let [x0, y0] = corners[0];
                let [x1, y1] = corners[end];
                let beyond = PlotPoint::new(x1 + 0.15 * (x1 - x0), y1 + 0.15 * (y1 - y0));
                plot_ui.text(
                    Text::new(beyond, RichText::new(label).strong().color(theme.text))
                        .anchor(Align2::CENTER_CENTER),
                );

                plot_ui.text(
                    Text::new(
                        PlotPoint::new(x1, y1),
                        RichText::new(format!("{:.2}", bounds.max[axis])).small().color(theme.text),
                    )
                    .anchor(Align2::LEFT_BOTTOM),
                );
            }
            let [x0, y0] = corners[0];
            plot_ui.text(
                Text::new(
                    PlotPoint::new(x0, y0),
                    RichText::new(format!(
                        "({:.2}, {:.2}, {:.2})",
                        bounds.min[0], bounds.min[1], bounds.min[2]
                    ))
                    .small()
                    .color(theme.text),
                )
                .anchor(Align2::RIGHT_TOP),
            );

            let trajectory: PlotPoints = path.into_iter().collect();
            plot_ui.line(
                Line::new(trajectory)
                    .name("trajectory")
                    .color(theme.line)
                    .width(theme.line_width),
            );
        })
        .response;

    if response.dragged() {
        let delta = response.drag_delta();
        state.camera.orbit(delta.x, delta.y);
    }
}
