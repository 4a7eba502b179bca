use eframe::egui::{self, Color32, RichText, Ui};

use crate::export;
use crate::state::AppState;

/// egui_plot pans on a plain scroll; zooming needs the zoom modifier.
pub const NAVIGATION_HINT: &str = "Drag to rotate · Ctrl+scroll to zoom · scroll to pan";

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Export CSV…").clicked() {
                export_dialog(state, "csv");
                ui.close_menu();
            }
            if ui.button("Export JSON…").clicked() {
                export_dialog(state, "json");
                ui.close_menu();
            }
            if ui.button("Save PNG…").clicked() {
                screenshot_dialog(ui.ctx(), state);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.menu_button("View", |ui: &mut Ui| {
            if ui.button("Reset view").clicked() {
                state.reset_view();
                ui.close_menu();
            }
        });

        ui.separator();

        let file_name = state
            .source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        ui.label(format!(
            "{file_name}: {} samples, t = {:.2}",
            state.table.len(),
            state.table.duration()
        ));

        ui.separator();
        ui.label(NAVIGATION_HINT);

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn export_dialog(state: &mut AppState, extension: &str) {
    let file = rfd::FileDialog::new()
        .set_title("Export trajectory")
        .add_filter(extension.to_ascii_uppercase(), &[extension])
        .set_file_name(format!("trajectory.{extension}"))
        .save_file();

    if let Some(path) = file {
        match export::export_to(&state.table, &path) {
            Ok(()) => {
                log::info!("Exported {} samples to {}", state.table.len(), path.display());
                state.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to export: {e:#}");
                state.set_status(format!("Error: {e:#}"));
            }
        }
    }
}

/// Ask for a PNG path and request a viewport screenshot; the image is
/// written when egui delivers it (see `TrajectoryApp::update`).
pub fn screenshot_dialog(ctx: &egui::Context, state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Save trajectory image")
        .add_filter("PNG", &["png"])
        .set_file_name("trajectory.png")
        .save_file();

    if let Some(path) = file {
        state.pending_screenshot = Some(path);
        ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
    }
}
