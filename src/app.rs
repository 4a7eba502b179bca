use std::sync::Arc;

use eframe::egui::{self, ColorImage};

use crate::export;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TrajectoryApp {
    pub state: AppState,
}

impl TrajectoryApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        state.theme.apply(&cc.egui_ctx);
        Self { state }
    }

    /// Write a delivered screenshot to the pending path, if one was asked for.
    fn save_screenshot(&mut self, ctx: &egui::Context) {
        if self.state.pending_screenshot.is_none() {
            return;
        }
        let shot: Option<Arc<ColorImage>> = ctx.input(|i| {
            i.events.iter().find_map(|e| match e {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        let Some(image) = shot else {
            return;
        };
        let Some(path) = self.state.pending_screenshot.take() else {
            return;
        };

        match export::save_png(&image, &path) {
            Ok(()) => {
                log::info!("Saved screenshot to {}", path.display());
                self.state.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to save screenshot: {e:#}");
                self.state.set_status(format!("Error: {e:#}"));
            }
        }
    }
}

impl eframe::App for TrajectoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.save_screenshot(ctx);

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::trajectory_plot(ui, &mut self.state);
        });
    }
}
