use anyhow::{Context, Result};
use eframe::egui;
use projectile_viewer::app::TrajectoryApp;
use projectile_viewer::data::loader::{default_data_path, load_file};
use projectile_viewer::state::AppState;
use projectile_viewer::theme::Theme;

fn main() -> Result<()> {
    env_logger::init();

    let path = default_data_path().context("locating trajectory data")?;
    let table = load_file(&path)?;

    let theme = Theme::default();
    let title = theme.title.clone();
    let state = AppState::new(table, path, theme);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 800.0])
            .with_min_inner_size([400.0, 300.0])
            .with_title(title.as_str()),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(TrajectoryApp::new(cc, state)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))
}
