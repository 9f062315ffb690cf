mod app;
mod color;
mod config;
mod data;
mod state;
mod ui;

use app::SalaryDashboardApp;
use config::DashboardConfig;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Dashboard de Salários na Área de Dados")
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    // The table is fetched once, before the first frame.
    let mut state = AppState::new(config);
    ui::panels::reload_remote(&mut state);

    eframe::run_native(
        "Dashboard de Salários na Área de Dados",
        options,
        Box::new(|_cc| Ok(Box::new(SalaryDashboardApp::new(state)))),
    )
}
