use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{charts, metrics, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SalaryDashboardApp {
    pub state: AppState,
}

impl SalaryDashboardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for SalaryDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: dashboard ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .id_salt("dashboard_scroll")
                .auto_shrink([false, false])
                .show(ui, |ui: &mut Ui| dashboard(ui, &self.state));
        });
    }
}

fn dashboard(ui: &mut Ui, state: &AppState) {
    let (Some(data), Some(view)) = (&state.table, &state.dashboard) else {
        ui.centered_and_justified(|ui: &mut Ui| match &state.status_message {
            Some(msg) => ui.heading(RichText::new(msg).color(Color32::RED)),
            None => ui.heading("No dataset loaded  (File → Reload from source)"),
        });
        return;
    };

    ui.heading("🎲 Dashboard de Análise de Salários na Área de Dados");
    ui.label(
        "Explore os dados salariais na área de dados nos últimos anos. \
         Utilize os filtros na barra lateral para personalizar a visualização.",
    );
    ui.add_space(8.0);

    ui.label(RichText::new("🎯 Métricas Principais (Salário Anual em USD)").strong().size(18.0));
    metrics::metric_row(ui, &view.metrics);
    ui.separator();

    ui.label(RichText::new("Gráficos").strong().size(18.0));
    charts::chart_grid(ui, view, &state.config);
    ui.separator();

    ui.label(RichText::new("Tabela de Dados Detalhados").strong().size(18.0));
    table::detail_table(ui, data, &view.rows);
}
