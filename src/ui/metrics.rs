use eframe::egui::{RichText, Ui};

use crate::data::metrics::Metrics;
use crate::ui::format::format_usd;

/// Four metric cards side by side.
pub fn metric_row(ui: &mut Ui, metrics: &Metrics) {
    let cards = [
        ("Salário Médio (USD)", format_usd(metrics.mean_salary)),
        ("Salário Máximo (USD)", format_usd(metrics.max_salary)),
        ("Total de Registros", metrics.record_count.to_string()),
        ("Cargo Mais Frequente", metrics.top_job_title.clone()),
    ];

    ui.columns(cards.len(), |cols| {
        for (ui, (label, value)) in cols.iter_mut().zip(cards) {
            ui.group(|ui: &mut Ui| {
                ui.set_min_width(ui.available_width());
                ui.label(RichText::new(label).weak());
                ui.label(RichText::new(value).size(24.0).strong());
            });
        }
    });
}
