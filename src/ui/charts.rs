use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Align2, Color32, FontId, RichText, Sense, Shape, Stroke, Ui};
use egui_plot::{Bar, BarChart, GridMark, Plot};

use crate::color::{generate_palette, DivergingScale};
use crate::config::DashboardConfig;
use crate::data::charts::{ChartSlot, CountrySalary, Histogram, RemoteShare, TitleSalary};
use crate::data::dashboard::Dashboard;
use crate::ui::format::format_usd;

const CHART_HEIGHT: f32 = 320.0;
const WARNING: Color32 = Color32::from_rgb(230, 160, 0);

// ---------------------------------------------------------------------------
// 2×2 chart grid
// ---------------------------------------------------------------------------

pub fn chart_grid(ui: &mut Ui, dashboard: &Dashboard, config: &DashboardConfig) {
    ui.columns(2, |cols| {
        slot(
            &mut cols[0],
            &format!("Top {} Cargos por Salário Médio (USD)", config.top_job_titles),
            &dashboard.top_titles,
            "Nenhum dado disponível para os filtros selecionados.",
            |ui, rows| top_titles_chart(ui, rows),
        );
        slot(
            &mut cols[1],
            "Distribuição dos Salários Anuais (USD)",
            &dashboard.histogram,
            "Nenhum dado disponível para exibir no gráfico de distribuição.",
            |ui, hist| histogram_chart(ui, hist),
        );
    });
    ui.add_space(8.0);
    ui.columns(2, |cols| {
        slot(
            &mut cols[0],
            "Proporção dos Tipos de Trabalho",
            &dashboard.remote_shares,
            "Nenhum dado disponível para exibir no gráfico de tipos de trabalho.",
            |ui, shares| donut_chart(ui, shares),
        );
        slot(
            &mut cols[1],
            &format!("Salário Médio de {}s por País", config.map_job_title),
            &dashboard.country_salaries,
            "Nenhum dado disponível para exibir no gráfico de salários por país.",
            |ui, countries| country_map(ui, countries, &config.map_job_title),
        );
    });
}

/// Title plus either the chart or the no-data warning.
fn slot<T>(
    ui: &mut Ui,
    title: &str,
    data: &ChartSlot<T>,
    no_data: &str,
    draw: impl FnOnce(&mut Ui, &T),
) {
    ui.label(RichText::new(title).strong().size(16.0));
    match data {
        ChartSlot::Ready(value) => draw(ui, value),
        ChartSlot::NoData => {
            ui.colored_label(WARNING, format!("⚠ {no_data}"));
        }
    }
}

// ---------------------------------------------------------------------------
// Bar charts
// ---------------------------------------------------------------------------

fn top_titles_chart(ui: &mut Ui, rows: &[TitleSalary]) {
    let bars: Vec<Bar> = rows
        .iter()
        .enumerate()
        .map(|(i, r)| Bar::new(i as f64, r.mean_salary).name(&r.job_title).width(0.7))
        .collect();
    let labels: Vec<String> = rows.iter().map(|r| r.job_title.clone()).collect();

    Plot::new("top_titles_plot")
        .height(CHART_HEIGHT)
        .x_axis_label("Salário Médio (USD)")
        .y_axis_formatter(move |mark: GridMark, _| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .horizontal()
                    .color(Color32::from_rgb(99, 110, 250))
                    .name("Salário Médio (USD)"),
            );
        });
}

fn histogram_chart(ui: &mut Ui, hist: &Histogram) {
    let bars: Vec<Bar> = hist
        .counts
        .iter()
        .enumerate()
        .map(|(i, &n)| Bar::new(hist.bin_center(i), n as f64).width(hist.bin_width))
        .collect();

    let caption = format!("{} registros em {} faixas", hist.total(), hist.counts.len());
    ui.label(RichText::new(caption).weak());
    Plot::new("salary_histogram_plot")
        .height(CHART_HEIGHT)
        .x_axis_label("Faixa Salarial (USD)")
        .y_axis_label("count")
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .color(Color32::from_rgb(99, 110, 250))
                    .name("usd"),
            );
        });
}

// ---------------------------------------------------------------------------
// Donut chart (painted by hand; egui_plot has no pie)
// ---------------------------------------------------------------------------

fn donut_chart(ui: &mut Ui, shares: &[RemoteShare]) {
    let size = egui::vec2(ui.available_width(), CHART_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);

    let center = rect.center();
    let outer = (rect.width().min(rect.height()) / 2.0 - 8.0).max(10.0);
    let inner = outer * 0.5;
    let colors = generate_palette(shares.len());

    // Clockwise from twelve o'clock.
    let mut start = -FRAC_PI_2;
    let mut hovered = None;
    for (share, &color) in shares.iter().zip(&colors) {
        let sweep = share.percent as f32 / 100.0 * TAU;
        let steps = ((sweep / TAU) * 96.0).ceil().max(1.0) as usize;
        let point =
            |angle: f32, radius: f32| center + radius * egui::vec2(angle.cos(), angle.sin());

        for s in 0..steps {
            let a0 = start + sweep * s as f32 / steps as f32;
            let a1 = start + sweep * (s + 1) as f32 / steps as f32;
            painter.add(Shape::convex_polygon(
                vec![point(a0, inner), point(a0, outer), point(a1, outer), point(a1, inner)],
                color,
                Stroke::NONE,
            ));
        }

        let mid = start + sweep / 2.0;
        painter.text(
            point(mid, (inner + outer) / 2.0),
            Align2::CENTER_CENTER,
            format!("{}\n{:.1}%", share.remote_type, share.percent),
            FontId::proportional(12.0),
            Color32::BLACK,
        );

        if let Some(pos) = response.hover_pos() {
            let d = pos - center;
            let r = d.length();
            let angle = (d.y.atan2(d.x) - start).rem_euclid(TAU);
            if (inner..=outer).contains(&r) && angle <= sweep {
                hovered = Some(share);
            }
        }
        start += sweep;
    }

    if let Some(share) = hovered {
        response.on_hover_text(format!(
            "{}: {} ({:.1}%)",
            share.remote_type, share.count, share.percent
        ));
    }
}

// ---------------------------------------------------------------------------
// Country map: one tile per ISO3 code, coloured on the diverging scale
// ---------------------------------------------------------------------------

fn country_map(ui: &mut Ui, countries: &[CountrySalary], job_title: &str) {
    let Some(scale) = DivergingScale::from_values(countries.iter().map(|c| c.mean_salary)) else {
        ui.allocate_ui(egui::vec2(ui.available_width(), CHART_HEIGHT), |ui: &mut Ui| {
            ui.centered_and_justified(|ui: &mut Ui| {
                let notice = format!("Sem registros de {job_title} nos filtros selecionados.");
                ui.label(RichText::new(notice).weak());
            });
        });
        return;
    };

    egui::ScrollArea::vertical()
        .id_salt("country_map")
        .max_height(CHART_HEIGHT - 40.0)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal_wrapped(|ui: &mut Ui| {
                for c in countries {
                    let (rect, response) =
                        ui.allocate_exact_size(egui::vec2(56.0, 36.0), Sense::hover());
                    let fill = scale.color_for(c.mean_salary);
                    ui.painter().rect_filled(rect, 4.0, fill);
                    ui.painter().text(
                        rect.center(),
                        Align2::CENTER_CENTER,
                        &c.iso3,
                        FontId::monospace(13.0),
                        Color32::BLACK,
                    );
                    response.on_hover_text(format!("{}: {}", c.iso3, format_usd(c.mean_salary)));
                }
            });
        });

    color_legend(ui, &scale);
}

fn color_legend(ui: &mut Ui, scale: &DivergingScale) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format_usd(scale.min));
        let (rect, _) = ui.allocate_exact_size(egui::vec2(160.0, 12.0), Sense::hover());
        let steps = 32;
        let w = rect.width() / steps as f32;
        for i in 0..steps {
            let x = rect.left() + i as f32 * w;
            let cell = egui::Rect::from_min_size(egui::pos2(x, rect.top()), egui::vec2(w + 0.5, rect.height()));
            ui.painter()
                .rect_filled(cell, 0.0, DivergingScale::color_at(i as f32 / (steps - 1) as f32));
        }
        ui.label(format_usd(scale.max));
    });
}
