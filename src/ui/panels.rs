use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::loader;
use crate::data::model::FilterColumn;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the sidebar with one multi-select per filter column.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("🔍 Filtros");
    ui.separator();

    let Some(table) = &state.table else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone the facets so we can mutate state inside the loop.
    let facets = table.facets.clone();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for col in FilterColumn::ALL {
                let Some(all_values) = facets.get(&col) else {
                    continue;
                };

                let n_selected = state.filters.get(&col).map_or(0, |s| s.len());
                let n_total = all_values.len();
                let header_text = format!("{}  ({n_selected}/{n_total})", col.label());

                egui::CollapsingHeader::new(RichText::new(header_text).strong())
                    .id_salt(col)
                    .default_open(true)
                    .show(ui, |ui: &mut Ui| {
                        ui.horizontal(|ui: &mut Ui| {
                            if ui.small_button("All").clicked() {
                                state.select_all(col);
                            }
                            if ui.small_button("None").clicked() {
                                state.select_none(col);
                            }
                        });

                        for val in all_values {
                            let mut checked =
                                state.filters.get(&col).is_some_and(|s| s.contains(val));
                            if ui.checkbox(&mut checked, val.to_string()).changed() {
                                state.toggle_filter_value(col, val);
                            }
                        }
                    });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Reload from source").clicked() {
                reload_remote(state);
                ui.close_menu();
            }
            if ui.button("Open local CSV…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!(
                "{} records loaded, {} visible",
                table.len(),
                state.visible_rows().len()
            ));
            if let Some(source) = &state.source {
                ui.separator();
                ui.label(RichText::new(source).weak());
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Fetch the configured source URL, blocking until done.
pub fn reload_remote(state: &mut AppState) {
    let url = state.config.source_url.clone();
    match loader::fetch_table(&url) {
        Ok(table) => {
            if table.is_empty() {
                log::warn!("{url} has a header but no records");
            }
            log::info!(
                "Loaded {} records with columns {:?} from {url}",
                table.len(),
                table.columns
            );
            state.set_table(table, url);
        }
        Err(e) => {
            log::error!("Failed to load {url}: {e}");
            state.set_load_error(e);
        }
    }
}

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open salary data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match loader::load_file(&path) {
            Ok(table) => {
                log::info!(
                    "Loaded {} records with columns {:?} from {}",
                    table.len(),
                    table.columns,
                    path.display()
                );
                state.set_table(table, path.display().to_string());
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.set_load_error(e);
            }
        }
    }
}
