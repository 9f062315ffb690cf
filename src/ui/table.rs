use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::SalaryTable;

const ROW_HEIGHT: f32 = 20.0;

/// Every column of the filtered rows, in source order.
pub fn detail_table(ui: &mut Ui, table: &SalaryTable, rows: &[usize]) {
    if rows.is_empty() {
        ui.label("Nenhum registro.");
        return;
    }

    egui::ScrollArea::horizontal()
        .id_salt("detail_table_scroll")
        .show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::auto().at_least(40.0))
                .columns(Column::auto().at_least(70.0), table.columns.len())
                .min_scrolled_height(0.0)
                .max_scroll_height(400.0)
                .header(ROW_HEIGHT + 4.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("#");
                    });
                    for name in &table.columns {
                        header.col(|ui| {
                            ui.strong(name);
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                        let idx = rows[row.index()];
                        let rec = &table.records[idx];
                        row.col(|ui| {
                            ui.label(idx.to_string());
                        });
                        for cell in &rec.cells {
                            row.col(|ui| {
                                ui.label(cell);
                            });
                        }
                    });
                });
        });
}
