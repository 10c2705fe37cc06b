use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::aggregate::PreviewRow;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(dataset) = state.dataset.clone() else {
        ui.label("No dataset loaded.");
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Years ----
            let n_total = dataset.years.len();
            let year_filter = state.selection.years.is_some();
            let header_text = match &state.selection.years {
                Some(years) => format!("Years  ({}/{n_total})", years.len()),
                None => "Years  (any)".to_string(),
            };
            egui::CollapsingHeader::new(RichText::new(header_text).strong())
                .id_salt("years")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    let mut enabled = year_filter;
                    if ui
                        .checkbox(&mut enabled, "Filter by year")
                        .on_hover_text("When off, papers with unknown dates are included")
                        .changed()
                    {
                        state.set_year_filter_enabled(enabled);
                    }

                    ui.add_enabled_ui(enabled, |ui: &mut Ui| {
                        ui.horizontal(|ui: &mut Ui| {
                            if ui.small_button("All").clicked() {
                                state.select_all_years();
                            }
                            if ui.small_button("None").clicked() {
                                state.select_no_years();
                            }
                        });
                        for &year in &dataset.years {
                            let mut checked = state
                                .selection
                                .years
                                .as_ref()
                                .is_some_and(|years| years.contains(&year));
                            if ui.checkbox(&mut checked, year.to_string()).changed() {
                                state.toggle_year(year);
                            }
                        }
                    });
                });
            ui.separator();

            // ---- Journals ----
            let header_text = format!(
                "Journals  ({}/{})",
                state.selection.journals.len(),
                dataset.journals.len()
            );
            egui::CollapsingHeader::new(RichText::new(header_text).strong())
                .id_salt("journals")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            state.select_all_journals();
                        }
                        if ui.small_button("None").clicked() {
                            state.select_no_journals();
                        }
                    });
                    ui.add(
                        egui::TextEdit::singleline(&mut state.journal_search)
                            .hint_text("Search journals…"),
                    );

                    let needle = state.journal_search.to_lowercase();
                    for journal in &dataset.journals {
                        if !needle.is_empty() && !journal.to_lowercase().contains(&needle) {
                            continue;
                        }
                        let mut text = RichText::new(journal);
                        if let Some(cm) = &state.color_map {
                            text = text.color(cm.color_for(Some(journal.as_str())));
                        }
                        let mut checked = state.selection.journals.contains(journal);
                        if ui.checkbox(&mut checked, text).changed() {
                            state.toggle_journal(journal);
                        }
                    }
                });
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui
                .add_enabled(state.source.is_some(), egui::Button::new("Reload"))
                .clicked()
            {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            let mut summary = format!(
                "{} papers loaded, {} visible",
                ds.len(),
                state.summary.visible
            );
            if let Some((first, last)) = ds.year_range() {
                summary.push_str(&format!(" · {} journals · {first}–{last}", ds.journals.len()));
            }
            ui.label(summary);
            if ds.is_empty() {
                ui.label(RichText::new("no usable papers in this file").color(Color32::YELLOW));
            }
            if ds.dropped_rows > 0 || ds.parse_warnings > 0 {
                ui.label(
                    RichText::new(format!(
                        "{} rows dropped, {} unknown dates",
                        ds.dropped_rows, ds.parse_warnings
                    ))
                    .weak(),
                );
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Raw data table
// ---------------------------------------------------------------------------

/// Render the first rows of the filtered view.
pub fn raw_data_table(ui: &mut Ui, rows: &[PreviewRow]) {
    let text_height = egui::TextStyle::Body.resolve(ui.style()).size + 6.0;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .vscroll(false)
        .column(Column::initial(360.0).clip(true))
        .column(Column::initial(200.0).clip(true))
        .column(Column::initial(180.0).clip(true))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for name in ["title", "authors", "journal", "publish_time"] {
                header.col(|ui: &mut Ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|mut body| {
            for row in rows {
                body.row(text_height, |mut table_row| {
                    table_row.col(|ui: &mut Ui| {
                        ui.label(row.title.as_str())
                            .on_hover_text(row.title.as_str());
                    });
                    table_row.col(|ui: &mut Ui| {
                        ui.label(row.authors.as_deref().unwrap_or("—"));
                    });
                    table_row.col(|ui: &mut Ui| {
                        ui.label(row.journal.as_deref().unwrap_or("—"));
                    });
                    table_row.col(|ui: &mut Ui| {
                        let date = row
                            .publish_time
                            .map(|d| d.to_string())
                            .unwrap_or_else(|| "unknown".to_string());
                        ui.label(date);
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open paper metadata")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.open(&path);
    }
}
