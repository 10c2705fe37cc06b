use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CordExplorerApp {
    pub state: AppState,
}

impl CordExplorerApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for CordExplorerApp {
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

        // ---- Central panel: table + charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            dashboard(ui, &mut self.state);
        });
    }
}

fn dashboard(ui: &mut Ui, state: &mut AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a metadata file to explore papers  (File → Open…)");
        });
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("CORD-19 Research Papers Analysis");
            ui.label("Explore research-paper metadata interactively.");
            ui.add_space(8.0);

            if state.summary.visible == 0 {
                ui.label(RichText::new("No papers match the current filters.").italics());
            }

            ui.checkbox(&mut state.show_raw_data, "Show Raw Data");
            if state.show_raw_data {
                ui.strong(format!(
                    "Filtered Dataset (first {} of {})",
                    state.summary.preview.len(),
                    state.summary.visible
                ));
                panels::raw_data_table(ui, &state.summary.preview);
            }
            ui.separator();

            let summary = &state.summary;
            ui.heading(format!("Top {} Journals by Number of Papers", state.config.top_n));
            plot::top_journals_chart(ui, summary);
            ui.separator();

            ui.heading("Number of Papers Published Per Year");
            plot::papers_per_year_chart(ui, summary);
            ui.separator();

            ui.heading("Distribution of Abstract Lengths");
            if let Some(stats) = summary.length_stats {
                ui.label(format!(
                    "min {} · median {:.0} · mean {:.1} · max {} words",
                    stats.min, stats.median, stats.mean, stats.max
                ));
            }
            plot::abstract_length_histogram(ui, summary, state.config.histogram_bins);
            ui.separator();

            ui.heading("Abstract Length vs Publication Year");
            plot::length_scatter(ui, summary, state.color_map.as_ref());
        });
}
