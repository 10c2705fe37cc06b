use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::data::aggregate::DashboardSummary;
use crate::data::cache::DatasetCache;
use crate::data::filter::{filter, init_selection, FilterSelection};
use crate::data::model::PaperDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    pub config: DashboardConfig,

    /// Parsed datasets, reused while the source file is unchanged.
    pub cache: DatasetCache,

    /// File the current dataset was loaded from.
    pub source: Option<PathBuf>,

    /// Loaded dataset (None until user loads a file).
    pub dataset: Option<Arc<PaperDataset>>,

    /// Current year / journal selection.
    pub selection: FilterSelection,

    /// Chart inputs for the current selection (cached).
    pub summary: DashboardSummary,

    /// Journal colours for the scatter plot.
    pub color_map: Option<ColorMap>,

    /// Whether the raw-data table is expanded.
    pub show_raw_data: bool,

    /// Substring filter for the journal checkbox list.
    pub journal_search: String,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Load `path` through the cache and make it the active dataset.
    pub fn open(&mut self, path: &Path) {
        match self.cache.get_or_load(path) {
            Ok(dataset) => {
                self.source = Some(path.to_path_buf());
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Re-open the current source. A no-op read if the file is unchanged.
    pub fn reload(&mut self) {
        if let Some(path) = self.source.clone() {
            self.open(&path);
        }
    }

    /// Ingest a newly loaded dataset, initialise filters and colour.
    ///
    /// Re-ingesting the same dataset keeps the user's selection.
    pub fn set_dataset(&mut self, dataset: Arc<PaperDataset>) {
        let same = self
            .dataset
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, &dataset));
        if !same {
            self.selection = init_selection(&dataset);
            self.color_map = Some(ColorMap::new(&dataset.journals));
            self.dataset = Some(dataset);
        }
        self.status_message = None;
        self.refilter();
    }

    /// Recompute the chart inputs after a selection change.
    pub fn refilter(&mut self) {
        self.summary = match &self.dataset {
            Some(ds) => DashboardSummary::compute(&filter(ds, &self.selection), &self.config),
            None => DashboardSummary::default(),
        };
    }

    /// Toggle a single year. Ignored while the year filter is disabled.
    pub fn toggle_year(&mut self, year: i32) {
        if let Some(years) = &mut self.selection.years {
            if !years.remove(&year) {
                years.insert(year);
            }
            self.refilter();
        }
    }

    /// Enable or disable year filtering. Re-enabling selects every year.
    pub fn set_year_filter_enabled(&mut self, enabled: bool) {
        self.selection.years = match (&self.dataset, enabled) {
            (_, false) => None,
            (Some(ds), true) => Some(ds.years.clone()),
            (None, true) => Some(Default::default()),
        };
        self.refilter();
    }

    pub fn select_all_years(&mut self) {
        if let Some(ds) = &self.dataset {
            self.selection.years = Some(ds.years.clone());
            self.refilter();
        }
    }

    pub fn select_no_years(&mut self) {
        self.selection.years = Some(Default::default());
        self.refilter();
    }

    /// Toggle a single journal.
    pub fn toggle_journal(&mut self, journal: &str) {
        if !self.selection.journals.remove(journal) {
            self.selection.journals.insert(journal.to_string());
        }
        self.refilter();
    }

    pub fn select_all_journals(&mut self) {
        if let Some(ds) = &self.dataset {
            self.selection.journals = ds.journals.clone();
            self.refilter();
        }
    }

    pub fn select_no_journals(&mut self) {
        self.selection.journals.clear();
        self.refilter();
    }
}
