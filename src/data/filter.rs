use std::collections::BTreeSet;

use super::model::{Paper, PaperDataset};

// ---------------------------------------------------------------------------
// Filter selection: which years and journals are checked
// ---------------------------------------------------------------------------

/// The user's current year / journal selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    /// `Some(set)` keeps only dated papers whose year is in the set.
    /// `None` disables the year filter, so undated papers pass too.
    pub years: Option<BTreeSet<i32>>,
    /// Papers pass only if their journal is known and selected.
    pub journals: BTreeSet<String>,
}

/// Initialise a [`FilterSelection`] with every year and journal selected.
pub fn init_selection(dataset: &PaperDataset) -> FilterSelection {
    FilterSelection {
        years: Some(dataset.years.clone()),
        journals: dataset.journals.clone(),
    }
}

impl FilterSelection {
    /// Whether a single paper passes both dimensions of the selection.
    pub fn matches(&self, paper: &Paper) -> bool {
        let year_ok = match &self.years {
            None => true,
            Some(years) => paper.year().is_some_and(|y| years.contains(&y)),
        };
        year_ok
            && paper
                .journal
                .as_ref()
                .is_some_and(|j| self.journals.contains(j))
    }
}

// ---------------------------------------------------------------------------
// FilteredView – borrowed subset of the dataset
// ---------------------------------------------------------------------------

/// Read-only, order-preserving subset of a [`PaperDataset`].
#[derive(Debug, Clone)]
pub struct FilteredView<'a> {
    dataset: &'a PaperDataset,
    indices: Vec<usize>,
}

impl<'a> FilteredView<'a> {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Dataset row indices of the visible papers, ascending.
    #[cfg(test)]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Paper> + '_ {
        let dataset: &'a PaperDataset = self.dataset;
        self.indices.iter().map(move |&i| &dataset.papers[i])
    }
}

/// Return the papers that pass `selection`, in dataset order.
///
/// An empty year or journal set selects nothing. Values in the
/// selection that never occur in the dataset are simply ignored.
pub fn filter<'a>(dataset: &'a PaperDataset, selection: &FilterSelection) -> FilteredView<'a> {
    let indices = dataset
        .papers
        .iter()
        .enumerate()
        .filter(|(_, paper)| selection.matches(paper))
        .map(|(i, _)| i)
        .collect();
    FilteredView { dataset, indices }
}
