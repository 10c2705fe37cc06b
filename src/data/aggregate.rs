use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::filter::FilteredView;
use super::model::Paper;
use crate::config::DashboardConfig;

// ---------------------------------------------------------------------------
// Chart inputs derived from a FilteredView
// ---------------------------------------------------------------------------

/// `(journal, paper count)`, most prolific first; ties by name ascending.
pub fn top_journals(view: &FilteredView<'_>, n: usize) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for paper in view.iter() {
        if let Some(journal) = paper.journal.as_deref() {
            *counts.entry(journal).or_default() += 1;
        }
    }

    // BTreeMap yields names ascending; the stable sort keeps that order for ties.
    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(journal, count)| (journal.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}

/// `(year, paper count)` ascending by year. Years without papers and
/// undated papers are left out.
pub fn papers_per_year(view: &FilteredView<'_>) -> Vec<(i32, usize)> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for year in view.iter().filter_map(Paper::year) {
        *counts.entry(year).or_default() += 1;
    }
    counts.into_iter().collect()
}

/// One abstract word count per paper, in view order.
pub fn abstract_length_distribution(view: &FilteredView<'_>) -> Vec<usize> {
    view.iter().map(Paper::abstract_length).collect()
}

/// A point for the length-vs-year scatter plot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthPoint {
    pub year: i32,
    pub abstract_length: usize,
    /// Only used to colour the point.
    pub journal: Option<String>,
}

/// One [`LengthPoint`] per dated paper, in view order.
pub fn length_by_year_and_journal(view: &FilteredView<'_>) -> Vec<LengthPoint> {
    view.iter()
        .filter_map(|paper| {
            Some(LengthPoint {
                year: paper.year()?,
                abstract_length: paper.abstract_length(),
                journal: paper.journal.clone(),
            })
        })
        .collect()
}

/// A row of the raw-data table.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewRow {
    pub title: String,
    pub authors: Option<String>,
    pub journal: Option<String>,
    pub publish_time: Option<NaiveDate>,
}

/// The first `n` papers of the view, for the raw-data table.
pub fn preview_rows(view: &FilteredView<'_>, n: usize) -> Vec<PreviewRow> {
    view.iter()
        .take(n)
        .map(|paper| PreviewRow {
            title: paper.title.clone(),
            authors: paper.authors.clone(),
            journal: paper.journal.clone(),
            publish_time: paper.publish_time,
        })
        .collect()
}

/// Descriptive statistics over abstract word counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthStats {
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    pub median: f64,
}

/// `None` for an empty input.
pub fn length_stats(lengths: &[usize]) -> Option<LengthStats> {
    let mut sorted = lengths.to_vec();
    sorted.sort_unstable();
    let (&min, &max) = (sorted.first()?, sorted.last()?);

    let n = sorted.len();
    let mean = sorted.iter().sum::<usize>() as f64 / n as f64;
    let median = if n % 2 == 1 {
        sorted[n / 2] as f64
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) as f64 / 2.0
    };
    Some(LengthStats {
        min,
        max,
        mean,
        median,
    })
}

// ---------------------------------------------------------------------------
// DashboardSummary – everything the charts need, computed once per selection
// ---------------------------------------------------------------------------

/// Owned snapshot of all chart inputs for the current selection.
#[derive(Debug, Clone, Default)]
pub struct DashboardSummary {
    pub visible: usize,
    pub top_journals: Vec<(String, usize)>,
    pub papers_per_year: Vec<(i32, usize)>,
    pub abstract_lengths: Vec<usize>,
    pub length_stats: Option<LengthStats>,
    pub length_points: Vec<LengthPoint>,
    pub preview: Vec<PreviewRow>,
}

impl DashboardSummary {
    pub fn compute(view: &FilteredView<'_>, config: &DashboardConfig) -> Self {
        if view.is_empty() {
            return DashboardSummary::default();
        }
        let abstract_lengths = abstract_length_distribution(view);
        DashboardSummary {
            visible: view.len(),
            top_journals: top_journals(view, config.top_n),
            papers_per_year: papers_per_year(view),
            length_stats: length_stats(&abstract_lengths),
            abstract_lengths,
            length_points: length_by_year_and_journal(view),
            preview: preview_rows(view, config.preview_rows),
        }
    }
}
