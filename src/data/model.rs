use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

// ---------------------------------------------------------------------------
// Paper – one row of the metadata table
// ---------------------------------------------------------------------------

/// A single research paper (one cleaned row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct Paper {
    /// Trimmed, never empty.
    pub title: String,
    /// Trimmed, never empty.
    pub abstract_text: String,
    pub authors: Option<String>,
    pub journal: Option<String>,
    /// `None` when the source value was missing or could not be parsed.
    pub publish_time: Option<NaiveDate>,
}

impl Paper {
    /// Publication year, if the date is known.
    pub fn year(&self) -> Option<i32> {
        self.publish_time.map(|d| d.year())
    }

    /// Number of whitespace-separated words in the abstract.
    pub fn abstract_length(&self) -> usize {
        self.abstract_text.split_whitespace().count()
    }
}

// ---------------------------------------------------------------------------
// PaperDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full cleaned dataset with pre-computed selection domains.
#[derive(Debug, Clone, Default)]
pub struct PaperDataset {
    /// All papers, in source order.
    pub papers: Vec<Paper>,
    /// Distinct known publication years.
    pub years: BTreeSet<i32>,
    /// Distinct non-null journal names.
    pub journals: BTreeSet<String>,
    /// Rows removed because the title or abstract was blank, or because
    /// one of the fields the dashboard reads could not be decoded.
    pub dropped_rows: usize,
    /// Dates that failed to parse and were kept as unknown.
    pub parse_warnings: usize,
}

impl PaperDataset {
    /// Build the year / journal indices from the cleaned papers.
    pub fn from_papers(papers: Vec<Paper>) -> Self {
        let years = papers.iter().filter_map(Paper::year).collect();
        let journals = papers.iter().filter_map(|p| p.journal.clone()).collect();
        PaperDataset {
            papers,
            years,
            journals,
            dropped_rows: 0,
            parse_warnings: 0,
        }
    }

    /// Number of papers.
    pub fn len(&self) -> usize {
        self.papers.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }

    /// Inclusive span of known years, if any paper is dated.
    pub fn year_range(&self) -> Option<(i32, i32)> {
        Some((*self.years.first()?, *self.years.last()?))
    }
}

/// Shorthand used by tests across the crate.
#[cfg(test)]
pub(crate) fn paper(title: &str, abstract_text: &str, journal: Option<&str>, date: Option<(i32, u32, u32)>) -> Paper {
    Paper {
        title: title.to_string(),
        abstract_text: abstract_text.to_string(),
        authors: None,
        journal: journal.map(str::to_string),
        publish_time: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abstract_length_counts_whitespace_tokens() {
        let p = paper("t", "  one two\tthree\nfour  ", None, None);
        assert_eq!(p.abstract_length(), 4);
    }

    #[test]
    fn year_is_none_for_unknown_date() {
        assert_eq!(paper("t", "a", None, None).year(), None);
        assert_eq!(paper("t", "a", None, Some((2021, 3, 4))).year(), Some(2021));
    }

    #[test]
    fn from_papers_collects_distinct_years_and_journals() {
        let ds = PaperDataset::from_papers(vec![
            paper("a", "x", Some("B"), Some((2021, 1, 1))),
            paper("b", "x", Some("A"), Some((2020, 1, 1))),
            paper("c", "x", None, None),
            paper("d", "x", Some("A"), Some((2020, 6, 1))),
        ]);
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.years.iter().copied().collect::<Vec<_>>(), vec![2020, 2021]);
        assert_eq!(
            ds.journals.iter().cloned().collect::<Vec<_>>(),
            vec!["A".to_string(), "B".to_string()]
        );
        assert_eq!(ds.year_range(), Some((2020, 2021)));
    }

    #[test]
    fn empty_dataset_has_no_year_range() {
        let ds = PaperDataset::default();
        assert!(ds.is_empty());
        assert_eq!(ds.year_range(), None);
    }
}
