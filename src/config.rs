use std::path::PathBuf;

use clap::Parser;

// ---------------------------------------------------------------------------
// Command line
// ---------------------------------------------------------------------------

/// Explore research-paper metadata (CORD-19 style) interactively.
#[derive(Debug, Parser)]
#[command(name = "cord-explorer", version, about)]
pub struct Cli {
    /// Metadata file to open on start-up (.csv, .json, or .parquet).
    #[arg(env = "CORD_EXPLORER_DATA")]
    pub path: Option<PathBuf>,

    /// Number of journals shown in the top-journals chart.
    #[arg(long, default_value_t = DashboardConfig::DEFAULT_TOP_N)]
    pub top_n: usize,

    /// Number of histogram bins for abstract lengths.
    #[arg(long, default_value_t = DashboardConfig::DEFAULT_BINS, value_parser = clap::value_parser!(u16).range(1..))]
    pub bins: u16,

    /// Rows shown in the raw-data table.
    #[arg(long, default_value_t = DashboardConfig::DEFAULT_PREVIEW_ROWS)]
    pub preview_rows: usize,
}

impl Cli {
    pub fn dashboard_config(&self) -> DashboardConfig {
        DashboardConfig {
            top_n: self.top_n,
            histogram_bins: usize::from(self.bins),
            preview_rows: self.preview_rows,
        }
    }
}

// ---------------------------------------------------------------------------
// Dashboard settings
// ---------------------------------------------------------------------------

/// Knobs that shape the charts and the raw-data table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardConfig {
    pub top_n: usize,
    pub histogram_bins: usize,
    pub preview_rows: usize,
}

impl DashboardConfig {
    pub const DEFAULT_TOP_N: usize = 10;
    pub const DEFAULT_BINS: u16 = 30;
    pub const DEFAULT_PREVIEW_ROWS: usize = 50;
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            top_n: Self::DEFAULT_TOP_N,
            histogram_bins: usize::from(Self::DEFAULT_BINS),
            preview_rows: Self::DEFAULT_PREVIEW_ROWS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_layout() {
        let cli = Cli::try_parse_from(["cord-explorer"]).unwrap();
        assert_eq!(cli.dashboard_config(), DashboardConfig::default());
        assert_eq!(DashboardConfig::default().histogram_bins, 30);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "cord-explorer",
            "metadata.csv",
            "--top-n",
            "5",
            "--bins",
            "12",
            "--preview-rows",
            "20",
        ])
        .unwrap();
        assert_eq!(cli.path, Some(PathBuf::from("metadata.csv")));
        assert_eq!(
            cli.dashboard_config(),
            DashboardConfig {
                top_n: 5,
                histogram_bins: 12,
                preview_rows: 20,
            }
        );
    }

    #[test]
    fn zero_bins_is_rejected() {
        assert!(Cli::try_parse_from(["cord-explorer", "--bins", "0"]).is_err());
    }
}
