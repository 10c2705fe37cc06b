use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort loading a metadata source.
///
/// Individual dates that fail to parse are not errors: the paper is kept
/// with an unknown date and counted in `PaperDataset::parse_warnings`.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file is missing, unreadable, or vanished mid-read.
    #[error("cannot read {}: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// One or more required columns are absent from the header / schema.
    #[error("missing required column(s): {}", .missing.join(", "))]
    Schema { missing: Vec<String> },

    /// The body could not be decoded in the declared format.
    #[error("malformed {format} input: {message}")]
    Malformed {
        format: &'static str,
        message: String,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedFormat(String),
}

impl LoadError {
    pub fn unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoadError::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(format: &'static str, message: impl ToString) -> Self {
        LoadError::Malformed {
            format,
            message: message.to_string(),
        }
    }
}
