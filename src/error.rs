//! Error types returned by loading and by the statistics of a distribution.

use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors returned by this crate.
#[derive(Error, Debug)]
pub enum Error {
    /// The data source could not be opened.
    #[error("cannot open {path:?}: {source}")]
    Io {
        /// Path of the data source.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// Reading a line of an opened data source failed.
    #[error("{}line {line}: cannot read: {source}", path_prefix(.path.as_deref()))]
    Read {
        /// Path of the data source, if it is a file.
        path: Option<PathBuf>,
        /// 1-based number of the line that could not be read.
        line: usize,
        /// The underlying error.
        source: std::io::Error,
    },

    /// A line of the data source is not an integer literal.
    #[error("line {line}: {content:?} is not an integer literal")]
    Parse {
        /// 1-based number of the offending line.
        line: usize,
        /// The offending line without its terminator.
        content: String,
        /// The underlying error.
        source: ParseIntError,
    },

    /// A line of the data source is an integer literal that does not fit in an `i64`.
    #[error("line {line}: {content:?} is out of range for a 64-bit integer")]
    OutOfRange {
        /// 1-based number of the offending line.
        line: usize,
        /// The offending line without its terminator.
        content: String,
        /// The underlying error.
        source: ParseIntError,
    },

    /// The requested statistic is undefined for the current state.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl Error {
    /// Attaches `path` to an error raised while reading the lines of the file at `path`.
    pub(crate) fn in_file(self, path: &Path) -> Self {
        match self {
            Error::Read { line, source, .. } => Error::Read {
                path: Some(path.to_path_buf()),
                line,
                source,
            },
            other => other,
        }
    }
}

fn path_prefix(path: Option<&Path>) -> String {
    path.map(|path| format!("{}: ", path.display()))
        .unwrap_or_default()
}

#[allow(clippy::module_name_repetitions)]
/// A statistic that is undefined for the given data or parameters.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    /// The data set is empty.
    #[error("{statistic} is undefined for an empty data set")]
    EmptyData {
        /// Name of the statistic.
        statistic: &'static str,
    },

    /// The data set has fewer values than the statistic needs.
    #[error("{statistic} needs at least {required} values, found {found}")]
    TooFewSamples {
        /// Name of the statistic.
        statistic: &'static str,
        /// Minimal number of values.
        required: usize,
        /// Number of values in the data set.
        found: usize,
    },

    /// The standard deviation is zero, so the density divides by zero.
    #[error("the density is undefined for a zero standard deviation")]
    ZeroStdev,

    /// The standard deviation is negative, infinite or NaN.
    #[error("standard deviation must be positive and finite, got {0}")]
    InvalidStdev(f64),

    /// The mean is infinite or NaN.
    #[error("mean must be finite, got {0}")]
    InvalidMean(f64),

    /// A density curve was requested with no points.
    #[error("a density curve needs at least one space")]
    ZeroSpaces,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
