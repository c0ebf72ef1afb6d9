//! Contains the [`Distribution`] trait and the state shared by its implementors.
//!
//! A data source is plain text with one integer literal per line. Surrounding whitespace on a
//! line is ignored, but an empty line is an error.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::IntErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

/// The state every distribution carries: its parameters and the observed data set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    /// The mean of the distribution.
    pub mean: f64,
    /// The standard deviation of the distribution.
    pub std: f64,
    /// The observed data set, in the order of the data source.
    pub data: Vec<i64>,
}

impl Parameters {
    /// Returns parameters with the given prior `mean` and `std` and an empty data set.
    ///
    /// The priors are not validated.
    #[must_use]
    pub fn new(mean: f64, std: f64) -> Self {
        Self {
            mean,
            std,
            data: Vec::new(),
        }
    }
}

/// A probability distribution described by a mean, a standard deviation and a data set.
///
/// The provided loading methods only replace the data set. Implementors that derive their
/// parameters from the data override [`Distribution::load_data`].
pub trait Distribution {
    /// The state of the distribution.
    fn parameters(&self) -> &Parameters;

    /// The mutable state of the distribution.
    fn parameters_mut(&mut self) -> &mut Parameters;

    /// Returns the mean of the distribution.
    fn mean(&self) -> f64 {
        self.parameters().mean
    }

    /// Returns the standard deviation of the distribution.
    fn std(&self) -> f64 {
        self.parameters().std
    }

    /// Returns the observed data set.
    fn data(&self) -> &[i64] {
        &self.parameters().data
    }

    /// Replaces the data set with the integers read from `reader`.
    ///
    /// The data set is only replaced when the whole source was read.
    ///
    /// # Errors
    /// Returns the errors of [`read_data`].
    fn load_data(&mut self, reader: impl BufRead) -> Result<()> {
        let data = read_data(reader)?;
        self.parameters_mut().data = data;
        Ok(())
    }

    /// Opens the file at `path` and loads it with [`Distribution::load_data`].
    ///
    /// # Errors
    /// Returns [`Error::Io`] if the file cannot be opened, otherwise the errors of
    /// [`Distribution::load_data`].
    fn load_data_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.load_data(open_source(path)?)
            .map_err(|err| err.in_file(path))?;
        log::debug!("loaded {} values from {}", self.data().len(), path.display());
        Ok(())
    }
}

impl Distribution for Parameters {
    fn parameters(&self) -> &Parameters {
        self
    }

    fn parameters_mut(&mut self) -> &mut Parameters {
        self
    }
}

/// Reads one integer per line from `reader`, in order.
///
/// # Errors
/// Returns [`Error::Read`] if a line cannot be read, [`Error::Parse`] for the first line that is
/// not an integer literal and [`Error::OutOfRange`] for one that does not fit in an `i64`.
pub fn read_data(reader: impl BufRead) -> Result<Vec<i64>> {
    let mut data = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let number = index + 1;
        let line = line.map_err(|source| Error::Read {
            path: None,
            line: number,
            source,
        })?;
        let value = line
            .trim()
            .parse::<i64>()
            .map_err(|source| match source.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Error::OutOfRange {
                    line: number,
                    content: line.clone(),
                    source,
                },
                _ => Error::Parse {
                    line: number,
                    content: line.clone(),
                    source,
                },
            })?;
        data.push(value);
    }
    Ok(data)
}

/// Opens the data source at `path` for buffered reading.
pub(crate) fn open_source(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}
