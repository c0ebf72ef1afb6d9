// Copyright 2024 Vladimir Kharchev

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Contains the [`Gaussian`] struct.
//!

use std::fmt;
use std::io::BufRead;
use std::path::Path;

use rand::Rng;
use statrs::distribution::{Continuous, Normal};
use statrs::statistics;

use crate::distribution::{open_source, read_data, Distribution, Parameters};
use crate::error::{DomainError, Result};

/// Which estimator [`Gaussian::calculate_stdev`] uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StdevKind {
    /// The data set is a sample: the squared deviations are divided by `n - 1`.
    #[default]
    Sample,
    /// The data set is the whole population: the squared deviations are divided by `n`.
    Population,
}

/// The points of the density of a [`Gaussian`] over the range of its data set.
///
/// `x` and `y` have the same length, `y[i]` is the density at `x[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityCurve {
    /// Equally spaced points starting at the minimum of the data set.
    pub x: Vec<f64>,
    /// The density at each point of `x`.
    pub y: Vec<f64>,
}

impl DensityCurve {
    /// Returns the `(x, y)` pairs of the curve in order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// A Gaussian (normal) distribution.
///
/// The mean and the standard deviation are either given as priors with [`Gaussian::new`] or
/// estimated from a data set when it is loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gaussian {
    params: Parameters,
}

impl Gaussian {
    /// The default number of points of [`Gaussian::density_curve`].
    pub const DEFAULT_SPACES: usize = 50;

    /// Constructs a distribution with the prior `mean` and `std` and an empty data set.
    ///
    /// The priors are not validated. [`Gaussian::default`] gives a mean and a standard
    /// deviation of 0.
    #[must_use]
    pub fn new(mean: f64, std: f64) -> Self {
        Self {
            params: Parameters::new(mean, std),
        }
    }

    /// Sets the mean to the arithmetic mean of the data set and returns it.
    ///
    /// # Errors
    /// Returns [`DomainError::EmptyData`] if the data set is empty. The mean is left unchanged.
    pub fn calculate_mean(&mut self) -> Result<f64> {
        let mean = estimate_mean(&to_values(self.data()))?;
        self.params.mean = mean;
        Ok(mean)
    }

    /// Sets the standard deviation to the one of the data set and returns it.
    ///
    /// # Errors
    /// Returns [`DomainError::TooFewSamples`] if `kind` is [`StdevKind::Sample`] and the data
    /// set has less than 2 values, and [`DomainError::EmptyData`] if the data set is empty.
    /// The standard deviation is left unchanged.
    pub fn calculate_stdev(&mut self, kind: StdevKind) -> Result<f64> {
        let std = estimate_stdev(&to_values(self.data()), kind)?;
        self.params.std = std;
        Ok(std)
    }

    /// Replaces the data set with the integers read from `reader` and estimates the mean and
    /// the standard deviation from it.
    ///
    /// Nothing is changed unless the data set was read and both estimates exist.
    ///
    /// # Errors
    /// Returns the errors of [`read_data`], and the errors of [`Gaussian::calculate_mean`] and
    /// [`Gaussian::calculate_stdev`] for the new data set.
    pub fn load_data_with(&mut self, reader: impl BufRead, kind: StdevKind) -> Result<()> {
        let data = read_data(reader)?;
        let values = to_values(&data);
        let estimates = estimate_mean(&values)
            .and_then(|mean| estimate_stdev(&values, kind).map(|std| (mean, std)));
        let (mean, std) = match estimates {
            Ok(estimates) => estimates,
            Err(err) => {
                log::warn!("rejected a data set of {} values: {err}", data.len());
                return Err(err.into());
            }
        };
        log::trace!("estimated mean {mean} and {kind:?} standard deviation {std}");
        self.params = Parameters { mean, std, data };
        Ok(())
    }

    /// Opens the file at `path` and loads it with [`Gaussian::load_data_with`].
    ///
    /// # Errors
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be opened, otherwise the
    /// errors of [`Gaussian::load_data_with`].
    pub fn load_data_file_with(&mut self, path: impl AsRef<Path>, kind: StdevKind) -> Result<()> {
        let path = path.as_ref();
        self.load_data_with(open_source(path)?, kind)
            .map_err(|err| err.in_file(path))?;
        log::debug!("loaded {} values from {}", self.data().len(), path.display());
        Ok(())
    }

    /// Returns the [`Normal`] distribution with the same mean and standard deviation.
    ///
    /// # Errors
    /// Returns [`DomainError::ZeroStdev`] if the standard deviation is zero,
    /// [`DomainError::InvalidStdev`] if it is negative or not finite, and
    /// [`DomainError::InvalidMean`] if the mean is not finite.
    pub fn to_normal(&self) -> Result<Normal> {
        let (mean, std) = (self.mean(), self.std());
        if !mean.is_finite() {
            return Err(DomainError::InvalidMean(mean).into());
        }
        if std == 0.0 {
            return Err(DomainError::ZeroStdev.into());
        }
        if !(std.is_finite() && std > 0.0) {
            return Err(DomainError::InvalidStdev(std).into());
        }
        Normal::new(mean, std).map_err(|_| DomainError::InvalidStdev(std).into())
    }

    /// Returns the probability density at `x`.
    ///
    /// # Errors
    /// Returns the errors of [`Gaussian::to_normal`].
    pub fn pdf(&self, x: f64) -> Result<f64> {
        Ok(self.to_normal()?.pdf(x))
    }

    /// Returns the density at `n_spaces` equally spaced points, from the minimum of the data
    /// set up to, but excluding, its maximum.
    ///
    /// The curve, together with [`Distribution::data`] for a histogram, is what a plot of the
    /// distribution needs.
    ///
    /// # Errors
    /// Returns [`DomainError::ZeroSpaces`] if `n_spaces` is 0, [`DomainError::EmptyData`] if
    /// the data set is empty, and the errors of [`Gaussian::to_normal`].
    pub fn density_curve(&self, n_spaces: usize) -> Result<DensityCurve> {
        if n_spaces == 0 {
            return Err(DomainError::ZeroSpaces.into());
        }
        let (Some(&min), Some(&max)) = (self.data().iter().min(), self.data().iter().max()) else {
            return Err(DomainError::EmptyData {
                statistic: "density curve",
            }
            .into());
        };
        let normal = self.to_normal()?;
        #[allow(clippy::cast_precision_loss)]
        let (min, max, spaces) = (min as f64, max as f64, n_spaces as f64);
        let interval = (max - min) / spaces;
        #[allow(clippy::cast_precision_loss)]
        let x: Vec<f64> = (0..n_spaces).map(|i| min + interval * i as f64).collect();
        let y = x.iter().map(|&x| normal.pdf(x)).collect();
        Ok(DensityCurve { x, y })
    }

    /// Returns the distribution of the sum of independent values from `self` and `other`.
    ///
    /// The means add up and so do the variances. The result has an empty data set.
    #[must_use]
    pub fn combine(&self, other: &impl Distribution) -> Gaussian {
        let mut result = Gaussian::default();
        result.params.mean = self.mean() + other.mean();
        result.params.std = (self.std().powi(2) + other.std().powi(2)).sqrt();
        result
    }

    /// Returns the mean and the standard deviation as text.
    ///
    /// ```
    /// use gaussian_distribution::Gaussian;
    ///
    /// let gaussian = Gaussian::new(25.0, 2.5);
    /// assert_eq!(gaussian.describe(), "mean 25, standard deviation 2.5");
    /// ```
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Draws `n` values from the distribution.
    ///
    /// # Errors
    /// Returns the errors of [`Gaussian::to_normal`].
    pub fn sample_values(&self, rng: &mut impl Rng, n: usize) -> Result<Vec<f64>> {
        let normal = self.to_normal()?;
        Ok((0..n).map(|_| rng.sample(&normal)).collect())
    }
}

impl Distribution for Gaussian {
    fn parameters(&self) -> &Parameters {
        &self.params
    }

    fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.params
    }

    /// Loads the data set with [`Gaussian::load_data_with`] and the sample standard deviation.
    fn load_data(&mut self, reader: impl BufRead) -> Result<()> {
        self.load_data_with(reader, StdevKind::default())
    }
}

impl fmt::Display for Gaussian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mean {}, standard deviation {}", self.mean(), self.std())
    }
}

#[allow(clippy::cast_precision_loss)]
fn to_values(data: &[i64]) -> Vec<f64> {
    data.iter().map(|&x| x as f64).collect()
}

/// The arithmetic mean of `values`.
pub(crate) fn estimate_mean(values: &[f64]) -> std::result::Result<f64, DomainError> {
    if values.is_empty() {
        return Err(DomainError::EmptyData { statistic: "mean" });
    }
    Ok(statistics::Statistics::mean(values))
}

/// The standard deviation of `values` with the estimator `kind`.
pub(crate) fn estimate_stdev(
    values: &[f64],
    kind: StdevKind,
) -> std::result::Result<f64, DomainError> {
    match kind {
        StdevKind::Sample if values.len() < 2 => Err(DomainError::TooFewSamples {
            statistic: "sample standard deviation",
            required: 2,
            found: values.len(),
        }),
        StdevKind::Sample => Ok(statistics::Statistics::std_dev(values)),
        StdevKind::Population if values.is_empty() => Err(DomainError::EmptyData {
            statistic: "population standard deviation",
        }),
        StdevKind::Population => Ok(statistics::Statistics::population_std_dev(values)),
    }
}
