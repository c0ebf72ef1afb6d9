//! Contains [`FittingDistribution`] trait and its implementors.
//!
//! [`FittingDistribution`] constructs a distribution of the given kind directly from a dataset of
//! real values, without going through a data source.
use crate::error::Result;
use crate::gaussian::{estimate_mean, estimate_stdev, Gaussian, StdevKind};

#[allow(clippy::module_name_repetitions)]
/// A trait for probability distributions that can be constructed from a dataset.
pub trait FittingDistribution: Sized {
    /// Constructs `Self` from `samples` dataset in a way that approximates its distribution.
    ///
    /// # Errors
    /// Returns an error if `samples` is too small to determine the distribution.
    fn fit(samples: &[f64]) -> Result<Self>;
}

impl FittingDistribution for Gaussian {
    /// Returns a Gaussian with the mean equal to the mean of `samples` and the standard
    /// deviation equal to the unbiased standard deviation of `samples`.
    ///
    /// The returned distribution has an empty data set.
    fn fit(samples: &[f64]) -> Result<Self> {
        let mean = estimate_mean(samples)?;
        let stdev = estimate_stdev(samples, StdevKind::Sample)?;
        Ok(Gaussian::new(mean, stdev))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Distribution, DomainError, Error};

    #[test]
    fn fits_mean_and_sample_stdev() {
        let gaussian = Gaussian::fit(&[1.5, 2.5, 3.5, 4.5]).unwrap();
        assert!((gaussian.mean() - 3.0).abs() < 1e-12);
        assert!((gaussian.std() - (5.0_f64 / 3.0).sqrt()).abs() < 1e-12);
        assert!(gaussian.data().is_empty());
    }

    #[test]
    fn needs_two_samples() {
        let err = Gaussian::fit(&[1.0]).unwrap_err();
        assert!(matches!(
            err,
            Error::Domain(DomainError::TooFewSamples { found: 1, .. })
        ));
        let err = Gaussian::fit(&[]).unwrap_err();
        assert!(matches!(err, Error::Domain(DomainError::EmptyData { .. })));
    }
}
