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

//! Gaussian distributions estimated from integer datasets.
//!
//! A [`Gaussian`] is constructed with prior parameters and then usually loaded from a data
//! source with one integer per line. Loading replaces the dataset and estimates the mean and the
//! standard deviation from it. The distribution can then evaluate its density, produce the points
//! of a density curve for plotting, or be combined with another distribution.
//!
//! # Examples
//!
//! Estimating a distribution from a dataset and evaluating its density:
//! ```
//! use std::io::Cursor;
//!
//! use gaussian_distribution::{Distribution, Gaussian, StdevKind};
//!
//! // The priors are overwritten by the estimates of the dataset.
//! let mut gaussian = Gaussian::new(0.0, 1.0);
//! gaussian
//!     .load_data_with(Cursor::new("1\n2\n3\n4\n5\n"), StdevKind::Sample)
//!     .unwrap();
//! assert_eq!(gaussian.mean(), 3.0);
//! // The unbiased standard deviation, i.e. the sum of squares is divided by n - 1.
//! assert!((gaussian.std() - 2.5_f64.sqrt()).abs() < 1e-12);
//!
//! let density = gaussian.pdf(3.0).unwrap();
//! println!("The density at the mean is {density}");
//!
//! // The points of the density curve, from the minimum to the maximum of the dataset.
//! let curve = gaussian.density_curve(4).unwrap();
//! assert_eq!(curve.x, vec![1.0, 2.0, 3.0, 4.0]);
//! ```
//!
//! The sum of two independent normally distributed values is normally distributed as well. Its
//! mean is the sum of the means and its variance is the sum of the variances:
//! ```
//! use gaussian_distribution::Gaussian;
//!
//! let a = Gaussian::new(25.0, 3.0);
//! let b = Gaussian::new(30.0, 4.0);
//! let sum = a.combine(&b);
//! assert_eq!(sum.describe(), "mean 55, standard deviation 5");
//! ```
//!
//! Statistics that are undefined for the current state return [`DomainError`]:
//! ```
//! use gaussian_distribution::{DomainError, Error, Gaussian};
//!
//! let degenerate = Gaussian::new(1.0, 0.0);
//! assert!(matches!(
//!     degenerate.pdf(1.0),
//!     Err(Error::Domain(DomainError::ZeroStdev))
//! ));
//! ```
#![deny(clippy::pedantic)]
#![deny(missing_docs)]

pub mod distribution;
pub mod error;
pub mod fitting;
pub mod gaussian;

pub use distribution::{read_data, Distribution, Parameters};
pub use error::{DomainError, Error, Result};
pub use fitting::FittingDistribution;
pub use gaussian::{DensityCurve, Gaussian, StdevKind};
