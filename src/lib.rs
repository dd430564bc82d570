//! Choose the degree of a univariate polynomial regression by estimating its out-of-sample error
//! with holdout validation, leave-one-out cross-validation or k-fold cross-validation.
//!
//! ```
//! use polycv::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let x: Vec<f64> = (0..40).map(|i| i as f64).collect();
//! let y: Vec<f64> = x.iter().map(|xi| 2.0 * xi + (xi * 1.7).sin()).collect();
//! let data = DataSet::new()
//!     .with_numeric("x", x).unwrap()
//!     .with_numeric("y", y).unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let curve = Evaluator::default()
//!     .evaluate(&data, "y", "x", "kfold", None, &mut rng)
//!     .unwrap();
//!
//! println!("{}", ResultsTable::from_mse(curve.values()).unwrap());
//! ```

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

mod dataset;
mod error;
mod evaluator;
mod measure_accumulator;
pub mod procedures;
pub mod regression;
pub mod results;
mod tasks;

pub use crate::dataset::{Column, DataSet};
pub use crate::error::{Error, Result};
pub use crate::evaluator::{Evaluator, EvaluatorConfig, Method, MseCurve};
pub use crate::measure_accumulator::{MeanSquaredError, MeasureAccumulator};
pub use crate::results::{compare_methods, MethodComparison, ResultsTable};
pub use crate::tasks::RegressionTask;

pub mod prelude {
    pub use super::MeasureAccumulator;
    pub use super::procedures::Procedure;
    pub use super::{DataSet, Evaluator, EvaluatorConfig, Method, ResultsTable};
}
