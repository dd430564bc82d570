//! Cross-validated estimates of prediction error across a sweep of polynomial degrees.
//!
//! For every degree in `1..=MAX_DEGREE` the response is regressed on an orthogonal polynomial
//! expansion of the predictor, and the out-of-sample mean squared error is estimated by one of
//! three methods:
//!
//! * **holdout**: one random split, `train_fraction` of the rows for training. The split is drawn
//!   once and shared by all degrees.
//! * **loocv**: leave-one-out, computed from the leverages of the full-data fit.
//! * **kfold**: `k` random folds, drawn once and shared by all degrees.
//!
//! Randomness comes from the caller's generator. To reproduce a reference run, seed a generator
//! before the holdout evaluation and reseed it with the same value before the k-fold evaluation;
//! LOOCV draws nothing. [`compare_methods`](crate::results::compare_methods) does exactly that.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::dataset::DataSet;
use crate::error::{Error, Result};
use crate::measure_accumulator::{MeanSquaredError, MeasureAccumulator};
use crate::procedures::{FrozenSets, Holdout, KFold, LeaveOneOut};
use crate::regression::{PolynomialRegression, MAX_DEGREE};
use crate::tasks::RegressionTask;

/// Validation method used to estimate prediction error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    #[serde(rename = "holdout")]
    Holdout,

    #[serde(rename = "loocv")]
    Loocv,

    #[serde(rename = "kfold")]
    KFold,
}

impl Method {
    pub fn all() -> [Method; 3] {
        [Method::Holdout, Method::Loocv, Method::KFold]
    }

    pub fn as_str(&self) -> &'static str {
        match *self {
            Method::Holdout => "holdout",
            Method::Loocv => "loocv",
            Method::KFold => "kfold",
        }
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "holdout" => Ok(Method::Holdout),
            "loocv" => Ok(Method::Loocv),
            "kfold" => Ok(Method::KFold),
            _ => Err(Error::InvalidMethod(s.to_owned())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evaluator settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// share of rows used for training by the holdout method
    pub train_fraction: f64,

    /// number of folds used by the k-fold method
    pub fold_count: usize,

    /// seed for reproducible comparisons
    pub seed: u64,

    /// reject unknown method selectors instead of returning an all-zero curve
    pub strict_method_check: bool,

    /// compute LOOCV from leverages rather than by refitting once per row
    pub loocv_shortcut: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        EvaluatorConfig {
            train_fraction: 0.7,
            fold_count: 10,
            seed: 1,
            strict_method_check: true,
            loocv_shortcut: true,
        }
    }
}

impl EvaluatorConfig {
    pub fn with_train_fraction(mut self, train_fraction: f64) -> Self {
        self.train_fraction = train_fraction;
        self
    }

    pub fn with_fold_count(mut self, fold_count: usize) -> Self {
        self.fold_count = fold_count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_strict_method_check(mut self, strict: bool) -> Self {
        self.strict_method_check = strict;
        self
    }

    pub fn with_loocv_shortcut(mut self, shortcut: bool) -> Self {
        self.loocv_shortcut = shortcut;
        self
    }

    /// parse a JSON object; absent keys keep their defaults
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: EvaluatorConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.train_fraction > 0.0 && self.train_fraction < 1.0) {
            return Err(Error::InvalidConfig(format!(
                "train_fraction must be in (0, 1), got {}",
                self.train_fraction
            )));
        }

        if self.fold_count < 2 {
            return Err(Error::InvalidConfig(format!(
                "fold_count must be at least 2, got {}",
                self.fold_count
            )));
        }

        Ok(())
    }
}

/// Estimated mean squared error for each degree `1..=MAX_DEGREE`, in degree order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MseCurve(Vec<f64>);

impl MseCurve {
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }

    /// degree with the lowest error; ties go to the lower degree
    pub fn best_degree(&self) -> usize {
        let mut best = 0;
        for (i, mse) in self.0.iter().enumerate() {
            if *mse < self.0[best] {
                best = i;
            }
        }
        best + 1
    }
}

/// Cross-validation evaluator for the polynomial degree sweep
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    pub fn new(config: EvaluatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Evaluator { config })
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Estimate the prediction error of `response ~ poly(predictor, d)` for `d` in `1..=10`.
    ///
    /// `method` is one of `holdout`, `loocv` or `kfold`. `fold_count` only matters for `kfold` and
    /// falls back to the configured `fold_count` when `None`.
    /// An unknown method is an error, unless `strict_method_check` is off, in which case nothing
    /// is fitted and every degree gets an error of zero.
    pub fn evaluate<R: Rng + ?Sized>(
        &self,
        data: &DataSet,
        response: &str,
        predictor: &str,
        method: &str,
        fold_count: Option<usize>,
        rng: &mut R,
    ) -> Result<MseCurve> {
        match method.parse() {
            Ok(method) => {
                self.evaluate_method(data, response, predictor, method, fold_count, rng)
            }
            Err(e) => {
                if self.config.strict_method_check {
                    error!("{}", e);
                    Err(e)
                } else {
                    warn!("{}; no models fitted", e);
                    Ok(MseCurve(vec![0.0; MAX_DEGREE]))
                }
            }
        }
    }

    /// like `evaluate`, with the method already parsed
    pub fn evaluate_method<R: Rng + ?Sized>(
        &self,
        data: &DataSet,
        response: &str,
        predictor: &str,
        method: Method,
        fold_count: Option<usize>,
        rng: &mut R,
    ) -> Result<MseCurve> {
        let task = RegressionTask::from_dataset(data, response, predictor)?;
        let n = task.n_rows();

        info!(
            "Estimating {} ~ poly({}, 1..={}) by {} on {} rows",
            response, predictor, MAX_DEGREE, method, n
        );

        let curve = match method {
            Method::Holdout => {
                let sets = Holdout::new(self.config.train_fraction).split(n, rng)?;
                sweep(|degree| validate(&task, &sets, degree))?
            }
            Method::Loocv if self.config.loocv_shortcut => sweep(|degree| {
                PolynomialRegression::fit(degree, task.predictor().iter().zip(task.response()))?
                    .loocv_mse()
            })?,
            Method::Loocv => {
                let sets = LeaveOneOut.split(n);
                sweep(|degree| validate(&task, &sets, degree))?
            }
            Method::KFold => {
                let k = fold_count.unwrap_or(self.config.fold_count);
                let sets = KFold::new(k).split(n, rng)?;
                sweep(|degree| validate(&task, &sets, degree))?
            }
        };

        Ok(curve)
    }
}

fn sweep<F>(estimate: F) -> Result<MseCurve>
where
    F: Fn(usize) -> Result<f64>,
{
    let mut mse = Vec::with_capacity(MAX_DEGREE);
    for degree in 1..=MAX_DEGREE {
        let e = estimate(degree)?;
        debug!("degree {:2}: mse {}", degree, e);
        mse.push(e);
    }
    Ok(MseCurve(mse))
}

/// fit on each fold's training rows and pool the squared errors on its test rows
fn validate(task: &RegressionTask, sets: &FrozenSets, degree: usize) -> Result<f64> {
    let measure: MeanSquaredError<f64> = task.run(sets, |train, test| {
        let model = PolynomialRegression::fit(degree, train)?;
        let predictions: Vec<f64> = test.map(|&x| model.predict(x)).collect();
        Ok(Box::new(predictions.into_iter()))
    })?;

    Ok(measure.result())
}
