use std::fmt;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::table::{model_label, round4};
use crate::dataset::DataSet;
use crate::error::Result;
use crate::evaluator::{Evaluator, EvaluatorConfig, Method, MseCurve};

/// Error curves of the three validation methods on the same data
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodComparison {
    pub holdout: MseCurve,
    pub loocv: MseCurve,
    pub kfold: MseCurve,
}

impl MethodComparison {
    pub fn curve(&self, method: Method) -> &MseCurve {
        match method {
            Method::Holdout => &self.holdout,
            Method::Loocv => &self.loocv,
            Method::KFold => &self.kfold,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Evaluate `response ~ poly(predictor, 1..=10)` with holdout, LOOCV and k-fold.
///
/// The holdout split is drawn from a generator seeded with `config.seed`; the k-fold assignment
/// from a fresh generator seeded with the same value, so repeated comparisons are identical.
pub fn compare_methods(
    data: &DataSet,
    response: &str,
    predictor: &str,
    config: &EvaluatorConfig,
) -> Result<MethodComparison> {
    let evaluator = Evaluator::new(config.clone())?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let holdout = evaluator.evaluate_method(
        data,
        response,
        predictor,
        Method::Holdout,
        None,
        &mut rng,
    )?;

    let loocv = evaluator.evaluate_method(
        data,
        response,
        predictor,
        Method::Loocv,
        None,
        &mut rng,
    )?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let kfold = evaluator.evaluate_method(
        data,
        response,
        predictor,
        Method::KFold,
        None,
        &mut rng,
    )?;

    Ok(MethodComparison {
        holdout,
        loocv,
        kfold,
    })
}

impl fmt::Display for MethodComparison {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{:>6}  {:<8}  {:>12}  {:>12}  {:>12}",
            "degree", "model", "holdout", "loocv", "kfold"
        )?;

        let rows = self
            .holdout
            .values()
            .iter()
            .zip(self.loocv.values())
            .zip(self.kfold.values());

        for (i, ((h, l), k)) in rows.enumerate() {
            writeln!(
                f,
                "{:>6}  {:<8}  {:>12.4}  {:>12.4}  {:>12.4}",
                i + 1,
                model_label(i + 1),
                round4(*h),
                round4(*l),
                round4(*k)
            )?;
        }

        write!(
            f,
            "best    {:<8}  {:>12}  {:>12}  {:>12}",
            "",
            model_label(self.holdout.best_degree()),
            model_label(self.loocv.best_degree()),
            model_label(self.kfold.best_degree())
        )
    }
}
