use crate::dataset::DataSet;
use crate::error::Result;
use crate::measure_accumulator::MeasureAccumulator;
use crate::procedures::Procedure;

/// Univariate regression task: predict one numeric column from another
#[derive(Debug, Clone)]
pub struct RegressionTask {
    pub(crate) response: Vec<f64>,
    pub(crate) predictor: Vec<f64>,
}

impl RegressionTask {
    /// extract the response and predictor columns from a data set
    pub fn from_dataset(data: &DataSet, response: &str, predictor: &str) -> Result<Self> {
        Ok(RegressionTask {
            response: data.numeric_column(response)?.to_vec(),
            predictor: data.numeric_column(predictor)?.to_vec(),
        })
    }

    pub fn n_rows(&self) -> usize {
        self.response.len()
    }

    pub fn response(&self) -> &[f64] {
        &self.response
    }

    pub fn predictor(&self) -> &[f64] {
        &self.predictor
    }

    /// Run the task on every fold of a validation procedure.
    ///
    /// For each fold `flow` receives the (predictor, response) training pairs and the predictor
    /// values of the test rows, and returns one prediction per test row. All predictions are
    /// scored against the known responses in a single measure. The first error returned by `flow`
    /// aborts the run.
    pub fn run<P, F, M>(&self, procedure: &P, flow: F) -> Result<M>
    where
        P: Procedure + ?Sized,
        F: Fn(
            &mut dyn Iterator<Item = (&f64, &f64)>,
            &mut dyn Iterator<Item = &f64>,
        ) -> Result<Box<dyn Iterator<Item = f64>>>,
        M: MeasureAccumulator<f64>,
    {
        let x = &self.predictor;
        let y = &self.response;

        let mut measure = M::new();

        for fold in procedure.iter() {
            let mut train = fold.trainset.iter().map(|&i| (&x[i], &y[i]));

            let mut test = fold.testset.iter().map(|&i| &x[i]);

            let predictit = flow(&mut train, &mut test)?;

            for (known, pred) in fold.testset.iter().map(|&i| &y[i]).zip(predictit) {
                measure.update_one(known, &pred);
            }
        }

        Ok(measure)
    }
}
