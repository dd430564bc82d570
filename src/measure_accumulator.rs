//! Measure accumulators are summaries of model performance, such as regression error.

use num_traits::AsPrimitive;
use std::marker::PhantomData;

/// Trait implemented by performance measures
pub trait MeasureAccumulator<T> {
    /// initialize new measure
    fn new() -> Self;

    /// update with one prediction
    fn update_one(&mut self, known: &T, pred: &T);

    /// get resulting performance
    fn result(&self) -> f64;

    /// number of predictions seen so far
    fn count(&self) -> usize;

    /// update with multiple predictions
    fn update<I: Iterator<Item = T>>(&mut self, known: I, predicted: I) {
        for (k, p) in known.zip(predicted) {
            self.update_one(&k, &p)
        }
    }
}

/// Mean Squared Error, pooled over every prediction.
///
/// Pooling across folds weights each fold by its size, which is the usual k-fold estimate of
/// prediction error.
#[derive(Debug)]
pub struct MeanSquaredError<T> {
    sum_of_squares: f64,
    n: usize,
    _t: PhantomData<T>,
}

impl<T> MeasureAccumulator<T> for MeanSquaredError<T>
where
    T: AsPrimitive<f64>,
{
    fn new() -> Self {
        MeanSquaredError {
            sum_of_squares: 0.0,
            n: 0,
            _t: PhantomData,
        }
    }

    fn update_one(&mut self, known: &T, pred: &T) {
        let diff = known.as_() - pred.as_();
        self.sum_of_squares += diff * diff;
        self.n += 1;
    }

    fn result(&self) -> f64 {
        self.sum_of_squares / self.n as f64
    }

    fn count(&self) -> usize {
        self.n
    }
}

#[test]
fn mse_pools_all_predictions() {
    let mut mse: MeanSquaredError<f64> = MeasureAccumulator::new();
    mse.update(vec![1.0, 2.0].into_iter(), vec![2.0, 2.0].into_iter());
    mse.update_one(&0.0, &3.0);

    assert_eq!(mse.count(), 3);
    assert_eq!(mse.result(), (1.0 + 0.0 + 9.0) / 3.0);
}

#[test]
fn mse_accepts_integer_targets() {
    let mut mse: MeanSquaredError<i32> = MeasureAccumulator::new();
    mse.update_one(&4, &2);
    assert_eq!(mse.result(), 4.0);
}

#[test]
fn empty_mse_is_undefined() {
    let mse: MeanSquaredError<f64> = MeasureAccumulator::new();
    assert!(mse.result().is_nan());
}
