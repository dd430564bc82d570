//! Implementation of a univariate Polynomial Regression model

use super::least_squares::LeastSquares;
use super::orthogonal_polynomial::OrthogonalPolynomial;
use crate::error::{Error, Result};

/// A Polynomial Regression model
///
/// Regresses the response on an orthogonal polynomial expansion of a single predictor. The model
/// is trained by consuming an iterator over the training data:
/// ```
/// # use polycv::regression::PolynomialRegression;
/// let x = [1.0, 2.0, 3.0, 4.0];
/// let y = [1.0, 4.0, 9.0, 16.0];
/// let model = PolynomialRegression::fit(2, x.iter().zip(y.iter())).unwrap();
/// assert!((model.predict(5.0) - 25.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct PolynomialRegression {
    basis: OrthogonalPolynomial,
    intercept: f64,
    slopes: Vec<f64>,
    residuals: Vec<f64>,
    leverages: Vec<f64>,
}

impl PolynomialRegression {
    /// fit `y ~ poly(x, degree)` on the (x, y) training pairs
    pub fn fit<'a, 'b, I>(degree: usize, data: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a f64, &'b f64)>,
    {
        let (x, y): (Vec<f64>, Vec<f64>) = data.into_iter().map(|(&x, &y)| (x, y)).unzip();

        let basis = OrthogonalPolynomial::fit(&x, degree)?;

        let mut columns = vec![vec![1.0; x.len()]];
        columns.extend((0..degree).map(|_| Vec::with_capacity(x.len())));
        for &xi in &x {
            for (col, z) in columns[1..].iter_mut().zip(basis.expand(xi)) {
                col.push(z);
            }
        }

        let fit = LeastSquares::fit(&columns, &y).map_err(|e| match e {
            Error::SingularFit { .. } => Error::SingularFit { degree },
            e => e,
        })?;

        let coefficients = fit.coefficients();

        Ok(PolynomialRegression {
            basis,
            intercept: coefficients[0],
            slopes: coefficients[1..].to_vec(),
            residuals: fit.residuals().to_vec(),
            leverages: fit.leverages().to_vec(),
        })
    }

    pub fn degree(&self) -> usize {
        self.basis.degree()
    }

    /// predict the response for a single predictor value
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept
            + self
                .basis
                .expand(x)
                .iter()
                .zip(&self.slopes)
                .map(|(z, b)| z * b)
                .sum::<f64>()
    }

    /// residuals on the training data
    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    /// leverages of the training rows
    pub fn leverages(&self) -> &[f64] {
        &self.leverages
    }

    /// Leave-one-out mean squared error of the training data.
    ///
    /// Uses the identity `y[i] - yhat[-i] = e[i] / (1 - h[i])`, which gives exactly the error of
    /// refitting without row `i`. Fails if some row cannot be left out without losing rank.
    pub fn loocv_mse(&self) -> Result<f64> {
        let mut sum = 0.0;
        for (e, h) in self.residuals.iter().zip(&self.leverages) {
            let denom = 1.0 - h;
            if denom <= 1e-10 {
                return Err(Error::SingularFit {
                    degree: self.degree(),
                });
            }
            sum += (e / denom).powi(2);
        }
        Ok(sum / self.residuals.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn fit(degree: usize, x: &[f64], y: &[f64]) -> PolynomialRegression {
        PolynomialRegression::fit(degree, x.iter().zip(y)).unwrap()
    }

    #[test]
    fn flat() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [3.0, 3.0, 3.0, 3.0];
        let model = fit(1, &x, &y);

        assert_abs_diff_eq!(model.predict(1.5), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(model.predict(5.5), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn slope() {
        let x = [1.0, 2.0, 3.0, 5.0];
        let y = [8.0, 9.0, 10.0, 12.0];
        let model = fit(1, &x, &y);

        assert_abs_diff_eq!(model.predict(1.5), 8.5, epsilon = 1e-10);
        assert_abs_diff_eq!(model.predict(10.0), 17.0, epsilon = 1e-10);
    }

    #[test]
    fn recovers_a_cubic() {
        let x: Vec<f64> = (0..20).map(|i| i as f64 * 0.5 - 3.0).collect();
        let f = |x: f64| 1.0 - 2.0 * x + 0.5 * x * x * x;
        let y: Vec<f64> = x.iter().map(|&xi| f(xi)).collect();

        let model = fit(3, &x, &y);
        for &xi in &[-4.0, 0.25, 7.0] {
            assert_abs_diff_eq!(model.predict(xi), f(xi), epsilon = 1e-8);
        }
    }

    #[test]
    fn loocv_shortcut_matches_refitting() {
        let x = [1.0, 2.0, 3.5, 4.0, 6.0, 7.5, 8.0, 9.0];
        let y = [2.1, 3.9, 7.2, 7.8, 12.5, 14.1, 17.0, 17.9];

        let model = fit(2, &x, &y);

        let mut brute = 0.0;
        for i in 0..x.len() {
            let (xs, ys): (Vec<f64>, Vec<f64>) = x
                .iter()
                .zip(&y)
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, (a, b))| (*a, *b))
                .unzip();
            let m = fit(2, &xs, &ys);
            brute += (y[i] - m.predict(x[i])).powi(2);
        }
        brute /= x.len() as f64;

        assert_abs_diff_eq!(model.loocv_mse().unwrap(), brute, epsilon = 1e-9);
    }

    #[test]
    fn trains_from_a_borrowed_trait_object() {
        let x = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        let y = vec![1.0, 3.0, 5.0, 7.0, 9.0];

        fn fit_from(train: &mut dyn Iterator<Item = (&f64, &f64)>) -> Result<PolynomialRegression> {
            PolynomialRegression::fit(1, train)
        }

        let model = {
            let rows = [4usize, 0, 2, 3];
            let mut train = rows.iter().map(|&i| (&x[i], &y[i]));
            fit_from(&mut train).unwrap()
        };
        assert_abs_diff_eq!(model.predict(1.0), 3.0, epsilon = 1e-10);
    }

    #[test]
    fn degree_is_checked() {
        let x = [1.0, 2.0, 3.0];
        match PolynomialRegression::fit(11, x.iter().zip(x.iter())) {
            Err(Error::InvalidDegreeRange(11)) => {}
            r => panic!("unexpected {:?}", r),
        }
    }

    #[test]
    fn saturated_fit_has_no_loocv_estimate() {
        let x = [1.0, 2.0, 3.0];
        let y = [1.0, 5.0, 2.0];
        assert!(fit(2, &x, &y).loocv_mse().is_err());
    }
}
