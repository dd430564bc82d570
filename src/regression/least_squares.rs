//! Ordinary least squares via QR decomposition

use nalgebra::{DMatrix, DVector};

use crate::error::{Error, Result};

// relative pivot tolerance for rank detection
const RANK_TOLERANCE: f64 = 1e-7;

/// Least squares fit of `y` on the columns of a design matrix.
#[derive(Debug, Clone)]
pub struct LeastSquares {
    coefficients: Vec<f64>,
    residuals: Vec<f64>,
    leverages: Vec<f64>,
}

impl LeastSquares {
    /// Fit `y ~ X` where `columns` holds the columns of `X` (each of length `y.len()`).
    ///
    /// Fails with `SingularFit` if the columns are linearly dependent. The reported degree is the
    /// number of columns minus one, i.e. the polynomial degree when the first column is the
    /// intercept.
    pub fn fit(columns: &[Vec<f64>], y: &[f64]) -> Result<Self> {
        let n = y.len();
        let p = columns.len();

        for col in columns {
            if col.len() != n {
                return Err(Error::LengthMismatch {
                    expected: n,
                    actual: col.len(),
                });
            }
        }

        if p == 0 || n < p {
            return Err(Error::InsufficientData {
                required: p.max(1),
                available: n,
            });
        }

        let singular = Error::SingularFit { degree: p - 1 };

        let cols: Vec<DVector<f64>> = columns
            .iter()
            .map(|c| DVector::from_column_slice(c))
            .collect();
        let x = DMatrix::from_columns(&cols[..]);
        let y = DVector::from_column_slice(y);

        let qr = x.clone().qr();
        let q = qr.q();
        let r = qr.r();

        let diag = r.diagonal();
        let max_diag = diag.iter().fold(0.0f64, |m, d| m.max(d.abs()));
        if max_diag == 0.0 || diag.iter().any(|d| d.abs() <= RANK_TOLERANCE * max_diag) {
            return Err(singular);
        }

        let qty = q.transpose() * &y;
        let beta = r.solve_upper_triangular(&qty).ok_or(singular)?;

        let residuals = &y - &x * &beta;

        // hat matrix diagonal: squared row norms of the thin Q
        let leverages = (0..n).map(|i| q.row(i).norm_squared()).collect();

        Ok(LeastSquares {
            coefficients: beta.iter().cloned().collect(),
            residuals: residuals.iter().cloned().collect(),
            leverages,
        })
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    /// diagonal of the hat matrix
    pub fn leverages(&self) -> &[f64] {
        &self.leverages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn exact_line() {
        let x = vec![1.0, 2.0, 3.0, 4.0];
        let y: Vec<f64> = x.iter().map(|xi| 2.0 + 3.0 * xi).collect();
        let fit = LeastSquares::fit(&[vec![1.0; 4], x], &y).unwrap();

        assert_abs_diff_eq!(fit.coefficients()[0], 2.0, epsilon = 1e-10);
        assert_abs_diff_eq!(fit.coefficients()[1], 3.0, epsilon = 1e-10);
        for r in fit.residuals() {
            assert_abs_diff_eq!(*r, 0.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn leverages_of_simple_regression() {
        // h_i = 1/n + (x_i - mean)^2 / Sxx
        let x = vec![1.0, 2.0, 4.0, 7.0];
        let y = vec![1.0, 3.0, 2.0, 5.0];
        let fit = LeastSquares::fit(&[vec![1.0; 4], x.clone()], &y).unwrap();

        let mean = 3.5;
        let sxx: f64 = x.iter().map(|xi| (xi - mean) * (xi - mean)).sum();
        for (xi, h) in x.iter().zip(fit.leverages()) {
            assert_abs_diff_eq!(*h, 0.25 + (xi - mean).powi(2) / sxx, epsilon = 1e-12);
        }
        assert_abs_diff_eq!(fit.leverages().iter().sum::<f64>(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn residuals_are_orthogonal_to_columns() {
        let x = vec![0.5, 1.5, 2.0, 3.5, 5.0, 6.0];
        let x2: Vec<f64> = x.iter().map(|v| v * v).collect();
        let y = vec![1.0, 0.0, 2.0, 4.0, 3.0, 7.0];
        let cols = vec![vec![1.0; 6], x, x2];
        let fit = LeastSquares::fit(&cols, &y).unwrap();

        for col in &cols {
            let d: f64 = col.iter().zip(fit.residuals()).map(|(a, b)| a * b).sum();
            assert_abs_diff_eq!(d, 0.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn collinear_columns_are_singular() {
        let x = vec![1.0, 2.0, 3.0];
        let twice: Vec<f64> = x.iter().map(|v| 2.0 * v).collect();
        match LeastSquares::fit(&[vec![1.0; 3], x, twice], &[1.0, 2.0, 2.0]) {
            Err(Error::SingularFit { degree: 2 }) => {}
            r => panic!("unexpected {:?}", r),
        }
    }
}
