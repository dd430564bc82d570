//! Orthogonal polynomial basis over a predictor sample

use std::f64;

use crate::error::{Error, Result};

/// Highest supported polynomial degree
pub const MAX_DEGREE: usize = 10;

/// Orthogonal polynomial basis of a fixed degree.
///
/// The basis is generated by the three-term recurrence
///
/// ```text
/// p[0](t)   = 1
/// p[1](t)   = t - alpha[0]
/// p[k+1](t) = (t - alpha[k]) p[k](t) - (norm2[k] / norm2[k-1]) p[k-1](t)
/// ```
///
/// on the standardized predictor `t = (x - center) / scale`. Over the fitting sample the columns
/// `p[1] .. p[degree]` are orthogonal to each other and to the constant, and they are scaled to
/// unit length. Storing `alpha` and `norm2` allows expanding new predictor values into exactly the
/// same basis.
#[derive(Debug, Clone)]
pub struct OrthogonalPolynomial {
    degree: usize,
    center: f64,
    scale: f64,
    alpha: Vec<f64>,
    // squared norms of p[0] .. p[degree] over the fitting sample
    norm2: Vec<f64>,
}

impl OrthogonalPolynomial {
    /// Fit the basis to a predictor sample.
    ///
    /// The sample needs more distinct values than `degree`.
    pub fn fit(x: &[f64], degree: usize) -> Result<Self> {
        if degree < 1 || degree > MAX_DEGREE {
            return Err(Error::InvalidDegreeRange(degree));
        }

        let distinct = count_distinct(x);
        if distinct <= degree {
            return Err(Error::InsufficientData {
                required: degree + 1,
                available: distinct,
            });
        }

        let n = x.len() as f64;
        let center = x.iter().sum::<f64>() / n;
        let scale = (x.iter().map(|xi| (xi - center).powi(2)).sum::<f64>() / n).sqrt();
        let t: Vec<f64> = x.iter().map(|xi| (xi - center) / scale).collect();

        let mut alpha = Vec::with_capacity(degree);
        let mut norm2 = Vec::with_capacity(degree + 1);

        let mut prev = vec![0.0; t.len()];
        let mut curr = vec![1.0; t.len()];

        for k in 0..=degree {
            let nk: f64 = curr.iter().map(|p| p * p).sum();
            if !(nk > f64::EPSILON * n) {
                return Err(Error::InsufficientData {
                    required: degree + 1,
                    available: k,
                });
            }
            norm2.push(nk);

            if k == degree {
                break;
            }

            let ak = t.iter().zip(&curr).map(|(ti, p)| ti * p * p).sum::<f64>() / nk;
            alpha.push(ak);

            let beta = if k == 0 { 0.0 } else { nk / norm2[k - 1] };
            let next: Vec<f64> = t
                .iter()
                .zip(curr.iter().zip(&prev))
                .map(|(ti, (pc, pp))| (ti - ak) * pc - beta * pp)
                .collect();

            prev = curr;
            curr = next;
        }

        Ok(OrthogonalPolynomial {
            degree,
            center,
            scale,
            alpha,
            norm2,
        })
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Expand a single predictor value into the `degree` basis columns (without the constant).
    pub fn expand(&self, x: f64) -> Vec<f64> {
        let t = (x - self.center) / self.scale;

        let mut out = Vec::with_capacity(self.degree);
        let mut prev = 0.0;
        let mut curr = 1.0;

        for k in 0..self.degree {
            let beta = if k == 0 {
                0.0
            } else {
                self.norm2[k] / self.norm2[k - 1]
            };
            let next = (t - self.alpha[k]) * curr - beta * prev;
            prev = curr;
            curr = next;
            out.push(curr / self.norm2[k + 1].sqrt());
        }

        out
    }
}

fn count_distinct(x: &[f64]) -> usize {
    let mut sorted = x.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted.dedup();
    sorted.len()
}
