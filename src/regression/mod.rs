//! Least squares polynomial regression on a single predictor.

mod least_squares;
mod orthogonal_polynomial;
mod polynomial_regression;

pub use self::least_squares::LeastSquares;
pub use self::orthogonal_polynomial::{OrthogonalPolynomial, MAX_DEGREE};
pub use self::polynomial_regression::PolynomialRegression;
