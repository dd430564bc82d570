//! Presentation of error estimates: per-method tables and method comparisons.

mod comparison;
mod table;

pub use self::comparison::{compare_methods, MethodComparison};
pub use self::table::{model_label, round4, ResultRow, ResultsTable};
