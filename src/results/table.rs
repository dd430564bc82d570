use std::fmt;

use crate::error::{Error, Result};
use crate::regression::MAX_DEGREE;

/// model label for a polynomial degree: `linear`, `polyn2`, `polyn3`, ...
pub fn model_label(degree: usize) -> String {
    if degree == 1 {
        "linear".to_owned()
    } else {
        format!("polyn{}", degree)
    }
}

/// round to four decimal places
pub fn round4(x: f64) -> f64 {
    (x * 1e4).round() / 1e4
}

/// One line of a `ResultsTable`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    pub degree: usize,
    pub model: String,
    pub mse: f64,
}

/// Error estimates per degree, labelled and rounded for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsTable {
    rows: Vec<ResultRow>,
}

impl ResultsTable {
    /// Build the table from one MSE value per degree, in degree order.
    pub fn from_mse(mse: &[f64]) -> Result<Self> {
        if mse.len() != MAX_DEGREE {
            return Err(Error::LengthMismatch {
                expected: MAX_DEGREE,
                actual: mse.len(),
            });
        }

        let rows = mse
            .iter()
            .enumerate()
            .map(|(i, &e)| ResultRow {
                degree: i + 1,
                model: model_label(i + 1),
                mse: round4(e),
            })
            .collect();

        Ok(ResultsTable { rows })
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.rows)?)
    }
}

impl fmt::Display for ResultsTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{:>6}  {:<8}  {:>12}", "degree", "model", "mse")?;
        for row in &self.rows {
            writeln!(f, "{:>6}  {:<8}  {:>12.4}", row.degree, row.model, row.mse)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MSE: [f64; 10] = [1.23456, 2.0, 3.00004, 4.5, 5.0, 6.0, 7.0, 8.0, 9.0, 10.99999];

    #[test]
    fn labels_and_rounding() {
        let table = ResultsTable::from_mse(&MSE).unwrap();
        let rows = table.rows();

        assert_eq!(rows.len(), 10);
        assert_eq!(
            rows[0],
            ResultRow {
                degree: 1,
                model: "linear".to_owned(),
                mse: 1.2346
            }
        );
        assert_eq!(rows[1].model, "polyn2");
        assert_eq!(rows[1].mse, 2.0);
        assert_eq!(rows[2].mse, 3.0);
        assert_eq!(rows[9].degree, 10);
        assert_eq!(rows[9].model, "polyn10");
        assert_eq!(rows[9].mse, 11.0);
    }

    #[test]
    fn wrong_length() {
        match ResultsTable::from_mse(&MSE[..9]) {
            Err(Error::LengthMismatch { expected, actual }) => {
                assert_eq!((expected, actual), (10, 9))
            }
            r => panic!("unexpected {:?}", r),
        }
    }

    #[test]
    fn renders_one_line_per_degree() {
        let text = ResultsTable::from_mse(&MSE).unwrap().to_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 11);
        assert!(lines[1].contains("linear"));
        assert!(lines[1].ends_with("1.2346"));
        assert!(lines[10].contains("polyn10"));
    }

    #[test]
    fn json_rows() {
        let json = ResultsTable::from_mse(&MSE).unwrap().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["model"], "linear");
        assert_eq!(value[0]["mse"], 1.2346);
        assert_eq!(value[9]["degree"], 10);
    }
}
