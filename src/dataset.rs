//! In-memory tabular data with named columns.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{Error, Result};

/// A single column of a `DataSet`
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Numeric(Vec<f64>),
    Text(Vec<String>),
}

impl Column {
    pub fn len(&self) -> usize {
        match *self {
            Column::Numeric(ref v) => v.len(),
            Column::Text(ref v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An arbitrary data set: rows of observations in named columns
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    names: Vec<String>,
    columns: Vec<Column>,
}

impl DataSet {
    pub fn new() -> Self {
        DataSet {
            names: Vec::new(),
            columns: Vec::new(),
        }
    }

    /// add a numeric column
    pub fn with_numeric<S: Into<String>>(self, name: S, values: Vec<f64>) -> Result<Self> {
        self.with_column(name.into(), Column::Numeric(values))
    }

    /// add a text column
    pub fn with_text<S: Into<String>>(self, name: S, values: Vec<String>) -> Result<Self> {
        self.with_column(name.into(), Column::Text(values))
    }

    fn with_column(mut self, name: String, column: Column) -> Result<Self> {
        if self.names.contains(&name) {
            return Err(Error::InvalidColumn(name));
        }

        if let Some(first) = self.columns.first() {
            if first.len() != column.len() {
                return Err(Error::LengthMismatch {
                    expected: first.len(),
                    actual: column.len(),
                });
            }
        }

        self.names.push(name);
        self.columns.push(column);
        Ok(self)
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| &self.columns[i])
    }

    /// Look up a numeric column by name.
    ///
    /// Fails if the column does not exist, holds text, or holds missing (non-finite) values.
    pub fn numeric_column(&self, name: &str) -> Result<&[f64]> {
        match self.column(name) {
            Some(Column::Numeric(values)) if values.iter().all(|v| v.is_finite()) => {
                Ok(values.as_slice())
            }
            _ => Err(Error::InvalidColumn(name.to_owned())),
        }
    }

    /// load a data set from a CSV file with a header row
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading {}", path.display());
        DataSet::from_csv_reader(File::open(path)?)
    }

    /// Read a CSV table with a header row.
    ///
    /// A column becomes numeric if every field is a number or a missing marker (`NA` or empty),
    /// and at least one field is a number. Everything else is kept as text.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let names: Vec<String> = rdr.headers()?.iter().map(|h| h.to_owned()).collect();
        let mut raw: Vec<Vec<String>> = vec![Vec::new(); names.len()];

        for record in rdr.records() {
            let record = record?;
            for (col, field) in raw.iter_mut().zip(record.iter()) {
                col.push(field.to_owned());
            }
        }

        let mut data = DataSet::new();
        for (name, fields) in names.into_iter().zip(raw) {
            data = match parse_numeric(&fields) {
                Some(values) => data.with_numeric(name, values)?,
                None => data.with_text(name, fields)?,
            };
        }

        debug!("Loaded {} rows x {} columns", data.n_rows(), data.n_cols());
        Ok(data)
    }
}

fn parse_numeric(fields: &[String]) -> Option<Vec<f64>> {
    let mut any_number = false;
    let mut values = Vec::with_capacity(fields.len());

    for field in fields {
        match field.as_str() {
            "" | "NA" => values.push(std::f64::NAN),
            s => {
                values.push(s.parse().ok()?);
                any_number = true;
            }
        }
    }

    if any_number {
        Some(values)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLLEGES: &str = "\
,Private,Apps,Grad.Rate
Abilene Christian University,Yes,1660,60
Adelphi University,Yes,2186,56
Adrian College,Yes,1428,54
";

    #[test]
    fn csv_columns_are_typed() {
        let data = DataSet::from_csv_reader(COLLEGES.as_bytes()).unwrap();

        assert_eq!(data.n_rows(), 3);
        assert_eq!(data.n_cols(), 4);
        assert_eq!(data.numeric_column("Apps").unwrap(), &[1660.0, 2186.0, 1428.0]);
        assert_eq!(data.numeric_column("Grad.Rate").unwrap(), &[60.0, 56.0, 54.0]);

        match data.column("Private") {
            Some(Column::Text(v)) => assert_eq!(v[0], "Yes"),
            c => panic!("unexpected {:?}", c),
        }
    }

    #[test]
    fn text_and_missing_columns_are_rejected() {
        let data = DataSet::from_csv_reader(COLLEGES.as_bytes()).unwrap();

        match data.numeric_column("Private") {
            Err(Error::InvalidColumn(name)) => assert_eq!(name, "Private"),
            r => panic!("unexpected {:?}", r),
        }

        assert!(data.numeric_column("Enroll").is_err());
    }

    #[test]
    fn unreadable_file_is_an_io_error() {
        match DataSet::from_csv_path("/nonexistent/College.csv") {
            Err(Error::IoError(_)) => {}
            r => panic!("unexpected {:?}", r.map(|d| d.n_rows())),
        }
    }

    #[test]
    fn missing_values_make_a_column_unusable() {
        let data = DataSet::from_csv_reader("x,y\n1,2\nNA,3\n".as_bytes()).unwrap();
        assert!(data.numeric_column("y").is_ok());
        assert!(data.numeric_column("x").is_err());
    }

    #[test]
    fn columns_must_agree_on_length() {
        let result = DataSet::new()
            .with_numeric("x", vec![1.0, 2.0])
            .unwrap()
            .with_numeric("y", vec![1.0]);

        match result {
            Err(Error::LengthMismatch { expected, actual }) => {
                assert_eq!((expected, actual), (2, 1))
            }
            r => panic!("unexpected {:?}", r),
        }
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let result = DataSet::new()
            .with_numeric("x", vec![1.0])
            .unwrap()
            .with_numeric("x", vec![2.0]);
        assert!(result.is_err());
    }
}
