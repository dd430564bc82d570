use std::error::Error as StdError;
use std::fmt;
use std::io::Error as IoError;
use std::result::Result as StdResult;

use csv::Error as CsvError;
use serde_json::Error as JsonError;

pub type Result<T> = StdResult<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// column is absent from the data set, not numeric, or contains non-finite values
    InvalidColumn(String),

    /// polynomial degree outside of `1..=MAX_DEGREE`
    InvalidDegreeRange(usize),

    /// unrecognized validation method selector
    InvalidMethod(String),

    /// not enough rows (or distinct predictor values) for the requested fit or split
    InsufficientData { required: usize, available: usize },

    /// sequence length does not match what the operation expects
    LengthMismatch { expected: usize, actual: usize },

    /// design matrix is rank deficient
    SingularFit { degree: usize },

    /// configuration value out of range
    InvalidConfig(String),

    IoError(IoError),
    CsvError(CsvError),
    JsonError(JsonError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidColumn(ref name) => write!(f, "invalid column `{}`", name),
            Error::InvalidDegreeRange(d) => write!(f, "polynomial degree {} out of range", d),
            Error::InvalidMethod(ref m) => write!(f, "unknown validation method `{}`", m),
            Error::InsufficientData {
                required,
                available,
            } => write!(
                f,
                "insufficient data: {} required, {} available",
                required, available
            ),
            Error::LengthMismatch { expected, actual } => {
                write!(f, "length mismatch: expected {}, got {}", expected, actual)
            }
            Error::SingularFit { degree } => {
                write!(f, "singular design matrix at degree {}", degree)
            }
            Error::InvalidConfig(ref msg) => write!(f, "invalid configuration: {}", msg),
            Error::IoError(ref e) => write!(f, "{}", e),
            Error::CsvError(ref e) => write!(f, "{}", e),
            Error::JsonError(ref e) => write!(f, "{}", e),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match *self {
            Error::IoError(ref e) => Some(e),
            Error::CsvError(ref e) => Some(e),
            Error::JsonError(ref e) => Some(e),
            _ => None,
        }
    }
}

impl From<IoError> for Error {
    fn from(e: IoError) -> Self {
        Error::IoError(e)
    }
}

impl From<CsvError> for Error {
    fn from(e: CsvError) -> Self {
        Error::CsvError(e)
    }
}

impl From<JsonError> for Error {
    fn from(e: JsonError) -> Self {
        Error::JsonError(e)
    }
}

#[test]
fn display_names_the_offending_column() {
    let e = Error::InvalidColumn("Grad.Rate".to_owned());
    assert_eq!(e.to_string(), "invalid column `Grad.Rate`");
}

#[test]
fn io_errors_convert() {
    let io = IoError::new(std::io::ErrorKind::NotFound, "gone");
    match Error::from(io) {
        Error::IoError(_) => {}
        e => panic!("unexpected {:?}", e),
    }
}
