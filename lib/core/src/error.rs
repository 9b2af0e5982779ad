use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to load {path}: {reason}")]
    Load { path: String, reason: String },

    #[error("Unknown value for {field}: {value:?}")]
    UnknownValue { field: String, value: String },

    #[error("No encoder trained for field: {0}")]
    UnknownField(String),

    #[error("Catalog index {index} out of bounds (rows: {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Invalid vector dimension: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    #[error("Invalid price for {name}: {raw:?}")]
    InvalidPrice { name: String, raw: String },
}

impl Error {
    pub fn load(path: impl Into<String>, reason: impl ToString) -> Self {
        Error::Load {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// True for failures caused by request input the trained vocabulary does not cover.
    pub fn is_encoding(&self) -> bool {
        matches!(self, Error::UnknownValue { .. } | Error::UnknownField(_))
    }
}
