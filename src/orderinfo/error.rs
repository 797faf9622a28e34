use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("The file is empty!")]
    EmptyFile,

    #[error("The file has no data rows after the header.")]
    NoDataRows,

    #[error("Malformed row {row}: invalid {column} '{value}'")]
    Malformed {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Order ID: {0} not found.")]
    NotFound(u32),

    #[error("No order ids left after {0}.")]
    IdsExhausted(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl OrderError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn malformed(row: usize, column: &'static str, value: impl Into<String>) -> Self {
        Self::Malformed {
            row,
            column,
            value: value.into(),
        }
    }

    /// True for the two "nothing to load" outcomes, which leave the store untouched.
    pub fn is_empty_file(&self) -> bool {
        matches!(self, Self::EmptyFile | Self::NoDataRows)
    }

    /// True when the backing file simply does not exist yet.
    pub fn is_missing_file(&self) -> bool {
        matches!(self, Self::Io(io) if io.kind() == std::io::ErrorKind::NotFound)
    }
}

pub type Result<T> = std::result::Result<T, OrderError>;
