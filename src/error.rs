use thiserror::Error;

pub type JoinResult<T> = Result<T, JoinError>;

#[derive(Error, Debug)]
pub enum JoinError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Encoding error: {0}")]
    Encoding(String),
}
