use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Logging error: {0}")]
    Logging(String),
}
