// crates/cli/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] linecount_engine::error::EngineError),

    #[error("Cannot determine the current directory: {0}")]
    CurrentDir(#[source] std::io::Error),

    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, AppError>;
