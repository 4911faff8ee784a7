use thiserror::Error;

/// Errors that stop the terminal host.
#[derive(Debug, Error)]
pub enum TermError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
