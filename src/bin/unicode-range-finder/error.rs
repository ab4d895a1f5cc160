use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error(transparent)]
    Unicode(#[from] unicode_range_finder::Error),
    #[error("Input/output error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn is_usage(&self) -> bool {
        match self {
            Self::Unicode(e) => e.is_usage(),
            _ => false,
        }
    }
}
