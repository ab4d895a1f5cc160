use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0:?}: unknown query param")]
    UnknownTerm(String),
    #[error("{0:?}: expected exactly one `=` in query param")]
    MalformedTerm(String),
    #[error("invalid category {0:?}")]
    InvalidCategory(String),
    #[error("invalid character {0:?}")]
    InvalidChar(String),
    #[error("invalid codepoint {0:?}")]
    InvalidCodepoint(String),
    #[error("range {0:?} ends before it begins")]
    ReversedRange(String),
    #[error("must provide at least one query param")]
    EmptyQuery,
    #[error("malformed range {0:?}")]
    MalformedBounds(String),
    #[error("invalid codepoint table: {0}")]
    Table(String),
    #[error("invalid unicode database: {0}")]
    Ucd(String),
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::DeError),
    #[error("input/output error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` if the error was caused by a malformed command-line argument.
    pub fn is_usage(&self) -> bool {
        use Error::*;
        matches!(
            self,
            UnknownTerm(..)
                | MalformedTerm(..)
                | InvalidCategory(..)
                | InvalidChar(..)
                | InvalidCodepoint(..)
                | ReversedRange(..)
                | EmptyQuery
                | MalformedBounds(..)
        )
    }
}
