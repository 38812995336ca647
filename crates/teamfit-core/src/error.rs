use std::fmt;

/// Result type for teamfit-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the state layer
#[derive(Debug)]
pub enum Error {
    /// User input rejected before any request was made
    Validation(String),
    /// A transcript was requested with no interview session in progress
    NoActiveSession,
    /// Referenced id is absent from the loaded data
    NotFound(String),
    /// Backend request failed
    Client(teamfit_client::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Validation(msg) => write!(f, "{}", msg),
            Error::NoActiveSession => write!(f, "No active interview session found."),
            Error::NotFound(id) => write!(f, "'{}' not found in the loaded data", id),
            Error::Client(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Client(err) => Some(err),
            Error::Validation(_) | Error::NoActiveSession | Error::NotFound(_) => None,
        }
    }
}

impl From<teamfit_client::Error> for Error {
    fn from(err: teamfit_client::Error) -> Self {
        Error::Client(err)
    }
}
