use std::fmt;

/// Result type for backend requests
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while talking to the analytics backend
#[derive(Debug)]
pub enum Error {
    /// Server answered with a non-success status code
    Transport { status: u16, detail: String },
    /// Response body was not the expected JSON shape
    Parse(serde_json::Error),
    /// Request never completed (connection, timeout, redirect loop)
    Http(reqwest::Error),
    /// Server answered 200 but flagged the operation as failed
    Api(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport { status, detail } if detail.is_empty() => {
                write!(f, "server returned HTTP {}", status)
            }
            Error::Transport { status, detail } => {
                write!(f, "server returned HTTP {}: {}", status, detail)
            }
            Error::Parse(err) => write!(f, "malformed response body: {}", err),
            Error::Http(err) => write!(f, "request failed: {}", err),
            Error::Api(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Parse(err) => Some(err),
            Error::Http(err) => Some(err),
            Error::Transport { .. } | Error::Api(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err)
    }
}
