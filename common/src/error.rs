use std::fmt;

use thiserror::Error;

/// Terminal failure of a wait.
///
/// Resolution and validation errors stop everything before the first dial.
/// Once probing has started the only possible error is [`WaitError::Timeout`].
#[derive(Debug, Error)]
pub enum WaitError {
    #[error("Timeout")]
    Timeout,

    #[error("Bad url: {0}")]
    BadUrl(#[from] url::ParseError),

    #[error("Bad scheme")]
    BadScheme,

    #[error("Bad host")]
    BadHost,

    #[error("Bad port")]
    BadPort,
}

/// Fieldless mirror of [`WaitError`], handy for matching and exit codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Timeout,
    BadUrl,
    BadScheme,
    BadHost,
    BadPort,
}

impl WaitError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WaitError::Timeout => ErrorKind::Timeout,
            WaitError::BadUrl(_) => ErrorKind::BadUrl,
            WaitError::BadScheme => ErrorKind::BadScheme,
            WaitError::BadHost => ErrorKind::BadHost,
            WaitError::BadPort => ErrorKind::BadPort,
        }
    }

    pub fn is_timeout(&self) -> bool {
        self.kind() == ErrorKind::Timeout
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Timeout => "Timeout",
            ErrorKind::BadUrl => "Bad url",
            ErrorKind::BadScheme => "Bad scheme",
            ErrorKind::BadHost => "Bad host",
            ErrorKind::BadPort => "Bad port",
        };
        f.write_str(name)
    }
}

pub type Result<T> = std::result::Result<T, WaitError>;
