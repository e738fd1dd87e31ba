use std::convert::From;
use std::error;
use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: Option<String>,
}

#[derive(Debug)]
pub enum ErrorKind {
    Config,
    InvalidUrl,
    ShelfFull,
    NoSuchEntry,
    IOError(io::Error),
}

impl Error {
    pub fn new(kind: ErrorKind, msg: &str) -> Self {
        Error {
            kind,
            message: Some(msg.to_owned()),
        }
    }

    pub fn with_msg(mut self, message: &str) -> Self {
        self.message = Some(message.to_owned());
        self
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind,
            message: None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(io_error: io::Error) -> Error {
        Error::from(ErrorKind::IOError(io_error))
    }
}

impl From<toml::de::Error> for Error {
    fn from(parse_error: toml::de::Error) -> Error {
        Error::new(
            ErrorKind::Config,
            format!("Could not parse config: {}", parse_error).as_str(),
        )
    }
}

impl From<url::ParseError> for Error {
    fn from(parse_error: url::ParseError) -> Error {
        Error::new(ErrorKind::InvalidUrl, &parse_error.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{}: {}", self.kind.as_str(), msg),
            None => write!(f, "{}", self.kind.as_str()),
        }
    }
}

impl error::Error for Error {}

impl ErrorKind {
    pub fn as_str(&self) -> String {
        match self {
            ErrorKind::Config => "invalid configuration".to_owned(),
            ErrorKind::InvalidUrl => "invalid url".to_owned(),
            ErrorKind::ShelfFull => "quick-link shelf is full".to_owned(),
            ErrorKind::NoSuchEntry => "no such entry".to_owned(),
            ErrorKind::IOError(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let err = Error::new(ErrorKind::ShelfFull, "at most 4 links");
        assert_eq!(err.to_string(), "quick-link shelf is full: at most 4 links");

        let err = Error::from(ErrorKind::NoSuchEntry);
        assert_eq!(err.to_string(), "no such entry");
    }

    #[test]
    fn io_errors_keep_their_kind() {
        let err = Error::from(io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(
            err.kind,
            ErrorKind::IOError(ref e) if e.kind() == io::ErrorKind::NotFound
        ));
    }
}
