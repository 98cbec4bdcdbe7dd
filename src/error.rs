// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    /// Transport-level failure while talking to the listing backend.
    Network(String),
    /// The backend answered but reported the listing as unavailable.
    Listing(String),
    /// The payload could not be decoded.
    Parse(String),
}

impl Error {
    /// Returns the i18n message key used when this error is shown to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Network(_) => "error-network",
            Error::Listing(_) => "error-listing-not-found",
            Error::Parse(_) => "error-parse",
        }
    }

    /// Raw detail text carried by the error.
    pub fn detail(&self) -> &str {
        match self {
            Error::Io(msg)
            | Error::Config(msg)
            | Error::Network(msg)
            | Error::Listing(msg)
            | Error::Parse(msg) => msg,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Network(e) => write!(f, "Network Error: {}", e),
            Error::Listing(e) => write!(f, "Listing Error: {}", e),
            Error::Parse(e) => write!(f, "Parse Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Parse(err.to_string())
        } else {
            Error::Network(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn from_json_error_produces_parse_variant() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ not json")
            .expect_err("invalid json must fail");
        let err: Error = json_error.into();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn i18n_keys_cover_every_variant() {
        assert_eq!(Error::Io(String::new()).i18n_key(), "error-io");
        assert_eq!(Error::Config(String::new()).i18n_key(), "error-config");
        assert_eq!(Error::Network(String::new()).i18n_key(), "error-network");
        assert_eq!(
            Error::Listing(String::new()).i18n_key(),
            "error-listing-not-found"
        );
        assert_eq!(Error::Parse(String::new()).i18n_key(), "error-parse");
    }

    #[test]
    fn detail_returns_inner_message() {
        let err = Error::Network("connection refused".into());
        assert_eq!(err.detail(), "connection refused");
    }
}
