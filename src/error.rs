// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// Embedded translation data is malformed or incomplete.
    Catalog(String),
    /// The preference store could not be read or written.
    Storage(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Storage(e) => write!(f, "Storage Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Storage(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Storage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_catalog_error() {
        let err = Error::Catalog("missing message".to_string());
        assert_eq!(format!("{}", err), "Catalog Error: missing message");
    }

    #[test]
    fn display_formats_storage_error() {
        let err = Error::Storage("disk full".to_string());
        assert_eq!(format!("{}", err), "Storage Error: disk full");
    }

    #[test]
    fn from_io_error_produces_storage_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Storage(message) => assert!(message.contains("boom")),
            _ => panic!("expected Storage variant"),
        }
    }
}
