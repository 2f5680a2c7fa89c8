// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
}

/// Failure kinds surfaced by the product repository.
/// Used to provide user-friendly, localized status messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The database file could not be reached or opened.
    Connection(String),

    /// A query or insert was rejected by the database.
    Statement(String),
}

impl StorageError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            StorageError::Connection(_) => "error-storage-connection",
            StorageError::Statement(_) => "error-storage-statement",
        }
    }

    /// Classifies a raw sqlx error at the repository boundary.
    ///
    /// Connection-establishment failures map to `Connection`; everything
    /// the database itself rejected maps to `Statement`.
    pub fn from_sqlx(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(e) => StorageError::Connection(e.to_string()),
            sqlx::Error::Tls(e) => StorageError::Connection(e.to_string()),
            sqlx::Error::Configuration(e) => StorageError::Connection(e.to_string()),
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                StorageError::Connection("connection unavailable".to_string())
            }
            other => StorageError::Statement(other.to_string()),
        }
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Connection(msg) => write!(f, "Connection failed: {}", msg),
            StorageError::Statement(msg) => write!(f, "Statement failed: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

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

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_config_error() {
        let err = Error::Config("bad field".to_string());
        assert_eq!(format!("{}", err), "Config Error: bad field");
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
    fn sqlx_io_error_classifies_as_connection() {
        let err = StorageError::from_sqlx(sqlx::Error::Io(std::io::Error::other("unreachable")));
        assert!(matches!(err, StorageError::Connection(_)));
    }

    #[test]
    fn sqlx_row_error_classifies_as_statement() {
        let err = StorageError::from_sqlx(sqlx::Error::RowNotFound);
        assert!(matches!(err, StorageError::Statement(_)));
    }

    #[test]
    fn storage_error_i18n_keys() {
        assert_eq!(
            StorageError::Connection(String::new()).i18n_key(),
            "error-storage-connection"
        );
        assert_eq!(
            StorageError::Statement(String::new()).i18n_key(),
            "error-storage-statement"
        );
    }

    #[test]
    fn storage_error_display_keeps_detail() {
        let err = StorageError::Statement("no such table".to_string());
        assert!(format!("{}", err).contains("no such table"));
    }
}
