use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum LibraryError {
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    NotFound {
        message: String,
    },
    // Throttled or timed out store call. The store may succeed if the caller retries,
    // but nothing in the catalog retries on its own.
    CurrentlyUnavailable {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn database(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::Database { message: message.to_string(), reason_code, retryable }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn unavailable(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::CurrentlyUnavailable { message: message.to_string(), reason_code, retryable }
    }

    // store failures are never a missing record, only the catalog decides what is not found
    pub fn database_or_unavailable(message: &str, reason: Option<String>, retryable: bool) -> LibraryError {
        if retryable {
            LibraryError::unavailable(
                format!("ddb database unavailable error {:?} {:?}", message, reason).as_str(), reason, true)
        } else {
            LibraryError::database(
                format!("ddb database error {:?} {:?}", message, reason).as_str(), reason, false)
        }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::Database { retryable, .. } => { *retryable }
            LibraryError::NotFound { .. } => { false }
            LibraryError::CurrentlyUnavailable { retryable, .. } => { *retryable }
            LibraryError::Validation { .. } => { false }
            LibraryError::Serialization { .. } => { false }
            LibraryError::Runtime { .. } => { false }
        }
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Database { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::CurrentlyUnavailable { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            LibraryError::Validation { message, .. } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the catalog and its stores.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[cfg(test)]
mod tests {
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_classify_store_failures() {
        let throttled = LibraryError::database_or_unavailable("scan books", Some("ThrottlingException".to_string()), true);
        assert!(matches!(throttled, LibraryError::CurrentlyUnavailable { retryable: true, .. }));
        assert!(throttled.retryable());

        let missing = LibraryError::database_or_unavailable("scan books", Some("404 Not Found".to_string()), false);
        assert!(matches!(missing, LibraryError::Database { retryable: false, .. }));

        let failed = LibraryError::database_or_unavailable("put book", Some("500".to_string()), false);
        assert!(matches!(failed, LibraryError::Database { retryable: false, .. }));
        assert!(matches!(LibraryError::database_or_unavailable("put book", None, false), LibraryError::Database { .. }));
    }

    #[tokio::test]
    async fn test_should_only_retry_unavailable_store() {
        assert!(!LibraryError::not_found("book not found for id b1").retryable());
        assert!(!LibraryError::validation("bad year", None).retryable());
        assert!(!LibraryError::serialization("bad item").retryable());
        assert!(!LibraryError::runtime("no table status", None).retryable());
        assert!(!LibraryError::unavailable("busy", None, false).retryable());
    }

    #[tokio::test]
    async fn test_should_convert_parse_failures() {
        let err = serde_json::from_str::<serde_json::Value>("{").expect_err("should fail");
        assert!(matches!(LibraryError::from(err), LibraryError::Serialization { .. }));
    }

    #[tokio::test]
    async fn test_should_display_validation_message_only() {
        let err = LibraryError::validation("the author parameter must not consist only of digits", Some("author".to_string()));
        assert_eq!("the author parameter must not consist only of digits", err.to_string());
    }
}
