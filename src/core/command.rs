use async_trait::async_trait;
use crate::core::library::LibraryError;

// CommandError is the tagged outcome every command reports besides success.
// Validation maps to bad input, NotFound to a missing record or an empty result,
// and the remaining variants to an internal failure.
#[derive(Debug)]
pub enum CommandError {
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    NotFound {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    Serialization {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
}

impl CommandError {
    pub fn not_found(message: &str) -> CommandError {
        CommandError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> CommandError {
        CommandError::Validation { message: message.to_string(), reason_code }
    }
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<LibraryError> for CommandError {
    fn from(other: LibraryError) -> Self {
        match other {
            LibraryError::Database { message, reason_code, retryable } => {
                CommandError::Database { message, reason_code, retryable }
            }
            LibraryError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            LibraryError::CurrentlyUnavailable { message, reason_code, retryable } => {
                CommandError::Runtime { message, reason_code, retryable }
            }
            LibraryError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            LibraryError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            LibraryError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code, retryable: false }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::CommandError;
    use crate::core::library::LibraryError;

    #[tokio::test]
    async fn test_should_map_library_errors() {
        assert!(matches!(CommandError::from(LibraryError::validation("bad", None)), CommandError::Validation { .. }));
        assert!(matches!(CommandError::from(LibraryError::not_found("gone")), CommandError::NotFound { .. }));
        assert!(matches!(CommandError::from(LibraryError::database("db", None, false)), CommandError::Database { .. }));
        assert!(matches!(CommandError::from(LibraryError::unavailable("busy", None, true)), CommandError::Runtime { retryable: true, .. }));
        assert!(matches!(CommandError::from(LibraryError::serialization("json")), CommandError::Serialization { .. }));
        assert!(matches!(CommandError::from(LibraryError::runtime("boom", None)), CommandError::Runtime { retryable: false, .. }));
    }
}
