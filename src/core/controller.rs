use std::sync::Arc;
use axum::http::StatusCode;
use tracing::{debug, error};
use crate::catalog::domain::CatalogService;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

pub const INTERNAL_ERROR_MESSAGE: &str = "unexpected error while handling the request, try again later";

#[derive(Clone)]
pub struct AppState {
    pub config: Configuration,
    pub catalog: Arc<dyn CatalogService>,
}

impl AppState {
    pub fn new(config: Configuration, catalog: Arc<dyn CatalogService>) -> AppState {
        AppState {
            config,
            catalog,
        }
    }
}

pub type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { message } => {
                debug!(message = message.as_str(), "catalog request found nothing");
                (StatusCode::NOT_FOUND, message)
            }
            CommandError::Validation { message, reason_code } => {
                debug!(message = message.as_str(), reason = ?reason_code, "catalog request rejected");
                (StatusCode::BAD_REQUEST, message)
            }
            CommandError::Database { .. } |
            CommandError::Runtime { .. } |
            CommandError::Serialization { .. } => {
                error!(error = ?err, "catalog request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE.to_string())
            }
        }
    }
}
