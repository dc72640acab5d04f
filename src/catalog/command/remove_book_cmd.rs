use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct RemoveBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub book_id: String,
}

impl RemoveBookCommandRequest {
    pub fn new(book_id: String) -> Self {
        Self {
            book_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RemoveBookCommandResponse {
    pub deleted: bool,
    pub message: String,
}

impl RemoveBookCommandResponse {
    pub fn new(book_id: &str) -> Self {
        Self {
            deleted: true,
            message: format!("book with id = {} deleted", book_id),
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        let deleted = self.catalog_service.remove_book(req.book_id.as_str()).await?;
        if !deleted {
            return Err(CommandError::not_found(format!("book not found for id {}", req.book_id).as_str()));
        }
        Ok(RemoveBookCommandResponse::new(req.book_id.as_str()))
    }
}
