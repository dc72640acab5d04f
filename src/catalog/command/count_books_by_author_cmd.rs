use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct CountBooksByAuthorCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl CountBooksByAuthorCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CountBooksByAuthorCommandRequest {
    pub author: String,
}

impl CountBooksByAuthorCommandRequest {
    pub fn new(author: &str) -> Self {
        Self {
            author: author.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CountBooksByAuthorCommandResponse {
    pub author: String,
    pub count: usize,
}

impl CountBooksByAuthorCommandResponse {
    pub fn new(author: String, count: usize) -> Self {
        Self {
            author,
            count,
        }
    }
}

#[async_trait]
impl Command<CountBooksByAuthorCommandRequest, CountBooksByAuthorCommandResponse> for CountBooksByAuthorCommand {
    async fn execute(&self, req: CountBooksByAuthorCommandRequest) -> Result<CountBooksByAuthorCommandResponse, CommandError> {
        let count = self.catalog_service.count_books_by_author(req.author.as_str()).await?;
        // a zero count is reported like an empty list
        if count == 0 {
            return Err(CommandError::not_found(format!("no books found for author: {}", req.author).as_str()));
        }
        Ok(CountBooksByAuthorCommandResponse::new(req.author, count))
    }
}
