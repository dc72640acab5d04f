use std::sync::Arc;
use async_trait::async_trait;
use serde::Deserialize;
use crate::catalog::command::book_list_response::BookListResponse;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct FindBooksByAuthorCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl FindBooksByAuthorCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FindBooksByAuthorCommandRequest {
    pub author: String,
}

impl FindBooksByAuthorCommandRequest {
    pub fn new(author: &str) -> Self {
        Self {
            author: author.to_string(),
        }
    }
}

#[async_trait]
impl Command<FindBooksByAuthorCommandRequest, BookListResponse> for FindBooksByAuthorCommand {
    async fn execute(&self, req: FindBooksByAuthorCommandRequest) -> Result<BookListResponse, CommandError> {
        let books = self.catalog_service.find_books_by_author(req.author.as_str()).await?;
        BookListResponse::non_empty(books, || format!("no books found for author: {}", req.author))
    }
}
