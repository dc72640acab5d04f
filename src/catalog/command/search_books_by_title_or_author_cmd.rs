use std::sync::Arc;
use async_trait::async_trait;
use serde::Deserialize;
use crate::catalog::command::book_list_response::BookListResponse;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SearchBooksByTitleOrAuthorCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl SearchBooksByTitleOrAuthorCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchBooksByTitleOrAuthorCommandRequest {
    pub title: String,
    pub author: String,
}

impl SearchBooksByTitleOrAuthorCommandRequest {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
        }
    }
}

#[async_trait]
impl Command<SearchBooksByTitleOrAuthorCommandRequest, BookListResponse> for SearchBooksByTitleOrAuthorCommand {
    async fn execute(&self, req: SearchBooksByTitleOrAuthorCommandRequest) -> Result<BookListResponse, CommandError> {
        let books = self.catalog_service.find_books_by_title_or_author(req.title.as_str(), req.author.as_str()).await?;
        BookListResponse::non_empty(books, || format!("no books found with title '{}' or author '{}'", req.title, req.author))
    }
}
