use std::sync::Arc;
use async_trait::async_trait;
use serde::Deserialize;
use crate::catalog::command::book_list_response::BookListResponse;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::validation::parse_year;
use crate::core::command::{Command, CommandError};

pub struct FindBooksBeforeYearCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl FindBooksBeforeYearCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// year arrives as text and is checked before it is parsed
#[derive(Debug, Deserialize)]
pub struct FindBooksBeforeYearCommandRequest {
    pub year: String,
}

impl FindBooksBeforeYearCommandRequest {
    pub fn new(year: &str) -> Self {
        Self {
            year: year.to_string(),
        }
    }
}

#[async_trait]
impl Command<FindBooksBeforeYearCommandRequest, BookListResponse> for FindBooksBeforeYearCommand {
    async fn execute(&self, req: FindBooksBeforeYearCommandRequest) -> Result<BookListResponse, CommandError> {
        let year = parse_year(req.year.as_str())?;
        let books = self.catalog_service.find_books_before_year(year).await?;
        BookListResponse::non_empty(books, || format!("no books published before year: {}", req.year))
    }
}
