use std::sync::Arc;
use async_trait::async_trait;
use serde::Deserialize;
use crate::catalog::command::book_list_response::BookListResponse;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ListBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// ListBooksOrder selects between the store's native order and newest-first
#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
pub enum ListBooksOrder {
    Native,
    YearDesc,
}

#[derive(Debug, Deserialize)]
pub struct ListBooksCommandRequest {
    pub order: ListBooksOrder,
}

impl ListBooksCommandRequest {
    pub fn new(order: ListBooksOrder) -> Self {
        Self {
            order,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, BookListResponse> for ListBooksCommand {
    async fn execute(&self, req: ListBooksCommandRequest) -> Result<BookListResponse, CommandError> {
        match req.order {
            ListBooksOrder::Native => {
                let books = self.catalog_service.list_books().await?;
                BookListResponse::non_empty(books, || "no books found".to_string())
            }
            ListBooksOrder::YearDesc => {
                let books = self.catalog_service.list_books_by_year_desc().await?;
                BookListResponse::non_empty(books, || "no books available to sort".to_string())
            }
        }
    }
}
