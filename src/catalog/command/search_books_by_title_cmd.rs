use std::sync::Arc;
use async_trait::async_trait;
use serde::Deserialize;
use crate::catalog::command::book_list_response::BookListResponse;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SearchBooksByTitleCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl SearchBooksByTitleCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchBooksByTitleCommandRequest {
    pub title: String,
}

impl SearchBooksByTitleCommandRequest {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

#[async_trait]
impl Command<SearchBooksByTitleCommandRequest, BookListResponse> for SearchBooksByTitleCommand {
    async fn execute(&self, req: SearchBooksByTitleCommandRequest) -> Result<BookListResponse, CommandError> {
        let books = self.catalog_service.search_books_by_title(req.title.as_str()).await?;
        BookListResponse::non_empty(books, || format!("no books found with title: {}", req.title))
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::command::search_books_by_title_cmd::{SearchBooksByTitleCommand, SearchBooksByTitleCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_search_books_by_title() {
        let svc = factory::create_catalog_service(&Configuration::new("test", RepositoryStore::Memory)).await;
        let dune = svc.add_book(&BookDto::new("Dune", "Herbert", 1965, "SciFi")).await.expect("should add book");
        let cmd = SearchBooksByTitleCommand::new(svc);

        let res = cmd.execute(SearchBooksByTitleCommandRequest::new("dun")).await.expect("should find books");
        assert_eq!(vec![dune], res.books);

        // titles are not validated, digits are a plain search
        let res = cmd.execute(SearchBooksByTitleCommandRequest::new("1984")).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
