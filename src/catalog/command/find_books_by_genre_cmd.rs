use std::sync::Arc;
use async_trait::async_trait;
use serde::Deserialize;
use crate::catalog::command::book_list_response::BookListResponse;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct FindBooksByGenreCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl FindBooksByGenreCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FindBooksByGenreCommandRequest {
    pub genre: String,
}

impl FindBooksByGenreCommandRequest {
    pub fn new(genre: &str) -> Self {
        Self {
            genre: genre.to_string(),
        }
    }
}

#[async_trait]
impl Command<FindBooksByGenreCommandRequest, BookListResponse> for FindBooksByGenreCommand {
    async fn execute(&self, req: FindBooksByGenreCommandRequest) -> Result<BookListResponse, CommandError> {
        let books = self.catalog_service.find_books_by_genre(req.genre.as_str()).await?;
        BookListResponse::non_empty(books, || format!("no books found for genre: {}", req.genre))
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::command::find_books_by_genre_cmd::{FindBooksByGenreCommand, FindBooksByGenreCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_find_books_by_genre() {
        let svc = factory::create_catalog_service(&Configuration::new("test", RepositoryStore::Memory)).await;
        let dune = svc.add_book(&BookDto::new("Dune", "Herbert", 1965, "SciFi")).await.expect("should add book");
        let cmd = FindBooksByGenreCommand::new(svc);

        let res = cmd.execute(FindBooksByGenreCommandRequest::new("SciFi")).await.expect("should find books");
        assert_eq!(vec![dune], res.books);

        let res = cmd.execute(FindBooksByGenreCommandRequest::new("scifi")).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));

        let res = cmd.execute(FindBooksByGenreCommandRequest::new("1984")).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }
}
