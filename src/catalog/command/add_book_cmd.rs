use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, year: i32, genre: &str) -> Self {
        Self {
            id: None,
            title: title.to_string(),
            author: author.to_string(),
            year,
            genre: genre.to_string(),
        }
    }

    pub fn build_book(&self) -> BookDto {
        BookDto {
            id: self.id.clone(),
            title: self.title.to_string(),
            author: self.author.to_string(),
            year: self.year,
            genre: self.genre.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    async fn sut_cmd() -> AddBookCommand {
        let svc = factory::create_catalog_service(&Configuration::new("test", RepositoryStore::Memory)).await;
        AddBookCommand::new(svc)
    }

    #[tokio::test]
    async fn test_should_run_add_book() {
        let cmd = sut_cmd().await;
        let res = cmd.execute(AddBookCommandRequest::new("Dune", "Herbert", 1965, "SciFi"))
            .await.expect("should add book");
        assert!(res.book.id.is_some());
        assert_eq!("Dune", res.book.title.as_str());
    }

    #[tokio::test]
    async fn test_should_reject_add_book_with_id() {
        let cmd = sut_cmd().await;
        let mut req = AddBookCommandRequest::new("Dune", "Herbert", 1965, "SciFi");
        req.id = Some("client-id".to_string());
        let res = cmd.execute(req).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }
}
