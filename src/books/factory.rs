use tracing::warn;
use crate::books::repository::BookRepository;
use crate::books::repository::ddb_book_repository::DDBBookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::utils::ddb::{build_db_client, ensure_books_table};

pub async fn create_book_repository(config: &Configuration) -> Box<dyn BookRepository> {
    match config.store {
        RepositoryStore::Memory => {
            Box::new(MemoryBookRepository::new())
        }
        RepositoryStore::DynamoDB => {
            let client = build_db_client(config).await;
            Box::new(DDBBookRepository::new(client, config.table_name.as_str()))
        }
        RepositoryStore::LocalDynamoDB => {
            let client = build_db_client(config).await;
            // the service still starts, store calls fail until the table is reachable
            if let Err(err) = ensure_books_table(&client, config).await {
                warn!(table = config.table_name.as_str(), error = %err, "could not prepare books table");
            }
            Box::new(DDBBookRepository::new(client, config.table_name.as_str()))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::factory::create_book_repository;
    use crate::core::domain::Configuration;
    use crate::core::repository::{Repository, RepositoryStore};

    #[tokio::test]
    async fn test_should_create_memory_repository() {
        let repo = create_book_repository(&Configuration::new("test", RepositoryStore::Memory)).await;
        let book = repo.save(&BookEntity::new("Dune", "Herbert", 1965, "SciFi")).await.expect("should save book");
        assert!(book.id().is_some());
        assert_eq!(1, repo.find_all().await.expect("should list books").len());
    }
}
