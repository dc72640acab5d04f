use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::validation::{validate_author, validate_genre, validate_new_book};
use crate::core::library::{LibraryError, LibraryResult};

pub struct CatalogServiceImpl {
    book_repository: Box<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub fn new(book_repository: Box<dyn BookRepository>) -> Self {
        Self {
            book_repository,
        }
    }
}

fn to_dtos(books: Vec<BookEntity>) -> Vec<BookDto> {
    books.iter().map(BookDto::from).collect()
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        self.book_repository.find_all().await.map(to_dtos)
    }

    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto> {
        self.book_repository.find_by_id(id).await?
            .map(|b| BookDto::from(&b))
            .ok_or_else(|| LibraryError::not_found(format!("book not found for id {}", id).as_str()))
    }

    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        validate_new_book(book)?;
        let saved = self.book_repository.save(&BookEntity::from(book)).await?;
        Ok(BookDto::from(&saved))
    }

    async fn update_book(&self, id: &str, book: &BookDto) -> LibraryResult<BookDto> {
        let mut existing = self.book_repository.find_by_id(id).await?
            .ok_or_else(|| LibraryError::not_found(format!("book not found for id {}", id).as_str()))?;
        // book.id is ignored, identity never changes
        existing.title = book.title.clone();
        existing.author = book.author.clone();
        existing.publication_year = book.year;
        existing.genre = book.genre.clone();
        let saved = self.book_repository.save(&existing).await?;
        Ok(BookDto::from(&saved))
    }

    async fn remove_book(&self, id: &str) -> LibraryResult<bool> {
        if self.book_repository.find_by_id(id).await?.is_none() {
            return Ok(false);
        }
        self.book_repository.delete_by_id(id).await?;
        Ok(true)
    }

    async fn find_books_by_author(&self, author: &str) -> LibraryResult<Vec<BookDto>> {
        validate_author(author)?;
        self.book_repository.find_by_author(author).await.map(to_dtos)
    }

    async fn find_books_by_genre(&self, genre: &str) -> LibraryResult<Vec<BookDto>> {
        validate_genre(genre)?;
        self.book_repository.find_by_genre(genre).await.map(to_dtos)
    }

    async fn search_books_by_title(&self, fragment: &str) -> LibraryResult<Vec<BookDto>> {
        self.book_repository.find_by_title_containing_ignore_case(fragment).await.map(to_dtos)
    }

    async fn find_books_before_year(&self, year: i32) -> LibraryResult<Vec<BookDto>> {
        self.book_repository.find_by_year_less_than(year).await.map(to_dtos)
    }

    async fn count_books_by_author(&self, author: &str) -> LibraryResult<usize> {
        validate_author(author)?;
        self.book_repository.count_by_author(author).await
    }

    async fn list_books_by_year_desc(&self) -> LibraryResult<Vec<BookDto>> {
        self.book_repository.find_all_order_by_year_desc().await.map(to_dtos)
    }

    async fn find_books_by_title_or_author(&self, fragment: &str, author: &str) -> LibraryResult<Vec<BookDto>> {
        validate_author(author)?;
        self.book_repository.find_by_title_or_author(fragment, author).await.map(to_dtos)
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            id: other.book_id.clone(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            year: other.publication_year,
            genre: other.genre.to_string(),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.id.clone(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            publication_year: other.year,
            genre: other.genre.to_string(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashSet;
    use async_trait::async_trait;
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::BookDto;
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::domain::service::CatalogServiceImpl;
    use crate::core::library::{LibraryError, LibraryResult};
    use crate::core::repository::Repository;

    // FailingBookRepository fails every call, so a validation error proves the store was never reached
    pub(crate) struct FailingBookRepository;

    fn store_down<T>() -> LibraryResult<T> {
        Err(LibraryError::database("store is down", None, false))
    }

    #[async_trait]
    impl Repository<BookEntity> for FailingBookRepository {
        async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> { store_down() }
        async fn find_by_id(&self, _id: &str) -> LibraryResult<Option<BookEntity>> { store_down() }
        async fn save(&self, _entity: &BookEntity) -> LibraryResult<BookEntity> { store_down() }
        async fn delete_by_id(&self, _id: &str) -> LibraryResult<()> { store_down() }
    }

    #[async_trait]
    impl BookRepository for FailingBookRepository {
        async fn find_by_author(&self, _author: &str) -> LibraryResult<Vec<BookEntity>> { store_down() }
        async fn find_by_genre(&self, _genre: &str) -> LibraryResult<Vec<BookEntity>> { store_down() }
        async fn find_by_title_containing_ignore_case(&self, _fragment: &str) -> LibraryResult<Vec<BookEntity>> { store_down() }
        async fn find_by_year_less_than(&self, _year: i32) -> LibraryResult<Vec<BookEntity>> { store_down() }
        async fn count_by_author(&self, _author: &str) -> LibraryResult<usize> { store_down() }
        async fn find_all_order_by_year_desc(&self) -> LibraryResult<Vec<BookEntity>> { store_down() }
        async fn find_by_title_or_author(&self, _fragment: &str, _author: &str) -> LibraryResult<Vec<BookEntity>> { store_down() }
    }

    fn memory_service() -> CatalogServiceImpl {
        CatalogServiceImpl::new(Box::new(MemoryBookRepository::new()))
    }

    fn failing_service() -> CatalogServiceImpl {
        CatalogServiceImpl::new(Box::new(FailingBookRepository))
    }

    fn ids(books: &[BookDto]) -> HashSet<String> {
        books.iter().filter_map(|b| b.id.clone()).collect()
    }

    #[tokio::test]
    async fn test_should_add_book() {
        let catalog_svc = memory_service();

        let book = BookDto::new("Dune", "Herbert", 1965, "SciFi");
        let added = catalog_svc.add_book(&book).await.expect("should add book");
        let id = added.id.clone().expect("should assign id");
        assert_eq!(book.clone().with_id(id.as_str()), added);

        let loaded = catalog_svc.find_book_by_id(id.as_str()).await.expect("should return book");
        assert_eq!(added, loaded);
    }

    #[tokio::test]
    async fn test_should_reject_add_book_with_id() {
        let book = BookDto::new("Dune", "Herbert", 1965, "SciFi").with_id("client-id");
        for catalog_svc in [memory_service(), failing_service()] {
            let res = catalog_svc.add_book(&book).await;
            assert!(matches!(res, Err(LibraryError::Validation { .. })));
        }
        let catalog_svc = memory_service();
        let _ = catalog_svc.add_book(&book).await;
        assert!(catalog_svc.list_books().await.expect("should list books").is_empty());
    }

    #[tokio::test]
    async fn test_should_not_find_missing_book() {
        let catalog_svc = memory_service();
        let res = catalog_svc.find_book_by_id("missing").await;
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_update_book() {
        let catalog_svc = memory_service();
        let added = catalog_svc.add_book(&BookDto::new("Dune", "Herbert", 1965, "SciFi")).await.expect("should add book");
        let id = added.id.clone().expect("should assign id");

        let change = BookDto::new("Dune Messiah", "Frank Herbert", 1969, "Science Fiction").with_id("other-id");
        let updated = catalog_svc.update_book(id.as_str(), &change).await.expect("should update book");
        assert_eq!(Some(id.clone()), updated.id);
        assert_eq!("Dune Messiah", updated.title.as_str());
        assert_eq!("Frank Herbert", updated.author.as_str());
        assert_eq!(1969, updated.year);
        assert_eq!("Science Fiction", updated.genre.as_str());

        let loaded = catalog_svc.find_book_by_id(id.as_str()).await.expect("should return book");
        assert_eq!(updated, loaded);
        assert!(catalog_svc.find_book_by_id("other-id").await.is_err());
    }

    #[tokio::test]
    async fn test_should_not_update_missing_book() {
        let catalog_svc = memory_service();
        let added = catalog_svc.add_book(&BookDto::new("Dune", "Herbert", 1965, "SciFi")).await.expect("should add book");

        let res = catalog_svc.update_book("missing", &BookDto::new("Other", "Other", 2000, "Other")).await;
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));
        assert_eq!(vec![added], catalog_svc.list_books().await.expect("should list books"));
    }

    #[tokio::test]
    async fn test_should_remove_book_once() {
        let catalog_svc = memory_service();
        let added = catalog_svc.add_book(&BookDto::new("Dune", "Herbert", 1965, "SciFi")).await.expect("should add book");
        let id = added.id.expect("should assign id");

        assert!(catalog_svc.remove_book(id.as_str()).await.expect("should remove book"));
        assert!(!catalog_svc.remove_book(id.as_str()).await.expect("should report missing book"));
        assert!(!catalog_svc.remove_book(id.as_str()).await.expect("should report missing book"));
        assert!(catalog_svc.find_book_by_id(id.as_str()).await.is_err());
    }

    #[tokio::test]
    async fn test_should_validate_names_before_store() {
        let catalog_svc = failing_service();
        assert!(matches!(catalog_svc.find_books_by_author("123").await, Err(LibraryError::Validation { .. })));
        assert!(matches!(catalog_svc.find_books_by_genre("2024").await, Err(LibraryError::Validation { .. })));
        assert!(matches!(catalog_svc.count_books_by_author("7").await, Err(LibraryError::Validation { .. })));
        assert!(matches!(catalog_svc.find_books_by_title_or_author("dune", "99").await, Err(LibraryError::Validation { .. })));
        // a valid name reaches the store and surfaces its failure
        assert!(matches!(catalog_svc.find_books_by_author("Orwell").await, Err(LibraryError::Database { .. })));
    }

    #[tokio::test]
    async fn test_should_propagate_store_errors() {
        let catalog_svc = failing_service();
        assert!(matches!(catalog_svc.list_books().await, Err(LibraryError::Database { .. })));
        assert!(matches!(catalog_svc.find_book_by_id("b1").await, Err(LibraryError::Database { .. })));
        assert!(matches!(catalog_svc.remove_book("b1").await, Err(LibraryError::Database { .. })));
        assert!(matches!(catalog_svc.search_books_by_title("dune").await, Err(LibraryError::Database { .. })));
        assert!(matches!(catalog_svc.find_books_before_year(1990).await, Err(LibraryError::Database { .. })));
        assert!(matches!(catalog_svc.list_books_by_year_desc().await, Err(LibraryError::Database { .. })));
    }

    #[tokio::test]
    async fn test_should_find_books_before_year() {
        let catalog_svc = memory_service();
        for (title, year) in [("A", 1989), ("B", 1990), ("C", 1991), ("D", 1850)] {
            let _ = catalog_svc.add_book(&BookDto::new(title, "Author", year, "Genre")).await.expect("should add book");
        }
        let res = catalog_svc.find_books_before_year(1990).await.expect("should find books");
        let titles: Vec<&str> = res.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(vec!["A", "D"], titles);
        assert!(res.iter().all(|b| b.year < 1990));
    }

    #[tokio::test]
    async fn test_should_count_zero_for_unknown_author() {
        let catalog_svc = memory_service();
        let _ = catalog_svc.add_book(&BookDto::new("Dune", "Herbert", 1965, "SciFi")).await.expect("should add book");
        assert_eq!(0, catalog_svc.count_books_by_author("Tolkien").await.expect("should count"));
    }

    #[tokio::test]
    async fn test_should_find_union_of_title_and_author() {
        let catalog_svc = memory_service();
        for (title, author) in [("Dune", "Herbert"), ("Animal Farm", "Orwell"), ("Nineteen Eighty-Four", "Orwell"),
                                ("Dune Road", "Orwell"), ("Brave New World", "Huxley")] {
            let _ = catalog_svc.add_book(&BookDto::new(title, author, 1950, "Fiction")).await.expect("should add book");
        }
        let by_title = catalog_svc.search_books_by_title("DUNE").await.expect("should search");
        let by_author = catalog_svc.find_books_by_author("Orwell").await.expect("should find");
        let union = catalog_svc.find_books_by_title_or_author("DUNE", "Orwell").await.expect("should find");

        let expected: HashSet<String> = ids(&by_title).union(&ids(&by_author)).cloned().collect();
        assert_eq!(expected, ids(&union));
        assert_eq!(union.len(), ids(&union).len());
        assert_eq!(4, union.len());
    }

    #[tokio::test]
    async fn test_should_search_and_sort_dune() {
        let catalog_svc = memory_service();
        let dune = catalog_svc.add_book(&BookDto::new("Dune", "Herbert", 1965, "SciFi")).await.expect("should add book");
        let res = catalog_svc.search_books_by_title("dun").await.expect("should search");
        assert_eq!(vec![dune.clone()], res);

        let later = catalog_svc.add_book(&BookDto::new("Ringworld", "Niven", 1970, "SciFi")).await.expect("should add book");
        let sorted = catalog_svc.list_books_by_year_desc().await.expect("should sort");
        assert_eq!(vec![later, dune], sorted);
    }

    #[tokio::test]
    async fn test_should_count_orwell_books_while_removing() {
        let catalog_svc = memory_service();
        let first = catalog_svc.add_book(&BookDto::new("Animal Farm", "Orwell", 1945, "Satire")).await.expect("should add book");
        let second = catalog_svc.add_book(&BookDto::new("Nineteen Eighty-Four", "Orwell", 1949, "Dystopia")).await.expect("should add book");
        assert_eq!(2, catalog_svc.count_books_by_author("Orwell").await.expect("should count"));

        assert!(catalog_svc.remove_book(first.id.as_deref().expect("id")).await.expect("should remove"));
        assert_eq!(1, catalog_svc.count_books_by_author("Orwell").await.expect("should count"));

        assert!(catalog_svc.remove_book(second.id.as_deref().expect("id")).await.expect("should remove"));
        assert!(catalog_svc.find_books_by_author("Orwell").await.expect("should find").is_empty());
    }
}
