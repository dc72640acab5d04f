pub mod ddb_book_repository;
pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    // exact, case-sensitive match on author
    async fn find_by_author(&self, author: &str) -> LibraryResult<Vec<BookEntity>>;

    // exact, case-sensitive match on genre
    async fn find_by_genre(&self, genre: &str) -> LibraryResult<Vec<BookEntity>>;

    async fn find_by_title_containing_ignore_case(&self, fragment: &str) -> LibraryResult<Vec<BookEntity>>;

    // books with publication year strictly less than year
    async fn find_by_year_less_than(&self, year: i32) -> LibraryResult<Vec<BookEntity>>;

    async fn count_by_author(&self, author: &str) -> LibraryResult<usize>;

    async fn find_all_order_by_year_desc(&self) -> LibraryResult<Vec<BookEntity>>;

    // title containing fragment (ignoring case) or author equal to author, each book once
    async fn find_by_title_or_author(&self, fragment: &str, author: &str) -> LibraryResult<Vec<BookEntity>>;
}
