pub mod service;
pub mod validation;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

// CatalogService is the stateless facade over the book store. List lookups return
// whatever the store matched, possibly nothing; deciding that an empty list is a
// not-found outcome is left to the commands.
#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn find_book_by_id(&self, id: &str) -> LibraryResult<BookDto>;
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn update_book(&self, id: &str, book: &BookDto) -> LibraryResult<BookDto>;
    async fn remove_book(&self, id: &str) -> LibraryResult<bool>;
    async fn find_books_by_author(&self, author: &str) -> LibraryResult<Vec<BookDto>>;
    async fn find_books_by_genre(&self, genre: &str) -> LibraryResult<Vec<BookDto>>;
    async fn search_books_by_title(&self, fragment: &str) -> LibraryResult<Vec<BookDto>>;
    async fn find_books_before_year(&self, year: i32) -> LibraryResult<Vec<BookDto>>;
    async fn count_books_by_author(&self, author: &str) -> LibraryResult<usize>;
    async fn list_books_by_year_desc(&self) -> LibraryResult<Vec<BookDto>>;
    async fn find_books_by_title_or_author(&self, fragment: &str, author: &str) -> LibraryResult<Vec<BookDto>>;
}
