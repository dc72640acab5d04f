use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

// MemoryBookRepository keeps books in insertion order, which is the native order
// reported by find_all and used to break ties when sorting.
#[derive(Debug)]
pub struct MemoryBookRepository {
    books: RwLock<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: RwLock::new(vec![]),
        }
    }

    async fn filter<P>(&self, predicate: P) -> Vec<BookEntity>
        where P: Fn(&BookEntity) -> bool {
        self.books.read().await.iter()
            .filter(|b| predicate(b))
            .cloned()
            .collect()
    }
}

impl Default for MemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.read().await.clone())
    }

    async fn find_by_id(&self, id: &str) -> LibraryResult<Option<BookEntity>> {
        Ok(self.books.read().await.iter()
            .find(|b| b.id() == Some(id))
            .cloned())
    }

    async fn save(&self, entity: &BookEntity) -> LibraryResult<BookEntity> {
        let mut books = self.books.write().await;
        let mut saved = entity.clone();
        match entity.id() {
            Some(id) => {
                if let Some(existing) = books.iter_mut().find(|b| b.id() == Some(id)) {
                    *existing = saved.clone();
                } else {
                    books.push(saved.clone());
                }
            }
            None => {
                saved.book_id = Some(Uuid::new_v4().to_string());
                books.push(saved.clone());
            }
        }
        Ok(saved)
    }

    async fn delete_by_id(&self, id: &str) -> LibraryResult<()> {
        self.books.write().await.retain(|b| b.id() != Some(id));
        Ok(())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_author(&self, author: &str) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.filter(|b| b.author == author).await)
    }

    async fn find_by_genre(&self, genre: &str) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.filter(|b| b.genre == genre).await)
    }

    async fn find_by_title_containing_ignore_case(&self, fragment: &str) -> LibraryResult<Vec<BookEntity>> {
        let lower = fragment.to_lowercase();
        Ok(self.filter(|b| b.title_contains_ignore_case(lower.as_str())).await)
    }

    async fn find_by_year_less_than(&self, year: i32) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.filter(|b| b.publication_year < year).await)
    }

    async fn count_by_author(&self, author: &str) -> LibraryResult<usize> {
        Ok(self.books.read().await.iter().filter(|b| b.author == author).count())
    }

    async fn find_all_order_by_year_desc(&self) -> LibraryResult<Vec<BookEntity>> {
        let mut books = self.books.read().await.clone();
        // sort_by is stable, so equal years keep insertion order
        books.sort_by(|a, b| b.publication_year.cmp(&a.publication_year));
        Ok(books)
    }

    async fn find_by_title_or_author(&self, fragment: &str, author: &str) -> LibraryResult<Vec<BookEntity>> {
        let lower = fragment.to_lowercase();
        Ok(self.filter(|b| b.title_contains_ignore_case(lower.as_str()) || b.author == author).await)
    }
}
