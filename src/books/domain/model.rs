use serde::{Deserialize, Serialize};

// BookEntity is the persisted book record. The store assigns book_id on first save
// and it never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_id: Option<String>,
    pub title: String,
    pub author: String,
    pub publication_year: i32,
    pub genre: String,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, publication_year: i32, genre: &str) -> Self {
        Self {
            book_id: None,
            title: title.to_string(),
            author: author.to_string(),
            publication_year,
            genre: genre.to_string(),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.book_id.as_deref()
    }

    pub(crate) fn title_contains_ignore_case(&self, lower_fragment: &str) -> bool {
        self.title.to_lowercase().contains(lower_fragment)
    }
}
