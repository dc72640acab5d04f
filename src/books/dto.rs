use serde::{Deserialize, Serialize};

// BookDto is the data transfer object for the Catalog service, used for requests and responses.
// The id is absent on creation requests and present everywhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub genre: String,
}

impl BookDto {
    pub fn new(title: &str, author: &str, year: i32, genre: &str) -> BookDto {
        BookDto {
            id: None,
            title: title.to_string(),
            author: author.to_string(),
            year,
            genre: genre.to_string(),
        }
    }

    pub fn with_id(mut self, id: &str) -> BookDto {
        self.id = Some(id.to_string());
        self
    }
}
