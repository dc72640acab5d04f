use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::books::dto::BookDto;
use crate::core::command::CommandError;

// BookListResponse is shared by every command that answers with a list of books
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct BookListResponse {
    pub books: Vec<BookDto>,
}

impl BookListResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }

    // An empty list is reported as not found rather than as an empty success.
    pub fn non_empty<F>(books: Vec<BookDto>, not_found_message: F) -> Result<Self, CommandError>
        where F: FnOnce() -> String {
        if books.is_empty() {
            let message = not_found_message();
            debug!(message = message.as_str(), "no books matched");
            return Err(CommandError::not_found(message.as_str()));
        }
        Ok(Self::new(books))
    }
}
