use crate::books::dto::BookDto;
use crate::core::library::{LibraryError, LibraryResult};

/// Returns true for a non-empty value made only of ASCII digits.
pub fn is_numeric(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

pub fn validate_author(author: &str) -> LibraryResult<()> {
    validate_name("author", author)
}

pub fn validate_genre(genre: &str) -> LibraryResult<()> {
    validate_name("genre", genre)
}

// author and genre names must not be purely numeric
fn validate_name(param: &str, value: &str) -> LibraryResult<()> {
    if is_numeric(value) {
        return Err(LibraryError::validation(
            format!("the {} parameter must not consist only of digits", param).as_str(), Some(param.to_string())));
    }
    Ok(())
}

/// Parses a textual year threshold. Anything but ASCII digits is rejected before
/// parsing, and so is a number too large for a year.
pub fn parse_year(year: &str) -> LibraryResult<i32> {
    if !is_numeric(year) {
        return Err(LibraryError::validation("the year must be a valid number", Some("year".to_string())));
    }
    year.parse::<i32>().map_err(|_| LibraryError::validation(
        format!("the year {} is out of range", year).as_str(), Some("year".to_string())))
}

// the store assigns identity, clients never do
pub fn validate_new_book(book: &BookDto) -> LibraryResult<()> {
    if book.id.is_some() {
        return Err(LibraryError::validation(
            "do not include the id field, the store assigns it", Some("id".to_string())));
    }
    Ok(())
}
