use axum::{
    body::HttpBody,
    BoxError,
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Router,
};
use serde_json::Value;
use tracing::info;
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::book_list_response::BookListResponse;
use crate::catalog::command::count_books_by_author_cmd::{CountBooksByAuthorCommand, CountBooksByAuthorCommandRequest, CountBooksByAuthorCommandResponse};
use crate::catalog::command::find_books_before_year_cmd::{FindBooksBeforeYearCommand, FindBooksBeforeYearCommandRequest};
use crate::catalog::command::find_books_by_author_cmd::{FindBooksByAuthorCommand, FindBooksByAuthorCommandRequest};
use crate::catalog::command::find_books_by_genre_cmd::{FindBooksByGenreCommand, FindBooksByGenreCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest, ListBooksOrder};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::search_books_by_title_cmd::{SearchBooksByTitleCommand, SearchBooksByTitleCommandRequest};
use crate::catalog::command::search_books_by_title_or_author_cmd::{SearchBooksByTitleOrAuthorCommand, SearchBooksByTitleOrAuthorCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

pub const BASE_PATH: &str = "/api/books";

// routes builds the catalog router, generic over the request body so it can be
// served by hyper directly or behind the lambda runtime.
pub fn routes<B>(state: AppState) -> Router<(), B>
    where B: HttpBody + Send + 'static,
          B::Data: Send,
          B::Error: Into<BoxError> {
    info!(branch = state.config.branch_id.as_str(), store = ?state.config.store, "building catalog routes");
    let books = Router::new()
        .route("/", get(list_books).post(add_book))
        .route("/:id", get(find_book_by_id).put(update_book).delete(remove_book))
        .route("/by-author/:author", get(find_books_by_author))
        .route("/by-genre/:genre", get(find_books_by_genre))
        .route("/search/title", get(search_books_by_title))
        .route("/before/:year", get(find_books_before_year))
        .route("/count/author/:author", get(count_books_by_author))
        .route("/sorted", get(list_books_by_year))
        .route("/search/title-or-author", get(search_books_by_title_or_author));
    Router::new()
        .nest(BASE_PATH, books)
        .with_state(state)
}

pub(crate) async fn list_books(
    State(state): State<AppState>) -> Result<Json<BookListResponse>, ServerError> {
    let req = ListBooksCommandRequest::new(ListBooksOrder::Native);
    let res = ListBooksCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_book_by_id(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest::new(book_id);
    let res = GetBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    json: Json<Value>) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let book: BookDto = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let req = UpdateBookCommandRequest::new(book_id.as_str(), book);
    let res = UpdateBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn remove_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let req = RemoveBookCommandRequest::new(book_id);
    let res = RemoveBookCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_books_by_author(
    State(state): State<AppState>,
    Path(author): Path<String>) -> Result<Json<BookListResponse>, ServerError> {
    let req = FindBooksByAuthorCommandRequest::new(author.as_str());
    let res = FindBooksByAuthorCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_books_by_genre(
    State(state): State<AppState>,
    Path(genre): Path<String>) -> Result<Json<BookListResponse>, ServerError> {
    let req = FindBooksByGenreCommandRequest::new(genre.as_str());
    let res = FindBooksByGenreCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn search_books_by_title(
    State(state): State<AppState>,
    Query(req): Query<SearchBooksByTitleCommandRequest>) -> Result<Json<BookListResponse>, ServerError> {
    let res = SearchBooksByTitleCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_books_before_year(
    State(state): State<AppState>,
    Path(year): Path<String>) -> Result<Json<BookListResponse>, ServerError> {
    let req = FindBooksBeforeYearCommandRequest::new(year.as_str());
    let res = FindBooksBeforeYearCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn count_books_by_author(
    State(state): State<AppState>,
    Path(author): Path<String>) -> Result<Json<CountBooksByAuthorCommandResponse>, ServerError> {
    let req = CountBooksByAuthorCommandRequest::new(author.as_str());
    let res = CountBooksByAuthorCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn list_books_by_year(
    State(state): State<AppState>) -> Result<Json<BookListResponse>, ServerError> {
    let req = ListBooksCommandRequest::new(ListBooksOrder::YearDesc);
    let res = ListBooksCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn search_books_by_title_or_author(
    State(state): State<AppState>,
    Query(req): Query<SearchBooksByTitleOrAuthorCommandRequest>) -> Result<Json<BookListResponse>, ServerError> {
    let res = SearchBooksByTitleOrAuthorCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}
