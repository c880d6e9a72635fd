//! HTTP handlers for the bookshelf API.
//!
//! Every handler borrows the store connection from [`AppState`], binds a
//! [`BookRepo`] to it for the duration of the request, and renders the
//! result as plain text.

use std::sync::Arc;

use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::db::Database;
use crate::model::Book;
use crate::repo::BookRepo;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}

#[derive(Debug, Deserialize)]
pub struct CreateBookParams {
    pub title: Option<String>,
    pub author_name: Option<String>,
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, ()).into_response()
}

fn bad_request(msg: &str) -> Response {
    (StatusCode::BAD_REQUEST, msg.to_string()).into_response()
}

fn internal_error(msg: &str) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, msg.to_string()).into_response()
}

pub async fn healthcheck() -> impl IntoResponse {
    tracing::info!("got healthcheck request");
    "ok"
}

pub async fn emoji() -> impl IntoResponse {
    ":)"
}

pub async fn list_books(State(state): State<AppState>) -> Response {
    let repo = BookRepo::new(state.db.connection());

    match repo.all().await {
        Ok(books) => {
            let lines: Vec<String> = books.iter().map(Book::to_string).collect();
            (StatusCode::OK, lines.join("\n")).into_response()
        }
        Err(e) => {
            tracing::error!("failed to list books: {}", e);
            internal_error("failed to list books")
        }
    }
}

pub async fn get_book(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    let repo = BookRepo::new(state.db.connection());

    match repo.find(id).await {
        Ok(Some(book)) => (StatusCode::OK, book.to_string()).into_response(),
        Ok(None) => not_found(),
        Err(e) => {
            tracing::error!("failed to get book {}: {}", id, e);
            internal_error("failed to get book")
        }
    }
}

pub async fn create_book(
    State(state): State<AppState>,
    Form(params): Form<CreateBookParams>,
) -> Response {
    let (title, author_name) = match (params.title, params.author_name) {
        (Some(title), Some(author_name)) => (title, author_name),
        _ => return bad_request("title and author_name are required"),
    };

    let repo = BookRepo::new(state.db.connection());
    let book = Book::new(&title, &author_name);

    match repo.create(&book).await {
        Ok(()) => (StatusCode::CREATED, "created").into_response(),
        Err(e) => {
            tracing::error!("failed to create book: {}", e);
            internal_error("failed to create book")
        }
    }
}

pub async fn delete_book(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    let repo = BookRepo::new(state.db.connection());

    match repo.delete(id).await {
        Ok(()) => (StatusCode::OK, ()).into_response(),
        Err(e) => {
            tracing::error!("failed to delete book {}: {}", id, e);
            internal_error("failed to delete book")
        }
    }
}
