use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::handler::{self, AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::healthcheck))
        .route("/books", get(handler::list_books))
        .route("/books", post(handler::create_book))
        .route("/books/:id", get(handler::get_book))
        .route("/books/:id", delete(handler::delete_book))
        .route("/emoji", get(handler::emoji))
}
