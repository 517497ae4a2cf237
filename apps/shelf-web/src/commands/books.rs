//! # Book API Commands
//!
//! JSON access to the registry for scripts and tests. These commands share
//! the registry with the HTML forms but leave the status line alone.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use shelf_core::{Book, BookRegistry, BookRemoval, BookUpdate, StatusMessage};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{RegistryState, StatusState};

/// Book list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BooksResponse {
    pub books: Vec<Book>,
    pub count: usize,
}

impl From<&BookRegistry> for BooksResponse {
    fn from(registry: &BookRegistry) -> Self {
        BooksResponse {
            books: registry.books().to_vec(),
            count: registry.len(),
        }
    }
}

/// Lists all books in display order.
pub async fn list_books(State(registry): State<RegistryState>) -> Json<BooksResponse> {
    debug!("list_books command");
    Json(registry.with_registry(|r| BooksResponse::from(r)))
}

/// Updates author, year and genre of an existing book.
///
/// ## Returns
/// - 200 with the updated list
/// - 400 `VALIDATION_ERROR` with every field message
/// - 404 `NOT_FOUND` if no title matches
pub async fn update_book(
    State(registry): State<RegistryState>,
    body: Result<Json<BookUpdate>, JsonRejection>,
) -> Result<Json<BooksResponse>, ApiError> {
    let Json(input) = body?;
    debug!(title = %input.title, "update_book command");

    let response = registry.with_registry_mut(|r| {
        r.update(&input)?;
        Ok::<BooksResponse, ApiError>(BooksResponse::from(&*r))
    })?;

    info!(title = %input.title.trim(), "Book updated");
    Ok(Json(response))
}

/// Removes every book matching the title.
pub async fn remove_book(
    State(registry): State<RegistryState>,
    body: Result<Json<BookRemoval>, JsonRejection>,
) -> Result<Json<BooksResponse>, ApiError> {
    let Json(input) = body?;
    debug!(title = %input.title, "remove_book command");

    let response = registry.with_registry_mut(|r| {
        let removed = r.remove(&input.title)?;
        debug!(removed, "Books removed");
        Ok::<BooksResponse, ApiError>(BooksResponse::from(&*r))
    })?;

    info!(title = %input.title.trim(), "Book removed");
    Ok(Json(response))
}

/// Returns the message on the status line, or `null`.
pub async fn current_status(State(status): State<StatusState>) -> Json<Option<StatusMessage>> {
    Json(status.current())
}
