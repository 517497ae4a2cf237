//! # Form Commands
//!
//! The HTML page and the two form submissions behind it.
//!
//! ## Submission Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  POST /books/update ──► registry.update()                               │
//! │                              │                                          │
//! │              ┌───────────────┴───────────────┐                          │
//! │              ▼                               ▼                          │
//! │           Ok(book)                     Err(CoreError)                   │
//! │              │                               │                          │
//! │   status: "Book "…" updated          status: error text                 │
//! │            successfully"             forms keep submitted values        │
//! │   forms reset                                │                          │
//! │              └───────────────┬───────────────┘                          │
//! │                              ▼                                          │
//! │                   page re-rendered from registry                        │
//! │                                                                         │
//! │  POST /books/remove follows the same shape.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::State;
use axum::response::Html;
use axum::Form;
use shelf_core::{render, BookRemoval, BookUpdate};
use tracing::{debug, info, warn};

use crate::page::{render_page, FormDrafts};
use crate::state::AppState;

/// Serves the page with empty forms.
pub async fn index_page(State(app): State<AppState>) -> Html<String> {
    debug!("index_page command");
    page(&app, &FormDrafts::default())
}

/// Handles the update form.
pub async fn submit_update(
    State(app): State<AppState>,
    Form(input): Form<BookUpdate>,
) -> Html<String> {
    debug!(title = %input.title, "submit_update command");
    let title = input.title.trim();

    let outcome = app
        .registry
        .with_registry_mut(|r| r.update(&input).map(|_| ()));

    let drafts = match outcome {
        Ok(()) => {
            info!(title = %title, "Book updated");
            app.status
                .success(format!("Book \"{title}\" updated successfully"));
            FormDrafts::default()
        }
        Err(e) => {
            warn!(title = %title, error = %e, "Update rejected");
            app.status.failure(&e);
            FormDrafts {
                update: input.clone(),
                ..FormDrafts::default()
            }
        }
    };

    page(&app, &drafts)
}

/// Handles the remove form.
pub async fn submit_remove(
    State(app): State<AppState>,
    Form(input): Form<BookRemoval>,
) -> Html<String> {
    debug!(title = %input.title, "submit_remove command");
    let title = input.title.trim();

    let outcome = app.registry.with_registry_mut(|r| r.remove(&input.title));

    let drafts = match outcome {
        Ok(removed) => {
            info!(title = %title, removed, "Book removed");
            app.status
                .success(format!("Book \"{title}\" removed successfully"));
            FormDrafts::default()
        }
        Err(e) => {
            warn!(title = %title, error = %e, "Remove rejected");
            app.status.failure(&e);
            FormDrafts {
                removal: input.clone(),
                ..FormDrafts::default()
            }
        }
    };

    page(&app, &drafts)
}

fn page(app: &AppState, drafts: &FormDrafts) -> Html<String> {
    let table = app.registry.with_registry(render);
    let status = app.status.current();
    Html(render_page(&table, status.as_ref(), drafts))
}
