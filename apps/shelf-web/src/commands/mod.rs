//! # Commands Module
//!
//! All HTTP handlers.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports, health)
//! ├── forms.rs    ◄─── HTML page and form submissions
//! └── books.rs    ◄─── JSON API over the same registry
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Browser                                                                │
//! │  ───────                                                                │
//! │  <form method="post" action="/books/update">                            │
//! │    title=1984&author=G.+Orwell&year=1949&genre=Dystopian                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  async fn submit_update(                                                │
//! │      State(app): State<AppState>,   ◄── Injected by axum                │
//! │      Form(input): Form<BookUpdate>, ◄── From the form body              │
//! │  ) -> Html<String>                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  registry.update() → status line → re-rendered page                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::response::IntoResponse;

pub mod books;
pub mod forms;

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    "OK"
}
