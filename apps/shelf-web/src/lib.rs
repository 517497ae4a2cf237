//! # Shelf Web
//!
//! HTTP surface for the book list editor: an HTML page with an update form
//! and a remove form, plus a small JSON API over the same registry.
//!
//! ## Module Organization
//! ```text
//! shelf_web/
//! ├── lib.rs          ◄─── You are here (router, startup)
//! ├── config.rs       ◄─── AppConfig (TOML + environment)
//! ├── error.rs        ◄─── ApiError, ServerError
//! ├── page.rs         ◄─── HTML page shell
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState + FromRef impls
//! │   ├── registry.rs ◄─── RegistryState (the book list)
//! │   └── status.rs   ◄─── StatusState (status line + clear timers)
//! └── commands/
//!     ├── mod.rs      ◄─── health
//!     ├── forms.rs    ◄─── index_page, submit_update, submit_remove
//!     └── books.rs    ◄─── JSON list/update/remove/status
//! ```
//!
//! ## Routes
//! | Method | Path                 | Command          |
//! |--------|----------------------|------------------|
//! | GET    | `/`                  | `index_page`     |
//! | POST   | `/books/update`      | `submit_update`  |
//! | POST   | `/books/remove`      | `submit_remove`  |
//! | GET    | `/api/books`         | `list_books`     |
//! | POST   | `/api/books/update`  | `update_book`    |
//! | POST   | `/api/books/remove`  | `remove_book`    |
//! | GET    | `/api/status`        | `current_status` |
//! | GET    | `/health`            | `health`         |

pub mod commands;
pub mod config;
pub mod error;
pub mod page;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::error::ServerError;
use crate::state::AppState;

/// Builds the router over `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(commands::forms::index_page))
        .route("/books/update", post(commands::forms::submit_update))
        .route("/books/remove", post(commands::forms::submit_remove))
        .route("/api/books", get(commands::books::list_books))
        .route("/api/books/update", post(commands::books::update_book))
        .route("/api/books/remove", post(commands::books::remove_book))
        .route("/api/status", get(commands::books::current_status))
        .route("/health", get(commands::health))
        .with_state(state)
}

/// Runs the server until ctrl-c.
///
/// ## Startup Sequence
/// 1. Seed the registry
/// 2. Bind the listener
/// 3. Serve with graceful shutdown on ctrl-c
pub async fn serve(config: AppConfig) -> Result<(), ServerError> {
    let state = AppState::seeded(&config);
    let app = router(state);

    let bind_addr = config.server.bind_address();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: bind_addr.clone(),
            source,
        })?;

    info!(addr = %bind_addr, "Shelf server started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("Shelf server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shelf_web=trace` - Show trace for this crate only
/// - Default: INFO, DEBUG for shelf crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shelf_web=debug,shelf_core=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    /// Serves a seeded router on an ephemeral port.
    async fn spawn_app() -> std::net::SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = router(AppState::seeded(&AppConfig::default()));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    /// Sends one request and returns the raw response.
    async fn send(addr: std::net::SocketAddr, method: &str, path: &str, body: &str) -> String {
        let mut stream = TcpStream::connect(addr).await.unwrap();
        let request = format!(
            "{method} {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\
             Content-Type: application/json\r\nContent-Length: {}\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(request.as_bytes()).await.unwrap();

        let mut response = String::new();
        stream.read_to_string(&mut response).await.unwrap();
        response
    }

    #[tokio::test]
    async fn test_routes_serve_health_and_page() {
        let addr = spawn_app().await;

        let health = send(addr, "GET", "/health", "").await;
        assert!(health.starts_with("HTTP/1.1 200"));
        assert!(health.ends_with("OK"));

        let page = send(addr, "GET", "/", "").await;
        assert!(page.starts_with("HTTP/1.1 200"));
        assert!(page.contains(r#"id="booksTableBody""#));
    }

    #[tokio::test]
    async fn test_json_update_round_trip() {
        let addr = spawn_app().await;

        let listed = send(addr, "GET", "/api/books", "").await;
        assert!(listed.contains(r#""year":1949"#));

        let body = r#"{"title":"1984","author":"G. Orwell","year":1949,"genre":"Dystopian"}"#;
        let updated = send(addr, "POST", "/api/books/update", body).await;
        assert!(updated.starts_with("HTTP/1.1 200"));
        assert!(updated.contains(r#""author":"G. Orwell""#));

        let rejected = send(addr, "POST", "/api/books/update", "{").await;
        assert!(rejected.starts_with("HTTP/1.1 400"));
        assert!(rejected.contains(r#""code":"VALIDATION_ERROR""#));

        let missing = send(addr, "POST", "/api/books/remove", r#"{"title":"Dune"}"#).await;
        assert!(missing.starts_with("HTTP/1.1 404"));
        assert!(missing.contains(r#""code":"NOT_FOUND""#));
    }
}
