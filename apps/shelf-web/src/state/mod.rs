//! # State Module
//!
//! Shared state for the HTTP handlers.
//!
//! ## One State Type per Concern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                AppState (Router::with_state)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                    │ FromRef                   │ FromRef                │
//! │                    ▼                           ▼                        │
//! │  ┌────────────────────────────┐  ┌────────────────────────────────┐    │
//! │  │   RegistryState            │  │   StatusState                  │    │
//! │  │   Arc<Mutex<BookRegistry>> │  │   Arc<Mutex<StatusLine>>       │    │
//! │  │                            │  │   + clear delay (timer task)   │    │
//! │  └────────────────────────────┘  └────────────────────────────────┘    │
//! │                                                                         │
//! │  Handlers extract only the state they need:                            │
//! │    list_books(State<RegistryState>)                                    │
//! │    current_status(State<StatusState>)                                  │
//! │    submit_update(State<AppState>)       ◄── needs both                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod registry;
mod status;

use axum::extract::FromRef;
use shelf_core::BookRegistry;

use crate::config::AppConfig;

pub use registry::RegistryState;
pub use status::StatusState;

/// Everything the router shares between requests.
#[derive(Debug, Clone)]
pub struct AppState {
    pub registry: RegistryState,
    pub status: StatusState,
}

impl AppState {
    /// Creates state holding `registry`.
    pub fn new(registry: BookRegistry, config: &AppConfig) -> Self {
        AppState {
            registry: RegistryState::new(registry),
            status: StatusState::new(config.feedback.clear_after()),
        }
    }

    /// Creates state holding the seed books.
    pub fn seeded(config: &AppConfig) -> Self {
        Self::new(BookRegistry::seeded(), config)
    }
}

impl FromRef<AppState> for RegistryState {
    fn from_ref(state: &AppState) -> Self {
        state.registry.clone()
    }
}

impl FromRef<AppState> for StatusState {
    fn from_ref(state: &AppState) -> Self {
        state.status.clone()
    }
}
