//! # Registry State
//!
//! Owns the one `BookRegistry` instance for the lifetime of the process.
//!
//! ## Thread Safety
//! The registry is wrapped in `Arc<Mutex<T>>` because:
//! 1. Every handler may read or modify it
//! 2. axum runs handlers concurrently on a multi-thread runtime
//! 3. An update must validate, look up and mutate under one lock
//!
//! Locks are held only for the synchronous closure passed in, never across
//! an `.await`.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use shelf_core::BookRegistry;

/// Shared handle to the book registry.
#[derive(Debug, Clone, Default)]
pub struct RegistryState {
    registry: Arc<Mutex<BookRegistry>>,
}

impl RegistryState {
    pub fn new(registry: BookRegistry) -> Self {
        RegistryState {
            registry: Arc::new(Mutex::new(registry)),
        }
    }

    /// Executes a function with read access to the registry.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let view = registry_state.with_registry(shelf_core::render);
    /// ```
    pub fn with_registry<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&BookRegistry) -> R,
    {
        f(&self.lock())
    }

    /// Executes a function with write access to the registry.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// registry_state.with_registry_mut(|r| r.remove("1984"))?;
    /// ```
    pub fn with_registry_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut BookRegistry) -> R,
    {
        f(&mut self.lock())
    }

    // Poison is ignored: update and remove validate before mutating.
    fn lock(&self) -> MutexGuard<'_, BookRegistry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_one_registry() {
        let state = RegistryState::new(BookRegistry::seeded());
        let other = state.clone();

        other.with_registry_mut(|r| r.remove("1984")).unwrap();

        assert_eq!(state.with_registry(BookRegistry::len), 2);
    }
}
