//! Shared application state for axum handlers.

use std::sync::Arc;

use rolodex_app::ports::ClientRepository;
use rolodex_app::services::client_service::ClientService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the repository itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned per request.
pub struct AppState<R> {
    /// Client use-case service.
    pub client_service: Arc<ClientService<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            client_service: Arc::clone(&self.client_service),
        }
    }
}

impl<R> AppState<R>
where
    R: ClientRepository + Send + Sync + 'static,
{
    /// Create a new application state from the service instance.
    pub fn new(client_service: ClientService<R>) -> Self {
        Self {
            client_service: Arc::new(client_service),
        }
    }
}
