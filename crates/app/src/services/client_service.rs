//! Client service — use-cases over the record collection.

use rolodex_domain::client::{Client, ClientDraft};
use rolodex_domain::error::{NotFoundError, RolodexError};
use rolodex_domain::id::ClientId;

use crate::ports::ClientRepository;

/// Application service for the client operations.
///
/// Note the asymmetry inherited from the system's contract: update mutates
/// the stored collection, while delete only produces a filtered view and
/// create never reaches this layer at all (it echoes its input and has no
/// collection operation to perform).
pub struct ClientService<R> {
    repo: R,
}

impl<R: ClientRepository> ClientService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Full collection, in load order.
    pub async fn list_clients(&self) -> Vec<Client> {
        self.repo.get_all().await
    }

    /// Look up a client by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`RolodexError::NotFound`] when no record's id loosely
    /// matches `id`.
    #[tracing::instrument(skip(self))]
    pub async fn get_client(&self, id: ClientId) -> Result<Client, RolodexError> {
        self.repo
            .get_by_id(id.clone())
            .await
            .ok_or_else(|| NotFoundError { id }.into())
    }

    /// Overwrite the contact fields of an existing client.
    ///
    /// # Errors
    ///
    /// Returns [`RolodexError::NotFound`] when no record's id loosely
    /// matches `id`; the collection is untouched in that case.
    #[tracing::instrument(skip(self, draft))]
    pub async fn update_client(
        &self,
        id: ClientId,
        draft: ClientDraft,
    ) -> Result<Client, RolodexError> {
        self.repo
            .update(id.clone(), draft)
            .await
            .ok_or_else(|| NotFoundError { id }.into())
    }

    /// The collection as it would look with `id` removed.
    ///
    /// Removal is never persisted: the stored collection keeps every record,
    /// and an absent id yields the full collection unchanged.
    #[tracing::instrument(skip(self))]
    pub async fn delete_clients(&self, id: ClientId) -> Vec<Client> {
        self.repo.excluding(id).await
    }
}
