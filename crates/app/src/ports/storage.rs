//! Storage port — access to the in-memory record collection.

use std::future::Future;

use rolodex_domain::client::{Client, ClientDraft};
use rolodex_domain::id::ClientId;

/// The Data Store: the ordered, process-lifetime collection of client
/// records, populated once at startup and never persisted back.
///
/// All id comparison is loose ([`ClientId::matches`]); methods that take an
/// id operate on the *first* matching record, since uniqueness of ids is
/// assumed but never enforced. Methods are infallible: the collection lives
/// in process memory and the only modeled error condition — not found — is
/// expressed through `Option` and filtering.
pub trait ClientRepository {
    /// Snapshot of every record, in load order.
    fn get_all(&self) -> impl Future<Output = Vec<Client>> + Send;

    /// First record whose id loosely matches `id`.
    fn get_by_id(&self, id: ClientId) -> impl Future<Output = Option<Client>> + Send;

    /// Rewrite the contact fields of the first record whose id loosely
    /// matches `id`, in place, returning the updated record. `None` when
    /// nothing matches; the collection is untouched in that case.
    fn update(
        &self,
        id: ClientId,
        draft: ClientDraft,
    ) -> impl Future<Output = Option<Client>> + Send;

    /// Snapshot of the collection without the records whose id loosely
    /// matches `id`. The backing collection itself is never modified —
    /// removal is a view, not a mutation.
    fn excluding(&self, id: ClientId) -> impl Future<Output = Vec<Client>> + Send;
}
