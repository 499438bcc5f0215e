//! In-memory implementation of [`ClientRepository`].

use std::future::Future;

use tokio::sync::RwLock;

use rolodex_app::ports::ClientRepository;
use rolodex_domain::client::{Client, ClientDraft};
use rolodex_domain::id::ClientId;

/// The record collection behind a read/write lock.
///
/// The `Vec` preserves load order, which is also the order every snapshot
/// comes back in. Handlers run concurrently on the tokio runtime, so
/// `update` holds the write lock across its whole find-and-mutate sequence;
/// read operations clone a snapshot under the read lock.
pub struct MemoryClientRepository {
    records: RwLock<Vec<Client>>,
}

impl MemoryClientRepository {
    /// Create a repository owning the given records.
    #[must_use]
    pub fn new(records: Vec<Client>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

impl ClientRepository for MemoryClientRepository {
    fn get_all(&self) -> impl Future<Output = Vec<Client>> + Send {
        async move { self.records.read().await.clone() }
    }

    fn get_by_id(&self, id: ClientId) -> impl Future<Output = Option<Client>> + Send {
        async move {
            self.records
                .read()
                .await
                .iter()
                .find(|client| client.id.matches(&id))
                .cloned()
        }
    }

    fn update(
        &self,
        id: ClientId,
        draft: ClientDraft,
    ) -> impl Future<Output = Option<Client>> + Send {
        async move {
            let mut records = self.records.write().await;
            records
                .iter_mut()
                .find(|client| client.id.matches(&id))
                .map(|record| {
                    record.apply(draft);
                    record.clone()
                })
        }
    }

    fn excluding(&self, id: ClientId) -> impl Future<Output = Vec<Client>> + Send {
        async move {
            self.records
                .read()
                .await
                .iter()
                .filter(|client| !client.id.matches(&id))
                .cloned()
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: ClientId, name: &str, email: &str) -> Client {
        Client {
            id,
            name: name.to_owned(),
            email: email.to_owned(),
        }
    }

    fn setup() -> MemoryClientRepository {
        MemoryClientRepository::new(vec![
            record(ClientId::Int(1), "Bruno Carvalho", "bruno@mail.com"),
            record(ClientId::Int(2), "Maria Silva", "maria@mail.com"),
            record(ClientId::Text("40".to_owned()), "Nina Rocha", "nina@mail.com"),
        ])
    }

    #[tokio::test]
    async fn should_return_records_in_load_order() {
        let repo = setup();

        let all = repo.get_all().await;
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].id, ClientId::Int(1));
        assert_eq!(all[1].id, ClientId::Int(2));
        assert_eq!(all[2].id, ClientId::Text("40".to_owned()));
    }

    #[tokio::test]
    async fn should_find_record_when_id_matches_loosely() {
        let repo = setup();

        // Numeric selector against a text-typed stored id.
        let found = repo.get_by_id(ClientId::Int(40)).await.unwrap();
        assert_eq!(found.name, "Nina Rocha");

        // Text selector against a numeric stored id.
        let found = repo.get_by_id(ClientId::Text("2".to_owned())).await.unwrap();
        assert_eq!(found.name, "Maria Silva");
    }

    #[tokio::test]
    async fn should_return_none_when_no_id_matches() {
        let repo = setup();
        assert!(repo.get_by_id(ClientId::Int(9999)).await.is_none());
    }

    #[tokio::test]
    async fn should_update_matching_record_in_place() {
        let repo = setup();

        let updated = repo
            .update(
                ClientId::Int(1),
                ClientDraft {
                    name: "Alice".to_owned(),
                    email: "a@x.com".to_owned(),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.id, ClientId::Int(1));
        assert_eq!(updated.name, "Alice");

        let all = repo.get_all().await;
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name, "Alice");
        assert_eq!(all[0].email, "a@x.com");
    }

    #[tokio::test]
    async fn should_leave_collection_untouched_when_updating_absent_id() {
        let repo = setup();

        let result = repo
            .update(
                ClientId::Int(9999),
                ClientDraft {
                    name: "Alice".to_owned(),
                    email: "a@x.com".to_owned(),
                },
            )
            .await;

        assert!(result.is_none());
        assert_eq!(repo.get_all().await, setup().get_all().await);
    }

    #[tokio::test]
    async fn should_exclude_matches_from_view_without_mutating() {
        let repo = setup();

        let view = repo.excluding(ClientId::Text("1".to_owned())).await;
        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|client| !client.id.matches(&ClientId::Int(1))));

        // The backing collection still holds every record.
        assert_eq!(repo.get_all().await.len(), 3);
    }

    #[tokio::test]
    async fn should_return_full_view_when_excluding_absent_id() {
        let repo = setup();

        let view = repo.excluding(ClientId::Int(9999)).await;
        assert_eq!(view.len(), 3);
    }

    #[tokio::test]
    async fn should_touch_only_first_match_when_ids_are_duplicated() {
        let repo = MemoryClientRepository::new(vec![
            record(ClientId::Int(7), "First", "first@mail.com"),
            record(ClientId::Int(7), "Second", "second@mail.com"),
        ]);

        let found = repo.get_by_id(ClientId::Int(7)).await.unwrap();
        assert_eq!(found.name, "First");

        repo.update(
            ClientId::Int(7),
            ClientDraft {
                name: "Renamed".to_owned(),
                email: "renamed@mail.com".to_owned(),
            },
        )
        .await
        .unwrap();

        let all = repo.get_all().await;
        assert_eq!(all[0].name, "Renamed");
        assert_eq!(all[1].name, "Second");

        // Exclusion, by contrast, drops every match from the view.
        assert!(repo.excluding(ClientId::Int(7)).await.is_empty());
    }
}
