//! Seed document loading — the static external source of records.

use std::path::PathBuf;

use rolodex_domain::client::Client;

use crate::client_repo::MemoryClientRepository;

/// Configuration for the in-memory storage adapter.
pub struct Config {
    /// Path to the seed document (a JSON array of `{id, name, email}`
    /// objects).
    pub seed_path: PathBuf,
}

impl Config {
    /// Build a [`MemoryClientRepository`] from this configuration.
    ///
    /// Reads and parses the seed document exactly once; the resulting
    /// collection is all the data the process will ever serve. A missing or
    /// malformed document is a startup failure, not an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if the document cannot be read or parsed.
    pub fn build(self) -> Result<MemoryClientRepository, SeedError> {
        let content = std::fs::read_to_string(&self.seed_path)?;
        let records = parse(&content)?;
        Ok(MemoryClientRepository::new(records))
    }
}

/// Parse seed document content into records, preserving array order.
///
/// # Errors
///
/// Returns [`SeedError::Json`] when the content is not a JSON array of
/// `{id, name, email}` objects.
pub fn parse(content: &str) -> Result<Vec<Client>, SeedError> {
    Ok(serde_json::from_str(content)?)
}

/// Errors raised while loading the seed document.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The seed document could not be read.
    #[error("failed to read seed document")]
    Io(#[from] std::io::Error),

    /// The seed document is not a JSON array of `{id, name, email}` objects.
    #[error("failed to parse seed document")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolodex_app::ports::ClientRepository;
    use rolodex_domain::id::ClientId;

    const SEED: &str = r#"[
        { "id": 1, "name": "Bruno Carvalho", "email": "bruno@mail.com" },
        { "id": 2, "name": "Maria Silva", "email": "maria@mail.com" },
        { "id": "40", "name": "Nina Rocha", "email": "nina@mail.com" }
    ]"#;

    #[test]
    fn should_parse_seed_array_preserving_order() {
        let records = parse(SEED).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].id, ClientId::Int(1));
        assert_eq!(records[2].id, ClientId::Text("40".to_owned()));
    }

    #[test]
    fn should_reject_document_that_is_not_an_array() {
        let result = parse(r#"{"id": 1}"#);
        assert!(matches!(result, Err(SeedError::Json(_))));
    }

    #[test]
    fn should_reject_records_with_missing_fields() {
        let result = parse(r#"[{"id": 1, "name": "Bruno"}]"#);
        assert!(matches!(result, Err(SeedError::Json(_))));
    }

    #[test]
    fn should_report_io_error_when_document_is_missing() {
        let config = Config {
            seed_path: PathBuf::from("definitely-missing-seed.json"),
        };
        assert!(matches!(config.build(), Err(SeedError::Io(_))));
    }

    #[tokio::test]
    async fn should_build_repository_from_disk() {
        let path = std::env::temp_dir().join(format!("rolodex-seed-{}.json", std::process::id()));
        std::fs::write(&path, SEED).unwrap();

        let repo = Config {
            seed_path: path.clone(),
        }
        .build()
        .unwrap();
        std::fs::remove_file(&path).unwrap();

        let all = repo.get_all().await;
        assert_eq!(all.len(), 3);
        assert_eq!(all[1].name, "Maria Silva");
    }
}
