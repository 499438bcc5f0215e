//! # rolodex-adapter-storage-memory
//!
//! In-memory storage adapter — the Data Store.
//!
//! ## Responsibilities
//! - Implement the [`ClientRepository`](rolodex_app::ports::ClientRepository)
//!   port over an ordered, process-lifetime `Vec` of records
//! - Load the static seed document (a JSON array of `{id, name, email}`
//!   objects) exactly once at startup
//! - Guard the collection with a lock so concurrently running handlers keep
//!   the read-modify-write semantics of a one-request-at-a-time model
//!
//! Mutations never leave the process: updates rewrite records in place, and
//! nothing is ever written back to the seed document.
//!
//! ## Dependency rule
//! Depends on `rolodex-app` (for the port trait) and `rolodex-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

pub mod client_repo;
pub mod seed;

pub use client_repo::MemoryClientRepository;
pub use seed::{Config, SeedError};
