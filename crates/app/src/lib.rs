//! # rolodex-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** the storage adapter implements
//!   (driven/outbound port):
//!   - [`ClientRepository`](ports::ClientRepository) — access to the
//!     process-lifetime record collection
//! - Define the **driving/inbound port** as a use-case struct:
//!   - [`ClientService`](services::client_service::ClientService) — list,
//!     get, update, and the filtered-view delete
//! - Orchestrate domain objects without knowing *how* the collection is
//!   held or served
//!
//! ## Dependency rule
//! Depends on `rolodex-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
