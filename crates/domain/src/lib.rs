//! # rolodex-domain
//!
//! Pure domain model for the rolodex client-record service.
//!
//! ## Responsibilities
//! - Foundational types: the [`ClientId`](id::ClientId) identifier and error
//!   conventions
//! - Define the **Client** record (`id`, `name`, `email`) and the payload
//!   shape shared by create/update requests
//! - Contain all identifier-matching logic (loose equality between numeric
//!   and text ids lives here and nowhere else)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod client;
pub mod error;
pub mod id;
