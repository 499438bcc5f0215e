//! # rolodex-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum) — the Resource Router.
//!
//! ## Responsibilities
//! - Serve the **JSON resource API** for client records
//!   (`/clients`, `/clients/{id}`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses: every success is a plain
//!   200 with a JSON body, and a missed lookup is a 404 with an empty body
//! - Leave malformed bodies, unknown routes, and wrong methods to axum's
//!   built-in rejections
//!
//! ## Dependency rule
//! Depends on `rolodex-app` (for the port trait and service) and
//! `rolodex-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
