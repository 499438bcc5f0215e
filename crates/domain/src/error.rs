//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`RolodexError`] via `#[from]` (no `String` variants). Exactly one
//! request-path condition exists in this system: a lookup by id that
//! matches nothing. Startup-only failures (seed file, configuration) live
//! with the code that raises them and never reach this enum.

use crate::id::ClientId;

/// Top-level error for rolodex operations.
#[derive(Debug, thiserror::Error)]
pub enum RolodexError {
    /// A lookup by id matched no stored record.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

/// Raised when no record's id loosely matches the requested one.
#[derive(Debug, thiserror::Error)]
#[error("no client with id {id}")]
pub struct NotFoundError {
    /// The identifier the caller asked for, as parsed from the request.
    pub id: ClientId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_the_requested_id_in_the_message() {
        let err = RolodexError::from(NotFoundError {
            id: ClientId::Int(9999),
        });
        assert_eq!(err.to_string(), "no client with id 9999");
    }
}
