//! Client — a contact record with an externally assigned identifier.

use serde::{Deserialize, Serialize};

use crate::id::ClientId;

/// A client record as loaded from the seed document.
///
/// `name` and `email` carry no content rules: whatever the seed document or
/// a request body provides is stored verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub email: String,
}

impl Client {
    /// Overwrite the contact fields from `draft`. The id never changes.
    pub fn apply(&mut self, draft: ClientDraft) {
        self.name = draft.name;
        self.email = draft.email;
    }
}

/// Payload accepted by the create and update operations.
///
/// Serializes as well as deserializes because the create operation echoes
/// the submitted draft back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientDraft {
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Client {
        Client {
            id: ClientId::Int(1),
            name: "Bruno Carvalho".to_owned(),
            email: "bruno@mail.com".to_owned(),
        }
    }

    #[test]
    fn should_apply_draft_fields_and_keep_id() {
        let mut client = sample();
        client.apply(ClientDraft {
            name: "Alice".to_owned(),
            email: "a@x.com".to_owned(),
        });

        assert_eq!(client.id, ClientId::Int(1));
        assert_eq!(client.name, "Alice");
        assert_eq!(client.email, "a@x.com");
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let client = sample();
        let json = serde_json::to_string(&client).unwrap();
        let parsed: Client = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, client);
    }

    #[test]
    fn should_serialize_numeric_id_as_json_number() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"name":"Bruno Carvalho","email":"bruno@mail.com"}"#
        );
    }

    #[test]
    fn should_deserialize_record_with_text_id() {
        let parsed: Client =
            serde_json::from_str(r#"{"id":"40","name":"Nina","email":"nina@mail.com"}"#).unwrap();
        assert_eq!(parsed.id, ClientId::Text("40".to_owned()));
    }
}
