//! Audit trail types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Identifier of the user performing an audited write.
///
/// The previous system stored the all-zeros UUID in creator/editor columns
/// as a "system" sentinel. That sentinel is no longer representable: nil
/// UUIDs are rejected at construction, and writes without an actor (user
/// self-registration) store NULL instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "Uuid", into = "Uuid")]
pub struct ActorId(Uuid);

impl ActorId {
    pub fn new(id: Uuid) -> Result<Self, String> {
        if id.is_nil() {
            Err("Actor id must not be the nil UUID".to_string())
        } else {
            Ok(ActorId(id))
        }
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl TryFrom<Uuid> for ActorId {
    type Error = String;

    fn try_from(id: Uuid) -> Result<Self, Self::Error> {
        ActorId::new(id)
    }
}

impl From<ActorId> for Uuid {
    fn from(actor: ActorId) -> Self {
        actor.0
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_nil_uuid() {
        assert!(ActorId::new(Uuid::nil()).is_err());
    }

    #[test]
    fn test_accepts_random_uuid() {
        let id = Uuid::new_v4();
        let actor = ActorId::new(id).unwrap();
        assert_eq!(actor.as_uuid(), id);
    }

    #[test]
    fn test_deserialize_rejects_nil() {
        let result: Result<ActorId, _> =
            serde_json::from_str("\"00000000-0000-0000-0000-000000000000\"");
        assert!(result.is_err());
    }
}
