use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-assigned numeric identifier.
///
/// There is no public constructor from a bare integer: an `EntityId` only
/// comes into existence by decoding a server payload, so the console can
/// never fabricate a persisted id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(i64);

impl EntityId {
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Parse an id previously rendered by `Display` (e.g. a `<select>` value
    /// holding an id that came from the server).
    pub fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map(EntityId)
            .map_err(|e| format!("Invalid id '{}': {}", s, e))
    }

    #[cfg(test)]
    pub(crate) fn for_test(value: i64) -> Self {
        EntityId(value)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Placeholder carried by a create request while it is in flight.
///
/// Deliberately a different type from `EntityId`: it is never serialized
/// into a request body and never compared with a persisted id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PendingId(uuid::Uuid);

impl PendingId {
    pub fn new() -> Self {
        PendingId(uuid::Uuid::new_v4())
    }
}

impl Default for PendingId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PendingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pending-{}", self.0)
    }
}

/// Optional foreign key picked in a form; an empty selection means none.
pub fn parse_optional_id(value: &str) -> Option<EntityId> {
    if value.trim().is_empty() {
        None
    } else {
        EntityId::from_string(value).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_decodes_from_number() {
        let id: EntityId = serde_json::from_value(serde_json::json!(42)).unwrap();
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(serde_json::to_value(id).unwrap(), serde_json::json!(42));
    }

    #[test]
    fn test_from_string_round_trips_display() {
        let id = EntityId::for_test(7);
        assert_eq!(EntityId::from_string(&id.to_string()), Ok(id));
        assert!(EntityId::from_string("abc").is_err());
    }

    #[test]
    fn test_pending_ids_are_unique() {
        assert_ne!(PendingId::new(), PendingId::new());
        assert!(PendingId::new().to_string().starts_with("pending-"));
    }

    #[test]
    fn test_parse_optional_id() {
        assert_eq!(parse_optional_id(""), None);
        assert_eq!(parse_optional_id("  "), None);
        assert_eq!(parse_optional_id("3"), Some(EntityId::for_test(3)));
    }
}
