use serde::{Deserialize, Serialize};

/// Lifecycle status shared by most inventory records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityStatus {
    #[default]
    Active,
    Inactive,
    Maintenance,
    Disposed,
    /// Any value the console does not know about yet.
    #[serde(other)]
    Unknown,
}

impl EntityStatus {
    pub const SELECTABLE: [EntityStatus; 4] = [
        EntityStatus::Active,
        EntityStatus::Inactive,
        EntityStatus::Maintenance,
        EntityStatus::Disposed,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            EntityStatus::Active => "active",
            EntityStatus::Inactive => "inactive",
            EntityStatus::Maintenance => "maintenance",
            EntityStatus::Disposed => "disposed",
            EntityStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EntityStatus::Active => "Active",
            EntityStatus::Inactive => "Inactive",
            EntityStatus::Maintenance => "Maintenance",
            EntityStatus::Disposed => "Disposed",
            EntityStatus::Unknown => "Unknown",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "active" => EntityStatus::Active,
            "inactive" => EntityStatus::Inactive,
            "maintenance" => EntityStatus::Maintenance,
            "disposed" => EntityStatus::Disposed,
            _ => EntityStatus::Unknown,
        }
    }

    /// BEM modifier used by the status badge.
    pub fn tone(&self) -> &'static str {
        match self {
            EntityStatus::Active => "success",
            EntityStatus::Inactive => "neutral",
            EntityStatus::Maintenance => "warning",
            EntityStatus::Disposed => "error",
            EntityStatus::Unknown => "neutral",
        }
    }
}

/// Small closed set rendered as a `<select>` in forms and filters.
pub trait StatusChoice: Copy + PartialEq + 'static {
    fn choices() -> &'static [Self];
    fn code(&self) -> &'static str;
    fn label(&self) -> &'static str;
    fn from_code(code: &str) -> Self;
}

impl StatusChoice for EntityStatus {
    fn choices() -> &'static [Self] {
        &Self::SELECTABLE
    }
    fn code(&self) -> &'static str {
        EntityStatus::code(self)
    }
    fn label(&self) -> &'static str {
        EntityStatus::label(self)
    }
    fn from_code(code: &str) -> Self {
        EntityStatus::from_code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let s: EntityStatus = serde_json::from_str("\"maintenance\"").unwrap();
        assert_eq!(s, EntityStatus::Maintenance);
        assert_eq!(serde_json::to_string(&EntityStatus::Disposed).unwrap(), "\"disposed\"");
    }

    #[test]
    fn test_unexpected_status_does_not_fail_decoding() {
        let s: EntityStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(s, EntityStatus::Unknown);
    }

    #[test]
    fn test_code_round_trip() {
        for status in EntityStatus::SELECTABLE {
            assert_eq!(EntityStatus::from_code(status.code()), status);
        }
    }
}
