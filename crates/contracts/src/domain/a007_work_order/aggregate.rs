use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{
    blank_as_null, check_optional_date, parse_date, EntityId, StatusChoice,
};
use crate::shared::resource::Resource;
use crate::shared::validation::{FieldErrors, Validate, ValidationRules};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderPriority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl WorkOrderPriority {
    pub const ALL: [WorkOrderPriority; 4] = [
        WorkOrderPriority::Low,
        WorkOrderPriority::Medium,
        WorkOrderPriority::High,
        WorkOrderPriority::Critical,
    ];

    pub fn tone(&self) -> &'static str {
        match self {
            WorkOrderPriority::Low => "neutral",
            WorkOrderPriority::Medium => "informative",
            WorkOrderPriority::High => "warning",
            WorkOrderPriority::Critical => "error",
        }
    }
}

impl StatusChoice for WorkOrderPriority {
    fn choices() -> &'static [Self] {
        &Self::ALL
    }

    fn code(&self) -> &'static str {
        match self {
            WorkOrderPriority::Low => "low",
            WorkOrderPriority::Medium => "medium",
            WorkOrderPriority::High => "high",
            WorkOrderPriority::Critical => "critical",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            WorkOrderPriority::Low => "Low",
            WorkOrderPriority::Medium => "Medium",
            WorkOrderPriority::High => "High",
            WorkOrderPriority::Critical => "Critical",
        }
    }

    fn from_code(code: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|p| p.code() == code)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkOrderStatus {
    #[default]
    Open,
    InProgress,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl WorkOrderStatus {
    pub const SELECTABLE: [WorkOrderStatus; 4] = [
        WorkOrderStatus::Open,
        WorkOrderStatus::InProgress,
        WorkOrderStatus::Completed,
        WorkOrderStatus::Cancelled,
    ];

    pub fn is_closed(&self) -> bool {
        matches!(self, WorkOrderStatus::Completed | WorkOrderStatus::Cancelled)
    }

    pub fn tone(&self) -> &'static str {
        match self {
            WorkOrderStatus::Open => "informative",
            WorkOrderStatus::InProgress => "warning",
            WorkOrderStatus::Completed => "success",
            WorkOrderStatus::Cancelled | WorkOrderStatus::Unknown => "neutral",
        }
    }
}

impl StatusChoice for WorkOrderStatus {
    fn choices() -> &'static [Self] {
        &Self::SELECTABLE
    }

    fn code(&self) -> &'static str {
        match self {
            WorkOrderStatus::Open => "open",
            WorkOrderStatus::InProgress => "in_progress",
            WorkOrderStatus::Completed => "completed",
            WorkOrderStatus::Cancelled => "cancelled",
            WorkOrderStatus::Unknown => "unknown",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            WorkOrderStatus::Open => "Open",
            WorkOrderStatus::InProgress => "In progress",
            WorkOrderStatus::Completed => "Completed",
            WorkOrderStatus::Cancelled => "Cancelled",
            WorkOrderStatus::Unknown => "Unknown",
        }
    }

    fn from_code(code: &str) -> Self {
        Self::SELECTABLE
            .into_iter()
            .find(|s| s.code() == code)
            .unwrap_or(WorkOrderStatus::Unknown)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub asset_id: Option<EntityId>,
    #[serde(default)]
    pub asset_name: Option<String>,
    #[serde(default)]
    pub assigned_to: Option<EntityId>,
    #[serde(default)]
    pub assigned_to_name: Option<String>,
    #[serde(default)]
    pub priority: WorkOrderPriority,
    #[serde(default)]
    pub status: WorkOrderStatus,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl WorkOrder {
    /// Open orders past their due date.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        if self.status.is_closed() {
            return false;
        }
        self.due_date
            .as_deref()
            .and_then(parse_date)
            .is_some_and(|due| due < today)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkOrderDraft {
    pub title: String,
    #[serde(serialize_with = "blank_as_null")]
    pub description: String,
    pub asset_id: Option<EntityId>,
    pub assigned_to: Option<EntityId>,
    pub priority: WorkOrderPriority,
    pub status: WorkOrderStatus,
    #[serde(serialize_with = "blank_as_null")]
    pub due_date: String,
}

impl Validate for WorkOrderDraft {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check(
            "title",
            ValidationRules::required()
                .with_max_length(255)
                .validate_string(&self.title, "Title"),
        );
        errors.check("due_date", check_optional_date(&self.due_date, "Due date"));
        errors
    }
}

impl Resource for WorkOrder {
    type Draft = WorkOrderDraft;

    const SEGMENT: &'static str = "work-orders";
    const LABEL: &'static str = "Work orders";
    const SINGULAR: &'static str = "work order";
    const HAS_DASHBOARD: bool = true;

    fn id(&self) -> EntityId {
        self.id
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn to_draft(&self) -> WorkOrderDraft {
        WorkOrderDraft {
            title: self.title.clone(),
            description: self.description.clone().unwrap_or_default(),
            asset_id: self.asset_id,
            assigned_to: self.assigned_to,
            priority: self.priority,
            status: self.status,
            due_date: self.due_date.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::resource::Action;
    use serde_json::json;

    fn order(status: &str, due: &str) -> WorkOrder {
        serde_json::from_value(json!({
            "id": 5, "title": "Replace fan", "status": status,
            "priority": "high", "due_date": due
        }))
        .unwrap()
    }

    #[test]
    fn test_overdue_only_while_open() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert!(order("in_progress", "2024-03-01").is_overdue(today));
        assert!(!order("completed", "2024-03-01").is_overdue(today));
        assert!(!order("open", "2024-03-10").is_overdue(today));
    }

    #[test]
    fn test_paths_and_permissions_use_segment() {
        assert_eq!(WorkOrder::collection_path(), "/api/work-orders");
        assert_eq!(WorkOrder::permission(Action::Update), "work_orders.update");
    }

    #[test]
    fn test_status_codes() {
        for status in WorkOrderStatus::SELECTABLE {
            assert_eq!(WorkOrderStatus::from_code(status.code()), status);
        }
        assert_eq!(order("on_hold", "").status, WorkOrderStatus::Unknown);
    }

    #[test]
    fn test_draft_serializes_blank_due_date_as_null() {
        let draft = WorkOrderDraft {
            title: "Inspect".into(),
            ..Default::default()
        };
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body["due_date"], serde_json::Value::Null);
        assert_eq!(body["status"], "open");
        assert_eq!(body["priority"], "medium");
    }
}
