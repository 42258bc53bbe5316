//! The seam every entity plugs into so list pages, form modals and services
//! can be written once.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

use crate::domain::common::EntityId;
use crate::shared::validation::Validate;

/// Permission suffixes checked against the user's permission strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    View,
    Create,
    Update,
    Delete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

pub trait Resource:
    Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Editable, id-less copy of the business fields.
    type Draft: Clone + Debug + Default + PartialEq + Serialize + Validate + Send + Sync + 'static;

    /// URL segment under `/api/`, e.g. `"work-orders"`.
    const SEGMENT: &'static str;
    /// Plural heading, e.g. `"Work orders"`.
    const LABEL: &'static str;
    /// Singular noun used in modal titles.
    const SINGULAR: &'static str;
    /// Whether `GET /api/<segment>/dashboard` exists.
    const HAS_DASHBOARD: bool = false;

    fn id(&self) -> EntityId;

    /// Human-readable name used in confirmations and titles.
    fn title(&self) -> String;

    fn to_draft(&self) -> Self::Draft;

    fn collection_path() -> String {
        format!("/api/{}", Self::SEGMENT)
    }

    fn item_path(id: EntityId) -> String {
        format!("/api/{}/{}", Self::SEGMENT, id)
    }

    fn action_path(id: EntityId, action: &str) -> String {
        format!("/api/{}/{}/{}", Self::SEGMENT, id, action)
    }

    fn dashboard_path() -> String {
        format!("/api/{}/dashboard", Self::SEGMENT)
    }

    /// Permission strings are `<prefix>.<action>`; the prefix is the segment
    /// with `-` replaced by `_` (`work_orders.view`).
    fn permission(action: Action) -> String {
        format!("{}.{}", Self::SEGMENT.replace('-', "_"), action.as_str())
    }
}
