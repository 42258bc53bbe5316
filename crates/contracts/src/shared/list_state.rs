//! Page-local state of a resource list: rows of the current page, the
//! pagination triple, filters and the fetch phase.

use std::collections::BTreeMap;

use super::list::{ListPage, ListQuery, Pagination};
use super::resource::Resource;
use crate::domain::common::EntityId;

/// Whether editing a filter sends the user back to page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterResetPolicy {
    /// Keep the current page number (existing behaviour of most pages).
    #[default]
    KeepPage,
    ResetToFirst,
}

impl FilterResetPolicy {
    pub fn from_flag(reset_page_on_filter: bool) -> Self {
        if reset_page_on_filter {
            FilterResetPolicy::ResetToFirst
        } else {
            FilterResetPolicy::KeepPage
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListPageState<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub filters: BTreeMap<String, String>,
    pub phase: LoadPhase,
    pub reset_policy: FilterResetPolicy,
    /// Row waiting for the user to confirm deletion.
    pub pending_delete: Option<(EntityId, String)>,
}

impl<T: Resource> ListPageState<T> {
    pub fn new(limit: u32, reset_policy: FilterResetPolicy) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            limit: limit.max(1),
            total: 0,
            filters: BTreeMap::new(),
            phase: LoadPhase::Idle,
            reset_policy,
            pending_delete: None,
        }
    }

    pub fn query(&self) -> ListQuery {
        let mut query = ListQuery::new(self.page, self.limit);
        for (key, value) in &self.filters {
            query = query.with_filter(key, value);
        }
        query
    }

    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            limit: self.limit,
            total: self.total,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Enter `Loading` and return the request to send. Rows stay in place
    /// until the response replaces them.
    pub fn begin_load(&mut self) -> ListQuery {
        self.phase = LoadPhase::Loading;
        self.query()
    }

    /// Whether a response for `query` still matches what the page shows.
    /// Answers to superseded requests are dropped.
    pub fn is_current(&self, query: &ListQuery) -> bool {
        self.query() == *query
    }

    /// Replace the whole in-memory page with the server's answer.
    pub fn apply_page(&mut self, page: ListPage<T>) {
        self.items = page.items;
        self.total = page.total;
        self.phase = LoadPhase::Success;
    }

    /// Keep the last good rows; only the phase records the failure.
    pub fn apply_error(&mut self, message: impl Into<String>) {
        self.phase = LoadPhase::Error(message.into());
    }

    /// Returns `true` when the page number changed and a refetch is due.
    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.max(1);
        if page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    /// Changes the page size only; `page` and `total` are left alone.
    pub fn set_limit(&mut self, limit: u32) -> bool {
        let limit = limit.max(1);
        if limit == self.limit {
            return false;
        }
        self.limit = limit;
        true
    }

    /// Returns `true` when the filter value actually changed.
    pub fn set_filter(&mut self, key: &str, value: &str) -> bool {
        let value = value.trim();
        let changed = match self.filters.get(key) {
            Some(current) => current != value,
            None => !value.is_empty(),
        };
        if !changed {
            return false;
        }
        if value.is_empty() {
            self.filters.remove(key);
        } else {
            self.filters.insert(key.to_string(), value.to_string());
        }
        if self.reset_policy == FilterResetPolicy::ResetToFirst {
            self.page = 1;
        }
        true
    }

    pub fn clear_filters(&mut self) -> bool {
        if self.filters.is_empty() {
            return false;
        }
        self.filters.clear();
        if self.reset_policy == FilterResetPolicy::ResetToFirst {
            self.page = 1;
        }
        true
    }

    pub fn filter(&self, key: &str) -> String {
        self.filters.get(key).cloned().unwrap_or_default()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    pub fn request_delete(&mut self, item: &T) {
        self.pending_delete = Some((item.id(), item.title()));
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Take the confirmed id; the row itself is not removed here, only the
    /// following refetch drops it.
    pub fn confirm_delete(&mut self) -> Option<EntityId> {
        self.pending_delete.take().map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::roles::Role;
    use serde_json::json;

    fn role(id: i64, name: &str) -> Role {
        serde_json::from_value(json!({"id": id, "name": name})).unwrap()
    }

    fn state() -> ListPageState<Role> {
        ListPageState::new(10, FilterResetPolicy::KeepPage)
    }

    #[test]
    fn test_load_cycle() {
        let mut s = state();
        assert_eq!(s.phase, LoadPhase::Idle);
        let query = s.begin_load();
        assert_eq!((query.page, query.limit), (1, 10));
        assert!(s.is_loading());

        s.apply_page(ListPage { items: vec![role(1, "Admin")], total: 1 });
        assert_eq!(s.phase, LoadPhase::Success);
        assert_eq!(s.pagination().label(), "Page 1 of 1");
    }

    #[test]
    fn test_superseded_response_is_not_current() {
        let mut s = state();
        let first = s.begin_load();
        s.set_page(2);
        let second = s.begin_load();
        assert!(!s.is_current(&first));
        assert!(s.is_current(&second));
    }

    #[test]
    fn test_error_keeps_last_good_rows() {
        let mut s = state();
        s.apply_page(ListPage { items: vec![role(1, "Admin")], total: 1 });
        s.begin_load();
        s.apply_error("offline");
        assert_eq!(s.items.len(), 1);
        assert_eq!(s.phase, LoadPhase::Error("offline".into()));
    }

    #[test]
    fn test_limit_change_keeps_page_and_total() {
        let mut s = state();
        s.set_page(3);
        s.apply_page(ListPage { items: vec![], total: 95 });
        assert!(s.set_limit(25));
        assert_eq!(s.page, 3);
        assert_eq!(s.total, 95);
        assert!(!s.set_limit(25));
    }

    #[test]
    fn test_filter_keeps_page_by_default() {
        let mut s = state();
        s.set_page(4);
        assert!(s.set_filter("search", "adm"));
        assert_eq!(s.page, 4);
        assert_eq!(s.query().filters.get("search").map(String::as_str), Some("adm"));
    }

    #[test]
    fn test_filter_resets_page_when_configured() {
        let mut s: ListPageState<Role> = ListPageState::new(10, FilterResetPolicy::from_flag(true));
        s.set_page(4);
        assert!(s.set_filter("search", "adm"));
        assert_eq!(s.page, 1);
        assert!(!s.set_filter("search", "adm"));
        s.set_page(2);
        assert!(s.clear_filters());
        assert_eq!(s.page, 1);
    }

    #[test]
    fn test_blank_filter_removes_key() {
        let mut s = state();
        s.set_filter("status", "active");
        assert!(s.set_filter("status", "  "));
        assert!(s.filters.is_empty());
    }

    #[test]
    fn test_delete_confirmation_does_not_remove_row() {
        let mut s = state();
        let admin = role(1, "Admin");
        s.apply_page(ListPage { items: vec![admin.clone()], total: 1 });

        s.request_delete(&admin);
        assert_eq!(s.pending_delete, Some((admin.id(), "Admin".to_string())));
        s.cancel_delete();
        assert_eq!(s.confirm_delete(), None);

        s.request_delete(&admin);
        assert_eq!(s.confirm_delete(), Some(admin.id()));
        assert!(s.contains(admin.id()));
    }
}
