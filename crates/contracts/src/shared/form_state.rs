//! Draft handling for create/edit modals.

use super::api_error::ApiError;
use super::resource::Resource;
use super::validation::{FieldErrors, Validate};
use crate::domain::common::{EntityId, PendingId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(EntityId),
}

/// What the modal hands to the service once the draft passed its checks.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<D> {
    Create { pending: PendingId, draft: D },
    Update { id: EntityId, draft: D },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState<D> {
    pub mode: FormMode,
    pub draft: D,
    pub busy: bool,
    pub errors: FieldErrors,
    /// Set while a create request is in flight.
    pub pending: Option<PendingId>,
}

impl<D: Clone + Default + Validate> FormState<D> {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            draft: D::default(),
            busy: false,
            errors: FieldErrors::new(),
            pending: None,
        }
    }

    pub fn edit<R: Resource<Draft = D>>(entity: &R) -> Self {
        Self {
            mode: FormMode::Edit(entity.id()),
            draft: entity.to_draft(),
            busy: false,
            errors: FieldErrors::new(),
            pending: None,
        }
    }

    /// Open for `entity` when given, otherwise blank. Always replaces the
    /// whole state so nothing from a previous session survives.
    pub fn open<R: Resource<Draft = D>>(entity: Option<&R>) -> Self {
        match entity {
            Some(entity) => Self::edit(entity),
            None => Self::create(),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    pub fn update_draft(&mut self, f: impl FnOnce(&mut D)) {
        f(&mut self.draft);
    }

    /// Validate and, if the draft is acceptable and nothing is in flight,
    /// mark the form busy and return the request to send.
    pub fn begin_submit(&mut self) -> Option<Submission<D>> {
        if self.busy {
            return None;
        }
        if let Err(errors) = self.draft.validate().into_result() {
            self.errors = errors;
            return None;
        }
        self.errors = FieldErrors::new();
        self.busy = true;
        let draft = self.draft.clone();
        Some(match self.mode {
            FormMode::Create => {
                let pending = PendingId::new();
                self.pending = Some(pending);
                Submission::Create { pending, draft }
            }
            FormMode::Edit(id) => Submission::Update { id, draft },
        })
    }

    /// The request failed; the modal stays open with the backend's messages.
    pub fn fail(&mut self, error: &ApiError) {
        self.busy = false;
        self.pending = None;
        self.errors = error.field_errors();
    }

    /// The request succeeded. Returns the persisted id the backend assigned.
    pub fn succeed<R: Resource>(&mut self, saved: &R) -> EntityId {
        self.busy = false;
        self.pending = None;
        self.errors = FieldErrors::new();
        saved.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_asset::{Asset, AssetDraft};
    use crate::shared::list::ListPage;
    use crate::shared::list_state::{FilterResetPolicy, ListPageState};
    use serde_json::json;

    fn asset(id: i64, name: &str, tag: &str) -> Asset {
        serde_json::from_value(json!({"id": id, "name": name, "asset_tag": tag, "location": "HQ"})).unwrap()
    }

    /// In-memory stand-in for the backend: assigns ids, answers list calls.
    struct FakeBackend {
        rows: Vec<Asset>,
        next_id: i64,
        calls: usize,
    }

    impl FakeBackend {
        fn new() -> Self {
            Self { rows: vec![asset(1, "Laptop", "A-1")], next_id: 100, calls: 0 }
        }

        fn send(&mut self, submission: Submission<AssetDraft>) -> Asset {
            self.calls += 1;
            match submission {
                Submission::Create { draft, .. } => {
                    let created = asset(self.next_id, &draft.name, &draft.asset_tag);
                    self.next_id += 1;
                    self.rows.push(created.clone());
                    created
                }
                Submission::Update { id, draft } => {
                    let row = self.rows.iter_mut().find(|r| r.id == id).unwrap();
                    row.name = draft.name;
                    row.clone()
                }
            }
        }

        fn delete(&mut self, id: EntityId) {
            self.calls += 1;
            self.rows.retain(|r| r.id != id);
        }

        fn list(&mut self) -> ListPage<Asset> {
            self.calls += 1;
            ListPage { items: self.rows.clone(), total: self.rows.len() as u64 }
        }
    }

    #[test]
    fn test_missing_required_field_issues_no_call() {
        let backend = FakeBackend::new();
        let mut form: FormState<AssetDraft> = FormState::create();
        form.update_draft(|d| d.asset_tag = "A-9".into());

        assert!(form.begin_submit().is_none());
        assert!(form.errors.get("name").is_some());
        assert!(!form.busy);
        assert_eq!(backend.calls, 0);
    }

    #[test]
    fn test_busy_flag_blocks_double_submit() {
        let mut form: FormState<AssetDraft> = FormState::create();
        form.update_draft(|d| {
            d.name = "Monitor".into();
            d.asset_tag = "A-2".into();
        });
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
    }

    #[test]
    fn test_create_then_refetch_contains_server_id() {
        let mut backend = FakeBackend::new();
        let mut form: FormState<AssetDraft> = FormState::create();
        form.update_draft(|d| {
            d.name = "Monitor".into();
            d.asset_tag = "A-2".into();
        });

        let submission = form.begin_submit().unwrap();
        let pending = match &submission {
            Submission::Create { pending, .. } => *pending,
            other => panic!("expected create, got {:?}", other),
        };
        assert_eq!(form.pending, Some(pending));

        let saved = backend.send(submission);
        let id = form.succeed(&saved);
        assert_eq!(form.pending, None);
        assert_eq!(id.value(), 100);

        let page = backend.list();
        assert!(page.items.iter().any(|a| a.id == id));
    }

    #[test]
    fn test_delete_then_refetch_drops_id() {
        let mut backend = FakeBackend::new();
        let mut list: ListPageState<Asset> = ListPageState::new(10, FilterResetPolicy::KeepPage);
        let query = list.begin_load();
        assert!(list.is_current(&query));
        list.apply_page(backend.list());
        let row = list.items[0].clone();

        list.request_delete(&row);
        let doomed = list.confirm_delete().unwrap();
        assert_eq!(doomed, row.id);
        assert_eq!(list.pending_delete, None);
        backend.delete(doomed);
        // The row stays until the refetch lands.
        assert!(list.contains(doomed));

        list.begin_load();
        list.apply_page(backend.list());
        assert!(!list.contains(doomed));
        assert_eq!(list.total, 0);
    }

    #[test]
    fn test_failure_keeps_form_open_with_field_messages() {
        let mut form: FormState<AssetDraft> = FormState::create();
        form.update_draft(|d| {
            d.name = "Monitor".into();
            d.asset_tag = "A-1".into();
        });
        form.begin_submit().unwrap();
        form.fail(&ApiError::from_response(
            422,
            r#"{"errors":{"asset_tag":["Asset tag already exists"]}}"#,
        ));
        assert!(!form.busy);
        assert_eq!(form.errors.get("asset_tag"), Some("Asset tag already exists"));
        assert_eq!(form.draft.name, "Monitor");
    }

    #[test]
    fn test_switching_modes_replaces_draft() {
        let existing = asset(7, "Printer", "P-7");
        let mut form = FormState::open(Some(&existing));
        assert_eq!(form.mode, FormMode::Edit(existing.id));
        assert_eq!(form.draft.name, "Printer");
        form.update_draft(|d| d.location = "Basement".into());

        form = FormState::open::<Asset>(None);
        assert_eq!(form.mode, FormMode::Create);
        assert_eq!(form.draft, AssetDraft::default());

        form = FormState::open(Some(&existing));
        assert_eq!(form.draft.location, "HQ");
    }

    #[test]
    fn test_edit_submits_update_for_same_id() {
        let mut backend = FakeBackend::new();
        let existing = backend.list().items[0].clone();
        let mut form = FormState::edit(&existing);
        form.update_draft(|d| d.name = "Laptop Pro".into());
        let submission = form.begin_submit().unwrap();
        assert!(matches!(submission, Submission::Update { id, .. } if id == existing.id));
        let saved = backend.send(submission);
        assert_eq!(form.succeed(&saved), existing.id);
        assert_eq!(backend.list().items[0].name, "Laptop Pro");
    }
}
