//! Generic Resource-Page building blocks.
//!
//! A record type describes its table columns, form fields and filters once
//! through [`ResourceView`]; [`ResourceListPage`] and [`FormModal`] do the
//! rest.

pub mod action_dialog;
pub mod dashboard_widget;
pub mod fields;
pub mod form_modal;
pub mod list_page;

use contracts::domain::common::StatusChoice;
use contracts::shared::resource::Resource;
use leptos::prelude::*;

pub use action_dialog::ActionDialog;
pub use dashboard_widget::DashboardWidget;
pub use fields::{FieldKind, FormField};
pub use form_modal::FormModal;
pub use list_page::{ResourceListPage, RowAction};

pub trait ResourceView: Resource {
    /// `{entity}--list` page id, see `page_standard`.
    const PAGE_ID: &'static str;
    const ICON: &'static str;

    fn columns() -> Vec<Column<Self>>;

    fn form_fields() -> Vec<FormField<Self::Draft>>;

    fn filters() -> Vec<FilterSpec> {
        vec![FilterSpec::search()]
    }
}

pub enum Cell<R> {
    Text(fn(&R) -> String),
    View(fn(&R) -> AnyView),
}

pub struct Column<R> {
    pub header: &'static str,
    pub min_width: f64,
    pub cell: Cell<R>,
}

impl<R> Column<R> {
    pub fn text(header: &'static str, min_width: f64, cell: fn(&R) -> String) -> Self {
        Self {
            header,
            min_width,
            cell: Cell::Text(cell),
        }
    }

    pub fn view(header: &'static str, min_width: f64, cell: fn(&R) -> AnyView) -> Self {
        Self {
            header,
            min_width,
            cell: Cell::View(cell),
        }
    }

    pub fn render(&self, item: &R) -> AnyView {
        match self.cell {
            Cell::Text(f) => f(item).into_any(),
            Cell::View(f) => f(item),
        }
    }
}

#[derive(Clone, Copy)]
pub enum FilterKind {
    /// Free text, applied with the Search button or Enter.
    Search,
    /// Closed set, applied on change.
    Select(fn() -> Vec<(String, String)>),
}

#[derive(Clone, Copy)]
pub struct FilterSpec {
    /// Query-string key sent to the backend.
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FilterKind,
}

impl FilterSpec {
    pub fn search() -> Self {
        Self {
            key: "search",
            label: "Search",
            kind: FilterKind::Search,
        }
    }

    pub fn select(key: &'static str, label: &'static str, options: fn() -> Vec<(String, String)>) -> Self {
        Self {
            key,
            label,
            kind: FilterKind::Select(options),
        }
    }
}

/// `(code, label)` pairs for a closed status set.
pub fn choices<S: StatusChoice>() -> Vec<(String, String)> {
    S::choices()
        .iter()
        .map(|choice| (choice.code().to_string(), choice.label().to_string()))
        .collect()
}

/// Hands a finished request back to the page that started it. The page
/// may have unmounted while the request was in flight; then nothing runs.
pub fn notify_parent<T: 'static>(callback: Callback<T>, value: T) {
    if callback.try_run(value).is_none() {
        log::debug!("Parent page gone, dropping completion");
    }
}

/// Text shown for an optional string column.
pub fn or_dash(value: &Option<String>) -> String {
    match value.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::EntityStatus;
    use leptos::reactive::owner::Owner;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_choices_skip_unknown() {
        let options = choices::<EntityStatus>();
        assert_eq!(options.len(), 4);
        assert_eq!(options[0], ("active".to_string(), "Active".to_string()));
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(&None), "-");
        assert_eq!(or_dash(&Some("  ".into())), "-");
        assert_eq!(or_dash(&Some("Room 4".into())), "Room 4");
    }

    #[test]
    fn test_notify_parent_after_unmount_is_noop() {
        let owner = Owner::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let saved = owner.with(|| {
            Callback::new(move |_: i64| {
                counter.fetch_add(1, Ordering::SeqCst);
            })
        });

        notify_parent(saved, 1);
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        owner.unset();
        notify_parent(saved, 2);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }
}
