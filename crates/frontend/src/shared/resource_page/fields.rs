//! Form field descriptors and their inputs.

use contracts::domain::common::{parse_optional_id, EntityId};
use contracts::shared::form_state::FormState;
use contracts::shared::validation::Validate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::resource_api;

#[derive(Clone, Copy)]
pub enum FieldKind {
    Text,
    Password,
    TextArea,
    Number,
    Date,
    /// Closed set of `(code, label)` pairs.
    Select(fn() -> Vec<(String, String)>),
    /// Foreign key; options come from `GET /api/<segment>`.
    Lookup(&'static str),
}

/// One editable field of a draft `D`, read and written as text.
pub struct FormField<D> {
    /// Key used for field-level error messages.
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub get: fn(&D) -> String,
    pub set: fn(&mut D, String),
}

impl<D> Clone for FormField<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for FormField<D> {}

impl<D> FormField<D> {
    pub fn new(
        key: &'static str,
        label: &'static str,
        kind: FieldKind,
        get: fn(&D) -> String,
        set: fn(&mut D, String),
    ) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
            get,
            set,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Text form of an optional id for a select; empty means none.
pub fn id_text(id: Option<EntityId>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

pub fn parse_id(value: String) -> Option<EntityId> {
    parse_optional_id(&value)
}

/// Integer field parse; unparsable input keeps the previous value.
pub fn parse_int(value: &str, previous: i64) -> i64 {
    match value.trim() {
        "" => 0,
        text => text.parse().unwrap_or(previous),
    }
}

/// Options for a foreign-key select, loaded once per mount.
pub fn lookup_options(segment: &'static str) -> RwSignal<Vec<(EntityId, String)>> {
    let options = RwSignal::new(Vec::new());
    spawn_local(async move {
        match resource_api::lookup(segment).await {
            Ok(rows) => {
                let _ = options.try_set(rows);
            }
            Err(e) => log::warn!("Failed to load {} options: {}", segment, e),
        }
    });
    options
}

/// Labelled input bound to one field of the open form.
pub fn field_input<D>(form: RwSignal<Option<FormState<D>>>, field: FormField<D>) -> AnyView
where
    D: Clone + Default + Validate + Send + Sync + 'static,
{
    let value = move || {
        form.with(|f| f.as_ref().map(|f| (field.get)(&f.draft)).unwrap_or_default())
    };
    let write = move |text: String| {
        form.update(|f| {
            if let Some(f) = f.as_mut() {
                f.update_draft(|draft| (field.set)(draft, text));
            }
        })
    };
    let error = move || {
        form.with(|f| {
            f.as_ref()
                .and_then(|f| f.errors.get(field.key).map(str::to_string))
        })
    };
    let busy = move || form.with(|f| f.as_ref().map(|f| f.busy).unwrap_or(false));
    let id = format!("field-{}", field.key);

    let input = match field.kind {
        FieldKind::Text | FieldKind::Password | FieldKind::Number | FieldKind::Date => {
            let input_type = match field.kind {
                FieldKind::Password => "password",
                FieldKind::Number => "number",
                FieldKind::Date => "date",
                _ => "text",
            };
            let shown = move || {
                let text = value();
                match field.kind {
                    // `<input type=date>` only accepts the date part
                    FieldKind::Date => text.split('T').next().unwrap_or_default().to_string(),
                    _ => text,
                }
            };
            view! {
                <input
                    id=id.clone()
                    type=input_type
                    class="form-control"
                    prop:value=shown
                    on:input=move |ev| write(event_target_value(&ev))
                    disabled=busy
                />
            }
            .into_any()
        }
        FieldKind::TextArea => view! {
            <textarea
                id=id.clone()
                class="form-control"
                rows="3"
                prop:value=value
                on:input=move |ev| write(event_target_value(&ev))
                disabled=busy
            ></textarea>
        }
        .into_any(),
        FieldKind::Select(options) => view! {
            <select
                id=id.clone()
                class="form-control"
                prop:value=value
                on:change=move |ev| write(event_target_value(&ev))
                disabled=busy
            >
                {options()
                    .into_iter()
                    .map(|(code, label)| view! { <option value=code>{label}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        FieldKind::Lookup(segment) => {
            let options = lookup_options(segment);
            view! {
                <select
                    id=id.clone()
                    class="form-control"
                    prop:value=value
                    on:change=move |ev| write(event_target_value(&ev))
                    disabled=busy
                >
                    <option value="">"(none)"</option>
                    {move || {
                        options
                            .get()
                            .into_iter()
                            .map(|(id, label)| {
                                let code = id.to_string();
                                let selected = code.clone();
                                view! {
                                    <option value=code selected=move || value() == selected>
                                        {label}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            }
            .into_any()
        }
    };

    view! {
        <div class="form-group" class:form-group--error=move || error().is_some()>
            <label for=id>
                {field.label}
                {field.required.then_some(view! { <span class="form-group__required">" *"</span> })}
            </label>
            {input}
            {move || error().map(|message| view! { <div class="form-group__error">{message}</div> })}
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_keeps_previous_on_garbage() {
        assert_eq!(parse_int("12", 3), 12);
        assert_eq!(parse_int("", 3), 0);
        assert_eq!(parse_int("1x", 3), 3);
    }

    #[test]
    fn test_id_text_round_trip() {
        assert_eq!(id_text(None), "");
        let id = parse_id("42".into());
        assert_eq!(id_text(id), "42");
        assert!(parse_id("".into()).is_none());
    }
}
