use contracts::shared::form_state::{FormState, Submission};
use contracts::shared::resource::Resource;
use contracts::shared::validation::{FieldErrors, Validate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Serialize;
use thaw::*;

use super::fields::{field_input, FormField};
use super::notify_parent;
use crate::shared::api_utils::Method;
use crate::shared::modal::Modal;
use crate::shared::resource_api;
use crate::system::auth::context::use_session;

/// Dialog for one entity sub-action (`/api/<segment>/:id/<action>`).
///
/// The body `B` goes through the same validate, busy and error flow as the
/// create/edit form. `check` adds rules that depend on the record itself.
#[component]
pub fn ActionDialog<R, B>(
    record: R,
    action: &'static str,
    method: Method,
    title: &'static str,
    fields: Vec<FormField<B>>,
    #[prop(optional)] initial: Option<B>,
    #[prop(optional)] check: Option<fn(&R, &B) -> FieldErrors>,
    #[prop(into, default = "Save".to_string())] submit_label: String,
    on_close: Callback<()>,
    on_done: Callback<()>,
) -> impl IntoView
where
    R: Resource,
    B: Clone + Default + Validate + Serialize + Send + Sync + 'static,
{
    let session = use_session();
    let mut state = FormState::<B>::create();
    if let Some(initial) = initial {
        state.draft = initial;
    }
    let form = RwSignal::new(Some(state));
    let id = record.id();
    let heading = format!("{}: {}", title, record.title());
    let record = StoredValue::new(record);

    let busy = Signal::derive(move || form.with(|f| f.as_ref().map(|f| f.busy).unwrap_or(false)));
    let general_error = move || form.with(|f| f.as_ref().and_then(|f| f.errors.general.clone()));

    let submit = move || {
        let submission = form
            .try_update(|f| {
                let f = f.as_mut()?;
                if let Some(check) = check {
                    let errors = record.with_value(|record| check(record, &f.draft));
                    if !errors.is_empty() {
                        f.errors = errors;
                        return None;
                    }
                }
                f.begin_submit()
            })
            .flatten();
        let Some(Submission::Create { draft, .. } | Submission::Update { draft, .. }) = submission
        else {
            return;
        };

        spawn_local(async move {
            match resource_api::action::<R, B>(id, action, method, &draft).await {
                Ok(_) => {
                    log::info!("{} {} #{} done", R::SINGULAR, action, id);
                    notify_parent(on_done, ());
                }
                Err(e) => {
                    session.report(&e);
                    let _ = form.try_update(|f| {
                        if let Some(f) = f.as_mut() {
                            f.fail(&e);
                        }
                    });
                }
            }
        });
    };

    let close = Callback::new(move |_| {
        if !busy.get_untracked() {
            on_close.run(());
        }
    });

    let footer = move || {
        let submit_label = submit_label.clone();
        view! {
            <Flex gap=FlexGap::Small>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| close.run(())
                    disabled=busy
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| submit()
                    disabled=busy
                >
                    {submit_label}
                </Button>
            </Flex>
        }
    };

    view! {
        <Modal title=heading on_close=close footer=footer>
            <form
                class="resource-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit();
                }
            >
                {move || general_error().map(|message| view! { <div class="alert alert--error">{message}</div> })}
                {fields.into_iter().map(|field| field_input(form, field)).collect_view()}
                <button type="submit" class="visually-hidden" tabindex="-1"></button>
            </form>
        </Modal>
    }
}
