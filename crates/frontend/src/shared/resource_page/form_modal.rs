use contracts::shared::form_state::{FormState, Submission};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::fields::field_input;
use super::{notify_parent, ResourceView};
use crate::shared::modal::Modal;
use crate::shared::resource_api;
use crate::system::auth::context::use_session;

/// Create/edit dialog for `R`. Open by setting `form` to `Some`; it closes
/// itself after a successful save and reports the saved record.
///
/// A failed save leaves the dialog open with the backend's messages; a second
/// submit while one is in flight is ignored.
#[component]
pub fn FormModal<R: ResourceView>(
    form: RwSignal<Option<FormState<R::Draft>>>,
    on_saved: Callback<R>,
) -> impl IntoView {
    let session = use_session();

    let busy = Signal::derive(move || form.with(|f| f.as_ref().map(|f| f.busy).unwrap_or(false)));
    let title = Signal::derive(move || {
        let verb = if form.with(|f| f.as_ref().map(|f| f.is_edit()).unwrap_or(false)) {
            "Edit"
        } else {
            "New"
        };
        format!("{} {}", verb, R::SINGULAR)
    });
    let general_error = move || form.with(|f| f.as_ref().and_then(|f| f.errors.general.clone()));

    let submit = move || {
        let submission = form
            .try_update(|f| f.as_mut().and_then(|f| f.begin_submit()))
            .flatten();
        let Some(submission) = submission else {
            return;
        };

        spawn_local(async move {
            let result = match &submission {
                Submission::Create { pending, draft } => {
                    log::debug!("Creating {} ({})", R::SINGULAR, pending);
                    resource_api::create::<R>(draft).await
                }
                Submission::Update { id, draft } => {
                    log::debug!("Updating {} #{}", R::SINGULAR, id);
                    resource_api::update::<R>(*id, draft).await
                }
            };
            match result {
                Ok(saved) => {
                    let _ = form.try_update(|f| {
                        if let Some(f) = f.as_mut() {
                            f.succeed(&saved);
                        }
                    });
                    let _ = form.try_set(None);
                    notify_parent(on_saved, saved);
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
            form.set(None);
        }
    });

    let footer = move || {
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
                    {move || if busy.get() { "Saving..." } else { "Save" }}
                </Button>
            </Flex>
        }
    };

    view! {
        <Modal title=title on_close=close footer=footer>
            <form
                class="resource-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit();
                }
            >
                {move || general_error().map(|message| view! { <div class="alert alert--error">{message}</div> })}
                {R::form_fields()
                    .into_iter()
                    .map(|field| field_input(form, field))
                    .collect_view()}
                // Enter in a text field submits
                <button type="submit" class="visually-hidden" tabindex="-1"></button>
            </form>
        </Modal>
    }
}
