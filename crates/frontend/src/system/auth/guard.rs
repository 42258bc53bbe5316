use contracts::system::auth::{evaluate_gate, GateDecision};
use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_session;
use crate::shared::icons::icon;

/// Renders `children` only for a signed-in user holding `permission`.
///
/// While a stored token is still being verified a placeholder is shown, so
/// nothing below the gate mounts (and nothing fetches) until the decision is
/// `Granted`.
#[component]
pub fn PermissionGate(
    #[prop(optional, into)] permission: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = use_session();
    let decision = Memo::new(move |_| {
        session
            .state
            .with(|state| evaluate_gate(state, permission.as_deref()))
    });

    move || match decision.get() {
        GateDecision::Pending => view! {
            <div class="page-placeholder">"Checking session..."</div>
        }
        .into_any(),
        GateDecision::RedirectToLogin => view! { <Redirect path="/login" /> }.into_any(),
        GateDecision::Denied { permission } => view! {
            <div class="access-denied">
                {icon("lock")}
                <h2>"Access denied"</h2>
                <p>"You need the " <code>{permission}</code> " permission to view this page."</p>
            </div>
        }
        .into_any(),
        GateDecision::Granted => children().into_any(),
    }
}
