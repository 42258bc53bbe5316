use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

#[component]
pub fn TopHeader() -> impl IntoView {
    let session = use_session();

    let user_name = move || {
        session
            .user()
            .map(|u| u.display_name().to_string())
            .unwrap_or_default()
    };
    let role = move || session.user().and_then(|u| u.role);

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <A href="/" attr:class="top-header__title">"Inventory Console"</A>
            </div>
            <div class="top-header__actions">
                <div class="top-header__user">
                    <span class="top-header__user-name">{user_name}</span>
                    {move || role().map(|r| view! { <span class="top-header__role">{r}</span> })}
                </div>
                <button
                    class="top-header__icon-btn"
                    title="Sign out"
                    on:click=move |_| session.logout()
                >
                    {icon("logout")}
                </button>
            </div>
        </header>
    }
}
