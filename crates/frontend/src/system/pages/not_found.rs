use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            {icon("alert")}
            <h2>"Page not found"</h2>
            <p>"The page you are looking for does not exist."</p>
            <A href="/">"Back to overview"</A>
        </div>
    }
}
