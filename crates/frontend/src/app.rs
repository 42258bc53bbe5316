use crate::routes::routes::AppRoutes;
use crate::system::auth::context::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Session first: routes, gates and services all read it from context.
    view! {
        <SessionProvider>
            <AppRoutes />
        </SessionProvider>
    }
}
