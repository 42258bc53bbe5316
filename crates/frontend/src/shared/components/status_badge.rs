use leptos::prelude::*;

/// Coloured pill; `tone` is one of success, warning, error, informative, neutral.
#[component]
pub fn StatusBadge(label: &'static str, tone: &'static str) -> impl IntoView {
    view! { <span class=format!("badge badge--{}", tone)>{label}</span> }
}
