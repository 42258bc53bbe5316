use crate::shared::icons::icon;
use contracts::shared::list::Pagination;
use leptos::prelude::*;

/// PaginationControls component - reusable pagination controls.
///
/// Pages are 1-based; the label reads "Page X of Y" with at least one page.
#[component]
pub fn PaginationControls(
    #[prop(into)] pagination: Signal<Pagination>,

    /// Callback when page changes
    on_page_change: Callback<u32>,

    /// Callback when page size changes
    on_page_size_change: Callback<u32>,

    /// Available page size options
    page_size_options: Vec<u32>,

    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView {
    let current = move || pagination.get().page;
    let last = move || pagination.get().total_pages();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || disabled.get() || !pagination.get().has_previous()
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current().saturating_sub(1).max(1))
                disabled=move || disabled.get() || !pagination.get().has_previous()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || pagination.get().label()}
                <span class="pagination-info__total">{move || format!(" ({} total)", pagination.get().total)}</span>
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current() + 1)
                disabled=move || disabled.get() || !pagination.get().has_next()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(last())
                disabled=move || disabled.get() || !pagination.get().has_next()
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || pagination.get().limit.to_string()
            >
                {page_size_options.into_iter().map(|size| {
                    view! {
                        <option value=size.to_string() selected=move || pagination.get().limit == size>
                            {format!("{} / page", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
