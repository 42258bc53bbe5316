//! Overview page: greeting plus the asset and work-order summaries.

use contracts::domain::a001_asset::Asset;
use contracts::domain::a007_work_order::WorkOrder;
use contracts::shared::resource::{Action, Resource};
use leptos::prelude::*;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::resource_page::DashboardWidget;
use crate::system::auth::context::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let greeting = move || {
        session
            .user()
            .map(|u| format!("Welcome, {}", u.display_name()))
            .unwrap_or_else(|| "Welcome".to_string())
    };
    let can_assets = move || session.can(&Asset::permission(Action::View));
    let can_work_orders = move || session.can(&WorkOrder::permission(Action::View));

    view! {
        <PageFrame page_id="d100_home--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h1 class="page__title">{greeting}</h1>
            </div>
            <Show when=can_assets>
                <DashboardWidget<Asset> heading="Assets" />
            </Show>
            <Show when=can_work_orders>
                <DashboardWidget<WorkOrder> heading="Work orders" />
            </Show>
            <Show when=move || !can_assets() && !can_work_orders()>
                <p class="page-placeholder">"No summaries are available for your role."</p>
            </Show>
        </PageFrame>
    }
}
