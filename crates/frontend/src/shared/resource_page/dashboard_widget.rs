use contracts::dashboards::d100_resource_summary::DashboardSummary;
use contracts::shared::resource::Resource;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::components::stat_card::StatCard;
use crate::shared::resource_api;
use crate::system::auth::context::use_session;

#[derive(Clone, Debug, PartialEq)]
enum WidgetState {
    Loading,
    Ready(DashboardSummary),
    Failed(String),
}

/// Summary tiles from `GET /api/<segment>/dashboard`. Refetches whenever
/// `version` changes. Renders nothing for resources without a dashboard.
#[component]
pub fn DashboardWidget<R: Resource>(
    #[prop(optional)] version: Option<RwSignal<u64>>,
    /// Heading shown above the tiles (home page); list pages omit it.
    #[prop(optional)]
    heading: Option<&'static str>,
    #[prop(optional)] _marker: std::marker::PhantomData<R>,
) -> impl IntoView {
    if !R::HAS_DASHBOARD {
        return ().into_any();
    }

    let session = use_session();
    let state = RwSignal::new(WidgetState::Loading);

    Effect::new(move |_| {
        if let Some(version) = version {
            version.track();
        }
        spawn_local(async move {
            let next = match resource_api::dashboard::<R>().await {
                Ok(summary) => WidgetState::Ready(summary),
                Err(e) => {
                    session.report(&e);
                    WidgetState::Failed(e.to_string())
                }
            };
            let _ = state.try_set(next);
        });
    });

    view! {
        <section class="dashboard-widget">
            {heading.map(|h| view! { <h2 class="dashboard-widget__title">{h}</h2> })}
            {move || match state.get() {
                WidgetState::Loading => view! {
                    <div class="dashboard-widget__placeholder">"Loading summary..."</div>
                }
                .into_any(),
                WidgetState::Failed(message) => view! {
                    <div class="dashboard-widget__placeholder dashboard-widget__placeholder--error">
                        {format!("Summary unavailable: {}", message)}
                    </div>
                }
                .into_any(),
                WidgetState::Ready(summary) if summary.is_empty() => view! {
                    <div class="dashboard-widget__placeholder">"No summary data"</div>
                }
                .into_any(),
                WidgetState::Ready(summary) => view! {
                    <div class="dashboard-widget__tiles">
                        {summary
                            .tiles
                            .into_iter()
                            .map(|tile| view! { <StatCard tile=tile /> })
                            .collect_view()}
                    </div>
                }
                .into_any(),
            }}
        </section>
    }
    .into_any()
}
