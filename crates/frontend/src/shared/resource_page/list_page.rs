use contracts::shared::form_state::FormState;
use contracts::shared::list_state::{ListPageState, LoadPhase};
use contracts::shared::resource::{Action, Resource};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::{FilterKind, FilterSpec, FormModal, ResourceView};
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::resource_api;
use crate::shared::resource_page::DashboardWidget;
use crate::system::auth::context::use_session;

/// Pause in typing after which the search box applies itself.
const SEARCH_DEBOUNCE_MS: u32 = 400;

/// Extra per-row button (assign, transfer, permissions...). Shown only when
/// the user holds `permission` and `visible` accepts the row.
pub struct RowAction<R: 'static> {
    pub label: &'static str,
    pub icon: &'static str,
    pub permission: String,
    pub visible: fn(&R) -> bool,
    pub on_click: Callback<R>,
}

impl<R: 'static> Clone for RowAction<R> {
    fn clone(&self) -> Self {
        Self {
            label: self.label,
            icon: self.icon,
            permission: self.permission.clone(),
            visible: self.visible,
            on_click: self.on_click,
        }
    }
}

impl<R: 'static> RowAction<R> {
    pub fn new(label: &'static str, icon: &'static str, permission: String, on_click: Callback<R>) -> Self {
        Self {
            label,
            icon,
            permission,
            visible: |_| true,
            on_click,
        }
    }

    pub fn when(mut self, visible: fn(&R) -> bool) -> Self {
        self.visible = visible;
        self
    }
}

/// Paginated, filterable table for `R` with create/edit/delete.
///
/// `version` is bumped after every successful mutation; pass it in to let a
/// page's own sub-action dialogs trigger the same refetch.
#[component]
pub fn ResourceListPage<R: ResourceView>(
    #[prop(optional)] row_actions: Vec<RowAction<R>>,
    #[prop(optional)] version: Option<RwSignal<u64>>,
) -> impl IntoView {
    let session = use_session();
    let settings = &config().list;
    let state = RwSignal::new(ListPageState::<R>::new(
        settings.default_limit,
        config().filter_reset_policy(),
    ));
    let version = version.unwrap_or_else(|| RwSignal::new(0));
    let form: RwSignal<Option<FormState<R::Draft>>> = RwSignal::new(None);
    let deleting = RwSignal::new(false);
    let action_error = RwSignal::new(Option::<String>::None);

    let load = move || {
        let Some(query) = state.try_update(|s| s.begin_load()) else {
            return;
        };
        spawn_local(async move {
            let result = resource_api::list::<R>(&query).await;
            let _ = state.try_update(|s| {
                if !s.is_current(&query) {
                    return;
                }
                match result {
                    Ok(page) => s.apply_page(page),
                    Err(e) => {
                        log::error!("Failed to load {}: {}", R::LABEL.to_lowercase(), e);
                        session.report(&e);
                        s.apply_error(e.to_string());
                    }
                }
            });
        });
    };

    let bump = move || version.update(|v| *v += 1);

    // Initial fetch and every mutation
    Effect::new(move |_| {
        version.track();
        load();
    });

    let go_to_page = move |page: u32| {
        if state.try_update(|s| s.set_page(page)).unwrap_or(false) {
            load();
        }
    };

    let change_page_size = move |limit: u32| {
        if state.try_update(|s| s.set_limit(limit)).unwrap_or(false) {
            load();
        }
    };

    let filters = R::filters();
    let filter_inputs: Vec<(FilterSpec, RwSignal<String>)> = filters
        .into_iter()
        .map(|spec| (spec, RwSignal::new(String::new())))
        .collect();
    let filter_inputs = StoredValue::new(filter_inputs);

    let apply_filters = move || {
        let changed = filter_inputs.with_value(|inputs| {
            state
                .try_update(|s| {
                    inputs.iter().fold(false, |changed, (spec, input)| {
                        s.set_filter(spec.key, &input.get_untracked()) || changed
                    })
                })
                .unwrap_or(false)
        });
        if changed {
            load();
        }
    };

    // Latest keystroke wins; older timers see a newer ticket and give up
    let search_ticket = StoredValue::new(0u64);
    let debounce_search = move |input: RwSignal<String>| {
        Effect::new(move |previous: Option<String>| {
            let value = input.get();
            if previous.is_some_and(|p| p != value) {
                let ticket = search_ticket.get_value() + 1;
                search_ticket.set_value(ticket);
                spawn_local(async move {
                    TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
                    if search_ticket.try_with_value(|t| *t == ticket).unwrap_or(false) {
                        apply_filters();
                    }
                });
            }
            value
        });
    };

    let reset_filters = move || {
        filter_inputs.with_value(|inputs| {
            for (_, input) in inputs {
                input.set(String::new());
            }
        });
        if state.try_update(|s| s.clear_filters()).unwrap_or(false) {
            load();
        }
    };

    let on_saved = Callback::new(move |saved: R| {
        log::info!("Saved {} #{}", R::SINGULAR, saved.id());
        bump();
    });

    let confirm_delete = Callback::new(move |_| {
        let Some(id) = state.try_update(|s| s.confirm_delete()).flatten() else {
            return;
        };
        deleting.set(true);
        action_error.set(None);
        spawn_local(async move {
            match resource_api::remove::<R>(id).await {
                Ok(()) => {
                    log::info!("Deleted {} #{}", R::SINGULAR, id);
                    let _ = version.try_update(|v| *v += 1);
                }
                Err(e) => {
                    session.report(&e);
                    let _ = action_error.try_set(Some(format!("Delete failed: {}", e)));
                }
            }
            let _ = deleting.try_set(false);
        });
    });

    let can_create = move || session.can(&R::permission(Action::Create));
    let can_update = move || session.can(&R::permission(Action::Update));
    let can_delete = move || session.can(&R::permission(Action::Delete));

    let loading = Signal::derive(move || state.with(|s| s.is_loading()));
    let row_actions = StoredValue::new(row_actions);
    let column_count = R::columns().len() + 1;

    let filter_controls = filter_inputs.with_value(|inputs| {
        inputs
            .iter()
            .map(|(spec, input)| {
                let input = *input;
                match spec.kind {
                    FilterKind::Search => {
                        debounce_search(input);
                        view! {
                            <div class="filter-panel__field filter-panel__field--search"
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        apply_filters();
                                    }
                                }
                            >
                                <Input value=input placeholder=spec.label />
                            </div>
                        }
                        .into_any()
                    }
                    FilterKind::Select(options) => view! {
                        <div class="filter-panel__field">
                            <select
                                class="form-control"
                                prop:value=move || input.get()
                                on:change=move |ev| {
                                    input.set(event_target_value(&ev));
                                    apply_filters();
                                }
                            >
                                <option value="">{format!("All: {}", spec.label)}</option>
                                {options()
                                    .into_iter()
                                    .map(|(code, label)| view! { <option value=code>{label}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                    }
                    .into_any(),
                }
            })
            .collect_view()
    });

    let rows = move || {
        let (items, phase) = state.with(|s| (s.items.clone(), s.phase.clone()));
        if items.is_empty() {
            let message = match phase {
                LoadPhase::Loading | LoadPhase::Idle => "Loading...".to_string(),
                _ => format!("No {} found", R::LABEL.to_lowercase()),
            };
            return view! {
                <TableRow>
                    <TableCell attr:colspan=column_count.to_string()>
                        <div class="table__empty">{message}</div>
                    </TableCell>
                </TableRow>
            }
            .into_any();
        }

        let columns = R::columns();
        items
            .into_iter()
            .map(|item| {
                let cells = columns
                    .iter()
                    .map(|column| {
                        let cell = column.render(&item);
                        view! {
                            <TableCell>
                                <TableCellLayout truncate=true>{cell}</TableCellLayout>
                            </TableCell>
                        }
                    })
                    .collect_view();

                let extra = row_actions.with_value(|actions| {
                    actions
                        .iter()
                        .filter(|action| (action.visible)(&item))
                        .map(|action| {
                            let label = action.label;
                            let icon_name = action.icon;
                            let on_click = action.on_click;
                            let permission = action.permission.clone();
                            let target = item.clone();
                            view! {
                                <Show when=move || session.can(&permission)>
                                    <button
                                        class="button button--icon"
                                        title=label
                                        on:click={
                                            let target = target.clone();
                                            move |_| on_click.run(target.clone())
                                        }
                                    >
                                        {icon(icon_name)}
                                    </button>
                                </Show>
                            }
                        })
                        .collect_view()
                });

                let for_edit = item.clone();
                let for_delete = item;
                view! {
                    <TableRow>
                        {cells}
                        <TableCell>
                            <div class="table__actions">
                                {extra}
                                <Show when=can_update>
                                    <button
                                        class="button button--icon"
                                        title="Edit"
                                        disabled=move || loading.get()
                                        on:click={
                                            let item = for_edit.clone();
                                            move |_| form.set(Some(FormState::open(Some(&item))))
                                        }
                                    >
                                        {icon("edit")}
                                    </button>
                                </Show>
                                <Show when=can_delete>
                                    <button
                                        class="button button--icon button--danger"
                                        title="Delete"
                                        on:click={
                                            let item = for_delete.clone();
                                            move |_| state.update(|s| s.request_delete(&item))
                                        }
                                    >
                                        {icon("trash")}
                                    </button>
                                </Show>
                            </div>
                        </TableCell>
                    </TableRow>
                }
            })
            .collect_view()
            .into_any()
    };

    let open_blank = move |_: leptos::ev::MouseEvent| form.set(Some(FormState::open(None::<&R>)));

    view! {
        <PageFrame page_id=R::PAGE_ID category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon(R::ICON)}
                    <h1 class="page__title">{R::LABEL}</h1>
                    <Badge>{move || state.with(|s| s.total.to_string())}</Badge>
                </div>
                <div class="page__header-right">
                    <Show when=can_create>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=open_blank
                            disabled=loading
                        >
                            {icon("plus")}
                            {format!(" New {}", R::SINGULAR)}
                        </Button>
                    </Show>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=loading
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <DashboardWidget<R> version=version />

                {move || action_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="filter-panel">
                    <div class="filter-panel-header">
                        <div class="filter-panel-header__left">
                            {icon("filter")}
                            <span class="filter-panel__title">"Filters"</span>
                        </div>
                        <div class="filter-panel-header__center">
                            <PaginationControls
                                pagination=Signal::derive(move || state.with(|s| s.pagination()))
                                on_page_change=Callback::new(go_to_page)
                                on_page_size_change=Callback::new(change_page_size)
                                page_size_options=settings.page_size_options.clone()
                                disabled=loading
                            />
                        </div>
                    </div>
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            {filter_controls}
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| apply_filters()
                                disabled=loading
                            >
                                "Search"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| reset_filters()
                            >
                                "Reset"
                            </Button>
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper" class:table-wrapper--loading=move || loading.get()>
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                {R::columns()
                                    .into_iter()
                                    .map(|column| view! {
                                        <TableHeaderCell min_width=column.min_width>{column.header}</TableHeaderCell>
                                    })
                                    .collect_view()}
                                <TableHeaderCell min_width=90.0>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>{rows}</TableBody>
                    </Table>
                </div>
            </div>

            <Show when=move || form.with(Option::is_some)>
                <FormModal<R> form=form on_saved=on_saved />
            </Show>

            {move || {
                state.with(|s| s.pending_delete.clone()).map(|(_, title)| view! {
                    <ConfirmDialog
                        title=format!("Delete {}", R::SINGULAR)
                        message=format!("Delete \"{}\"? This cannot be undone.", title)
                        busy=deleting
                        on_confirm=confirm_delete
                        on_cancel=Callback::new(move |_| state.update(|s| s.cancel_delete()))
                    />
                })
            }}

        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::roles::Role;
    use leptos::reactive::owner::Owner;
    use serde_json::json;

    fn role(id: i64, users: u64) -> Role {
        serde_json::from_value(json!({"id": id, "name": "Staff", "users_count": users})).unwrap()
    }

    #[test]
    fn test_row_action_clone_keeps_filter_and_callback() {
        let owner = Owner::new();
        owner.set();
        let action = RowAction::new(
            "Permissions",
            "shield",
            "roles.update".to_string(),
            Callback::new(|_: Role| {}),
        )
        .when(|r: &Role| r.users_count.unwrap_or(0) > 0);

        let copy = action.clone();
        assert_eq!(copy.permission, "roles.update");
        assert!((copy.visible)(&role(1, 2)));
        assert!(!(copy.visible)(&role(2, 0)));
        assert_eq!(copy.on_click.try_run(role(1, 2)), Some(()));
    }
}
