use std::collections::{BTreeMap, BTreeSet};

use contracts::domain::common::EntityId;
use contracts::shared::list::ListQuery;
use contracts::system::permissions::Permission;
use contracts::system::roles::{Role, RolePermissionsUpdate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api_utils::Method;
use crate::shared::modal::Modal;
use crate::shared::resource_api;
use crate::shared::resource_page::notify_parent;
use crate::system::auth::context::use_session;

/// Enough rows to load every permission in one request.
const ALL_PERMISSIONS_LIMIT: u32 = 1000;

/// Permissions grouped by module, each group sorted by name.
pub fn group_permissions(permissions: Vec<Permission>) -> BTreeMap<String, Vec<Permission>> {
    let mut groups: BTreeMap<String, Vec<Permission>> = BTreeMap::new();
    for permission in permissions {
        groups.entry(permission.group()).or_default().push(permission);
    }
    for items in groups.values_mut() {
        items.sort_by(|a, b| a.name.cmp(&b.name));
    }
    groups
}

/// Toggle every id in `ids` on when any is off, otherwise clear them all.
pub fn toggle_group(selected: &mut BTreeSet<EntityId>, ids: &[EntityId]) {
    if ids.iter().all(|id| selected.contains(id)) {
        for id in ids {
            selected.remove(id);
        }
    } else {
        selected.extend(ids.iter().copied());
    }
}

/// Body for the save request. `None` until the role's current set has been
/// fetched, so a half-loaded dialog can never replace it with nothing.
pub fn save_body(selected: &Option<BTreeSet<EntityId>>) -> Option<RolePermissionsUpdate> {
    selected.as_ref().map(RolePermissionsUpdate::from_selection)
}

/// Checkbox editor for the full permission set of one role. List rows carry
/// no permissions, so the current set comes from `GET /api/roles/:id`.
/// Saving replaces it with `PUT /api/roles/:id/permissions`.
#[component]
pub fn RolePermissionsDialog(
    role: Role,
    on_close: Callback<()>,
    on_done: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let id = role.id;
    let title = format!("Permissions: {}", role.name);

    let groups = RwSignal::new(Option::<BTreeMap<String, Vec<Permission>>>::None);
    let selected = RwSignal::new(Option::<BTreeSet<EntityId>>::None);
    let error = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);

    spawn_local(async move {
        match resource_api::get::<Role>(id).await {
            Ok(fresh) => {
                let _ = selected.try_set(Some(fresh.permission_ids()));
            }
            Err(e) => {
                log::error!("Failed to load role #{}: {}", id, e);
                session.report(&e);
                let _ = error.try_set(Some(e.to_string()));
            }
        }
    });

    spawn_local(async move {
        match resource_api::list::<Permission>(&ListQuery::new(1, ALL_PERMISSIONS_LIMIT)).await {
            Ok(page) => {
                let _ = groups.try_set(Some(group_permissions(page.items)));
            }
            Err(e) => {
                log::error!("Failed to load permissions: {}", e);
                session.report(&e);
                let _ = error.try_set(Some(e.to_string()));
            }
        }
    });

    let save = move |_: leptos::ev::MouseEvent| {
        if saving.get_untracked() {
            return;
        }
        let Some(body) = selected.with_untracked(save_body) else {
            return;
        };
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            match resource_api::action::<Role, _>(id, "permissions", Method::Put, &body).await {
                Ok(_) => {
                    log::info!("Role #{} now has {} permissions", id, body.permission_ids.len());
                    notify_parent(on_done, ());
                }
                Err(e) => {
                    session.report(&e);
                    let _ = error.try_set(Some(e.to_string()));
                    let _ = saving.try_set(false);
                }
            }
        });
    };

    let loading =
        Signal::derive(move || groups.with(|g| g.is_none()) || selected.with(|s| s.is_none()));
    let save_disabled = Signal::derive(move || saving.get() || loading.get());

    let footer = move || {
        view! {
            <Flex gap=FlexGap::Small>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close.run(())
                    disabled=saving
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=save
                    disabled=save_disabled
                >
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </Button>
            </Flex>
        }
    };

    view! {
        <Modal title=title on_close=on_close footer=footer>
            {move || error.get().map(|message| view! {
                <div class="alert alert--error">{message}</div>
            })}
            {move || match groups.get().filter(|_| selected.with(|s| s.is_some())) {
                None => view! { <div class="page-placeholder">"Loading permissions..."</div> }.into_any(),
                Some(groups) if groups.is_empty() => {
                    view! { <div class="page-placeholder">"No permissions defined"</div> }.into_any()
                }
                Some(groups) => groups
                    .into_iter()
                    .map(|(module, items)| {
                        let ids: Vec<EntityId> = items.iter().map(|p| p.id).collect();
                        let ids = StoredValue::new(ids);
                        let all_checked = move || {
                            ids.with_value(|ids| selected.with(|s| s.as_ref().is_some_and(|s| ids.iter().all(|id| s.contains(id)))))
                        };
                        view! {
                            <fieldset class="permission-group">
                                <legend>
                                    <label>
                                        <input
                                            type="checkbox"
                                            prop:checked=all_checked
                                            on:change=move |_| {
                                                ids.with_value(|ids| selected.update(|s| {
                                                    if let Some(s) = s {
                                                        toggle_group(s, ids);
                                                    }
                                                }))
                                            }
                                        />
                                        {module}
                                    </label>
                                </legend>
                                {items
                                    .into_iter()
                                    .map(|permission| {
                                        let pid = permission.id;
                                        view! {
                                            <label class="permission-group__item" title=permission.description.clone().unwrap_or_default()>
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || selected.with(|s| s.as_ref().is_some_and(|s| s.contains(&pid)))
                                                    on:change=move |_| selected.update(|s| {
                                                        if let Some(s) = s {
                                                            if !s.remove(&pid) {
                                                                s.insert(pid);
                                                            }
                                                        }
                                                    })
                                                />
                                                <code>{permission.name}</code>
                                            </label>
                                        }
                                    })
                                    .collect_view()}
                            </fieldset>
                        }
                    })
                    .collect_view()
                    .into_any(),
            }}
        </Modal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn permission(id: i64, name: &str) -> Permission {
        serde_json::from_value(json!({"id": id, "name": name})).unwrap()
    }

    #[test]
    fn test_group_permissions_by_module() {
        let groups = group_permissions(vec![
            permission(1, "assets.view"),
            permission(2, "roles.update"),
            permission(3, "assets.create"),
        ]);
        assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["assets", "roles"]);
        let names: Vec<_> = groups["assets"].iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["assets.create", "assets.view"]);
    }

    #[test]
    fn test_toggle_group() {
        let ids: Vec<EntityId> = vec![permission(1, "a.x").id, permission(2, "a.y").id];
        let mut selected = BTreeSet::from([ids[0]]);
        toggle_group(&mut selected, &ids);
        assert_eq!(selected.len(), 2);
        toggle_group(&mut selected, &ids);
        assert!(selected.is_empty());
    }

    #[test]
    fn test_save_waits_for_fetched_role() {
        assert_eq!(save_body(&None), None);

        let fetched: Role = serde_json::from_value(json!({
            "id": 4,
            "name": "Editor",
            "permissions": [{"id": 7, "name": "assets.update"}, {"id": 2, "name": "assets.view"}]
        }))
        .unwrap();
        let body = save_body(&Some(fetched.permission_ids())).unwrap();
        let ids: Vec<i64> = body.permission_ids.iter().map(|id| id.value()).collect();
        assert_eq!(ids, vec![2, 7]);
    }
}
