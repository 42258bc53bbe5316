//! Navigation listing only the pages the signed-in user may view.

use contracts::domain::a001_asset::Asset;
use contracts::domain::a002_accessory::Accessory;
use contracts::domain::a003_category::Category;
use contracts::domain::a004_consumable::Consumable;
use contracts::domain::a005_license::License;
use contracts::domain::a006_tool::Tool;
use contracts::domain::a007_work_order::WorkOrder;
use contracts::shared::resource::{Action, Resource};
use contracts::system::auth::SessionState;
use contracts::system::permissions::Permission;
use contracts::system::roles::Role;
use contracts::system::users::User;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::icons::icon;

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    /// `None` for pages every signed-in user sees.
    pub permission: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavGroup {
    pub label: &'static str,
    pub items: Vec<NavItem>,
}

fn item<R: Resource>(path: &'static str, icon: &'static str) -> NavItem {
    NavItem {
        path,
        label: R::LABEL,
        icon,
        permission: Some(R::permission(Action::View)),
    }
}

pub fn nav_groups() -> Vec<NavGroup> {
    vec![
        NavGroup {
            label: "Overview",
            items: vec![NavItem {
                path: "/",
                label: "Home",
                icon: "home",
                permission: None,
            }],
        },
        NavGroup {
            label: "Inventory",
            items: vec![
                item::<Asset>("/assets", "assets"),
                item::<Accessory>("/accessories", "accessories"),
                item::<Consumable>("/consumables", "consumables"),
                item::<License>("/licenses", "licenses"),
                item::<Tool>("/tools", "tools"),
                item::<Category>("/categories", "categories"),
            ],
        },
        NavGroup {
            label: "Maintenance",
            items: vec![item::<WorkOrder>("/work-orders", "work-orders")],
        },
        NavGroup {
            label: "Administration",
            items: vec![
                item::<User>("/users", "users"),
                item::<Role>("/roles", "roles"),
                item::<Permission>("/permissions", "permissions"),
            ],
        },
    ]
}

/// Groups trimmed to the items `state` may view; empty groups are dropped.
pub fn visible_groups(state: &SessionState) -> Vec<NavGroup> {
    nav_groups()
        .into_iter()
        .filter_map(|group| {
            let items: Vec<NavItem> = group
                .items
                .into_iter()
                .filter(|item| {
                    item.permission
                        .as_deref()
                        .map(|p| state.can(p))
                        .unwrap_or_else(|| state.token().is_some())
                })
                .collect();
            (!items.is_empty()).then_some(NavGroup { items, ..group })
        })
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = crate::system::auth::context::use_session();
    let groups = Memo::new(move |_| session.state.with(visible_groups));

    view! {
        <div class="app-sidebar__content">
            {move || {
                groups
                    .get()
                    .into_iter()
                    .map(|group| {
                        view! {
                            <div class="app-sidebar__group">
                                <div class="app-sidebar__group-label">{group.label}</div>
                                {group
                                    .items
                                    .into_iter()
                                    .map(|item| {
                                        view! {
                                            <A href=item.path attr:class="app-sidebar__item">
                                                {icon(item.icon)}
                                                <span>{item.label}</span>
                                            </A>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::auth::UserInfo;
    use serde_json::json;

    fn signed_in(permissions: &[&str]) -> SessionState {
        let user: UserInfo = serde_json::from_value(json!({
            "id": 1, "username": "viewer", "permissions": permissions
        }))
        .unwrap();
        SessionState::verified("token".into(), user)
    }

    fn paths(groups: &[NavGroup]) -> Vec<&'static str> {
        groups.iter().flat_map(|g| g.items.iter().map(|i| i.path)).collect()
    }

    #[test]
    fn test_only_viewable_pages_listed() {
        let groups = visible_groups(&signed_in(&["assets.view", "work_orders.view"]));
        assert_eq!(paths(&groups), vec!["/", "/assets", "/work-orders"]);
        assert!(groups.iter().all(|g| g.label != "Administration"));
    }

    #[test]
    fn test_wildcard_lists_everything() {
        let all: usize = nav_groups().iter().map(|g| g.items.len()).sum();
        let groups = visible_groups(&signed_in(&["*"]));
        assert_eq!(paths(&groups).len(), all);
    }

    #[test]
    fn test_anonymous_sees_nothing() {
        assert!(visible_groups(&SessionState::Anonymous).is_empty());
    }
}
