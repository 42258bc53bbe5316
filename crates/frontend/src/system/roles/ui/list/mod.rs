use contracts::shared::resource::{Action, Resource};
use contracts::system::roles::{Role, RoleDraft};
use leptos::prelude::*;

use super::dialogs::RolePermissionsDialog;
use crate::shared::resource_page::{
    or_dash, Column, FieldKind, FormField, ResourceListPage, ResourceView, RowAction,
};

impl ResourceView for Role {
    const PAGE_ID: &'static str = "sys_role--list";
    const ICON: &'static str = "roles";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::text("Name", 140.0, |r: &Role| r.name.clone()),
            Column::text("Description", 220.0, |r: &Role| or_dash(&r.description)),
            Column::text("Permissions", 90.0, |r: &Role| r.permissions.len().to_string()),
            Column::text("Users", 70.0, |r: &Role| {
                r.users_count
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "-".to_string())
            }),
        ]
    }

    fn form_fields() -> Vec<FormField<RoleDraft>> {
        vec![
            FormField::new(
                "name",
                "Name",
                FieldKind::Text,
                |d: &RoleDraft| d.name.clone(),
                |d, v| d.name = v,
            )
            .required(),
            FormField::new(
                "description",
                "Description",
                FieldKind::TextArea,
                |d: &RoleDraft| d.description.clone(),
                |d, v| d.description = v,
            ),
        ]
    }
}

#[component]
pub fn RolesPage() -> impl IntoView {
    let version = RwSignal::new(0u64);
    let editing = RwSignal::new(Option::<Role>::None);

    let row_actions = vec![RowAction::new(
        "Permissions",
        "permissions",
        Role::permission(Action::Update),
        Callback::new(move |role: Role| editing.set(Some(role))),
    )];

    view! {
        <ResourceListPage<Role> row_actions=row_actions version=version />
        {move || editing.get().map(|role| view! {
            <RolePermissionsDialog
                role=role
                on_close=Callback::new(move |_| editing.set(None))
                on_done=Callback::new(move |_| {
                    editing.set(None);
                    version.update(|v| *v += 1);
                })
            />
        })}
    }
}
