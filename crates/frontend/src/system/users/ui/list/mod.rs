use contracts::domain::common::EntityStatus;
use contracts::system::users::{User, UserDraft};
use leptos::prelude::*;

use crate::shared::components::status_badge::StatusBadge;
use crate::shared::date_utils::format_datetime;
use crate::shared::resource_page::fields::{id_text, parse_id};
use crate::shared::resource_page::{
    choices, or_dash, Column, FieldKind, FilterSpec, FormField, ResourceListPage, ResourceView,
};

impl ResourceView for User {
    const PAGE_ID: &'static str = "sys_user--list";
    const ICON: &'static str = "users";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::text("Username", 120.0, |u: &User| u.username.clone()),
            Column::text("Full name", 160.0, |u: &User| or_dash(&u.full_name)),
            Column::text("Email", 180.0, |u: &User| or_dash(&u.email)),
            Column::text("Role", 110.0, |u: &User| or_dash(&u.role_name)),
            Column::view("Status", 90.0, |u: &User| {
                view! { <StatusBadge label=u.status.label() tone=u.status.tone() /> }.into_any()
            }),
            Column::text("Last login", 130.0, |u: &User| {
                u.last_login_at
                    .as_deref()
                    .map(format_datetime)
                    .unwrap_or_else(|| "never".to_string())
            }),
        ]
    }

    fn form_fields() -> Vec<FormField<UserDraft>> {
        vec![
            FormField::new(
                "username",
                "Username",
                FieldKind::Text,
                |d: &UserDraft| d.username.clone(),
                |d, v| d.username = v,
            )
            .required(),
            FormField::new(
                "email",
                "Email",
                FieldKind::Text,
                |d: &UserDraft| d.email.clone(),
                |d, v| d.email = v,
            )
            .required(),
            FormField::new(
                "full_name",
                "Full name",
                FieldKind::Text,
                |d: &UserDraft| d.full_name.clone(),
                |d, v| d.full_name = v,
            ),
            // Left blank on edit to keep the current password
            FormField::new(
                "password",
                "Password",
                FieldKind::Password,
                |d: &UserDraft| d.password.clone(),
                |d, v| d.password = v,
            ),
            FormField::new(
                "role_id",
                "Role",
                FieldKind::Lookup("roles"),
                |d: &UserDraft| id_text(d.role_id),
                |d, v| d.role_id = parse_id(v),
            ),
            FormField::new(
                "status",
                "Status",
                FieldKind::Select(choices::<EntityStatus>),
                |d: &UserDraft| d.status.code().to_string(),
                |d, v| d.status = EntityStatus::from_code(&v),
            ),
        ]
    }

    fn filters() -> Vec<FilterSpec> {
        vec![
            FilterSpec::search(),
            FilterSpec::select("status", "Status", choices::<EntityStatus>),
        ]
    }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    view! { <ResourceListPage<User> /> }
}
