use contracts::system::permissions::{Permission, PermissionDraft};
use leptos::prelude::*;

use crate::shared::resource_page::{
    or_dash, Column, FieldKind, FormField, ResourceListPage, ResourceView,
};

impl ResourceView for Permission {
    const PAGE_ID: &'static str = "sys_permission--list";
    const ICON: &'static str = "permissions";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::view("Name", 180.0, |p: &Permission| {
                view! { <code>{p.name.clone()}</code> }.into_any()
            }),
            Column::text("Module", 110.0, |p: &Permission| p.group()),
            Column::text("Description", 240.0, |p: &Permission| or_dash(&p.description)),
        ]
    }

    fn form_fields() -> Vec<FormField<PermissionDraft>> {
        vec![
            FormField::new(
                "name",
                "Name",
                FieldKind::Text,
                |d: &PermissionDraft| d.name.clone(),
                |d, v| d.name = v,
            )
            .required(),
            FormField::new(
                "module",
                "Module",
                FieldKind::Text,
                |d: &PermissionDraft| d.module.clone(),
                |d, v| d.module = v,
            ),
            FormField::new(
                "description",
                "Description",
                FieldKind::TextArea,
                |d: &PermissionDraft| d.description.clone(),
                |d, v| d.description = v,
            ),
        ]
    }
}

#[component]
pub fn PermissionsPage() -> impl IntoView {
    view! { <ResourceListPage<Permission> /> }
}
