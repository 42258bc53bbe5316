use contracts::domain::a003_category::{Category, CategoryDraft, CategoryKind};
use contracts::domain::common::EntityStatus;
use leptos::prelude::*;

use crate::shared::components::status_badge::StatusBadge;
use crate::shared::resource_page::{
    choices, or_dash, Column, FieldKind, FilterSpec, FormField, ResourceListPage, ResourceView,
};

fn kind_choices() -> Vec<(String, String)> {
    CategoryKind::ALL
        .iter()
        .map(|k| (k.code().to_string(), k.label().to_string()))
        .collect()
}

impl ResourceView for Category {
    const PAGE_ID: &'static str = "a003_category--list";
    const ICON: &'static str = "categories";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::text("Name", 180.0, |c: &Category| c.name.clone()),
            Column::text("Type", 100.0, |c: &Category| c.category_type.label().to_string()),
            Column::text("Description", 240.0, |c: &Category| or_dash(&c.description)),
            Column::view("Status", 100.0, |c: &Category| {
                view! { <StatusBadge label=c.status.label() tone=c.status.tone() /> }.into_any()
            }),
        ]
    }

    fn form_fields() -> Vec<FormField<CategoryDraft>> {
        vec![
            FormField::new(
                "name",
                "Name",
                FieldKind::Text,
                |d: &CategoryDraft| d.name.clone(),
                |d, v| d.name = v,
            )
            .required(),
            FormField::new(
                "category_type",
                "Type",
                FieldKind::Select(kind_choices),
                |d: &CategoryDraft| d.category_type.code().to_string(),
                |d, v| d.category_type = CategoryKind::from_code(&v),
            ),
            FormField::new(
                "description",
                "Description",
                FieldKind::TextArea,
                |d: &CategoryDraft| d.description.clone(),
                |d, v| d.description = v,
            ),
            FormField::new(
                "status",
                "Status",
                FieldKind::Select(choices::<EntityStatus>),
                |d: &CategoryDraft| d.status.code().to_string(),
                |d, v| d.status = EntityStatus::from_code(&v),
            ),
        ]
    }

    fn filters() -> Vec<FilterSpec> {
        vec![
            FilterSpec::search(),
            FilterSpec::select("category_type", "Type", kind_choices),
        ]
    }
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    view! { <ResourceListPage<Category> /> }
}
