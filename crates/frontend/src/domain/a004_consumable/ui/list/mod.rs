use contracts::domain::a004_consumable::{Consumable, ConsumableDraft};
use contracts::domain::common::EntityStatus;
use leptos::prelude::*;

use crate::domain::a002_accessory::ui::list::stock_cell;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::resource_page::fields::{id_text, parse_id, parse_int};
use crate::shared::resource_page::{
    choices, or_dash, Column, FieldKind, FilterSpec, FormField, ResourceListPage, ResourceView,
};

impl ResourceView for Consumable {
    const PAGE_ID: &'static str = "a004_consumable--list";
    const ICON: &'static str = "consumables";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::text("Name", 180.0, |c: &Consumable| c.name.clone()),
            Column::text("Category", 120.0, |c: &Consumable| or_dash(&c.category_name)),
            Column::view("Quantity", 90.0, |c: &Consumable| stock_cell(c.quantity, c.is_low_stock())),
            Column::text("Unit", 70.0, |c: &Consumable| or_dash(&c.unit)),
            Column::text("Min", 60.0, |c: &Consumable| c.min_quantity.to_string()),
            Column::text("Location", 120.0, |c: &Consumable| or_dash(&c.location)),
            Column::view("Status", 100.0, |c: &Consumable| {
                view! { <StatusBadge label=c.status.label() tone=c.status.tone() /> }.into_any()
            }),
        ]
    }

    fn form_fields() -> Vec<FormField<ConsumableDraft>> {
        vec![
            FormField::new(
                "name",
                "Name",
                FieldKind::Text,
                |d: &ConsumableDraft| d.name.clone(),
                |d, v| d.name = v,
            )
            .required(),
            FormField::new(
                "category_id",
                "Category",
                FieldKind::Lookup("categories"),
                |d: &ConsumableDraft| id_text(d.category_id),
                |d, v| d.category_id = parse_id(v),
            ),
            FormField::new(
                "quantity",
                "Quantity",
                FieldKind::Number,
                |d: &ConsumableDraft| d.quantity.to_string(),
                |d, v| d.quantity = parse_int(&v, d.quantity),
            ),
            FormField::new(
                "min_quantity",
                "Minimum quantity",
                FieldKind::Number,
                |d: &ConsumableDraft| d.min_quantity.to_string(),
                |d, v| d.min_quantity = parse_int(&v, d.min_quantity),
            ),
            FormField::new(
                "unit",
                "Unit",
                FieldKind::Text,
                |d: &ConsumableDraft| d.unit.clone(),
                |d, v| d.unit = v,
            ),
            FormField::new(
                "location",
                "Location",
                FieldKind::Text,
                |d: &ConsumableDraft| d.location.clone(),
                |d, v| d.location = v,
            ),
            FormField::new(
                "status",
                "Status",
                FieldKind::Select(choices::<EntityStatus>),
                |d: &ConsumableDraft| d.status.code().to_string(),
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
pub fn ConsumablesPage() -> impl IntoView {
    view! { <ResourceListPage<Consumable> /> }
}
