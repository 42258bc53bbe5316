use contracts::domain::a002_accessory::{Accessory, AccessoryDraft};
use contracts::domain::common::EntityStatus;
use contracts::shared::resource::{Action, Resource};
use leptos::prelude::*;

use super::dialogs::{AssignAccessoryDialog, StockMovementDialog};
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::resource_page::fields::{id_text, parse_id, parse_int};
use crate::shared::resource_page::{
    choices, or_dash, Column, FieldKind, FilterSpec, FormField, ResourceListPage, ResourceView,
    RowAction,
};

/// Quantity cell with the low-stock flag.
pub fn stock_cell(quantity: i64, low: bool) -> AnyView {
    if low {
        view! {
            <span class="stock stock--low" title="At or below minimum">
                {quantity.to_string()}
                <span class="badge badge--error">"Low"</span>
            </span>
        }
        .into_any()
    } else {
        view! { <span class="stock">{quantity.to_string()}</span> }.into_any()
    }
}

impl ResourceView for Accessory {
    const PAGE_ID: &'static str = "a002_accessory--list";
    const ICON: &'static str = "accessories";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::text("Name", 180.0, |a: &Accessory| a.name.clone()),
            Column::text("Category", 120.0, |a: &Accessory| or_dash(&a.category_name)),
            Column::view("Quantity", 90.0, |a: &Accessory| stock_cell(a.quantity, a.is_low_stock())),
            Column::text("Min", 60.0, |a: &Accessory| a.min_quantity.to_string()),
            Column::text("Location", 120.0, |a: &Accessory| or_dash(&a.location)),
            Column::view("Status", 100.0, |a: &Accessory| {
                view! { <StatusBadge label=a.status.label() tone=a.status.tone() /> }.into_any()
            }),
        ]
    }

    fn form_fields() -> Vec<FormField<AccessoryDraft>> {
        vec![
            FormField::new(
                "name",
                "Name",
                FieldKind::Text,
                |d: &AccessoryDraft| d.name.clone(),
                |d, v| d.name = v,
            )
            .required(),
            FormField::new(
                "category_id",
                "Category",
                FieldKind::Lookup("categories"),
                |d: &AccessoryDraft| id_text(d.category_id),
                |d, v| d.category_id = parse_id(v),
            ),
            FormField::new(
                "quantity",
                "Quantity",
                FieldKind::Number,
                |d: &AccessoryDraft| d.quantity.to_string(),
                |d, v| d.quantity = parse_int(&v, d.quantity),
            ),
            FormField::new(
                "min_quantity",
                "Minimum quantity",
                FieldKind::Number,
                |d: &AccessoryDraft| d.min_quantity.to_string(),
                |d, v| d.min_quantity = parse_int(&v, d.min_quantity),
            ),
            FormField::new(
                "location",
                "Location",
                FieldKind::Text,
                |d: &AccessoryDraft| d.location.clone(),
                |d, v| d.location = v,
            ),
            FormField::new(
                "status",
                "Status",
                FieldKind::Select(choices::<EntityStatus>),
                |d: &AccessoryDraft| d.status.code().to_string(),
                |d, v| d.status = EntityStatus::from_code(&v),
            ),
            FormField::new(
                "notes",
                "Notes",
                FieldKind::TextArea,
                |d: &AccessoryDraft| d.notes.clone(),
                |d, v| d.notes = v,
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
pub fn AccessoriesPage() -> impl IntoView {
    let version = RwSignal::new(0u64);
    let assigning = RwSignal::new(Option::<Accessory>::None);
    let moving = RwSignal::new(Option::<Accessory>::None);

    let row_actions = vec![
        RowAction::new(
            "Assign",
            "assign",
            Accessory::permission(Action::Update),
            Callback::new(move |accessory: Accessory| assigning.set(Some(accessory))),
        )
        .when(|a| a.quantity > 0),
        RowAction::new(
            "Stock movement",
            "stock",
            Accessory::permission(Action::Update),
            Callback::new(move |accessory: Accessory| moving.set(Some(accessory))),
        ),
    ];

    // Close the dialog held in `slot` and refetch
    let done = move |slot: RwSignal<Option<Accessory>>| {
        Callback::new(move |_: ()| {
            slot.set(None);
            version.update(|v| *v += 1);
        })
    };

    view! {
        <ResourceListPage<Accessory> row_actions=row_actions version=version />
        {move || assigning.get().map(|accessory| view! {
            <AssignAccessoryDialog
                accessory=accessory
                on_close=Callback::new(move |_| assigning.set(None))
                on_done=done(assigning)
            />
        })}
        {move || moving.get().map(|accessory| view! {
            <StockMovementDialog
                accessory=accessory
                on_close=Callback::new(move |_| moving.set(None))
                on_done=done(moving)
            />
        })}
    }
}
