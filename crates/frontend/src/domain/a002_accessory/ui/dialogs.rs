use contracts::domain::a002_accessory::{Accessory, AccessoryAssignment, MovementType, StockMovement};
use contracts::shared::validation::{FieldErrors, Validate};
use leptos::prelude::*;

use crate::shared::api_utils::Method;
use crate::shared::resource_page::fields::{id_text, parse_id, parse_int};
use crate::shared::resource_page::{ActionDialog, FieldKind, FormField};

fn movement_choices() -> Vec<(String, String)> {
    MovementType::ALL
        .iter()
        .map(|m| (m.code().to_string(), m.label().to_string()))
        .collect()
}

fn check_stock(accessory: &Accessory, assignment: &AccessoryAssignment) -> FieldErrors {
    assignment.validate_against(accessory)
}

/// Stock may not go below zero.
fn check_movement(accessory: &Accessory, movement: &StockMovement) -> FieldErrors {
    let mut errors = movement.validate();
    if movement.resulting_quantity(accessory.quantity) < 0 {
        errors.add("quantity", format!("Only {} in stock", accessory.quantity));
    }
    errors
}

#[component]
pub fn AssignAccessoryDialog(
    accessory: Accessory,
    on_close: Callback<()>,
    on_done: Callback<()>,
) -> impl IntoView {
    let fields = vec![
        FormField::new(
            "user_id",
            "Assign to",
            FieldKind::Lookup("users"),
            |d: &AccessoryAssignment| id_text(d.user_id),
            |d, v| d.user_id = parse_id(v),
        )
        .required(),
        FormField::new(
            "quantity",
            "Quantity",
            FieldKind::Number,
            |d: &AccessoryAssignment| d.quantity.to_string(),
            |d, v| d.quantity = parse_int(&v, d.quantity),
        )
        .required(),
        FormField::new(
            "notes",
            "Notes",
            FieldKind::TextArea,
            |d: &AccessoryAssignment| d.notes.clone(),
            |d, v| d.notes = v,
        ),
    ];

    view! {
        <ActionDialog<Accessory, AccessoryAssignment>
            record=accessory
            action="assign"
            method=Method::Post
            title="Assign accessory"
            fields=fields
            check=check_stock
            submit_label="Assign"
            on_close=on_close
            on_done=on_done
        />
    }
}

#[component]
pub fn StockMovementDialog(
    accessory: Accessory,
    on_close: Callback<()>,
    on_done: Callback<()>,
) -> impl IntoView {
    let fields = vec![
        FormField::new(
            "movement_type",
            "Movement",
            FieldKind::Select(movement_choices),
            |d: &StockMovement| d.movement_type.code().to_string(),
            |d, v| d.movement_type = MovementType::from_code(&v),
        ),
        FormField::new(
            "quantity",
            "Quantity",
            FieldKind::Number,
            |d: &StockMovement| d.quantity.to_string(),
            |d, v| d.quantity = parse_int(&v, d.quantity),
        )
        .required(),
        FormField::new(
            "reason",
            "Reason",
            FieldKind::TextArea,
            |d: &StockMovement| d.reason.clone(),
            |d, v| d.reason = v,
        ),
    ];

    view! {
        <ActionDialog<Accessory, StockMovement>
            record=accessory
            action="stock-movement"
            method=Method::Post
            title="Stock movement"
            fields=fields
            check=check_movement
            on_close=on_close
            on_done=on_done
        />
    }
}
