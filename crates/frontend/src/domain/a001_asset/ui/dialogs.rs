use contracts::domain::a001_asset::{Asset, AssetAssignment, AssetTransfer};
use leptos::prelude::*;

use crate::shared::api_utils::Method;
use crate::shared::resource_page::fields::{id_text, parse_id};
use crate::shared::resource_page::{ActionDialog, FieldKind, FormField};

/// Assign to a user, or check in by leaving the user empty.
#[component]
pub fn AssignAssetDialog(asset: Asset, on_close: Callback<()>, on_done: Callback<()>) -> impl IntoView {
    let initial = AssetAssignment {
        user_id: asset.assigned_to,
        ..Default::default()
    };
    let fields = vec![
        FormField::new(
            "user_id",
            "Assign to",
            FieldKind::Lookup("users"),
            |d: &AssetAssignment| id_text(d.user_id),
            |d, v| d.user_id = parse_id(v),
        ),
        FormField::new("notes", "Notes", FieldKind::TextArea, |d: &AssetAssignment| d.notes.clone(), |d, v| d.notes = v),
    ];

    view! {
        <ActionDialog<Asset, AssetAssignment>
            record=asset
            action="assign"
            method=Method::Patch
            title="Assign asset"
            fields=fields
            initial=initial
            on_close=on_close
            on_done=on_done
        />
    }
}

#[component]
pub fn TransferAssetDialog(asset: Asset, on_close: Callback<()>, on_done: Callback<()>) -> impl IntoView {
    let initial = AssetTransfer {
        to_user_id: asset.assigned_to,
        ..Default::default()
    };
    let fields = vec![
        FormField::new(
            "to_location",
            "New location",
            FieldKind::Text,
            |d: &AssetTransfer| d.to_location.clone(),
            |d, v| d.to_location = v,
        )
        .required(),
        FormField::new(
            "to_user_id",
            "New holder",
            FieldKind::Lookup("users"),
            |d: &AssetTransfer| id_text(d.to_user_id),
            |d, v| d.to_user_id = parse_id(v),
        ),
        FormField::new("notes", "Notes", FieldKind::TextArea, |d: &AssetTransfer| d.notes.clone(), |d, v| d.notes = v),
    ];

    view! {
        <ActionDialog<Asset, AssetTransfer>
            record=asset
            action="transfer"
            method=Method::Post
            title="Transfer asset"
            fields=fields
            initial=initial
            submit_label="Transfer"
            on_close=on_close
            on_done=on_done
        />
    }
}
