use contracts::domain::a001_asset::{Asset, AssetDraft};
use contracts::domain::common::EntityStatus;
use contracts::shared::resource::{Action, Resource};
use leptos::prelude::*;

use super::dialogs::{AssignAssetDialog, TransferAssetDialog};
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::date_utils::format_date_opt;
use crate::shared::resource_page::fields::{id_text, parse_id};
use crate::shared::resource_page::{
    choices, or_dash, Column, FieldKind, FilterSpec, FormField, ResourceListPage, ResourceView,
    RowAction,
};

impl ResourceView for Asset {
    const PAGE_ID: &'static str = "a001_asset--list";
    const ICON: &'static str = "assets";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::text("Tag", 100.0, |a: &Asset| a.asset_tag.clone()),
            Column::text("Name", 180.0, |a: &Asset| a.name.clone()),
            Column::text("Serial", 120.0, |a: &Asset| or_dash(&a.serial_number)),
            Column::text("Category", 120.0, |a: &Asset| or_dash(&a.category_name)),
            Column::text("Assigned to", 140.0, |a: &Asset| or_dash(&a.assigned_to_name)),
            Column::text("Location", 120.0, |a: &Asset| or_dash(&a.location)),
            Column::text("Purchased", 100.0, |a: &Asset| format_date_opt(&a.purchase_date)),
            Column::text("Cost", 90.0, |a: &Asset| {
                a.purchase_cost
                    .map(|cost| format!("{:.2}", cost))
                    .unwrap_or_else(|| "-".to_string())
            }),
            Column::view("Status", 100.0, |a: &Asset| {
                view! { <StatusBadge label=a.status.label() tone=a.status.tone() /> }.into_any()
            }),
        ]
    }

    fn form_fields() -> Vec<FormField<AssetDraft>> {
        vec![
            FormField::new("name", "Name", FieldKind::Text, |d: &AssetDraft| d.name.clone(), |d, v| d.name = v)
                .required(),
            FormField::new(
                "asset_tag",
                "Asset tag",
                FieldKind::Text,
                |d: &AssetDraft| d.asset_tag.clone(),
                |d, v| d.asset_tag = v,
            )
            .required(),
            FormField::new(
                "serial_number",
                "Serial number",
                FieldKind::Text,
                |d: &AssetDraft| d.serial_number.clone(),
                |d, v| d.serial_number = v,
            ),
            FormField::new(
                "category_id",
                "Category",
                FieldKind::Lookup("categories"),
                |d: &AssetDraft| id_text(d.category_id),
                |d, v| d.category_id = parse_id(v),
            ),
            FormField::new(
                "location",
                "Location",
                FieldKind::Text,
                |d: &AssetDraft| d.location.clone(),
                |d, v| d.location = v,
            ),
            FormField::new(
                "purchase_date",
                "Purchase date",
                FieldKind::Date,
                |d: &AssetDraft| d.purchase_date.clone(),
                |d, v| d.purchase_date = v,
            ),
            FormField::new(
                "purchase_cost",
                "Purchase cost",
                FieldKind::Number,
                |d: &AssetDraft| d.purchase_cost.map(|c| c.to_string()).unwrap_or_default(),
                |d, v| d.purchase_cost = v.trim().parse().ok(),
            ),
            FormField::new(
                "status",
                "Status",
                FieldKind::Select(choices::<EntityStatus>),
                |d: &AssetDraft| d.status.code().to_string(),
                |d, v| d.status = EntityStatus::from_code(&v),
            ),
            FormField::new("notes", "Notes", FieldKind::TextArea, |d: &AssetDraft| d.notes.clone(), |d, v| d.notes = v),
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
pub fn AssetsPage() -> impl IntoView {
    let version = RwSignal::new(0u64);
    let assigning = RwSignal::new(Option::<Asset>::None);
    let transferring = RwSignal::new(Option::<Asset>::None);

    let row_actions = vec![
        RowAction::new(
            "Assign / check in",
            "assign",
            Asset::permission(Action::Update),
            Callback::new(move |asset: Asset| assigning.set(Some(asset))),
        ),
        RowAction::new(
            "Transfer",
            "transfer",
            Asset::permission(Action::Update),
            Callback::new(move |asset: Asset| transferring.set(Some(asset))),
        ),
    ];

    // Close the dialog held in `slot` and refetch
    let done = move |slot: RwSignal<Option<Asset>>| {
        Callback::new(move |_: ()| {
            slot.set(None);
            version.update(|v| *v += 1);
        })
    };

    view! {
        <ResourceListPage<Asset> row_actions=row_actions version=version />
        {move || assigning.get().map(|asset| view! {
            <AssignAssetDialog
                asset=asset
                on_close=Callback::new(move |_| assigning.set(None))
                on_done=done(assigning)
            />
        })}
        {move || transferring.get().map(|asset| view! {
            <TransferAssetDialog
                asset=asset
                on_close=Callback::new(move |_| transferring.set(None))
                on_done=done(transferring)
            />
        })}
    }
}
