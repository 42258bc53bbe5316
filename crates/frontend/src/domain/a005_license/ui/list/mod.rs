use contracts::domain::a005_license::{Expiry, License, LicenseDraft};
use contracts::domain::common::EntityStatus;
use leptos::prelude::*;

use crate::shared::components::status_badge::StatusBadge;
use crate::shared::date_utils::{format_date_opt, today};
use crate::shared::resource_page::fields::parse_int;
use crate::shared::resource_page::{
    choices, or_dash, Column, FieldKind, FilterSpec, FormField, ResourceListPage, ResourceView,
};

fn expiry_cell(license: &License) -> AnyView {
    let date = format_date_opt(&license.expiration_date);
    let flag = match license.expiry(today()) {
        Expiry::Perpetual | Expiry::Valid => None,
        Expiry::ExpiringSoon { days_left } => Some(("warning", format!("{} days left", days_left))),
        Expiry::Expired => Some(("error", "Expired".to_string())),
    };
    view! {
        <span class="license-expiry">
            {date}
            {flag.map(|(tone, text)| view! { <span class=format!("badge badge--{}", tone)>{text}</span> })}
        </span>
    }
    .into_any()
}

impl ResourceView for License {
    const PAGE_ID: &'static str = "a005_license--list";
    const ICON: &'static str = "licenses";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::text("Name", 180.0, |l: &License| l.name.clone()),
            Column::text("Vendor", 120.0, |l: &License| or_dash(&l.vendor)),
            Column::text("Product key", 160.0, |l: &License| or_dash(&l.product_key)),
            Column::text("Seats", 90.0, |l: &License| {
                format!("{} / {}", l.seats_used, l.seats)
            }),
            Column::view("Expires", 150.0, expiry_cell),
            Column::view("Status", 100.0, |l: &License| {
                view! { <StatusBadge label=l.status.label() tone=l.status.tone() /> }.into_any()
            }),
        ]
    }

    fn form_fields() -> Vec<FormField<LicenseDraft>> {
        vec![
            FormField::new(
                "name",
                "Name",
                FieldKind::Text,
                |d: &LicenseDraft| d.name.clone(),
                |d, v| d.name = v,
            )
            .required(),
            FormField::new(
                "vendor",
                "Vendor",
                FieldKind::Text,
                |d: &LicenseDraft| d.vendor.clone(),
                |d, v| d.vendor = v,
            ),
            FormField::new(
                "product_key",
                "Product key",
                FieldKind::Text,
                |d: &LicenseDraft| d.product_key.clone(),
                |d, v| d.product_key = v,
            ),
            FormField::new(
                "seats",
                "Seats",
                FieldKind::Number,
                |d: &LicenseDraft| d.seats.to_string(),
                |d, v| d.seats = parse_int(&v, d.seats),
            )
            .required(),
            FormField::new(
                "expiration_date",
                "Expiration date",
                FieldKind::Date,
                |d: &LicenseDraft| d.expiration_date.clone(),
                |d, v| d.expiration_date = v,
            ),
            FormField::new(
                "status",
                "Status",
                FieldKind::Select(choices::<EntityStatus>),
                |d: &LicenseDraft| d.status.code().to_string(),
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
pub fn LicensesPage() -> impl IntoView {
    view! { <ResourceListPage<License> /> }
}
