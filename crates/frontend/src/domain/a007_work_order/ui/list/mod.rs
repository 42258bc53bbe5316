use contracts::domain::a007_work_order::{
    WorkOrder, WorkOrderDraft, WorkOrderPriority, WorkOrderStatus,
};
use contracts::domain::common::StatusChoice;
use leptos::prelude::*;

use crate::shared::components::status_badge::StatusBadge;
use crate::shared::date_utils::{format_date_opt, today};
use crate::shared::resource_page::fields::{id_text, parse_id};
use crate::shared::resource_page::{
    choices, or_dash, Column, FieldKind, FilterSpec, FormField, ResourceListPage, ResourceView,
};

fn due_cell(order: &WorkOrder) -> AnyView {
    let date = format_date_opt(&order.due_date);
    if order.is_overdue(today()) {
        view! {
            <span class="due due--overdue">
                {date}
                <span class="badge badge--error">"Overdue"</span>
            </span>
        }
        .into_any()
    } else {
        view! { <span class="due">{date}</span> }.into_any()
    }
}

impl ResourceView for WorkOrder {
    const PAGE_ID: &'static str = "a007_work_order--list";
    const ICON: &'static str = "work-orders";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::text("Title", 200.0, |w: &WorkOrder| w.title.clone()),
            Column::text("Asset", 140.0, |w: &WorkOrder| or_dash(&w.asset_name)),
            Column::text("Assignee", 140.0, |w: &WorkOrder| or_dash(&w.assigned_to_name)),
            Column::view("Priority", 90.0, |w: &WorkOrder| {
                view! { <StatusBadge label=w.priority.label() tone=w.priority.tone() /> }.into_any()
            }),
            Column::view("Status", 110.0, |w: &WorkOrder| {
                view! { <StatusBadge label=w.status.label() tone=w.status.tone() /> }.into_any()
            }),
            Column::view("Due", 130.0, due_cell),
            Column::text("Completed", 100.0, |w: &WorkOrder| format_date_opt(&w.completed_at)),
        ]
    }

    fn form_fields() -> Vec<FormField<WorkOrderDraft>> {
        vec![
            FormField::new(
                "title",
                "Title",
                FieldKind::Text,
                |d: &WorkOrderDraft| d.title.clone(),
                |d, v| d.title = v,
            )
            .required(),
            FormField::new(
                "description",
                "Description",
                FieldKind::TextArea,
                |d: &WorkOrderDraft| d.description.clone(),
                |d, v| d.description = v,
            ),
            FormField::new(
                "asset_id",
                "Asset",
                FieldKind::Lookup("assets"),
                |d: &WorkOrderDraft| id_text(d.asset_id),
                |d, v| d.asset_id = parse_id(v),
            ),
            FormField::new(
                "assigned_to",
                "Assignee",
                FieldKind::Lookup("users"),
                |d: &WorkOrderDraft| id_text(d.assigned_to),
                |d, v| d.assigned_to = parse_id(v),
            ),
            FormField::new(
                "priority",
                "Priority",
                FieldKind::Select(choices::<WorkOrderPriority>),
                |d: &WorkOrderDraft| d.priority.code().to_string(),
                |d, v| d.priority = WorkOrderPriority::from_code(&v),
            ),
            FormField::new(
                "status",
                "Status",
                FieldKind::Select(choices::<WorkOrderStatus>),
                |d: &WorkOrderDraft| d.status.code().to_string(),
                |d, v| d.status = WorkOrderStatus::from_code(&v),
            ),
            FormField::new(
                "due_date",
                "Due date",
                FieldKind::Date,
                |d: &WorkOrderDraft| d.due_date.clone(),
                |d, v| d.due_date = v,
            ),
        ]
    }

    fn filters() -> Vec<FilterSpec> {
        vec![
            FilterSpec::search(),
            FilterSpec::select("status", "Status", choices::<WorkOrderStatus>),
            FilterSpec::select("priority", "Priority", choices::<WorkOrderPriority>),
        ]
    }
}

#[component]
pub fn WorkOrdersPage() -> impl IntoView {
    view! { <ResourceListPage<WorkOrder> /> }
}
