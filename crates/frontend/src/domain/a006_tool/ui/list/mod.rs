use contracts::domain::a006_tool::{Tool, ToolDraft};
use contracts::domain::common::EntityStatus;
use contracts::shared::resource::{Action, Resource};
use leptos::prelude::*;

use super::dialogs::AssignToolDialog;
use crate::shared::components::status_badge::StatusBadge;
use crate::shared::resource_page::fields::{id_text, parse_id};
use crate::shared::resource_page::{
    choices, or_dash, Column, FieldKind, FilterSpec, FormField, ResourceListPage, ResourceView,
    RowAction,
};

impl ResourceView for Tool {
    const PAGE_ID: &'static str = "a006_tool--list";
    const ICON: &'static str = "tools";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::text("Code", 100.0, |t: &Tool| t.tool_code.clone()),
            Column::text("Name", 180.0, |t: &Tool| t.name.clone()),
            Column::text("Category", 120.0, |t: &Tool| or_dash(&t.category_name)),
            Column::text("Checked out to", 140.0, |t: &Tool| or_dash(&t.assigned_to_name)),
            Column::text("Location", 120.0, |t: &Tool| or_dash(&t.location)),
            Column::view("Status", 100.0, |t: &Tool| {
                view! { <StatusBadge label=t.status.label() tone=t.status.tone() /> }.into_any()
            }),
        ]
    }

    fn form_fields() -> Vec<FormField<ToolDraft>> {
        vec![
            FormField::new(
                "name",
                "Name",
                FieldKind::Text,
                |d: &ToolDraft| d.name.clone(),
                |d, v| d.name = v,
            )
            .required(),
            FormField::new(
                "tool_code",
                "Tool code",
                FieldKind::Text,
                |d: &ToolDraft| d.tool_code.clone(),
                |d, v| d.tool_code = v,
            )
            .required(),
            FormField::new(
                "category_id",
                "Category",
                FieldKind::Lookup("categories"),
                |d: &ToolDraft| id_text(d.category_id),
                |d, v| d.category_id = parse_id(v),
            ),
            FormField::new(
                "location",
                "Location",
                FieldKind::Text,
                |d: &ToolDraft| d.location.clone(),
                |d, v| d.location = v,
            ),
            FormField::new(
                "status",
                "Status",
                FieldKind::Select(choices::<EntityStatus>),
                |d: &ToolDraft| d.status.code().to_string(),
                |d, v| d.status = EntityStatus::from_code(&v),
            ),
            FormField::new(
                "notes",
                "Notes",
                FieldKind::TextArea,
                |d: &ToolDraft| d.notes.clone(),
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
pub fn ToolsPage() -> impl IntoView {
    let version = RwSignal::new(0u64);
    let assigning = RwSignal::new(Option::<Tool>::None);

    let row_actions = vec![RowAction::new(
        "Check out / in",
        "assign",
        Tool::permission(Action::Update),
        Callback::new(move |tool: Tool| assigning.set(Some(tool))),
    )];

    view! {
        <ResourceListPage<Tool> row_actions=row_actions version=version />
        {move || assigning.get().map(|tool| view! {
            <AssignToolDialog
                tool=tool
                on_close=Callback::new(move |_| assigning.set(None))
                on_done=Callback::new(move |_| {
                    assigning.set(None);
                    version.update(|v| *v += 1);
                })
            />
        })}
    }
}
