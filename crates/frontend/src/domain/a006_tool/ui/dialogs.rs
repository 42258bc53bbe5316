use contracts::domain::a001_asset::AssetAssignment;
use contracts::domain::a006_tool::Tool;
use leptos::prelude::*;

use crate::shared::api_utils::Method;
use crate::shared::resource_page::fields::{id_text, parse_id};
use crate::shared::resource_page::{ActionDialog, FieldKind, FormField};

/// Tools use the same assignment body as assets; an empty user checks in.
#[component]
pub fn AssignToolDialog(tool: Tool, on_close: Callback<()>, on_done: Callback<()>) -> impl IntoView {
    let initial = AssetAssignment {
        user_id: tool.assigned_to,
        ..Default::default()
    };
    let fields = vec![
        FormField::new(
            "user_id",
            "Check out to",
            FieldKind::Lookup("users"),
            |d: &AssetAssignment| id_text(d.user_id),
            |d, v| d.user_id = parse_id(v),
        ),
        FormField::new(
            "notes",
            "Notes",
            FieldKind::TextArea,
            |d: &AssetAssignment| d.notes.clone(),
            |d, v| d.notes = v,
        ),
    ];

    view! {
        <ActionDialog<Tool, AssetAssignment>
            record=tool
            action="assign"
            method=Method::Patch
            title="Assign tool"
            fields=fields
            initial=initial
            on_close=on_close
            on_done=on_done
        />
    }
}
