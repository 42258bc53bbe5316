use leptos::prelude::*;
use thaw::*;

use crate::shared::modal::Modal;

/// In-page confirmation. Nothing is sent until `on_confirm` runs.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into, default = "Delete".to_string())] confirm_label: String,
    #[prop(into, optional)] busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let footer = move || {
        let confirm_label = confirm_label.clone();
        view! {
            <Flex gap=FlexGap::Small>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                    disabled=Signal::derive(move || busy.get())
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_confirm.run(())
                    disabled=Signal::derive(move || busy.get())
                >
                    {confirm_label}
                </Button>
            </Flex>
        }
    };

    view! {
        <Modal title=title on_close=on_cancel footer=footer>
            <p class="confirm-dialog__message">{message}</p>
        </Modal>
    }
}
