pub mod sidebar;
pub mod top_header;

use leptos::prelude::*;
use sidebar::Sidebar;
use top_header::TopHeader;

/// Application shell for signed-in pages.
///
/// ```text
/// +------------------------------------+
/// |             TopHeader              |
/// +------------------------------------+
/// |  Sidebar  |         Content        |
/// +------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <nav class="app-sidebar">
                    <Sidebar />
                </nav>
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}
