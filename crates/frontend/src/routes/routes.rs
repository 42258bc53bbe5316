use contracts::domain::a001_asset::Asset;
use contracts::domain::a002_accessory::Accessory;
use contracts::domain::a003_category::Category;
use contracts::domain::a004_consumable::Consumable;
use contracts::domain::a005_license::License;
use contracts::domain::a006_tool::Tool;
use contracts::domain::a007_work_order::WorkOrder;
use contracts::shared::resource::{Action, Resource};
use contracts::system::permissions::Permission;
use contracts::system::roles::Role;
use contracts::system::users::User;
use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::d100_home::HomePage;
use crate::domain::a001_asset::ui::list::AssetsPage;
use crate::domain::a002_accessory::ui::list::AccessoriesPage;
use crate::domain::a003_category::ui::list::CategoriesPage;
use crate::domain::a004_consumable::ui::list::ConsumablesPage;
use crate::domain::a005_license::ui::list::LicensesPage;
use crate::domain::a006_tool::ui::list::ToolsPage;
use crate::domain::a007_work_order::ui::list::WorkOrdersPage;
use crate::layout::Shell;
use crate::system::auth::guard::PermissionGate;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::permissions::ui::list::PermissionsPage;
use crate::system::roles::ui::list::RolesPage;
use crate::system::users::ui::list::UsersPage;

/// Signed-in frame: every nested route renders inside the shell.
#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <PermissionGate>
            <Shell>
                <Outlet />
            </Shell>
        </PermissionGate>
    }
}

/// Page behind the `<resource>.view` permission of `R`.
fn gated<R: Resource>(page: fn() -> AnyView) -> impl IntoView {
    view! {
        <PermissionGate permission=R::permission(Action::View)>
            {page()}
        </PermissionGate>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute path=path!("") view=MainLayout>
                    <Route path=path!("") view=HomePage />
                    <Route
                        path=path!("/assets")
                        view={|| gated::<Asset>(|| view! { <AssetsPage /> }.into_any())}
                    />
                    <Route
                        path=path!("/accessories")
                        view={|| gated::<Accessory>(|| view! { <AccessoriesPage /> }.into_any())}
                    />
                    <Route
                        path=path!("/categories")
                        view={|| gated::<Category>(|| view! { <CategoriesPage /> }.into_any())}
                    />
                    <Route
                        path=path!("/consumables")
                        view={|| gated::<Consumable>(|| view! { <ConsumablesPage /> }.into_any())}
                    />
                    <Route
                        path=path!("/licenses")
                        view={|| gated::<License>(|| view! { <LicensesPage /> }.into_any())}
                    />
                    <Route
                        path=path!("/tools")
                        view={|| gated::<Tool>(|| view! { <ToolsPage /> }.into_any())}
                    />
                    <Route
                        path=path!("/work-orders")
                        view={|| gated::<WorkOrder>(|| view! { <WorkOrdersPage /> }.into_any())}
                    />
                    <Route
                        path=path!("/users")
                        view={|| gated::<User>(|| view! { <UsersPage /> }.into_any())}
                    />
                    <Route
                        path=path!("/roles")
                        view={|| gated::<Role>(|| view! { <RolesPage /> }.into_any())}
                    />
                    <Route
                        path=path!("/permissions")
                        view={|| gated::<Permission>(|| view! { <PermissionsPage /> }.into_any())}
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
