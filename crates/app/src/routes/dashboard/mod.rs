pub mod admin;
pub mod driver;
pub mod finance;
pub mod parent;
pub mod teacher;

use dioxus::prelude::*;
use shared_types::DashboardView;

use crate::auth::use_user_role;

/// Role-adaptive home page — renders the dashboard matching the user's role.
/// The mapping is exhaustive, so a new role fails to compile until it gets
/// a dashboard.
#[component]
pub fn Dashboard() -> Element {
    let role = use_user_role();

    match DashboardView::for_role(&role) {
        DashboardView::Parent => rsx! { parent::ParentDashboard {} },
        DashboardView::Teacher => rsx! { teacher::TeacherDashboard {} },
        DashboardView::Admin => rsx! { admin::AdminDashboard {} },
        DashboardView::Finance => rsx! { finance::FinanceDashboard {} },
        DashboardView::Driver => rsx! { driver::DriverDashboard {} },
    }
}
