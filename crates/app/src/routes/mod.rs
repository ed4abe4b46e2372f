pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod register;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBus, LdGraduationCap, LdLayoutDashboard, LdShield, LdWallet,
};
use dioxus_free_icons::Icon;
use shared_types::{portal_access, PortalAccess, SessionSnapshot, ShellView, UserRole};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Navbar, NavbarBrand, NavbarSpacer, Separator,
};

use crate::auth::{use_auth, use_user_role};
use crate::ProfileState;

use dashboard::Dashboard;
use login::Login;
use not_found::NotFound;
use register::Register;

/// Application routes. `/` adapts to the caller's role; the four portal
/// routes admit exactly one role each and bounce everyone else home.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login?:redirect")]
    Login { redirect: Option<String> },
    #[route("/register")]
    Register {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/teacher")]
    TeacherPortal {},
    #[route("/admin")]
    AdminPortal {},
    #[route("/finance")]
    FinancePortal {},
    #[route("/driver")]
    DriverPortal {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Auth guard layout — redirects to /login if not authenticated.
///
/// Uses `use_server_future` with `?` to propagate suspension properly.
/// During SSR the component suspends until both checks complete, then
/// Dioxus re-renders with the resolved data embedded in the HTML.
/// During hydration the embedded data is available immediately.
/// A `SuspenseBoundary` in `App` catches the suspension and shows a spinner.
///
/// The profile loads separately from the session and may not be provisioned
/// yet; that state renders as loading rather than bouncing to sign-in.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();

    let session_resource =
        use_server_future(move || async move { server::api::get_session().await })?;
    let profile_resource =
        use_server_future(move || async move { server::api::get_user_profile().await })?;

    // Clone the results out of the resource guards to avoid lifetime issues.
    let session_result = session_resource.read().as_ref().cloned();
    let profile_result = profile_resource.read().as_ref().cloned();

    let (is_loading, snapshot, profile) = match (session_result, profile_result) {
        (Some(Ok(snapshot)), Some(Ok(profile))) => (false, snapshot, profile),
        // A failed check reads as signed-out, not as a crash
        (Some(Err(_)), _) | (_, Some(Err(_))) => (false, SessionSnapshot::default(), None),
        _ => (true, SessionSnapshot::default(), None),
    };

    match ShellView::resolve(
        is_loading,
        snapshot.session.is_some(),
        snapshot.user.is_some(),
        profile.is_some(),
    ) {
        ShellView::App => {
            if !auth.is_authenticated() {
                // resolve() returned App, so all three parts are present
                if let (Some(session), Some(user)) = (snapshot.session, snapshot.user) {
                    auth.set_signed_in(session, user, profile);
                }
            }
            rsx! { Outlet::<Route> {} }
        }
        ShellView::SignIn => {
            auth.clear_auth();
            navigator().push(Route::Login { redirect: None });
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        ShellView::Loading => {
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Loading..." }
                }
            }
        }
    }
}

/// Main app layout with the top navbar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let profile: ProfileState = use_context();
    let mut auth = use_auth();
    let role = use_user_role();

    let page_title = match &route {
        Route::Home {} => "Dashboard",
        Route::TeacherPortal {} => "Teacher Portal",
        Route::AdminPortal {} => "Admin Portal",
        Route::FinancePortal {} => "Finance Portal",
        Route::DriverPortal {} => "Driver Portal",
        _ => "",
    };

    // Each role sees its own portal link next to Home; parents only get Home.
    let portal_link = match role {
        UserRole::Teacher => Some((Route::TeacherPortal {}, "My Classes")),
        UserRole::Admin => Some((Route::AdminPortal {}, "Administration")),
        UserRole::Staff => Some((Route::FinancePortal {}, "Finance")),
        UserRole::Driver => Some((Route::DriverPortal {}, "My Route")),
        UserRole::Parent => None,
    };

    let handle_logout = move |_| {
        spawn(async move {
            if let Err(e) = server::api::logout().await {
                tracing::warn!("Logout failed: {e}");
            }
            auth.clear_auth();
            navigator().push(Route::Login { redirect: None });
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        document::Title { "{page_title} · Classbridge" }

        Navbar {
            NavbarBrand { "Classbridge" }
            nav { class: "navbar-links",
                Link {
                    to: Route::Home {},
                    class: "navbar-link",
                    active_class: "navbar-link-active",
                    Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                    "Home"
                }
                if let Some((to, label)) = portal_link {
                    Link {
                        to,
                        class: "navbar-link",
                        active_class: "navbar-link-active",
                        match role {
                            UserRole::Teacher => rsx! { Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 16, height: 16 } },
                            UserRole::Admin => rsx! { Icon::<LdShield> { icon: LdShield, width: 16, height: 16 } },
                            UserRole::Staff => rsx! { Icon::<LdWallet> { icon: LdWallet, width: 16, height: 16 } },
                            _ => rsx! { Icon::<LdBus> { icon: LdBus, width: 16, height: 16 } },
                        }
                        "{label}"
                    }
                }
            }
            NavbarSpacer {}
            span { class: "navbar-identity", "{profile.display_name}" }
            Badge { variant: BadgeVariant::Secondary, "{role.as_str()}" }
            Separator { horizontal: false }
            Button {
                variant: ButtonVariant::Ghost,
                onclick: handle_logout,
                "Sign out"
            }
        }

        main { class: "app-main",
            Outlet::<Route> {}
        }
    }
}

/// Wraps a portal page in an exact-role check. Anyone else is sent home
/// rather than shown an error — including admins.
#[component]
pub fn RoleGate(required: UserRole, children: Element) -> Element {
    let role = use_user_role();

    match portal_access(&role, &required) {
        PortalAccess::Granted => rsx! { {children} },
        PortalAccess::RedirectHome => {
            navigator().replace(Route::Home {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting..." }
                }
            }
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! { Dashboard {} }
}

#[component]
fn TeacherPortal() -> Element {
    rsx! {
        RoleGate { required: UserRole::Teacher,
            dashboard::teacher::TeacherDashboard {}
        }
    }
}

#[component]
fn AdminPortal() -> Element {
    rsx! {
        RoleGate { required: UserRole::Admin,
            dashboard::admin::AdminDashboard {}
        }
    }
}

#[component]
fn FinancePortal() -> Element {
    rsx! {
        RoleGate { required: UserRole::Staff,
            dashboard::finance::FinanceDashboard {}
        }
    }
}

#[component]
fn DriverPortal() -> Element {
    rsx! {
        RoleGate { required: UserRole::Driver,
            dashboard::driver::DriverDashboard {}
        }
    }
}
