use dioxus::prelude::*;
use shared_types::{CachePolicy, FeatureFlags};

mod auth;
mod format_helpers;
mod query;
mod routes;

use auth::{use_auth, AuthState};
use query::QueryClient;
use routes::Route;

/// Shared profile state accessible across all routes.
/// Backed by `Memo`s that read directly from `AuthState` — always in sync.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProfileState {
    pub display_name: Memo<String>,
    pub email: Memo<String>,
    pub avatar_url: Memo<Option<String>>,
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_feature_flags();
        let flags = server::config::feature_flags();

        if flags.telemetry {
            server::telemetry::init_telemetry();
        }

        let pool = server::db::create_pool();
        server::db::run_migrations(&pool).await;

        let router = dioxus::server::router(App)
            .layer(axum::middleware::from_fn(
                server::auth::middleware::session_middleware,
            ))
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Fetch feature flags once and provide via context (defaults all-off on error)
    let flags_resource =
        use_server_future(move || async move { server::api::get_feature_flags().await })?;

    let flags = flags_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(FeatureFlags::default()))
        .unwrap_or_default();

    use_context_provider(|| flags);

    use_context_provider(AuthState::new);
    use_context_provider(|| QueryClient::new(CachePolicy::default()));

    // Derive profile state from auth — updates when the user signs in/out
    let auth = use_auth();
    let display_name = use_memo(move || {
        auth.current_user
            .read()
            .as_ref()
            .map(|u| u.display_name.clone())
            .unwrap_or_else(|| "Guest".to_string())
    });
    let email = use_memo(move || {
        auth.current_user
            .read()
            .as_ref()
            .map(|u| u.email.clone())
            .unwrap_or_else(|| "guest@example.com".to_string())
    });
    let avatar_url = use_memo(move || {
        auth.current_user
            .read()
            .as_ref()
            .and_then(|u| u.avatar_url.clone())
    });

    use_context_provider(|| ProfileState {
        display_name,
        email,
        avatar_url,
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        shared_ui::ToastProvider {
            ErrorBoundary {
                handle_error: |_| rsx! {
                    div { class: "app-error-panel",
                        h2 { "Something went wrong" }
                        p { "Reload the page to get back to the portal." }
                    }
                },
                SuspenseBoundary {
                    fallback: |_| rsx! {
                        div { class: "auth-guard-loading",
                            p { "Loading..." }
                        }
                    },
                    Router::<Route> {}
                }
            }
        }
    }
}
