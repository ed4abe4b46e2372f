use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::FeatureFlags;
use shared_ui::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input, Label};
use std::collections::HashMap;

/// Login page with email/password.
/// Accepts an optional `redirect` query param — after login, navigates there
/// instead of Home.
#[component]
pub fn Login(redirect: Option<String>) -> Element {
    let auth = use_auth();
    let flags: FeatureFlags = use_context();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    // Store redirect in a signal so closures can read it without moving ownership
    let redirect_target = use_signal(move || redirect);

    // Navigate to the redirect target or Home
    let go_to_destination = move || {
        if let Some(ref path) = *redirect_target.read() {
            navigator().push(NavigationTarget::<Route>::External(path.clone()));
        } else {
            navigator().push(Route::Home {});
        }
    };

    // Redirect home if already authenticated
    if auth.is_authenticated() {
        go_to_destination();
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        match server::api::login(email(), password()).await {
            Ok(_user) => {
                // The guard re-runs its session check on navigation and
                // populates AuthState from the fresh cookie.
                go_to_destination();
            }
            Err(e) => {
                let err_str = e.to_string();
                let fe = shared_types::AppError::parse_field_errors(&err_str);
                if fe.is_empty() {
                    error_msg.set(Some(shared_types::AppError::friendly_message(&err_str)));
                } else {
                    field_errors.set(fe);
                }
            }
        }
        loading.set(false);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            Card {
                CardHeader {
                    CardTitle { "Sign In" }
                    CardDescription { "Enter your credentials to access the portal" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_login,
                        div { class: "auth-field",
                            Label { html_for: "email", "Email" }
                            Input {
                                input_type: "email",
                                id: "email",
                                placeholder: "you@example.com",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("email") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                input_type: "password",
                                id: "password",
                                placeholder: "Enter your password",
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("password") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "auth-submit button",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }
                    }
                }

                if flags.registration {
                    CardFooter {
                        p { class: "auth-link",
                            "Don't have an account? "
                            Link { to: Route::Register {}, "Create one" }
                        }
                    }
                }
            }
        }
    }
}
