use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::FeatureFlags;
use shared_ui::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input, Label};
use std::collections::HashMap;

/// Self-service registration. New accounts start as guardians; the server
/// refuses the whole form when the registration flag is off.
#[component]
pub fn Register() -> Element {
    let flags: FeatureFlags = use_context();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut display_name = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        match server::api::register(username(), email(), password(), display_name()).await {
            Ok(_user) => {
                navigator().push(Route::Home {});
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
                    CardTitle { "Create Account" }
                    CardDescription { "Guardian accounts only — staff access is assigned by the school" }
                }

                CardContent {
                    if !flags.registration {
                        div { class: "auth-error",
                            "Self-service registration is currently disabled. Contact the school office."
                        }
                    }

                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_register,
                        div { class: "auth-field",
                            Label { html_for: "display_name", "Full Name" }
                            Input {
                                id: "display_name",
                                placeholder: "Jordan Rivers",
                                value: display_name(),
                                on_input: move |e: FormEvent| display_name.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("display_name") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "username", "Username" }
                            Input {
                                id: "username",
                                placeholder: "jrivers",
                                value: username(),
                                on_input: move |e: FormEvent| username.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("username") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
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
                                placeholder: "At least 8 characters",
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
                            disabled: loading() || !flags.registration,
                            if loading() { "Creating account..." } else { "Create Account" }
                        }
                    }
                }

                CardFooter {
                    p { class: "auth-link",
                        "Already have an account? "
                        Link { to: Route::Login { redirect: None }, "Sign in" }
                    }
                }
            }
        }
    }
}
