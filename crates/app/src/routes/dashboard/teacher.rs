use dioxus::prelude::*;
use shared_types::{AppError, TeacherSummary};
use shared_ui::{
    use_toasts, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, PageActions, PageHeader, PageTitle, Skeleton,
};

use crate::query::use_query_client;

/// Teacher view: assigned classes and the grading backlog.
#[component]
pub fn TeacherDashboard() -> Element {
    let client = use_query_client();
    let mut toasts = use_toasts();

    let mut summary = use_resource(move || async move {
        client
            .fetch_through("teacher_summary", server::api::teacher_summary)
            .await
            .and_then(|json| {
                serde_json::from_str::<TeacherSummary>(&json).map_err(|e| e.to_string())
            })
    });

    let handle_refresh = move |_| {
        let mut client = client;
        client.invalidate("teacher_summary");
        summary.restart();
        toasts.info("Refreshing...");
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            PageTitle { "My Classes" }
            PageActions {
                Button { variant: ButtonVariant::Ghost, onclick: handle_refresh, "Refresh" }
            }
        }

        match &*summary.read() {
            Some(Ok(s)) => rsx! {
                if s.pending_grades_total > 0 {
                    Card { class: "dashboard-balance",
                        CardContent {
                            div { class: "dashboard-row",
                                span { "Assignments waiting to be graded" }
                                Badge { variant: BadgeVariant::Destructive,
                                    "{s.pending_grades_total}"
                                }
                            }
                        }
                    }
                }

                if s.classes.is_empty() {
                    Card {
                        CardContent {
                            div { class: "dashboard-empty", "No classes assigned this term." }
                        }
                    }
                } else {
                    div { class: "dashboard-grid",
                        for class in s.classes.iter().cloned() {
                            Card {
                                CardHeader {
                                    CardTitle { "{class.name}" }
                                    CardDescription { "{class.student_count} students" }
                                }
                                CardContent {
                                    div { class: "dashboard-row",
                                        span { "Pending grades" }
                                        Badge {
                                            variant: if class.pending_grades > 0 {
                                                BadgeVariant::Outline
                                            } else {
                                                BadgeVariant::Secondary
                                            },
                                            "{class.pending_grades}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            Some(Err(e)) => rsx! {
                Card {
                    CardContent {
                        div { class: "dashboard-error",
                            {AppError::friendly_message(e)}
                        }
                    }
                }
            },
            None => rsx! {
                div { class: "dashboard-grid",
                    for _ in 0..3 {
                        Card {
                            CardContent {
                                Skeleton { style: "height: 4rem; width: 100%;" }
                            }
                        }
                    }
                }
            },
        }
    }
}
