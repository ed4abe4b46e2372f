use dioxus::prelude::*;
use shared_types::{AppError, ParentSummary};
use shared_ui::{
    use_toasts, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, PageActions, PageHeader, PageTitle, Skeleton, Tooltip, TooltipContent,
    TooltipTrigger,
};

use crate::format_helpers::{format_cents, format_percent};
use crate::query::use_query_client;

/// Attendance below this fraction gets flagged on the child card.
const ATTENDANCE_WARN_BELOW: f64 = 0.9;

/// Guardian home view: children with attendance, plus the family balance.
#[component]
pub fn ParentDashboard() -> Element {
    let client = use_query_client();
    let mut toasts = use_toasts();

    let mut summary = use_resource(move || async move {
        client
            .fetch_through("parent_summary", server::api::parent_summary)
            .await
            .and_then(|json| {
                serde_json::from_str::<ParentSummary>(&json).map_err(|e| e.to_string())
            })
    });

    let handle_refresh = move |_| {
        let mut client = client;
        client.invalidate("parent_summary");
        summary.restart();
        toasts.info("Refreshing...");
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            PageTitle { "My Children" }
            PageActions {
                Button { variant: ButtonVariant::Ghost, onclick: handle_refresh, "Refresh" }
            }
        }

        match &*summary.read() {
            Some(Ok(s)) => rsx! {
                if s.children.is_empty() {
                    Card {
                        CardContent {
                            div { class: "dashboard-empty",
                                "No students are linked to your account yet."
                            }
                        }
                    }
                } else {
                    div { class: "dashboard-grid",
                        for child in s.children.iter().cloned() {
                            Card {
                                CardHeader {
                                    CardTitle { "{child.name}" }
                                    CardDescription { "{child.class_name}" }
                                }
                                CardContent {
                                    div { class: "dashboard-row",
                                        span { "Attendance" }
                                        Tooltip {
                                            TooltipTrigger {
                                                Badge {
                                                    variant: if child.attendance_rate < ATTENDANCE_WARN_BELOW {
                                                        BadgeVariant::Destructive
                                                    } else {
                                                        BadgeVariant::Secondary
                                                    },
                                                    {format_percent(child.attendance_rate)}
                                                }
                                            }
                                            TooltipContent { "Share of school days attended this term" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                Card { class: "dashboard-balance",
                    CardHeader {
                        CardTitle { "Outstanding Balance" }
                    }
                    CardContent {
                        span { class: "stat-card-value",
                            {format_cents(s.outstanding_balance_cents)}
                        }
                        if s.outstanding_balance_cents > 0 {
                            p { class: "dashboard-row-sub", "Unpaid invoices across all children." }
                        } else {
                            p { class: "dashboard-row-sub", "All invoices are settled." }
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
