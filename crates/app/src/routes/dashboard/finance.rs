use dioxus::prelude::*;
use shared_types::{AppError, FinanceSummary};
use shared_ui::{
    use_toasts, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader,
    CardTitle, PageActions, PageHeader, PageTitle, Skeleton,
};

use crate::format_helpers::{format_cents, format_date_human};
use crate::query::use_query_client;

fn status_badge(status: &str) -> BadgeVariant {
    match status {
        "overdue" => BadgeVariant::Destructive,
        "due" => BadgeVariant::Outline,
        _ => BadgeVariant::Secondary,
    }
}

/// Finance staff view: billing totals and the overdue invoice list.
#[component]
pub fn FinanceDashboard() -> Element {
    let client = use_query_client();
    let mut toasts = use_toasts();

    let mut summary = use_resource(move || async move {
        client
            .fetch_through("finance_summary", server::api::finance_summary)
            .await
            .and_then(|json| {
                serde_json::from_str::<FinanceSummary>(&json).map_err(|e| e.to_string())
            })
    });

    let handle_refresh = move |_| {
        let mut client = client;
        client.invalidate("finance_summary");
        summary.restart();
        toasts.info("Refreshing...");
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            PageTitle { "Finance" }
            PageActions {
                Button { variant: ButtonVariant::Ghost, onclick: handle_refresh, "Refresh" }
            }
        }

        match &*summary.read() {
            Some(Ok(s)) => rsx! {
                div { class: "dashboard-stats-grid",
                    Card {
                        CardContent {
                            div { class: "stat-card-value", "{s.invoices_due}" }
                            div { class: "stat-card-label", "Invoices Outstanding" }
                        }
                    }
                    Card {
                        CardContent {
                            div { class: "stat-card-value", {format_cents(s.collected_cents)} }
                            div { class: "stat-card-label", "Collected This Term" }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Overdue Invoices" }
                    }
                    CardContent {
                        if s.overdue.is_empty() {
                            div { class: "dashboard-empty", "Nothing overdue. Well done." }
                        } else {
                            for invoice in s.overdue.iter().cloned() {
                                div { class: "dashboard-row",
                                    div { class: "dashboard-row-main",
                                        span { "{invoice.guardian_name} — {invoice.description}" }
                                        span { class: "dashboard-row-sub",
                                            "Due {format_date_human(&invoice.due_date)}"
                                        }
                                    }
                                    div {
                                        Badge { variant: status_badge(&invoice.status),
                                            {format_cents(invoice.amount_cents)}
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
                Card {
                    CardContent {
                        Skeleton { style: "height: 8rem; width: 100%;" }
                    }
                }
            },
        }
    }
}
