use dioxus::prelude::*;
use shared_types::{AdminStats, AppError};
use shared_ui::{
    use_toasts, Button, ButtonVariant, Card, CardContent, PageActions, PageHeader, PageTitle,
    Skeleton,
};

use crate::query::use_query_client;

/// Administrator view: school-wide headcounts.
#[component]
pub fn AdminDashboard() -> Element {
    let client = use_query_client();
    let mut toasts = use_toasts();

    let mut stats = use_resource(move || async move {
        client
            .fetch_through("admin_stats", server::api::admin_stats)
            .await
            .and_then(|json| serde_json::from_str::<AdminStats>(&json).map_err(|e| e.to_string()))
    });

    let handle_refresh = move |_| {
        let mut client = client;
        client.invalidate("admin_stats");
        stats.restart();
        toasts.info("Refreshing...");
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            PageTitle { "School Overview" }
            PageActions {
                Button { variant: ButtonVariant::Ghost, onclick: handle_refresh, "Refresh" }
            }
        }

        match &*stats.read() {
            Some(Ok(s)) => rsx! {
                div { class: "dashboard-stats-grid",
                    StatCard { label: "Students", value: s.total_students }
                    StatCard { label: "Teachers", value: s.total_teachers }
                    StatCard { label: "Guardians", value: s.total_guardians }
                    StatCard { label: "Bus Routes", value: s.active_routes }
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
                div { class: "dashboard-stats-grid",
                    for _ in 0..4 {
                        Card {
                            CardContent {
                                Skeleton { style: "height: 3rem; width: 100%;" }
                            }
                        }
                    }
                }
            },
        }
    }
}

#[component]
fn StatCard(label: &'static str, value: i64) -> Element {
    rsx! {
        Card {
            CardContent {
                div { class: "stat-card-value", "{value}" }
                div { class: "stat-card-label", "{label}" }
            }
        }
    }
}
