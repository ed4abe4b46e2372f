use dioxus::prelude::*;
use shared_types::{AppError, DriverRoute};
use shared_ui::{
    use_toasts, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, PageActions, PageHeader, PageTitle, Skeleton,
};

use crate::query::use_query_client;

/// Driver view: today's route with stops in pickup order.
#[component]
pub fn DriverDashboard() -> Element {
    let client = use_query_client();
    let mut toasts = use_toasts();

    let mut route = use_resource(move || async move {
        client
            .fetch_through("driver_route", server::api::driver_route)
            .await
            .and_then(|json| serde_json::from_str::<DriverRoute>(&json).map_err(|e| e.to_string()))
    });

    let handle_refresh = move |_| {
        let mut client = client;
        client.invalidate("driver_route");
        route.restart();
        toasts.info("Refreshing...");
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        PageHeader {
            PageTitle { "My Route" }
            PageActions {
                Button { variant: ButtonVariant::Ghost, onclick: handle_refresh, "Refresh" }
            }
        }

        match &*route.read() {
            Some(Ok(r)) => rsx! {
                match &r.route_name {
                    Some(name) => rsx! {
                        Card {
                            CardHeader {
                                CardTitle { "{name}" }
                                CardDescription { "{r.students_assigned} students across {r.stops.len()} stops" }
                            }
                            CardContent {
                                if r.stops.is_empty() {
                                    div { class: "dashboard-empty", "No stops configured for this route." }
                                } else {
                                    for stop in r.stops.iter().cloned() {
                                        div { class: "dashboard-row",
                                            div { class: "dashboard-row-main",
                                                span { "{stop.seq}. {stop.name}" }
                                            }
                                            Badge { variant: BadgeVariant::Secondary,
                                                "{stop.student_count} students"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    None => rsx! {
                        Card {
                            CardContent {
                                div { class: "dashboard-empty",
                                    "No route is assigned to you yet. Check with dispatch."
                                }
                            }
                        }
                    },
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
