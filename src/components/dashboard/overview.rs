use dioxus::prelude::*;

use crate::api;
use crate::components::common::{Card, ErrorMessage, LoadingSpinner};
use crate::models::{AgentConfirmed, DashboardReport, Site, SiteReport};
use crate::state::{show_notification, NotificationType};

/// Overview page: campaign-wide qualification metrics plus, per site, the
/// confirmed-sale summary and the per-agent confirmation tables.
#[component]
pub fn CampaignOverview() -> Element {
    let mut report = use_signal(|| None::<DashboardReport>);
    let mut is_loading = use_signal(|| true);

    use_effect(move || {
        spawn(async move {
            is_loading.set(true);
            match api::reports::get_dashboard().await {
                Ok(data) => report.set(Some(data)),
                Err(e) => {
                    tracing::warn!("Failed to fetch dashboard report: {}", e);
                    show_notification(
                        &format!("Failed to load dashboard: {}", e),
                        NotificationType::Error,
                    );
                }
            }
            is_loading.set(false);
        });
    });

    let data = report.read();

    rsx! {
        div { class: "h-full overflow-y-auto p-6",
            h1 { class: "text-2xl font-bold mb-6", "Toyota Sales Campaign" }

            if *is_loading.read() {
                LoadingSpinner {}
            } else if let Some(report) = data.as_ref() {
                if let Some(err) = report.source_error.as_ref() {
                    div { class: "mb-6",
                        ErrorMessage { message: err.clone() }
                    }
                }

                h2 { class: "text-lg font-semibold mb-4", "Total Calls" }
                div { class: "grid gap-6 md:grid-cols-3 mb-8",
                    MetricCard {
                        title: "Answered Calls",
                        value: report.overall.total.to_string(),
                        delta: "100 %".to_string(),
                        color: "blue",
                    }
                    MetricCard {
                        title: "Qualified Calls",
                        value: report.overall.qualified.to_string(),
                        delta: format!("{:.2} %", report.overall.qualified_pct),
                        color: "green",
                    }
                    MetricCard {
                        title: "Unqualified Calls",
                        value: report.overall.unqualified.to_string(),
                        delta: format!("{:.2} %", report.overall.unqualified_pct),
                        color: "yellow",
                    }
                }

                for site in report.sites.iter() {
                    SiteSection {
                        key: "{site.summary.site.display_name()}",
                        report: site.clone(),
                    }
                }
            } else {
                ErrorMessage { message: "Dashboard unavailable".to_string() }
            }
        }
    }
}

#[component]
fn SiteSection(report: SiteReport) -> Element {
    let site = report.summary.site;
    let divider = match site {
        Site::Nacoes => "border-red-500",
        Site::Morumbi => "border-blue-500",
    };

    rsx! {
        div { class: "mb-10",
            h2 { class: "text-lg font-semibold mb-4 pb-1 border-b-2 {divider}",
                "Confirmed - {site.display_name()}"
            }

            div { class: "grid gap-6 md:grid-cols-3 mb-6",
                MetricCard {
                    title: "Total Confirmed",
                    value: report.summary.confirmed.to_string(),
                    delta: "100 %".to_string(),
                    color: "blue",
                }
                for sub in report.summary.subgroups.iter() {
                    MetricCard {
                        key: "{sub.subgroup.token()}",
                        title: "Confirmed {sub.subgroup.display_name()}",
                        value: sub.confirmed.to_string(),
                        delta: format!("{:.2} %", sub.share_pct),
                        color: "green",
                    }
                }
            }

            h3 { class: "font-semibold mb-3", "Confirmations by Agent" }
            div { class: "grid gap-6 md:grid-cols-3",
                AgentTable {
                    title: site.display_name().to_string(),
                    rows: report.agents.clone(),
                }
                for group in report.agents_by_subgroup.iter() {
                    AgentTable {
                        key: "{group.subgroup.token()}",
                        title: format!("{} {}", site.display_name(), group.subgroup.display_name()),
                        rows: group.agents.clone(),
                    }
                }
            }
        }
    }
}

#[component]
fn MetricCard(title: String, value: String, delta: String, color: String) -> Element {
    let delta_class = match color.as_str() {
        "green" => "text-green-600",
        "yellow" => "text-yellow-600",
        _ => "text-blue-600",
    };

    rsx! {
        Card {
            p { class: "text-sm text-gray-500", "{title}" }
            p { class: "text-3xl font-bold", "{value}" }
            p { class: "text-sm font-medium {delta_class}", "{delta}" }
        }
    }
}

#[component]
fn AgentTable(title: String, rows: Vec<AgentConfirmed>) -> Element {
    rsx! {
        Card {
            h4 { class: "text-sm font-medium text-gray-600 mb-2", "{title}" }
            if rows.is_empty() {
                div { class: "text-center text-gray-500 py-4", "No confirmations" }
            } else {
                table { class: "w-full text-sm",
                    thead {
                        tr { class: "text-left text-gray-500 border-b",
                            th { class: "py-1", "Agent" }
                            th { class: "py-1 text-right", "Qty" }
                        }
                    }
                    tbody {
                        for row in rows.iter() {
                            tr { class: "border-b last:border-0 hover:bg-gray-50",
                                td { class: "py-1", "{row.agent}" }
                                td { class: "py-1 text-right font-medium", "{row.confirmed}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
