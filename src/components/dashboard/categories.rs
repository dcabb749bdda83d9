use dioxus::prelude::*;

use crate::api;
use crate::components::common::{Card, ErrorMessage, LoadingSpinner};
use crate::models::{CategoryCount, CategoryReport, Site};
use crate::state::{show_notification, NotificationType};

/// Qualification breakdown page: cleaned category/classification counts
/// rendered as horizontal bars, one section per site.
#[component]
pub fn CategoryBreakdown() -> Element {
    let mut report = use_signal(|| None::<CategoryReport>);
    let mut is_loading = use_signal(|| true);

    use_effect(move || {
        spawn(async move {
            is_loading.set(true);
            match api::reports::get_categories().await {
                Ok(data) => report.set(Some(data)),
                Err(e) => {
                    tracing::warn!("Failed to fetch category report: {}", e);
                    show_notification(
                        &format!("Failed to load breakdown: {}", e),
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
            h1 { class: "text-2xl font-bold mb-6", "Qualifications" }

            if *is_loading.read() {
                LoadingSpinner {}
            } else if let Some(report) = data.as_ref() {
                if let Some(err) = report.source_error.as_ref() {
                    div { class: "mb-6",
                        ErrorMessage { message: err.clone() }
                    }
                }

                for site in Site::ALL {
                    SiteChart {
                        key: "{site.display_name()}",
                        site_name: site.display_name().to_string(),
                        rows: report
                            .rows
                            .iter()
                            .filter(|r| {
                                r.category
                                    .to_lowercase()
                                    .contains(&site.display_name().to_lowercase())
                            })
                            .cloned()
                            .collect::<Vec<_>>(),
                    }
                }
            } else {
                ErrorMessage { message: "Breakdown unavailable".to_string() }
            }
        }
    }
}

#[component]
fn SiteChart(site_name: String, rows: Vec<CategoryCount>) -> Element {
    let max = rows.iter().map(|r| r.count).max().unwrap_or(0);

    rsx! {
        div { class: "mb-8",
            h2 { class: "text-lg font-semibold mb-3", "{site_name}" }
            Card {
                if rows.is_empty() {
                    div { class: "text-center text-gray-500 py-8", "No qualified calls" }
                } else {
                    div { class: "space-y-2",
                        for row in rows.iter() {
                            BarRow {
                                label: row.classification.clone(),
                                count: row.count,
                                max,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BarRow(label: String, count: u64, max: u64) -> Element {
    let width = if max == 0 { 0 } else { (count * 100) / max };

    rsx! {
        div { class: "flex items-center gap-3",
            div { class: "w-64 text-sm text-gray-600 truncate text-right", "{label}" }
            div { class: "flex-1 bg-gray-100 rounded h-6",
                div {
                    class: "bg-blue-600 h-6 rounded flex items-center justify-end px-2",
                    style: "width: {width}%",
                    span { class: "text-xs text-white font-medium", "{count}" }
                }
            }
        }
    }
}
