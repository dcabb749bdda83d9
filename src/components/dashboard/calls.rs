use dioxus::prelude::*;

use crate::api;
use crate::components::common::{Badge, ErrorMessage, LoadingSpinner};
use crate::models::{CallLog, CallRecord};
use crate::state::{show_notification, NotificationType};

/// Raw CDR listing for the reporting window.
#[component]
pub fn CallList() -> Element {
    let mut log = use_signal(|| None::<CallLog>);
    let mut is_loading = use_signal(|| true);

    use_effect(move || {
        spawn(async move {
            is_loading.set(true);
            match api::reports::get_calls().await {
                Ok(data) => log.set(Some(data)),
                Err(e) => {
                    tracing::warn!("Failed to fetch call log: {}", e);
                    show_notification(
                        &format!("Failed to load calls: {}", e),
                        NotificationType::Error,
                    );
                }
            }
            is_loading.set(false);
        });
    });

    let data = log.read();

    rsx! {
        div { class: "h-full overflow-y-auto p-6",
            h1 { class: "text-2xl font-bold mb-6", "Call Records" }

            if *is_loading.read() {
                LoadingSpinner {}
            } else if let Some(log) = data.as_ref() {
                if let Some(err) = log.source_error.as_ref() {
                    div { class: "mb-6",
                        ErrorMessage { message: err.clone() }
                    }
                }

                if log.calls.is_empty() {
                    div { class: "text-center text-gray-500 py-12", "No calls in the reporting window" }
                } else {
                    div { class: "bg-white rounded-lg shadow-md overflow-x-auto",
                        table { class: "w-full text-sm",
                            thead {
                                tr { class: "text-left text-gray-500 border-b bg-gray-50",
                                    th { class: "px-4 py-2", "Time" }
                                    th { class: "px-4 py-2", "Agent" }
                                    th { class: "px-4 py-2", "Phone" }
                                    th { class: "px-4 py-2", "Wait (s)" }
                                    th { class: "px-4 py-2", "Duration (s)" }
                                    th { class: "px-4 py-2", "Category" }
                                    th { class: "px-4 py-2", "Classification" }
                                }
                            }
                            tbody {
                                for call in log.calls.iter() {
                                    CallRow { call: call.clone() }
                                }
                            }
                        }
                    }
                }
            } else {
                ErrorMessage { message: "Call log unavailable".to_string() }
            }
        }
    }
}

#[component]
fn CallRow(call: CallRecord) -> Element {
    let time = call
        .call_time
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "-".to_string());

    rsx! {
        tr { class: "border-b last:border-0 hover:bg-gray-50",
            td { class: "px-4 py-2 whitespace-nowrap", "{time}" }
            td { class: "px-4 py-2", "{call.agent_name}" }
            td { class: "px-4 py-2 font-mono", "{call.phone_number}" }
            td { class: "px-4 py-2 text-right", "{call.wait_seconds}" }
            td { class: "px-4 py-2 text-right", "{call.duration_seconds}" }
            td { class: "px-4 py-2", "{call.category}" }
            td { class: "px-4 py-2",
                if call.is_confirmed() {
                    Badge {
                        text: call.classification.clone().unwrap_or_default(),
                        color_class: "bg-green-100 text-green-800".to_string(),
                    }
                } else if let Some(label) = call.classification.as_ref() {
                    Badge { text: label.clone() }
                } else {
                    span { class: "text-gray-400", "-" }
                }
            }
        }
    }
}
