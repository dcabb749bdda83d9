use dioxus::prelude::*;

use crate::components::dashboard::{CallList, CampaignOverview, CategoryBreakdown};
use crate::AppLayout;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    // All routes use AppLayout which includes Sidebar and TopBar
    #[layout(AppLayout)]
        #[route("/")]
        Home {},

        #[route("/categories")]
        Categories {},

        #[route("/calls")]
        Calls {},
}

// Route handler components
#[component]
fn Home() -> Element {
    rsx! {
        div { class: "flex-1 bg-gray-50",
            CampaignOverview {}
        }
    }
}

#[component]
fn Categories() -> Element {
    rsx! {
        div { class: "flex-1 bg-gray-50",
            CategoryBreakdown {}
        }
    }
}

#[component]
fn Calls() -> Element {
    rsx! {
        div { class: "flex-1 bg-gray-50",
            CallList {}
        }
    }
}
