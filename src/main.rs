//! Campaign Dash - Full Stack Dioxus Application
//!
//! Reporting dashboard for a call-center sales campaign: call-detail records
//! are loaded from a MySQL view, aggregated into qualification and
//! confirmed-sale reports, and rendered in the browser.
//!
//! Runs in fullstack mode with Axum backend and Dioxus frontend.

mod api;
mod components;
mod models;
mod reports;
mod routes;
mod state;

#[cfg(not(target_arch = "wasm32"))]
mod server;

use components::common::Notification;
use dioxus::prelude::*;
use routes::Route;

fn main() {
    // On wasm, just run the app
    #[cfg(target_arch = "wasm32")]
    {
        run_app();
    }

    // On native, handle server vs app mode
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer())
            .with(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive("campaign_dash=info".parse().unwrap()),
            )
            .init();

        // Load environment variables
        dotenvy::dotenv().ok();

        let config = match server::Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Invalid configuration: {}", e);
                std::process::exit(1);
            }
        };

        // Determine run mode
        let args: Vec<String> = std::env::args().collect();

        if args.contains(&"--server".to_string()) {
            // Run server only
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .expect("Failed to build tokio runtime")
                .block_on(async {
                    if let Err(e) = server::run_server(&config).await {
                        tracing::error!("Server error: {}", e);
                    }
                });
        } else {
            // Run frontend (desktop mode) with embedded server

            // Start server in background thread
            std::thread::spawn(move || {
                let rt = tokio::runtime::Builder::new_multi_thread()
                    .enable_all()
                    .build()
                    .expect("Failed to build tokio runtime");

                rt.block_on(async {
                    tracing::info!("Starting embedded server on port {}", config.port);
                    if let Err(e) = server::run_server(&config).await {
                        tracing::error!("Embedded server error: {}", e);
                    }
                });
            });

            // Give server time to start
            std::thread::sleep(std::time::Duration::from_millis(500));

            // Run frontend
            run_app();
        }
    }
}

fn run_app() {
    // Get API URL - on wasm use window location, on native use env var
    #[cfg(target_arch = "wasm32")]
    let api_url = {
        // On web, use the same origin as the page (for same-origin API requests)
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| "http://localhost:3000".to_string())
    };

    #[cfg(not(target_arch = "wasm32"))]
    let api_url =
        std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

    // Initialize API client
    api::init_api_client(&api_url);

    // Launch the Dioxus app
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global styles
        style { {include_str!("../assets/styles.css")} }

        // Notification toast
        Notification {}

        // Main content
        Router::<Route> {}
    }
}

/// Layout component that wraps all routes
#[component]
pub fn AppLayout() -> Element {
    rsx! {
        div { class: "h-screen flex flex-col bg-gray-100",
            // Top bar
            TopBar {}

            // Main content area
            div { class: "flex-1 flex overflow-hidden",
                // Sidebar
                Sidebar {}

                // Main content - Outlet renders the matched route
                div { class: "flex-1 flex overflow-hidden",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn TopBar() -> Element {
    rsx! {
        header { class: "bg-white border-b px-6 py-3 flex items-center justify-between",
            // Logo
            div { class: "flex items-center gap-3",
                span { class: "text-2xl", "\u{1F4DE}" }
                h1 { class: "text-xl font-bold text-gray-800", "Campaign Dash" }
            }

            span { class: "text-gray-600", "Toyota Sales Campaign" }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let current_route = use_route::<Route>();

    let nav_items = [
        (Route::Home {}, "Overview", "\u{1F4CA}"),
        (Route::Categories {}, "Qualifications", "\u{1F4C8}"),
        (Route::Calls {}, "Calls", "\u{1F4DE}"),
    ];

    rsx! {
        nav { class: "w-64 bg-white border-r flex flex-col",
            div { class: "flex-1 py-4",
                for (route, label, icon) in nav_items.iter() {
                    Link {
                        to: route.clone(),
                        class: if std::mem::discriminant(&current_route) == std::mem::discriminant(route) {
                            "flex items-center gap-3 px-6 py-3 bg-blue-50 text-blue-600 border-r-4 border-blue-600 font-medium"
                        } else {
                            "flex items-center gap-3 px-6 py-3 text-gray-700 hover:bg-gray-100 transition-colors"
                        },
                        span { class: "text-xl", "{icon}" }
                        span { "{label}" }
                    }
                }
            }
        }
    }
}
