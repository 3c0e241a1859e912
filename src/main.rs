//! Todo Widget Entry Point

mod models;
mod commands;
mod config;
mod context;
mod logger;
mod store;
mod components;
mod app;

use app::App;
use config::WidgetConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = WidgetConfig::from_document();
    logger::init(config.log_level);
    log::info!("[APP] backend={:?} endpoint={}", config.backend, config.api_endpoint);

    let client = commands::connect(&config);
    mount_to_body(move || view! { <App client=client.clone() /> });
}
