//! Interview Questions Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod forms;
mod list_state;
mod logger;
mod markdown;
mod models;
mod pages;
mod store;
mod text;
mod tree;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_build_env();
    logger::init(config.log_level);
    log::info!("[APP] Starting with backend {}", config.api_base_url);
    mount_to_body(move || view! { <App config/> });
}
