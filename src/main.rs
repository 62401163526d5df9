//! Patient List Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod controller;
mod dom;
mod error;
mod logging;
mod models;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_document();
    if let Err(e) = logging::init(config.log_level) {
        web_sys::console::warn_1(&format!("[main] logger already set: {}", e).into());
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
