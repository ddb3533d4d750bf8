//! Task Board Frontend Entry Point

mod api;
mod app;
mod board;
mod components;
mod config;
mod context;
mod logging;
mod models;
mod notify;
mod store;
mod sync;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use tracing::{warn, Level};

fn main() {
    console_error_panic_hook::set_once();

    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    logging::init(config.level().unwrap_or(Level::INFO));
    if let Err(e) = &loaded {
        warn!(error = %e, "ignoring runtime config, using defaults");
    }

    mount_to_body(move || view! { <App config=config /> });
}
