//! Tangerino Frontend Entry Point

mod app;
mod catalog;
mod components;
mod config;
mod context;
mod expansion;
mod labels;
mod models;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = rolling_logger::init(config::LOG_LEVEL, config::LOG_CAPACITY) {
        web_sys::console::warn_1(&format!("[APP] Logger not installed: {}", err).into());
    }
    mount_to_body(App);
}
