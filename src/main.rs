//! Todo Search Frontend Entry Point

mod app;
mod commands;
mod components;
mod logger;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = logger::initialize() {
        web_sys::console::warn_1(&format!("Logger not installed: {}", err).into());
    }
    mount_to_body(App);
}
