//! Portfolio Frontend Entry Point

use leptos::prelude::*;
use portfolio_ui::app::App;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_logger::init(log::LevelFilter::Info) {
        web_sys::console::error_1(&format!("[APP] logger init failed: {}", err).into());
    }
    mount_to_body(App);
}
