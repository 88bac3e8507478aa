//! Wanderlust Frontend Entry Point

mod app;
mod catalog;
mod components;
mod models;
mod timeline;

use app::App;
use leptos::prelude::*;
use log::Level;

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    // Only fails if a logger is already installed
    let _ = console_log::init_with_level(level);

    log::info!("[APP] mounting {} slides", catalog::SLIDES.len());
    mount_to_body(App);
}
