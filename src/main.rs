//! Food-Cave Frontend Entry Point

mod api;
mod app;
mod cart;
mod components;
mod loader;
mod models;
mod navigation;
mod toast;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
