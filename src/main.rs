//! Pomodoro Tracker Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod login;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();
    mount_to_body(App);
}
