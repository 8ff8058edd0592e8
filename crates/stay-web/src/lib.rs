//! Swift Stay Web Frontend
//!
//! Leptos-based WASM frontend: marketing home page with the partner lead
//! form, privacy policy, and the account deletion page.

mod app;
mod client;
mod components;
mod pages;
mod partner;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
