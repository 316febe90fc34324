//! qrpay Web Frontend
//!
//! Leptos-based WASM frontend: create a payment link, show it as a QR
//! code, and complete the payment through Stripe's Payment Element.

mod api;
mod app;
mod components;
mod links;
mod money;
mod pages;
mod qr;
mod state;
mod stripe_js;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
