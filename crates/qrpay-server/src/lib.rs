//! # qrpay-server
//!
//! Axum server for qrpay: two JSON routes that proxy to the payment
//! processor, plus static hosting of the WASM frontend.

pub mod config;
pub mod handlers;
pub mod startup;
pub mod state;

pub use config::ServerConfig;
pub use startup::build_router;
pub use state::AppState;
