//! Server Configuration
//!
//! Everything is read from the environment (after `.env` is loaded).
//! Processor credentials are never compiled in.

use std::path::PathBuf;

use qrpay_payments::DEFAULT_MINIMUM_AMOUNT;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Server settings
#[derive(Clone)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind_addr: String,

    /// Directory holding the compiled frontend
    pub static_dir: PathBuf,

    /// Processor secret key (payments disabled when absent)
    pub stripe_secret_key: Option<String>,

    /// Processor publishable key handed to the browser library
    pub stripe_publishable_key: Option<String>,

    /// Smallest accepted amount, in cents
    pub min_amount_cents: i64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            static_dir: PathBuf::from("static"),
            stripe_secret_key: None,
            stripe_publishable_key: None,
            min_amount_cents: DEFAULT_MINIMUM_AMOUNT,
        }
    }
}

// Keys stay out of logs.
impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("bind_addr", &self.bind_addr)
            .field("static_dir", &self.static_dir)
            .field("stripe_secret_key", &self.stripe_secret_key.as_ref().map(|_| "<redacted>"))
            .field("stripe_publishable_key", &self.stripe_publishable_key)
            .field("min_amount_cents", &self.min_amount_cents)
            .finish()
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let min_amount_cents = match get("MIN_AMOUNT_CENTS") {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|v| *v > 0)
                .ok_or(ConfigError::InvalidValue {
                    name: "MIN_AMOUNT_CENTS",
                    value: raw,
                })?,
            None => defaults.min_amount_cents,
        };

        Ok(Self {
            bind_addr: get("BIND_ADDR").unwrap_or(defaults.bind_addr),
            static_dir: get("STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir),
            stripe_secret_key: get("STRIPE_SECRET_KEY"),
            stripe_publishable_key: get("STRIPE_PUBLISHABLE_KEY"),
            min_amount_cents,
        })
    }
}
