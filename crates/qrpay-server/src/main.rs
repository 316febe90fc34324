//! qrpay HTTP Server
//!
//! Serves the payment-link API and the compiled frontend.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qrpay_payments::{PaymentIntentClient, StripeProcessor};
use qrpay_server::{build_router, AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    // Initialize payments
    let payments = config.stripe_secret_key.as_deref().map(|key| {
        let processor = Arc::new(StripeProcessor::new(key));
        Arc::new(PaymentIntentClient::with_minimum(processor, config.min_amount_cents))
    });

    if let Some(client) = &payments {
        tracing::info!(
            minimum_cents = client.minimum_amount(),
            "✓ {} configured",
            client.processor_name()
        );
    } else {
        tracing::warn!("⚠ Stripe not configured - payments disabled");
        tracing::warn!("  Set STRIPE_SECRET_KEY in .env");
    }

    if config.stripe_publishable_key.is_none() {
        tracing::warn!("⚠ STRIPE_PUBLISHABLE_KEY not set - pay page cannot mount the payment form");
    }

    let state = AppState::new(payments, config.stripe_publishable_key.clone());
    let app = build_router(state, &config.static_dir);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 qrpay server running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health                     - Health check");
    tracing::info!("  GET  /api/config                 - Publishable settings");
    tracing::info!("  POST /api/create-payment-intent  - Create payment intent");
    tracing::info!("  GET  /api/payment-intent/{{id}}    - Retrieve payment intent");
    tracing::info!("  GET  /*                          - Frontend ({})", config.static_dir.display());
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
