//! # payment-sheet
//!
//! Backend for mobile payment sheets.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export STRIPE_SECRET_KEY=sk_test_...
//! export STRIPE_PUBLIC_KEY=pk_test_...
//!
//! # Run the server (listens on 0.0.0.0:3000 unless HOST/PORT say otherwise)
//! payment-sheet
//! ```

use sheet_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr()?;

    info!("Environment: {}", state.config.environment);
    info!("Payment provider: {}", state.service.provider_name());

    if !state.config.is_production() {
        info!("Payment sheet: POST http://{}/payment-sheet", addr);
    }

    // Create router
    let app = routes::create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server started on port {}", addr.port());

    axum::serve(listener, app).await?;

    Ok(())
}
