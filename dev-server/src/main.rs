//! Development server for the asset console UI
//!
//! This binary starts the in-memory API on a fixed port and seeds it with a
//! small demo hierarchy of companies, units, users and assets.
//!
//! Usage: cargo run -p dev-server
//! Set PORT to override the default port of 8000.

use anyhow::Result;
use test_helpers::mock::DevDataset;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let subscriber = api::telemetry::get_subscriber("info".into());
    api::telemetry::init_subscriber(subscriber);

    let port = match std::env::var("PORT") {
        Ok(port) => port.parse()?,
        Err(_) => 8000,
    };

    info!("🚀 Starting asset console development server");
    let app = test_helpers::spawn_app_on_port(port).await;
    app.client.health_check().await?;
    info!("✅ API server running on {}", app.client.address);

    info!("📊 Setting up development test data...");
    let dataset = DevDataset::create(&app).await?;

    info!("🎯 Development server ready!");
    info!("   API: {}", app.client.address);
    info!(
        "   UI:  cd ui && BACKEND_URL={} trunk serve",
        app.client.address
    );
    info!("");
    dataset.print_summary();
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    Ok(())
}
