use api::{
    Config, build,
    telemetry::{get_subscriber, init_subscriber},
};

/// Asset console API server (in-memory store)
///
/// Environment variables can be set directly or loaded from a .env file in the
/// project root. All of them are optional.
///
/// - IP_ADDRESS: Server bind address (default 127.0.0.1, 0.0.0.0 for public)
/// - PORT: Server port (default 8000)
/// - ALLOWED_ORIGINS: CORS origins ("*" for any origin in development, or a
///   comma-separated list)
///
/// Example development command:
/// PORT=8000 ALLOWED_ORIGINS=* cargo run -p api
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // This will silently ignore if the file doesn't exist
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("info".into());
    init_subscriber(subscriber);

    let mut config = Config::from_env()?;
    let server = build(&mut config)?;
    tracing::info!(
        "listening on http://{}:{}/api",
        config.ip,
        config.port
    );
    server.await?;
    Ok(())
}
