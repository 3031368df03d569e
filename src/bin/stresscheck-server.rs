use clap::Parser;
use dotenvy::dotenv;
use exam_stresscheck::{web, Config};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file (if present) before clap reads the environment
    dotenv().ok();
    let config = Config::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.rust_log)?)
        .with(fmt::layer().with_writer(std::io::stdout).with_target(false))
        .init();

    let addr = config.bind;
    tracing::info!(policy = ?config.input_policy, "📚 Exam stress predictor starting");
    let app = web::create_router(config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
