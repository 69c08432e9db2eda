use anyhow::Result;
use h2o_habits::backend::{config::AppConfig, create_router, initialize_backend};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = AppConfig::load_default()?;

    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level())
        .init();

    info!("Starting H2O Habits");
    let app_state = initialize_backend(&config).await?;
    let app = create_router(app_state);

    let addr = config.socket_addr();
    info!("Listening on http://{}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
