use piatto_server::{print_banner, setup_environment, Config, Server, ServerState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env first: configuration is read from the environment
    dotenv::dotenv().ok();
    let config = Config::from_env();
    setup_environment(&config);

    print_banner();
    tracing::info!("Piatto server starting...");

    let state = ServerState::initialize(&config).await?;

    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {e}");
        return Err(e);
    }

    Ok(())
}
