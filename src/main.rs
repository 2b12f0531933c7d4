use clap::Parser;
use healthz::{
    cli::Args,
    startup::{run_server, LISTEN_ADDRESS},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "healthz=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let _args = Args::parse();

    let (join_handle, _) = run_server(LISTEN_ADDRESS).await?;

    // The accept loop runs until the process is killed.
    join_handle.await?;
    Ok(())
}
