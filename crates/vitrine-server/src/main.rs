use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use vitrine_client::GraphqlClient;
use vitrine_core::{build_session_store, AppConfig, AppState};

mod cli;
mod config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("vitrine=info,tower_http=debug")),
        )
        .init();

    let args = cli::Args::parse();
    let mut config = config::Config::load(&args.config)?;

    // CLI --bind overrides config file
    if let Some(bind) = args.bind {
        config.server.bind_address = bind;
    }

    // Malformed home collection keys have already failed validation in
    // Config::load; this parse cannot fail after that.
    let home_collections = config.home_collection_keys()?;

    let client = GraphqlClient::new(
        &config.backend.graphql_url,
        Some(Duration::from_secs(config.backend.timeout_seconds)),
        config.backend.max_retries,
    )
    .map_err(|e| anyhow::anyhow!("could not build backend client: {e}"))?;

    let state = AppState {
        client: Arc::new(client),
        config: AppConfig {
            default_limit: config.pagination.default_limit,
            limit_choices: config.pagination.limits.clone(),
            home_collections,
            public_url: config.server.public_url.clone(),
            cookie_secure: config.cookies.secure,
            session_ttl_seconds: config.session.ttl_seconds,
        },
        notification_sessions: build_session_store(Duration::from_secs(
            config.session.ttl_seconds,
        )),
    };

    let app = vitrine_api::build_router().with_state(state);
    let listener = tokio::net::TcpListener::bind(&config.server.bind_address).await?;

    print_startup_banner(
        &config.server.bind_address,
        &config.server.public_url,
        &config.backend.graphql_url,
        config.home.collections.len(),
    );

    let shutdown_signal = async {
        let _ = tokio::signal::ctrl_c().await;
        println!();
        tracing::info!("Shutting down (ctrl-c)...");
    };

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    Ok(())
}

fn print_startup_banner(
    bind_address: &str,
    public_url: &Option<String>,
    backend_url: &str,
    home_collections: usize,
) {
    println!();
    println!(" __     ___ _        _");
    println!(" \\ \\   / (_) |_ _ __(_)_ __   ___");
    println!("  \\ \\ / /| | __| '__| | '_ \\ / _ \\");
    println!("   \\ V / | | |_| |  | | | | |  __/");
    println!("    \\_/  |_|\\__|_|  |_|_| |_|\\___|");
    println!();
    println!("  Listening:   http://{}", bind_address);
    if let Some(url) = public_url {
        println!("  Public URL:  {}", url);
    }
    println!("  Backend:     {}", backend_url);
    println!("  Home grid:   {} pinned collection(s)", home_collections);
    println!();
}
