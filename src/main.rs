use auction_portal::{
    config::{AppConfig, Env},
    create_navigator,
    session::PersistedState,
};
use tokio::io::AsyncBufReadExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// The asynchronous entry point: initializes configuration, logging, persisted
/// session state, and the navigator, performs the initial navigation to `/`,
/// then drives further navigations from stdin lines. The line loop stands in
/// for the host UI's history integration: one path per line, the resolved
/// view printed back.
#[tokio::main]
async fn main() {
    // 1. Configuration & Environment Loading (Fail-Fast)
    dotenv::dotenv().ok();
    let config = AppConfig::load();

    // 2. Logging Filter Setup
    // Prioritizes RUST_LOG, falling back to sensible defaults for local use.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "auction_portal=debug".into());

    // 3. Initialize Logging based on Environment
    match config.env {
        Env::Local => {
            // LOCAL: pretty output for human readability during development.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            // PROD: JSON output for ingestion by centralized log aggregators.
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Application starting in {:?} mode", config.env);

    // 4. Persisted State Restoration
    // Tokens and locale survive restarts; a missing or corrupt file starts fresh.
    let state = PersistedState::load(&config.session_file);
    let locale = state.locale;
    tracing::info!(locale = %locale, restored_tokens = state.tokens.is_some(), "session state loaded");

    if let Some(tokens) = &state.tokens {
        if tokens.needs_refresh(chrono::Utc::now(), chrono::Duration::minutes(1)) {
            tracing::warn!("persisted access token is expired or unreadable; a refresh is due");
        }
    }

    // 5. Navigator Assembly
    // Route declarations are validated here; a malformed table cannot start.
    let navigator =
        create_navigator(&config, &state).expect("FATAL: route table failed validation");

    // 6. Initial Navigation
    // Mounting the application navigates to the storefront.
    let outcome = navigator
        .navigate("/")
        .await
        .expect("FATAL: initial navigation did not settle");
    tracing::info!(view = outcome.view, "initial view ready");

    // 7. Navigation Loop
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let path = line.trim();
        if path.is_empty() {
            continue;
        }
        match navigator.navigate(path).await {
            Ok(outcome) => match &outcome.redirected_from {
                Some(from) => println!("{} -> {} (redirected from {})", path, outcome.view, from),
                None => println!("{} -> {}", path, outcome.view),
            },
            Err(error) => tracing::error!(%error, path, "navigation failed"),
        }
    }

    // 8. Persist on Exit
    if let Err(error) = state.save(&config.session_file) {
        tracing::warn!(%error, "could not persist session state");
    }
}
