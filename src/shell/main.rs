use anyhow::Context;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use posts_cqrs::modules::posts::adapters::outbound::in_memory::InMemoryPostsDatabase;
use posts_cqrs::shared::core::primitives::SystemClock;
use posts_cqrs::shell::config::{Config, load_seed_users};
use posts_cqrs::shell::http::router;
use posts_cqrs::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("invalid configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .context("invalid log filter")?;
    fmt().with_env_filter(filter).init();

    let database = Arc::new(InMemoryPostsDatabase::new());
    if let Some(path) = &config.seed_users {
        let users = load_seed_users(path)?;
        let count = users.len();
        for user in users {
            let user_id = user.user_id;
            database
                .insert_user(user)
                .await
                .with_context(|| format!("cannot seed user {user_id}"))?;
        }
        tracing::info!(count, path = %path.display(), "seeded users");
    }

    let state = AppState::compose(
        database,
        Arc::new(SystemClock),
        config.create_post_settings(),
    );
    let app = router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("cannot bind {}", config.bind_addr))?;
    tracing::info!("REST endpoint: http://{}/posts", config.bind_addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "cannot listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
