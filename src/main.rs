use mimalloc::MiMalloc;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use yatube::BlogStorage;
use yatube::config::Config;
use yatube::db::schema::TABLES;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = Config::load()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        database_url = %cfg.database_url,
        max_connections = cfg.max_connections,
        loglevel = %cfg.loglevel
    );

    let storage = BlogStorage::open(&cfg).await?;
    let counts = storage.table_counts().await?;
    info!(
        tables = ?TABLES,
        users = counts.users,
        groups = counts.groups,
        posts = counts.posts,
        follows = counts.follows,
        comments = counts.comments,
        "database ready"
    );

    storage.pool().close().await;
    Ok(())
}
