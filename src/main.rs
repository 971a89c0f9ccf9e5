// src/main.rs
//
// BoardHub server binary.
//
// Wiring order: config → pool → schema → repositories → services →
// router → listener. Everything after config returns through `?` so a
// broken database path or bind address fails loudly at startup.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use boardhub::application::AppState;
use boardhub::config::ServerConfig;
use boardhub::db::{create_connection_pool, initialize_database, load_fixture_data};
use boardhub::repositories::{
    SqliteCategoryRepository, SqliteCommentRepository, SqliteReviewRepository,
    SqliteUserRepository,
};
use boardhub::services::{CatalogService, CommentService, ReviewService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("boardhub=info")),
        )
        .init();

    let config = ServerConfig::from_env().context("failed to read configuration")?;
    tracing::info!(db = %config.db_path.display(), "starting boardhub");

    let pool = Arc::new(
        create_connection_pool(&config.db_path, config.pool_size)
            .context("failed to open database")?,
    );

    {
        let conn = pool.get().context("failed to get startup connection")?;
        initialize_database(&conn).context("failed to apply schema")?;
        if config.seed_fixture {
            load_fixture_data(&conn).context("failed to load fixture data")?;
            tracing::info!("fixture dataset loaded");
        }
    }

    let review_repo: Arc<dyn boardhub::repositories::ReviewRepository> =
        Arc::new(SqliteReviewRepository::new(Arc::clone(&pool)));
    let comment_repo: Arc<dyn boardhub::repositories::CommentRepository> =
        Arc::new(SqliteCommentRepository::new(Arc::clone(&pool)));
    let category_repo: Arc<dyn boardhub::repositories::CategoryRepository> =
        Arc::new(SqliteCategoryRepository::new(Arc::clone(&pool)));
    let user_repo: Arc<dyn boardhub::repositories::UserRepository> =
        Arc::new(SqliteUserRepository::new(Arc::clone(&pool)));

    let state = AppState {
        review_service: Arc::new(ReviewService::new(
            Arc::clone(&review_repo),
            Arc::clone(&category_repo),
        )),
        comment_service: Arc::new(CommentService::new(
            comment_repo,
            review_repo,
            Arc::clone(&user_repo),
        )),
        catalog_service: Arc::new(CatalogService::new(category_repo, user_repo)),
    };

    let app = boardhub::application::router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "listening");

    axum::serve(listener, app)
        .await
        .context("server error")?;

    Ok(())
}
