use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use todo_api::adapters::http::routes::routes;
use todo_api::application::services::TodoService;
use todo_api::config::{Config, StoreEngine};
use todo_api::infrastructure::db::{InMemoryTodoRepository, PostgresTodoRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt().init();
  dotenv::dotenv().ok();

  let config = Config::from_env()?;

  let app = match config.engine {
    StoreEngine::Memory => {
      tracing::info!("using in-memory store");
      routes(Arc::new(TodoService::new(InMemoryTodoRepository::new())))
    }
    StoreEngine::Postgres => {
      let url = config
        .database_url
        .as_deref()
        .context("postgres engine selected but no connection settings")?;
      let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(url)
        .await
        .context("failed to connect to postgres")?;
      let repo = PostgresTodoRepository::new(pool);
      repo.init().await.context("failed to create todos table")?;
      tracing::info!("using postgres store");
      routes(Arc::new(TodoService::new(repo)))
    }
  };

  let app: Router = app
    .layer(TraceLayer::new_for_http())
    .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)));

  let addr = SocketAddr::new(config.host, config.port);
  let listener = tokio::net::TcpListener::bind(addr)
    .await
    .with_context(|| format!("failed to bind {addr}"))?;
  tracing::info!(%addr, "todo api listening");

  axum::serve(listener, app).await?;
  Ok(())
}
