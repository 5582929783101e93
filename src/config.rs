use std::env;
use std::net::IpAddr;

use anyhow::Context;

/// Which repository implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEngine {
  Memory,
  Postgres,
}

/// Runtime configuration, read from the environment (a `.env` file is
/// loaded first when present).
#[derive(Debug)]
pub struct Config {
  pub host: IpAddr,
  pub port: u16,
  pub engine: StoreEngine,
  /// Connection string, assembled from POSTGRES_* when the postgres
  /// engine is selected.
  pub database_url: Option<String>,
  pub request_timeout_secs: u64,
}

impl Config {
  pub fn from_env() -> anyhow::Result<Self> {
    let host = env::var("APP_HOST")
      .unwrap_or_else(|_| "127.0.0.1".to_string())
      .parse()
      .context("APP_HOST is not a valid IP address")?;
    let port = env::var("APP_PORT")
      .unwrap_or_else(|_| "3000".to_string())
      .parse()
      .context("APP_PORT is not a valid port number")?;
    let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
      .unwrap_or_else(|_| "30".to_string())
      .parse()
      .context("REQUEST_TIMEOUT_SECS is not a valid number of seconds")?;

    let engine = match env::var("APP_DB_ENGINE")
      .unwrap_or_else(|_| "memory".to_string())
      .as_str()
    {
      "memory" => StoreEngine::Memory,
      "postgres" => StoreEngine::Postgres,
      other => anyhow::bail!("APP_DB_ENGINE must be 'memory' or 'postgres', got '{other}'"),
    };

    let database_url = match engine {
      StoreEngine::Memory => None,
      StoreEngine::Postgres => Some(postgres_url()?),
    };

    Ok(Self {
      host,
      port,
      engine,
      database_url,
      request_timeout_secs,
    })
  }
}

fn postgres_url() -> anyhow::Result<String> {
  let user = env::var("POSTGRES_USER").context("POSTGRES_USER must be set")?;
  let password = env::var("POSTGRES_PASSWORD").context("POSTGRES_PASSWORD must be set")?;
  let host = env::var("POSTGRES_HOST").context("POSTGRES_HOST must be set")?;
  let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
  let database = env::var("POSTGRES_DB").context("POSTGRES_DB must be set")?;
  Ok(format!("postgres://{user}:{password}@{host}:{port}/{database}"))
}
