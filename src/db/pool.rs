use anyhow::{ Context, Result };
use sqlx::mysql::{ MySqlConnectOptions, MySqlPool, MySqlPoolOptions };
use std::env;
use std::sync::Arc;
use std::time::Duration;

/// Database configuration for connecting to the MySQL album store
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub database: String,
    pub max_connections: u32,
    pub connect_timeout: Duration,
}

impl DbConfig {
    /// Create a new DbConfig from environment variables
    pub fn from_env() -> Result<Self> {
        // The four connection parameters are opaque strings; they are not
        // validated here beyond being present.
        let user = env::var("DB_USER").context("DB_USER environment variable not set")?;
        let password = env
            ::var("DB_PASSWORD")
            .context("DB_PASSWORD environment variable not set")?;
        let host = env::var("DB_HOST").context("DB_HOST environment variable not set")?;
        let database = env::var("DB_NAME").context("DB_NAME environment variable not set")?;

        // Default to 5 connections, but allow configuration
        let max_connections = env
            ::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .context("Invalid DB_MAX_CONNECTIONS value")?;

        // Default timeout of 30 seconds
        let connect_timeout_secs = env
            ::var("DB_CONNECT_TIMEOUT")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .context("Invalid DB_CONNECT_TIMEOUT value")?;

        Ok(Self {
            user,
            password,
            host,
            database,
            max_connections,
            connect_timeout: Duration::from_secs(connect_timeout_secs),
        })
    }

    /// Build the driver connection descriptor. DB_HOST may carry an explicit
    /// port as `host:port`; otherwise the MySQL default port is used.
    fn connect_options(&self) -> Result<MySqlConnectOptions> {
        let options = MySqlConnectOptions::new()
            .username(&self.user)
            .password(&self.password)
            .database(&self.database);

        match self.host.split_once(':') {
            Some((host, port)) => {
                let port = port.parse::<u16>().context("Invalid port in DB_HOST value")?;
                Ok(options.host(host).port(port))
            }
            None => Ok(options.host(&self.host)),
        }
    }
}

/// Database connection pool for the MySQL album store
#[derive(Clone)]
pub struct Database {
    pool: Arc<MySqlPool>,
}

impl Database {
    /// Create a new database connection pool
    pub async fn connect(config: DbConfig) -> Result<Self> {
        let options = config.connect_options()?;

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connect_timeout)
            .connect_with(options).await
            .context("Failed to connect to database")?;

        // Verify connection by running a simple query
        sqlx::query("SELECT 1").execute(&pool).await.context("Failed to execute test query")?;

        println!("Successfully connected to database");

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Get a reference to the inner connection pool
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}
