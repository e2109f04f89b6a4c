//! Runtime configuration, resolved once at startup from the environment (and
//! a `.env` file, if there is one).
//!
//! `POSTGRES_ENCRYPT=true` forces `sslmode=require` whether the connection
//! comes from `DATABASE_URL` or from the individual `POSTGRES_*` keys. When
//! it is unset, a url keeps whatever `sslmode` it names.

use anyhow::{bail, Context, Result};
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::{
    fmt, net::IpAddr, net::SocketAddr, str::FromStr, time::Duration,
};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;

#[derive(Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub db: DbConfig,
    pub encrypt: bool,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

#[derive(Clone)]
pub enum DbConfig {
    Url(String),
    Parts {
        host: String,
        port: u16,
        user: String,
        password: String,
        database: String,
    },
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host: IpAddr = parse_or(&lookup, "LISTEN_ADDR", [127, 0, 0, 1].into())?;
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;

        let db = if let Some(url) = lookup("DATABASE_URL") {
            DbConfig::Url(url)
        } else {
            DbConfig::Parts {
                host: lookup("POSTGRES_HOST")
                    .unwrap_or_else(|| "localhost".to_string()),
                port: parse_or(&lookup, "POSTGRES_PORT", 5432)?,
                user: required(&lookup, "POSTGRES_USER")?,
                password: required(&lookup, "POSTGRES_PASSWORD")?,
                database: required(&lookup, "POSTGRES_DB")?,
            }
        };
        let encrypt = parse_bool(&lookup, "POSTGRES_ENCRYPT")?;

        let max_connections =
            parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        let acquire_timeout = Duration::from_secs(parse_or(
            &lookup,
            "DB_ACQUIRE_TIMEOUT_SECS",
            DEFAULT_ACQUIRE_TIMEOUT_SECS,
        )?);

        Ok(Config {
            listen_addr: SocketAddr::new(host, port),
            db,
            encrypt,
            max_connections,
            acquire_timeout,
        })
    }

    pub fn connect_options(&self) -> Result<PgConnectOptions> {
        let options = match &self.db {
            DbConfig::Url(url) => PgConnectOptions::from_str(url)
                .context("DATABASE_URL is not a valid postgres url")?,
            DbConfig::Parts {
                host,
                port,
                user,
                password,
                database,
            } => PgConnectOptions::new()
                .host(host)
                .port(*port)
                .username(user)
                .password(password)
                .database(database)
                .ssl_mode(PgSslMode::Prefer),
        };

        Ok(if self.encrypt {
            options.ssl_mode(PgSslMode::Require)
        } else {
            options
        })
    }
}

// Credentials stay out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("listen_addr", &self.listen_addr)
            .field("db", &self.db)
            .field("encrypt", &self.encrypt)
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout", &self.acquire_timeout)
            .finish()
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DbConfig::Url(_) => f.write_str("Url(<redacted>)"),
            DbConfig::Parts {
                host,
                port,
                user,
                database,
                ..
            } => f
                .debug_struct("Parts")
                .field("host", host)
                .field("port", port)
                .field("user", user)
                .field("password", &"<redacted>")
                .field("database", database)
                .finish(),
        }
    }
}

fn required<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).with_context(|| format!("{key} must be set"))
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        None => Ok(default),
    }
}

fn parse_bool<F>(lookup: &F, key: &str) -> Result<bool>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).as_deref().map(str::trim) {
        None => Ok(false),
        Some(v) if v.eq_ignore_ascii_case("true") || v == "1" => Ok(true),
        Some(v) if v.eq_ignore_ascii_case("false") || v == "0" => Ok(false),
        Some(v) => bail!("{key} must be true or false, got {v:?}"),
    }
}
