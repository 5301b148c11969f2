//! Application configuration from environment variables (and `.env`).

use std::env;
use std::time::Duration;

use anyhow::{anyhow, bail, Context};

/// Object storage settings for image URLs
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Base URL of the storage service, e.g. `https://xyz.supabase.co`
    pub public_url: Option<String>,
    pub bucket: String,
}

/// Outgoing mail settings; mail is enabled only with a host and sender
#[derive(Clone)]
pub struct MailConfig {
    pub smtp_host: Option<String>,
    pub smtp_port: u16,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    pub from: Option<String>,
}

impl MailConfig {
    pub fn is_configured(&self) -> bool {
        self.smtp_host.is_some() && self.from.is_some()
    }
}

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    /// `None` runs the admin routes in demo mode (no credential check)
    pub admin_password: Option<String>,
    pub storage: StorageConfig,
    pub mail: MailConfig,
    pub catalog_cache_ttl: Duration,
}

impl Config {
    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let database_url = get("DATABASE_URL").ok_or_else(|| anyhow!("DATABASE_URL must be set"))?;

        let smtp_port = match get("SMTP_PORT") {
            Some(port) => port
                .parse::<u16>()
                .with_context(|| format!("SMTP_PORT is not a valid port: {}", port))?,
            None => 587,
        };

        let catalog_cache_ttl = match get("CATALOG_CACHE_TTL_SECS") {
            Some(secs) => {
                let secs_value = secs
                    .parse::<u64>()
                    .with_context(|| format!("CATALOG_CACHE_TTL_SECS is not a number: {}", secs))?;
                if secs_value == 0 {
                    bail!("CATALOG_CACHE_TTL_SECS must be at least 1");
                }
                Duration::from_secs(secs_value)
            }
            None => Duration::from_secs(5 * 60),
        };

        Ok(Self {
            database_url,
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:3000".to_string()),
            admin_password: get("ADMIN_PASSWORD"),
            storage: StorageConfig {
                public_url: get("STORAGE_PUBLIC_URL"),
                bucket: get("STORAGE_BUCKET").unwrap_or_else(|| "tour-images".to_string()),
            },
            mail: MailConfig {
                smtp_host: get("SMTP_HOST"),
                smtp_port,
                smtp_username: get("SMTP_USERNAME"),
                smtp_password: get("SMTP_PASSWORD"),
                from: get("MAIL_FROM"),
            },
            catalog_cache_ttl,
        })
    }
}
