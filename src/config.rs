use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::time::Duration;

/// Production endpoint of iiko Cloud
pub const DEFAULT_BASE_URL: &str = "https://api-ru.iiko.services";

/// Per-call timeout when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Construction-time options of a [`Client`](crate::Client)
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// API login exchanged for access tokens
    pub api_login: String,

    /// Base URL without trailing slash
    pub base_url: String,

    /// Applied to every HTTP call
    pub timeout: Duration,

    /// Custom transport; a default client is built when absent
    pub http_client: Option<reqwest::Client>,

    /// Log request and response bodies
    pub debug: bool,

    /// Token obtained elsewhere; skips the initial acquisition
    pub token: Option<String>,

    /// Attach the raw response text to domain errors
    pub return_raw: bool,
}

impl ClientConfig {
    pub fn new(api_login: impl Into<String>) -> Self {
        Self {
            api_login: api_login.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            http_client: None,
            debug: false,
            token: None,
            return_raw: false,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_return_raw(mut self, return_raw: bool) -> Self {
        self.return_raw = return_raw;
        self
    }

    /// Load from the environment, reading `.env` first if present
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_login = lookup("IIKO_API_LOGIN")
            .filter(|s| !s.is_empty())
            .context("IIKO_API_LOGIN is required")?;

        let mut config = Self::new(api_login);

        if let Some(base_url) = lookup("IIKO_BASE_URL") {
            config = config.with_base_url(base_url);
        }

        if let Some(secs) = lookup("IIKO_TIMEOUT_SECS") {
            let secs: u64 = secs
                .trim()
                .parse()
                .with_context(|| format!("IIKO_TIMEOUT_SECS is not a number: {}", secs))?;
            config = config.with_timeout(Duration::from_secs(secs));
        }

        if let Some(token) = lookup("IIKO_TOKEN").filter(|s| !s.is_empty()) {
            config = config.with_token(token);
        }

        config.debug = lookup("IIKO_DEBUG").map_or(false, |s| parse_flag(&s));
        config.return_raw = lookup("IIKO_RETURN_RAW").map_or(false, |s| parse_flag(&s));

        Ok(config)
    }
}

fn parse_flag(s: &str) -> bool {
    matches!(
        s.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// iiko Cloud command line client
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// API login from the iiko Cloud settings
    #[arg(short = 'l', long, env = "IIKO_API_LOGIN")]
    pub api_login: String,

    /// API base URL
    #[arg(long, env = "IIKO_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// HTTP request timeout in seconds
    #[arg(long, env = "IIKO_TIMEOUT_SECS", default_value = "15")]
    pub timeout: u64,

    /// Access token to use instead of requesting one
    #[arg(long, env = "IIKO_TOKEN")]
    pub token: Option<String>,

    /// Log request and response bodies
    #[arg(long, env = "IIKO_DEBUG")]
    pub debug: bool,

    /// Attach raw response bodies to reported API errors
    #[arg(long, env = "IIKO_RETURN_RAW")]
    pub return_raw: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, env = "LOG_JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List organizations available to the API login
    Organizations,

    /// List terminal groups of the given organizations
    TerminalGroups {
        #[arg(short, long = "organization", required = true)]
        organizations: Vec<String>,
    },

    /// Dump the nomenclature of an organization
    Nomenclature {
        #[arg(short, long)]
        organization: String,

        /// Only changes after this revision
        #[arg(long)]
        start_revision: Option<i64>,
    },

    /// List couriers of the given organizations
    Couriers {
        #[arg(short, long = "organization", required = true)]
        organizations: Vec<String>,
    },

    /// Show the progress of a command
    CommandStatus {
        #[arg(short, long)]
        organization: String,

        #[arg(short, long)]
        correlation_id: String,
    },
}

impl CliArgs {
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(&self.api_login)
            .with_base_url(&self.base_url)
            .with_timeout(Duration::from_secs(self.timeout))
            .with_debug(self.debug)
            .with_return_raw(self.return_raw);
        if let Some(token) = self.token.as_deref().filter(|t| !t.is_empty()) {
            config = config.with_token(token);
        }
        config
    }
}
