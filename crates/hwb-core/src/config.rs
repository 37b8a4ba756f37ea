use std::{
    env, fmt, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{domain::ChatId, errors::Error, Result};

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_RETRY_PERIOD_SECS: u64 = 600;
pub const DEFAULT_LOG_FILE: &str = "bot.log";

/// Typed configuration, built once at startup and handed to each component.
#[derive(Clone)]
pub struct Config {
    // Secrets
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: ChatId,

    // Runtime
    pub endpoint: String,
    pub retry_period: Duration,
    pub log_file: PathBuf,
}

impl Config {
    /// Load `.env` (if present) and resolve configuration from the process environment.
    pub fn load() -> Result<Self> {
        load_dotenv_if_present(Path::new(".env"));
        Self::from_lookup(env_str)
    }

    /// Resolve configuration against an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let practicum_token = required(&lookup, "PRACTICUM_TOKEN", "homework API token")?;
        let telegram_token = required(&lookup, "TELEGRAM_TOKEN", "Telegram bot token")?;
        let telegram_chat_id = required(&lookup, "TELEGRAM_CHAT_ID", "Telegram chat id")?;

        let endpoint = lookup("HOMEWORK_API_ENDPOINT")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let retry_period = Duration::from_secs(
            lookup("RETRY_PERIOD_SECS")
                .and_then(|s| s.trim().parse::<u64>().ok())
                .unwrap_or(DEFAULT_RETRY_PERIOD_SECS),
        );

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id: ChatId(telegram_chat_id.trim().to_string()),
            endpoint,
            retry_period,
            log_file: log_file_from(&lookup),
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("retry_period", &self.retry_period)
            .field("log_file", &self.log_file)
            .finish()
    }
}

/// Log destination, resolved separately so logging can start before the secrets are checked.
pub fn log_file() -> PathBuf {
    load_dotenv_if_present(Path::new(".env"));
    log_file_from(env_str)
}

fn log_file_from(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    PathBuf::from(
        lookup("LOG_FILE")
            .and_then(non_empty)
            .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
    )
}

fn required(lookup: &impl Fn(&str) -> Option<String>, key: &str, what: &str) -> Result<String> {
    lookup(key).and_then(non_empty).ok_or_else(|| {
        Error::Config(format!(
            "{what} is not set ({key} environment variable is required)"
        ))
    })
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn load_dotenv_if_present(path: &Path) {
    let Ok(contents) = fs::read_to_string(path) else {
        return;
    };
    for (key, val) in parse_dotenv(&contents) {
        if env::var_os(&key).is_some() {
            continue; // do not override existing env
        }
        env::set_var(key, val);
    }
}

fn parse_dotenv(contents: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((k, v)) = line.split_once('=') else {
            continue;
        };

        let key = k.trim();
        if key.is_empty() {
            continue;
        }

        let mut val = v.trim().to_string();
        // Strip optional surrounding quotes.
        if val.len() >= 2
            && ((val.starts_with('"') && val.ends_with('"'))
                || (val.starts_with('\'') && val.ends_with('\'')))
        {
            val = val[1..val.len() - 1].to_string();
        }

        out.push((key.to_string(), val));
    }
    out
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
