use std::sync::Arc;

use hwb_core::{config::Config, poller::Poller};
use hwb_practicum::PracticumClient;
use hwb_telegram::TelegramMessenger;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _log_guard = hwb_core::logging::init("hwb", &hwb_core::config::log_file())?;

    // All three secrets are checked before any client is built or any request is made.
    let cfg = checked_config(Config::load)?;

    let source = Arc::new(PracticumClient::from_config(&cfg)?);
    let messenger = Arc::new(TelegramMessenger::from_token(cfg.telegram_token.clone()));
    info!(endpoint = %source.endpoint(), "homework notifier started");

    Poller::new(&cfg, source, messenger).run().await;

    Ok(())
}

/// Resolve configuration, logging a missing secret at critical severity.
fn checked_config(load: impl FnOnce() -> hwb_core::Result<Config>) -> hwb_core::Result<Config> {
    load().map_err(|e| {
        error!(severity = "critical", error = %e, "missing required configuration");
        e
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_secret_stops_startup() {
        let res = checked_config(|| {
            Config::from_lookup(|k| match k {
                "PRACTICUM_TOKEN" => Some("p".to_string()),
                "TELEGRAM_TOKEN" => Some("t".to_string()),
                _ => None,
            })
        });
        assert!(matches!(
            res,
            Err(hwb_core::Error::Config(msg)) if msg.contains("TELEGRAM_CHAT_ID")
        ));
    }

    #[test]
    fn complete_config_passes_through() {
        let cfg = checked_config(|| {
            Config::from_lookup(|k| match k {
                "PRACTICUM_TOKEN" | "TELEGRAM_TOKEN" | "TELEGRAM_CHAT_ID" => Some("1".to_string()),
                _ => None,
            })
        })
        .unwrap();
        assert_eq!(cfg.telegram_chat_id.0, "1");
    }
}
