//! Telegram adapter (teloxide).
//!
//! This crate implements the `hwb-core` MessagingPort over Telegram Bot API.

use async_trait::async_trait;

use teloxide::{prelude::*, types::Recipient};

use tokio::time::sleep;
use tracing::warn;

use hwb_core::{domain::ChatId, errors::Error, ports::MessagingPort, Result};

#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    pub fn from_token(token: impl Into<String>) -> Self {
        Self::new(Bot::new(token))
    }

    /// Numeric ids address a chat directly, anything else is a channel username.
    fn recipient(chat_id: &ChatId) -> Recipient {
        let raw = chat_id.0.trim();
        match raw.parse::<i64>() {
            Ok(id) => Recipient::Id(teloxide::types::ChatId(id)),
            Err(_) => Recipient::ChannelUsername(raw.to_string()),
        }
    }

    fn map_err(e: teloxide::RequestError) -> Error {
        Error::Delivery(format!("telegram error: {e}"))
    }

    async fn with_retry<T, Fut>(&self, mut op: impl FnMut() -> Fut) -> Result<T>
    where
        Fut: std::future::IntoFuture<Output = std::result::Result<T, teloxide::RequestError>>,
        Fut::IntoFuture: Send,
    {
        const MAX_RETRIES: usize = 1;
        let mut attempts = 0usize;
        loop {
            match op().await {
                Ok(v) => return Ok(v),
                Err(e) => match e {
                    teloxide::RequestError::RetryAfter(d) if attempts < MAX_RETRIES => {
                        attempts += 1;
                        warn!(retry_after = ?d, "telegram flood control, retrying once");
                        sleep(d).await;
                        continue;
                    }
                    other => return Err(Self::map_err(other)),
                },
            }
        }
    }
}

#[async_trait]
impl MessagingPort for TelegramMessenger {
    async fn send_text(&self, chat_id: &ChatId, text: &str) -> Result<()> {
        let recipient = Self::recipient(chat_id);
        self.with_retry(|| self.bot.send_message(recipient.clone(), text.to_string()))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_chat_ids_map_to_ids() {
        assert_eq!(
            TelegramMessenger::recipient(&ChatId("123456".to_string())),
            Recipient::Id(teloxide::types::ChatId(123456))
        );
        assert_eq!(
            TelegramMessenger::recipient(&ChatId("-100987".to_string())),
            Recipient::Id(teloxide::types::ChatId(-100987))
        );
    }

    #[test]
    fn other_chat_ids_map_to_channel_usernames() {
        assert_eq!(
            TelegramMessenger::recipient(&ChatId("@homework_feed".to_string())),
            Recipient::ChannelUsername("@homework_feed".to_string())
        );
    }
}
