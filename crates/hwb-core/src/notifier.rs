use std::sync::Arc;

use tracing::{debug, error};

use crate::{domain::ChatId, ports::MessagingPort};

/// Best-effort sender bound to the configured chat.
///
/// Delivery failures are logged and dropped; they never reach the poll loop.
#[derive(Clone)]
pub struct Notifier {
    messenger: Arc<dyn MessagingPort>,
    chat_id: ChatId,
}

impl Notifier {
    pub fn new(messenger: Arc<dyn MessagingPort>, chat_id: ChatId) -> Self {
        Self { messenger, chat_id }
    }

    pub fn chat_id(&self) -> &ChatId {
        &self.chat_id
    }

    pub async fn send(&self, text: &str) {
        match self.messenger.send_text(&self.chat_id, text).await {
            Ok(()) => debug!(chat_id = %self.chat_id, "message sent: {text}"),
            Err(e) => error!(chat_id = %self.chat_id, error = %e, "failed to send message"),
        }
    }
}
