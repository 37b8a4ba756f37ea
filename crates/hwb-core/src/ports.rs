use async_trait::async_trait;

use crate::{domain::ChatId, Result};

/// Hexagonal port for the homework-status API.
///
/// Implementations perform a single authenticated fetch with no retries; the
/// poll loop owns the retry cadence.
#[async_trait]
pub trait HomeworkSource: Send + Sync {
    /// Fetch the raw status payload for changes since `from_date` (Unix seconds).
    async fn fetch(&self, from_date: i64) -> Result<serde_json::Value>;
}

/// Hexagonal port for outbound chat messages.
#[async_trait]
pub trait MessagingPort: Send + Sync {
    async fn send_text(&self, chat_id: &ChatId, text: &str) -> Result<()>;
}
