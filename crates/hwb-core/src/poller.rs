//! The poll loop: fetch, validate, compare, notify, sleep.
//!
//! State lives only in memory:
//! - the cursor, advanced to the server's `current_date` after a fully
//!   successful iteration and left untouched on any failure
//! - the last status message sent (suppresses unchanged statuses)
//! - the last error message sent (suppresses recurring identical failures)

use std::{sync::Arc, time::Duration};

use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::{
    config::Config,
    dedup::LastSent,
    domain::Cursor,
    errors::ResponseError,
    notifier::Notifier,
    ports::{HomeworkSource, MessagingPort},
    response::check_response,
    status::parse_status,
    Error, Result,
};

const ERROR_PREFIX: &str = "Сбой в работе программы";

/// What a single iteration ended with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// A new status message was produced and handed to the notifier.
    Notified,
    /// The latest status is identical to the one already sent.
    Unchanged,
    /// The server reported no homework changes since the cursor.
    NoNewHomeworks,
    /// The iteration failed; the error path ran.
    Failed,
}

pub struct Poller {
    source: Arc<dyn HomeworkSource>,
    notifier: Notifier,
    retry_period: Duration,
    cursor: Cursor,
    last_message: LastSent,
    last_error: LastSent,
}

impl Poller {
    pub fn new(
        cfg: &Config,
        source: Arc<dyn HomeworkSource>,
        messenger: Arc<dyn MessagingPort>,
    ) -> Self {
        Self {
            source,
            notifier: Notifier::new(messenger, cfg.telegram_chat_id.clone()),
            retry_period: cfg.retry_period,
            cursor: Cursor::now(),
            last_message: LastSent::new(),
            last_error: LastSent::new(),
        }
    }

    pub fn with_cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Poll forever. Never returns.
    pub async fn run(mut self) {
        info!(
            chat_id = %self.notifier.chat_id(),
            retry_period = ?self.retry_period,
            cursor = self.cursor.0,
            "starting homework status polling"
        );
        loop {
            let outcome = self.tick().await;
            debug!(?outcome, cursor = self.cursor.0, "iteration finished");
            sleep(self.retry_period).await;
        }
    }

    /// Run one iteration without sleeping.
    pub async fn tick(&mut self) -> TickOutcome {
        match self.latest_status().await {
            Ok(message) => {
                if self.last_message.replace_if_changed(&message) {
                    self.notifier.send(&message).await;
                    TickOutcome::Notified
                } else {
                    debug!("no status changes since the last notification");
                    TickOutcome::Unchanged
                }
            }
            Err(Error::Response(ResponseError::EmptyHomeworks)) => {
                debug!(cursor = self.cursor.0, "no new homework statuses");
                TickOutcome::NoNewHomeworks
            }
            Err(e) => {
                error!(error = %e, "poll iteration failed");
                let text = format!("{ERROR_PREFIX}: {e}");
                if self.last_error.replace_if_changed(&text) {
                    self.notifier.send(&text).await;
                } else {
                    debug!("error already reported, not sending again");
                }
                TickOutcome::Failed
            }
        }
    }

    /// Fetch, validate and interpret the most recent record.
    ///
    /// The cursor only moves once every step has succeeded.
    async fn latest_status(&mut self) -> Result<String> {
        let payload = self.source.fetch(self.cursor.0).await?;
        let page = check_response(&payload)?;
        let message = parse_status(page.latest())?;
        self.cursor = Cursor(page.current_date());
        Ok(message)
    }
}
