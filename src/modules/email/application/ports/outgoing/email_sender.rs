use async_trait::async_trait;

/// Outbound mail transport. `send_batch` delivers one message addressed to
/// every recipient at once; callers pass a deduplicated list.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), String>;

    async fn send_batch(
        &self,
        recipients: &[String],
        subject: &str,
        body: &str,
    ) -> Result<(), String>;
}
