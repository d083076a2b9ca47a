use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// Batch dispatched (or nothing to send); recipients may be zero.
    Sent { recipients: usize },
    /// A notification already went out within the rate-limit window.
    Suppressed,
    /// Course was deleted between enqueue and execution. Not an error.
    CourseVanished,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NotifyError {
    EmailTransport(String),
    DatabaseError(String),
}

/// Fan-out of "course updated" emails to subscribers, rate-limited per
/// course. Runs detached from the request that triggered it.
#[async_trait]
pub trait CourseUpdateNotifier: Send + Sync {
    async fn notify(&self, course_id: Uuid) -> Result<NotifyOutcome, NotifyError>;
}
