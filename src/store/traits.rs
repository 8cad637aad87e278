use crate::feedback::NewFeedback;
use crate::models::Feedback;
use anyhow::Result;
use async_trait::async_trait;

/// Data access for feedback records.
/// The query and mutation code never touches storage directly; it only sees
/// values handed out by an implementation of this trait.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Every record, in the store's collection order
    async fn fetch_all(&self) -> Result<Vec<Feedback>>;

    /// One record by identifier, `None` when absent
    async fn fetch(&self, id: &str) -> Result<Option<Feedback>>;

    /// Replace the stored record with the same identifier
    async fn save(&self, record: &Feedback) -> Result<()>;

    /// Store a new submission and return it with its assigned identifier
    async fn create(&self, form: NewFeedback) -> Result<Feedback>;

    /// Get the name of the backing store
    fn store_name(&self) -> &'static str;
}
