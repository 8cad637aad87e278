use crate::feedback::NewFeedback;
use crate::models::{seed, Feedback};
use crate::store::traits::FeedbackStore;
use anyhow::{bail, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

/// Records held in process memory, in insertion order
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Feedback>>,
}

impl MemoryStore {
    pub fn new(records: Vec<Feedback>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Store pre-loaded with the demo reports
    pub fn seeded() -> Self {
        let records = seed::feedback();
        info!("📋 Loading {} demo feedback records", records.len());
        Self::new(records)
    }
}

#[async_trait]
impl FeedbackStore for MemoryStore {
    async fn fetch_all(&self) -> Result<Vec<Feedback>> {
        Ok(self.records.read().await.clone())
    }

    async fn fetch(&self, id: &str) -> Result<Option<Feedback>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|f| f.id == id).cloned())
    }

    async fn save(&self, record: &Feedback) -> Result<()> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|f| f.id == record.id) {
            Some(slot) => {
                *slot = record.clone();
                debug!("Saved feedback {}", record.id);
                Ok(())
            }
            None => bail!("No feedback with id {} to save", record.id),
        }
    }

    async fn create(&self, form: NewFeedback) -> Result<Feedback> {
        let record = form.into_feedback(Uuid::new_v4().to_string())?;
        self.records.write().await.push(record.clone());
        debug!("Created feedback {}", record.id);
        Ok(record)
    }

    fn store_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::change_status;
    use crate::models::{FeedbackStatus, Urgency};

    #[tokio::test]
    async fn seeded_store_returns_demo_records_in_order() {
        let store = MemoryStore::seeded();
        let ids: Vec<_> = store
            .fetch_all()
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.id)
            .collect();
        assert_eq!(ids, ["feedback1", "feedback2", "feedback3"]);
    }

    #[tokio::test]
    async fn fetch_unknown_id_is_absent() {
        let store = MemoryStore::seeded();
        assert!(store.fetch("nope").await.unwrap().is_none());
        assert!(store.fetch("feedback2").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn save_replaces_matching_record() {
        let store = MemoryStore::seeded();
        let record = store.fetch("feedback2").await.unwrap().unwrap();
        let updated = change_status(&record, FeedbackStatus::InProgress);

        store.save(&updated).await.unwrap();

        let stored = store.fetch("feedback2").await.unwrap().unwrap();
        assert_eq!(stored, updated);
        assert_eq!(store.fetch_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn save_unknown_record_fails() {
        let store = MemoryStore::default();
        let record = seed::feedback().remove(0);
        assert!(store.save(&record).await.is_err());
    }

    #[tokio::test]
    async fn create_assigns_fresh_identifier() {
        let store = MemoryStore::default();
        let mut form = NewFeedback::new("Broken swing", "Chain snapped", "Riverside Park", "Parks");
        form.urgency = Some(Urgency::Low);
        form.consent = true;

        let first = store.create(form.clone()).await.unwrap();
        let second = store.create(form).await.unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.fetch_all().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn create_rejects_invalid_form() {
        let store = MemoryStore::default();
        let form = NewFeedback::new("", "", "", "");
        assert!(store.create(form).await.is_err());
        assert!(store.fetch_all().await.unwrap().is_empty());
    }
}
