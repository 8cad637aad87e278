use crate::config::Config;
use crate::feedback::NewFeedback;
use crate::models::Feedback;
use crate::store::traits::FeedbackStore;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

/// Feedback kept by a remote JSON service
///
/// Routes, relative to the base URL:
/// - `GET  /feedback`       every record
/// - `GET  /feedback/{id}`  one record, 404 when absent
/// - `PUT  /feedback/{id}`  replace a record
/// - `POST /feedback`       submit a new report, returns it with its id
pub struct HttpStore {
    client: Client,
    base_url: String,
}

impl HttpStore {
    pub fn new(base_url: &str, config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .user_agent(concat!("civic-feedback/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/feedback", self.base_url)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/feedback/{}", self.base_url, id)
    }
}

/// Drops records that break the model invariants
fn keep_valid(records: Vec<Feedback>) -> Vec<Feedback> {
    records
        .into_iter()
        .filter(|record| match record.check() {
            Ok(()) => true,
            Err(e) => {
                warn!("Skipping malformed record: {e}");
                false
            }
        })
        .collect()
}

#[async_trait]
impl FeedbackStore for HttpStore {
    async fn fetch_all(&self) -> Result<Vec<Feedback>> {
        let url = self.collection_url();
        debug!("Fetching URL: {}", url);

        let records: Vec<Feedback> = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch feedback list")?
            .error_for_status()
            .context("Feedback service rejected list request")?
            .json()
            .await
            .context("Failed to decode feedback list")?;

        info!("Fetched {} feedback records from {}", records.len(), self.base_url);
        Ok(keep_valid(records))
    }

    async fn fetch(&self, id: &str) -> Result<Option<Feedback>> {
        let url = self.record_url(id);
        debug!("Fetching URL: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch feedback {id}"))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            warn!("Feedback service returned status: {}", response.status());
            anyhow::bail!("Failed to fetch feedback {id}: {}", response.status());
        }

        let record: Feedback = response
            .json()
            .await
            .with_context(|| format!("Failed to decode feedback {id}"))?;
        record.check().context("Feedback service returned a malformed record")?;
        Ok(Some(record))
    }

    async fn save(&self, record: &Feedback) -> Result<()> {
        let url = self.record_url(&record.id);
        debug!("Saving to URL: {}", url);

        self.client
            .put(&url)
            .json(record)
            .send()
            .await
            .with_context(|| format!("Failed to save feedback {}", record.id))?
            .error_for_status()
            .with_context(|| format!("Feedback service rejected update of {}", record.id))?;
        Ok(())
    }

    async fn create(&self, form: NewFeedback) -> Result<Feedback> {
        let url = self.collection_url();
        debug!("Posting to URL: {}", url);

        let record: Feedback = self
            .client
            .post(&url)
            .json(&form)
            .send()
            .await
            .context("Failed to submit feedback")?
            .error_for_status()
            .context("Feedback service rejected submission")?
            .json()
            .await
            .context("Failed to decode created feedback")?;

        info!("Submitted feedback {}", record.id);
        Ok(record)
    }

    fn store_name(&self) -> &'static str {
        "http"
    }
}
