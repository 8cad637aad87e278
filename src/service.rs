use crate::error::{FeedbackError, Result};
use crate::feedback::{
    append_comment, change_status, filter_and_sort, Criteria, NewFeedback, ReportSummary,
    StatusCounts,
};
use crate::models::{CommentAuthor, Feedback, FeedbackStatus, User};
use crate::store::FeedbackStore;
use tracing::{debug, info};

/// A filtered view over the collection
#[derive(Debug, Clone)]
pub struct Listing {
    pub items: Vec<Feedback>,
    /// Size of the whole collection before filtering
    pub total: usize,
    pub narrowed: bool,
}

impl Listing {
    pub fn empty_hint(&self) -> &'static str {
        if self.narrowed {
            "Try adjusting your search or filters"
        } else {
            "No feedback has been submitted yet"
        }
    }
}

/// Feedback operations over an injected store and user directory
pub struct FeedbackService<S> {
    store: S,
    users: Vec<User>,
}

impl<S: FeedbackStore> FeedbackService<S> {
    pub fn new(store: S, users: Vec<User>) -> Self {
        Self { store, users }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn user(&self, id: &str) -> Result<&User> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .ok_or_else(|| FeedbackError::UnknownUser(id.to_string()))
    }

    pub async fn explore(&self, criteria: &Criteria) -> Result<Listing> {
        let records = self.store.fetch_all().await?;
        let items: Vec<Feedback> = filter_and_sort(&records, criteria)
            .into_iter()
            .cloned()
            .collect();

        debug!(
            "Showing {} of {} total issues from {} store",
            items.len(),
            records.len(),
            self.store.store_name()
        );
        Ok(Listing {
            items,
            total: records.len(),
            narrowed: criteria.is_narrowing(),
        })
    }

    pub async fn detail(&self, id: &str) -> Result<Feedback> {
        self.store
            .fetch(id)
            .await?
            .ok_or_else(|| FeedbackError::NotFound(id.to_string()))
    }

    pub async fn update_status(&self, id: &str, status: FeedbackStatus) -> Result<Feedback> {
        let record = self.detail(id).await?;
        let updated = change_status(&record, status);
        self.store.save(&updated).await?;

        info!("Feedback #{} has been marked as {}", updated.short_id(), status);
        Ok(updated)
    }

    pub async fn add_comment(&self, id: &str, content: &str, author_id: &str) -> Result<Feedback> {
        let author = CommentAuthor::from(self.user(author_id)?);
        let record = self.detail(id).await?;
        let updated = append_comment(&record, content, author)?;
        self.store.save(&updated).await?;

        info!("Comment added to feedback #{}", updated.short_id());
        Ok(updated)
    }

    pub async fn submit(&self, form: NewFeedback) -> Result<Feedback> {
        form.validate()?;
        let record = self.store.create(form).await?;

        info!("Feedback submitted successfully as {}", record.id);
        Ok(record)
    }

    /// Reports sent by one user, most urgent and newest first
    pub async fn submissions_of(&self, user_id: &str) -> Result<Vec<Feedback>> {
        let records: Vec<Feedback> = self
            .store
            .fetch_all()
            .await?
            .into_iter()
            .filter(|f| f.submitter_id() == Some(user_id))
            .collect();

        Ok(filter_and_sort(&records, &Criteria::default())
            .into_iter()
            .cloned()
            .collect())
    }

    pub async fn dashboard(&self) -> Result<StatusCounts> {
        Ok(StatusCounts::of(&self.store.fetch_all().await?))
    }

    pub async fn report(&self) -> Result<ReportSummary> {
        Ok(ReportSummary::of(&self.store.fetch_all().await?))
    }
}
