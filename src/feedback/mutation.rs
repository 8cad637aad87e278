use crate::error::ValidationError;
use crate::models::{Comment, CommentAuthor, Feedback, FeedbackStatus};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Current time, never earlier than the record's creation or last update
fn refreshed_at(record: &Feedback) -> DateTime<Utc> {
    Utc::now().max(record.updated_at).max(record.created_at)
}

/// Returns a copy of `record` moved to `status`.
///
/// Any status may follow any other, including itself; the update time is
/// always refreshed.
pub fn change_status(record: &Feedback, status: FeedbackStatus) -> Feedback {
    Feedback {
        status,
        updated_at: refreshed_at(record),
        ..record.clone()
    }
}

/// Returns a copy of `record` with a new comment appended at the end.
///
/// Blank content is rejected and nothing changes.
pub fn append_comment(
    record: &Feedback,
    content: &str,
    author: CommentAuthor,
) -> Result<Feedback, ValidationError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(ValidationError::EmptyComment);
    }

    let now = refreshed_at(record);
    let mut updated = record.clone();
    updated.comments.push(Comment {
        id: Uuid::new_v4().to_string(),
        content: content.to_string(),
        created_at: now,
        author,
    });
    updated.updated_at = now;

    Ok(updated)
}
