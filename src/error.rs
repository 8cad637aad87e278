use thiserror::Error;

use crate::models::{MAX_IMAGES, MAX_TITLE_LEN};

/// Input rejected before anything is changed. The message is shown to the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Comment cannot be empty")]
    EmptyComment,

    #[error("Please fill in all required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("You must agree to share this information with authorities.")]
    ConsentRequired,

    #[error("Title must be at most {} characters", MAX_TITLE_LEN)]
    TitleTooLong,

    #[error("At most {} images can be attached (got {})", MAX_IMAGES, .0)]
    TooManyImages(usize),
}

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Feedback not found: {0}")]
    NotFound(String),

    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

pub type Result<T, E = FeedbackError> = std::result::Result<T, E>;
