pub mod seed;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum number of image references attached to one report
pub const MAX_IMAGES: usize = 5;

/// Maximum title length accepted on submission
pub const MAX_TITLE_LEN: usize = 100;

/// Suggested issue types offered when submitting or filtering
pub const ISSUE_TYPES: [&str; 9] = [
    "Roads",
    "Water",
    "Electricity",
    "Sanitation",
    "Public Safety",
    "Parks",
    "Public Transport",
    "Noise",
    "Other",
];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid {kind} value: {value:?}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Workflow stage of a report. Every stage is reachable from every other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum FeedbackStatus {
    Pending,
    InProgress,
    Resolved,
}

impl FeedbackStatus {
    pub const ALL: [FeedbackStatus; 3] = [Self::Pending, Self::InProgress, Self::Resolved];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Resolved => "resolved",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for FeedbackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedbackStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in-progress" | "in_progress" | "inprogress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            _ => Err(ParseEnumError::new("status", s)),
        }
    }
}

/// Severity classification. Declaration order is sort order: high first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(ParseEnumError::new("urgency", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Resident,
    Admin,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resident => f.write_str("resident"),
            Self::Admin => f.write_str("admin"),
        }
    }
}

impl FromStr for UserRole {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "resident" => Ok(Self::Resident),
            "admin" => Ok(Self::Admin),
            _ => Err(ParseEnumError::new("role", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Where the reported issue is
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl Location {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            latitude: None,
            longitude: None,
        }
    }

    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

/// Who sent a report. Every field is optional so residents can stay anonymous.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Submitter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl Submitter {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.user_id.is_none()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommentAuthor {
    pub id: String,
    pub name: String,
    pub role: UserRole,
}

impl From<&User> for CommentAuthor {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            role: user.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author: CommentAuthor,
}

/// A citizen-submitted issue report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: FeedbackStatus,
    pub urgency: Urgency,
    pub issue_type: String,
    pub location: Location,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_by: Option<Submitter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// A loaded record that breaks the model's invariants
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("feedback {0} was updated before it was created")]
    UpdatedBeforeCreated(String),

    #[error("feedback {id} has {count} images, at most {} allowed", MAX_IMAGES)]
    TooManyImages { id: String, count: usize },
}

impl Feedback {
    /// Checks the invariants every stored record must hold
    pub fn check(&self) -> Result<(), RecordError> {
        if self.updated_at < self.created_at {
            return Err(RecordError::UpdatedBeforeCreated(self.id.clone()));
        }
        if self.images.len() > MAX_IMAGES {
            return Err(RecordError::TooManyImages {
                id: self.id.clone(),
                count: self.images.len(),
            });
        }
        Ok(())
    }

    pub fn submitter_id(&self) -> Option<&str> {
        self.submitted_by.as_ref()?.user_id.as_deref()
    }

    /// Last four characters of the id, as shown in status notices
    pub fn short_id(&self) -> &str {
        let start = self
            .id
            .char_indices()
            .rev()
            .nth(3)
            .map(|(i, _)| i)
            .unwrap_or(0);
        &self.id[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_kebab_case_on_the_wire() {
        let json = serde_json::to_string(&FeedbackStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        let back: FeedbackStatus = serde_json::from_str("\"resolved\"").unwrap();
        assert_eq!(back, FeedbackStatus::Resolved);
    }

    #[test]
    fn urgency_orders_high_first() {
        assert!(Urgency::High < Urgency::Medium);
        assert!(Urgency::Medium < Urgency::Low);
    }

    #[test]
    fn parses_enum_strings() {
        assert_eq!("In-Progress".parse::<FeedbackStatus>(), Ok(FeedbackStatus::InProgress));
        assert_eq!(" HIGH ".parse::<Urgency>(), Ok(Urgency::High));
        assert_eq!("admin".parse::<UserRole>(), Ok(UserRole::Admin));
        assert!("closed".parse::<FeedbackStatus>().is_err());
    }

    #[test]
    fn feedback_json_uses_camel_case_fields() {
        let record = &seed::feedback()[0];
        let value = serde_json::to_value(record).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("issueType").is_some());
        assert_eq!(value["submittedBy"]["userId"], "user1");

        let back: Feedback = serde_json::from_value(value).unwrap();
        assert_eq!(&back, record);
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let json = r#"{
            "id": "f9",
            "title": "Noise",
            "description": "Loud at night",
            "createdAt": "2023-03-01T10:00:00Z",
            "updatedAt": "2023-03-01T10:00:00Z",
            "status": "pending",
            "urgency": "low",
            "issueType": "Noise",
            "location": { "address": "1 Quiet Lane" }
        }"#;
        let record: Feedback = serde_json::from_str(json).unwrap();
        assert!(record.images.is_empty());
        assert!(record.comments.is_empty());
        assert!(record.submitted_by.is_none());
        assert_eq!(record.location.coordinates(), None);
    }

    #[test]
    fn check_flags_broken_records() {
        let mut record = seed::feedback()[0].clone();
        assert_eq!(record.check(), Ok(()));

        record.images = vec!["/placeholder.svg".to_string(); MAX_IMAGES + 1];
        assert_eq!(
            record.check(),
            Err(RecordError::TooManyImages {
                id: "feedback1".to_string(),
                count: 6
            })
        );

        record.images.clear();
        record.updated_at = record.created_at - chrono::Duration::minutes(1);
        assert_eq!(
            record.check(),
            Err(RecordError::UpdatedBeforeCreated("feedback1".to_string()))
        );
    }

    #[test]
    fn short_id_takes_last_four_chars() {
        let mut record = seed::feedback()[0].clone();
        assert_eq!(record.short_id(), "ack1");
        record.id = "ab".to_string();
        assert_eq!(record.short_id(), "ab");
    }
}
