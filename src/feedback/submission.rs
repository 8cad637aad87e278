use crate::error::ValidationError;
use crate::models::{Feedback, FeedbackStatus, Location, Submitter, Urgency, MAX_IMAGES, MAX_TITLE_LEN};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A report as filled in by a resident, before it has an identifier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewFeedback {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    pub address: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    pub issue_type: String,
    pub title: String,
    pub description: String,
    pub urgency: Option<Urgency>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub consent: bool,
    pub submitted_at: DateTime<Utc>,
}

impl NewFeedback {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        address: impl Into<String>,
        issue_type: impl Into<String>,
    ) -> Self {
        Self {
            name: None,
            phone: None,
            user_id: None,
            address: address.into(),
            latitude: None,
            longitude: None,
            issue_type: issue_type.into(),
            title: title.into(),
            description: description.into(),
            urgency: None,
            images: Vec::new(),
            consent: false,
            submitted_at: Utc::now(),
        }
    }

    /// Checks the form, reporting the first problem found
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.description.trim().is_empty() {
            missing.push("description");
        }
        if self.address.trim().is_empty() {
            missing.push("address");
        }
        if self.issue_type.trim().is_empty() {
            missing.push("issue type");
        }
        if self.urgency.is_none() {
            missing.push("urgency");
        }
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        if !self.consent {
            return Err(ValidationError::ConsentRequired);
        }

        if self.title.trim().chars().count() > MAX_TITLE_LEN {
            return Err(ValidationError::TitleTooLong);
        }

        if self.images.len() > MAX_IMAGES {
            return Err(ValidationError::TooManyImages(self.images.len()));
        }

        Ok(())
    }

    /// Turns an accepted form into a pending report with the given identifier
    pub fn into_feedback(self, id: String) -> Result<Feedback, ValidationError> {
        self.validate()?;

        let submitter = Submitter {
            name: non_blank(self.name),
            phone: non_blank(self.phone),
            user_id: non_blank(self.user_id),
        };

        Ok(Feedback {
            id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            created_at: self.submitted_at,
            updated_at: self.submitted_at,
            status: FeedbackStatus::Pending,
            urgency: self.urgency.ok_or_else(|| ValidationError::MissingFields(vec!["urgency"]))?,
            issue_type: self.issue_type.trim().to_string(),
            location: Location {
                latitude: self.latitude,
                longitude: self.longitude,
                ..Location::new(self.address.trim())
            },
            images: self.images,
            submitted_by: (!submitter.is_empty()).then_some(submitter),
            assigned_to: None,
            comments: Vec::new(),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> NewFeedback {
        let mut form = NewFeedback::new(
            "Overflowing bins",
            "Bins on the square have not been emptied for a week",
            "Market Square",
            "Sanitation",
        );
        form.urgency = Some(Urgency::Medium);
        form.consent = true;
        form
    }

    #[test]
    fn accepted_form_becomes_pending_report() {
        let form = complete_form();
        let submitted_at = form.submitted_at;
        let record = form.into_feedback("feedback9".to_string()).unwrap();

        assert_eq!(record.id, "feedback9");
        assert_eq!(record.status, FeedbackStatus::Pending);
        assert_eq!(record.urgency, Urgency::Medium);
        assert_eq!(record.created_at, submitted_at);
        assert_eq!(record.updated_at, record.created_at);
        assert!(record.comments.is_empty());
        assert!(record.assigned_to.is_none());
        assert!(record.submitted_by.is_none());
    }

    #[test]
    fn lists_every_missing_field() {
        let form = NewFeedback::new("", "  ", "Market Square", "");
        assert_eq!(
            form.validate(),
            Err(ValidationError::MissingFields(vec![
                "title",
                "description",
                "issue type",
                "urgency"
            ]))
        );
    }

    #[test]
    fn consent_is_required() {
        let mut form = complete_form();
        form.consent = false;
        assert_eq!(form.validate(), Err(ValidationError::ConsentRequired));
    }

    #[test]
    fn title_length_is_capped() {
        let mut form = complete_form();
        form.title = "x".repeat(MAX_TITLE_LEN);
        assert!(form.validate().is_ok());
        form.title.push('x');
        assert_eq!(form.validate(), Err(ValidationError::TitleTooLong));
    }

    #[test]
    fn image_count_is_capped() {
        let mut form = complete_form();
        form.images = vec!["/img.png".to_string(); MAX_IMAGES];
        assert!(form.validate().is_ok());
        form.images.push("/img.png".to_string());
        assert_eq!(form.validate(), Err(ValidationError::TooManyImages(6)));
    }

    #[test]
    fn address_is_trimmed_and_coordinates_kept() {
        let mut form = complete_form();
        form.address = "  Market Square ".to_string();
        form.latitude = Some(40.7);
        form.longitude = Some(-73.9);
        let record = form.into_feedback("f".to_string()).unwrap();

        assert_eq!(record.location.address, "Market Square");
        assert_eq!(record.location.coordinates(), Some((40.7, -73.9)));
    }

    #[test]
    fn blank_contact_details_are_dropped() {
        let mut form = complete_form();
        form.name = Some("  ".to_string());
        form.phone = Some(" 555-000-1111 ".to_string());
        let record = form.into_feedback("f".to_string()).unwrap();

        let submitter = record.submitted_by.unwrap();
        assert_eq!(submitter.name, None);
        assert_eq!(submitter.phone.as_deref(), Some("555-000-1111"));
    }
}
