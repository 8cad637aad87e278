//! Filtering and ordering of a feedback collection for display.
//!
//! A record is shown when it matches the free-text search (title, description
//! or address, case-insensitive), the status filter and the issue type filter.
//! Matches are ordered by urgency (high first), then newest first. The sort is
//! stable so equal records keep their collection order.

use crate::models::{Feedback, FeedbackStatus, ParseEnumError};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Only(FeedbackStatus),
}

impl StatusFilter {
    fn matches(&self, status: FeedbackStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum IssueTypeFilter {
    #[default]
    All,
    Only(String),
}

impl IssueTypeFilter {
    fn matches(&self, issue_type: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == issue_type,
        }
    }
}

impl From<&str> for IssueTypeFilter {
    fn from(s: &str) -> Self {
        if s.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(s.to_string())
        }
    }
}

/// Filter criteria from the explore/dashboard views
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pub search: String,
    pub status: StatusFilter,
    pub issue_type: IssueTypeFilter,
}

impl Criteria {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    pub fn with_issue_type(mut self, issue_type: IssueTypeFilter) -> Self {
        self.issue_type = issue_type;
        self
    }

    /// Whether anything narrows the result; decides which empty-state hint to show
    pub fn is_narrowing(&self) -> bool {
        !self.search.is_empty()
            || self.status != StatusFilter::All
            || self.issue_type != IssueTypeFilter::All
    }

    fn matches_search(&self, item: &Feedback, needle: &str) -> bool {
        needle.is_empty()
            || item.title.to_lowercase().contains(needle)
            || item.description.to_lowercase().contains(needle)
            || item.location.address.to_lowercase().contains(needle)
    }
}

/// Returns the records matching `criteria`, most urgent and newest first.
pub fn filter_and_sort<'a>(items: &'a [Feedback], criteria: &Criteria) -> Vec<&'a Feedback> {
    let needle = criteria.search.to_lowercase();

    let mut result: Vec<&Feedback> = items
        .iter()
        .filter(|item| {
            criteria.matches_search(item, &needle)
                && criteria.status.matches(item.status)
                && criteria.issue_type.matches(&item.issue_type)
        })
        .collect();

    result.sort_by(|a, b| {
        a.urgency
            .cmp(&b.urgency)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });

    result
}
