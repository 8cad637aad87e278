use crate::models::{Feedback, FeedbackStatus};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl StatusCounts {
    pub fn of(items: &[Feedback]) -> Self {
        items.iter().fold(Self::default(), |mut counts, item| {
            match item.status {
                FeedbackStatus::Pending => counts.pending += 1,
                FeedbackStatus::InProgress => counts.in_progress += 1,
                FeedbackStatus::Resolved => counts.resolved += 1,
            }
            counts
        })
    }

    pub fn get(&self, status: FeedbackStatus) -> usize {
        match status {
            FeedbackStatus::Pending => self.pending,
            FeedbackStatus::InProgress => self.in_progress,
            FeedbackStatus::Resolved => self.resolved,
        }
    }

    pub fn total(&self) -> usize {
        self.pending + self.in_progress + self.resolved
    }

    /// Share of resolved reports as a whole percentage, 0 when there are none
    pub fn resolution_rate(&self) -> u32 {
        match self.total() {
            0 => 0,
            total => (self.resolved as f64 / total as f64 * 100.0).round() as u32,
        }
    }
}

/// Aggregate figures for the reports view
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// Reports per issue type, in order of first appearance
    pub issue_types: Vec<(String, usize)>,
    pub statuses: StatusCounts,
    pub resolution_rate: u32,
}

impl ReportSummary {
    pub fn of(items: &[Feedback]) -> Self {
        let mut issue_types: Vec<(String, usize)> = Vec::new();
        for item in items {
            match issue_types.iter_mut().find(|(name, _)| *name == item.issue_type) {
                Some((_, count)) => *count += 1,
                None => issue_types.push((item.issue_type.clone(), 1)),
            }
        }

        let statuses = StatusCounts::of(items);
        Self {
            issue_types,
            resolution_rate: statuses.resolution_rate(),
            statuses,
        }
    }

    pub fn total(&self) -> usize {
        self.statuses.total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::change_status;
    use crate::models::seed;

    #[test]
    fn counts_seed_statuses() {
        let counts = StatusCounts::of(&seed::feedback());
        assert_eq!(
            counts,
            StatusCounts {
                pending: 1,
                in_progress: 1,
                resolved: 1
            }
        );
        assert_eq!(counts.total(), 3);
        assert_eq!(counts.get(FeedbackStatus::Resolved), 1);
    }

    #[test]
    fn resolution_rate_rounds() {
        let counts = StatusCounts::of(&seed::feedback());
        assert_eq!(counts.resolution_rate(), 33);

        let mut items = seed::feedback();
        items[0] = change_status(&items[0], FeedbackStatus::Resolved);
        assert_eq!(StatusCounts::of(&items).resolution_rate(), 67);
    }

    #[test]
    fn empty_collection_has_zero_rate() {
        let summary = ReportSummary::of(&[]);
        assert_eq!(summary.resolution_rate, 0);
        assert!(summary.issue_types.is_empty());
        assert_eq!(summary.total(), 0);
    }

    #[test]
    fn issue_types_counted_in_first_seen_order() {
        let mut items = seed::feedback();
        let mut extra = items[0].clone();
        extra.id = "feedback4".to_string();
        items.push(extra);

        let summary = ReportSummary::of(&items);
        assert_eq!(
            summary.issue_types,
            vec![
                ("Roads".to_string(), 2),
                ("Electricity".to_string(), 1),
                ("Water".to_string(), 1),
            ]
        );
        assert_eq!(summary.resolution_rate, 25);
    }
}
