pub mod mutation;
pub mod query;
pub mod stats;
pub mod submission;

pub use mutation::{append_comment, change_status};
pub use query::{filter_and_sort, Criteria, IssueTypeFilter, StatusFilter};
pub use stats::{ReportSummary, StatusCounts};
pub use submission::NewFeedback;
