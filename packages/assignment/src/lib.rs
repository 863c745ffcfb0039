// ABOUTME: Issue-to-agent assignment and waitlist protocol
// ABOUTME: Coordinates the issue and agent stores; assignment policy lives here only

pub mod coordinator;
pub mod types;

// Re-export main types
pub use coordinator::{AssignmentCoordinator, CoordinatorError};
pub use types::{AgentWorkHistory, Assignment, IssueFilter, Resolution};
