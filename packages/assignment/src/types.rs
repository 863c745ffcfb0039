// ABOUTME: Assignment protocol type definitions
// ABOUTME: Structures for assignment outcomes, issue filtering, and work-history reporting

use serde::{Deserialize, Serialize};
use triage_core::{IssueStatus, IssueType};

/// Outcome of a successful `assign` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Assignment {
    /// A free agent with matching expertise picked the issue up; the issue
    /// is now in progress.
    Assigned { issue_id: String, agent_id: String },
    /// Every matching agent was busy; the issue joined the tail of the
    /// first matching agent's waitlist and stays open.
    Waitlisted { issue_id: String, agent_id: String },
}

/// Outcome of a successful `resolve` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub issue_id: String,
    /// The agent that worked the resolved issue.
    pub agent_id: String,
    /// Head of the agent's waitlist, if one was promoted to in-progress.
    pub promoted: Option<String>,
}

/// Conjunctive issue filter; `None` criteria are wildcards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueFilter {
    pub customer_email: Option<String>,
    pub issue_type: Option<IssueType>,
    pub status: Option<IssueStatus>,
    pub assigned_agent: Option<String>,
}

/// Per-agent record of every issue id ever assigned to the agent, in
/// assignment order. Includes both active and resolved issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentWorkHistory {
    pub agent_id: String,
    pub issue_ids: Vec<String>,
}
