// ABOUTME: Agent type definitions
// ABOUTME: Structures for support agents and their create/update inputs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use triage_core::IssueType;

/// A support-team member with one or more expertise categories.
///
/// `current_issue` and the waitlist hold issue ids, not records; resolve
/// them through `IssueStorage` at the point of use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub email: String,
    pub name: String,
    pub expertise_types: Vec<IssueType>,
    pub current_issue: Option<String>,
    /// Issue ids queued for this agent, FIFO.
    pub waitlist: Vec<String>,
    /// Every issue id ever assigned to this agent, append-only.
    pub issues_worked_on: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentCreateInput {
    pub email: String,
    pub name: String,
    pub expertise_types: Vec<IssueType>,
}

/// Partial update for an agent. `None` leaves a field untouched.
///
/// Sequence-valued fields (`waitlist`, `issues_worked_on`) are replaced
/// wholesale, not appended; callers supply the full new sequence.
/// `current_issue` takes a double `Option` so `Some(None)` clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentUpdateInput {
    pub email: Option<String>,
    pub name: Option<String>,
    pub expertise_types: Option<Vec<IssueType>>,
    pub current_issue: Option<Option<String>>,
    pub waitlist: Option<Vec<String>>,
    pub issues_worked_on: Option<Vec<String>>,
}
