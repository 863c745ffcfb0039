// ABOUTME: Issue type definitions
// ABOUTME: Structures for customer issues and their create/update inputs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use triage_core::{IssueStatus, IssueType};

/// A customer-reported issue against a transaction.
///
/// `assigned_agent` is a weak reference by agent id; resolve it through
/// `AgentStorage` at the point of use, never cache the record across
/// mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub transaction_id: String,
    pub issue_type: IssueType,
    pub subject: String,
    pub description: String,
    pub customer_email: String,
    pub status: IssueStatus,
    pub assigned_agent: Option<String>,
    pub resolution: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueCreateInput {
    pub transaction_id: String,
    pub issue_type: IssueType,
    pub subject: String,
    pub description: String,
    pub customer_email: String,
}

/// Partial update for an issue. `None` leaves a field untouched.
///
/// `assigned_agent` and `resolution` are optional on the record itself, so
/// they take a double `Option`: the outer level selects the field, the inner
/// level is the new value (`Some(None)` clears it).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueUpdateInput {
    pub transaction_id: Option<String>,
    pub issue_type: Option<IssueType>,
    pub subject: Option<String>,
    pub description: Option<String>,
    pub customer_email: Option<String>,
    pub status: Option<IssueStatus>,
    pub assigned_agent: Option<Option<String>>,
    pub resolution: Option<Option<String>>,
}
