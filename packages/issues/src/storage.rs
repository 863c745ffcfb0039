// ABOUTME: Issue storage layer, in-memory
// ABOUTME: Handles CRUD operations for issues keyed by generated sequential ids

use chrono::Utc;
use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, info};
use triage_core::{IdSequence, IssueStatus};

use crate::types::{Issue, IssueCreateInput, IssueUpdateInput};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Issue not found: {0}")]
    NotFound(String),
}

/// In-memory issue store. Iteration order is insertion order, which keeps
/// id allocation and listing deterministic.
#[derive(Debug)]
pub struct IssueStorage {
    issues: IndexMap<String, Issue>,
    ids: IdSequence,
}

impl Default for IssueStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl IssueStorage {
    pub fn new() -> Self {
        Self {
            issues: IndexMap::new(),
            ids: IdSequence::new("I"),
        }
    }

    /// Create a new issue. Always succeeds; the issue starts Open and
    /// unassigned with both timestamps set to now.
    pub fn create(&mut self, input: IssueCreateInput) -> Issue {
        let now = Utc::now();
        let issue = Issue {
            id: self.ids.next(),
            transaction_id: input.transaction_id,
            issue_type: input.issue_type,
            subject: input.subject,
            description: input.description,
            customer_email: input.customer_email,
            status: IssueStatus::Open,
            assigned_agent: None,
            resolution: None,
            created_at: now,
            updated_at: now,
        };

        info!(
            "Created issue {} against transaction '{}'",
            issue.id, issue.transaction_id
        );
        self.issues.insert(issue.id.clone(), issue.clone());
        issue
    }

    pub fn get(&self, issue_id: &str) -> Option<&Issue> {
        debug!("Fetching issue: {}", issue_id);
        self.issues.get(issue_id)
    }

    /// Merge the provided fields into the stored issue and refresh
    /// `updated_at`.
    pub fn update(
        &mut self,
        issue_id: &str,
        updates: IssueUpdateInput,
    ) -> Result<Issue, StorageError> {
        let issue = self
            .issues
            .get_mut(issue_id)
            .ok_or_else(|| StorageError::NotFound(issue_id.to_string()))?;

        if let Some(transaction_id) = updates.transaction_id {
            issue.transaction_id = transaction_id;
        }
        if let Some(issue_type) = updates.issue_type {
            issue.issue_type = issue_type;
        }
        if let Some(subject) = updates.subject {
            issue.subject = subject;
        }
        if let Some(description) = updates.description {
            issue.description = description;
        }
        if let Some(customer_email) = updates.customer_email {
            issue.customer_email = customer_email;
        }
        if let Some(status) = updates.status {
            issue.status = status;
        }
        if let Some(assigned_agent) = updates.assigned_agent {
            issue.assigned_agent = assigned_agent;
        }
        if let Some(resolution) = updates.resolution {
            issue.resolution = resolution;
        }
        issue.updated_at = Utc::now();

        debug!("Updated issue {}", issue_id);
        Ok(issue.clone())
    }

    /// All issues in insertion order.
    pub fn list(&self) -> Vec<&Issue> {
        debug!("Fetching all issues");
        self.issues.values().collect()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}
