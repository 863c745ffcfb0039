// ABOUTME: Domain enum definitions
// ABOUTME: Issue categories used for expertise matching and the issue status lifecycle

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a customer issue. Agents carry one or more of these as
/// expertise and only handle issues in a matching category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueType {
    PaymentRelated,
    MutualFundRelated,
    GoldRelated,
    InsuranceRelated,
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IssueType::PaymentRelated => "Payment Related",
            IssueType::MutualFundRelated => "Mutual Fund Related",
            IssueType::GoldRelated => "Gold Related",
            IssueType::InsuranceRelated => "Insurance Related",
        };
        f.write_str(label)
    }
}

/// Issue lifecycle. Transitions driven by the assignment protocol are
/// one-way: Open -> InProgress -> Resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueStatus {
    Open,
    InProgress,
    Resolved,
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            IssueStatus::Open => "Open",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Resolved => "Resolved",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_issue_type_serialized_names() {
        let json = serde_json::to_string(&IssueType::PaymentRelated).unwrap();
        assert_eq!(json, "\"PAYMENT_RELATED\"");

        let parsed: IssueType = serde_json::from_str("\"MUTUAL_FUND_RELATED\"").unwrap();
        assert_eq!(parsed, IssueType::MutualFundRelated);
    }

    #[test]
    fn test_issue_status_serialized_names() {
        let json = serde_json::to_string(&IssueStatus::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");

        let parsed: IssueStatus = serde_json::from_str("\"RESOLVED\"").unwrap();
        assert_eq!(parsed, IssueStatus::Resolved);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(IssueType::GoldRelated.to_string(), "Gold Related");
        assert_eq!(IssueStatus::InProgress.to_string(), "In Progress");
    }
}
