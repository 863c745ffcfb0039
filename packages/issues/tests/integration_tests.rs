// ABOUTME: Integration tests for issue storage operations
// ABOUTME: Tests creation defaults, sequential ids, partial updates, and listing order

use pretty_assertions::assert_eq;
use triage_core::{IssueStatus, IssueType};
use triage_issues::{IssueCreateInput, IssueStorage, IssueUpdateInput, StorageError};

fn payment_issue(transaction_id: &str, email: &str) -> IssueCreateInput {
    IssueCreateInput {
        transaction_id: transaction_id.to_string(),
        issue_type: IssueType::PaymentRelated,
        subject: "Payment Failed".to_string(),
        description: "My payment failed but money is debited".to_string(),
        customer_email: email.to_string(),
    }
}

#[test]
fn test_create_issue_defaults() {
    let mut storage = IssueStorage::new();

    let issue = storage.create(payment_issue("T1", "testUser1@test.com"));

    assert_eq!(issue.id, "I1");
    assert_eq!(issue.transaction_id, "T1");
    assert_eq!(issue.status, IssueStatus::Open);
    assert_eq!(issue.assigned_agent, None);
    assert_eq!(issue.resolution, None);
    assert_eq!(issue.created_at, issue.updated_at);
}

#[test]
fn test_sequential_ids() {
    let mut storage = IssueStorage::new();

    let first = storage.create(payment_issue("T1", "a@test.com"));
    let second = storage.create(payment_issue("T2", "b@test.com"));
    let third = storage.create(payment_issue("T3", "c@test.com"));

    assert_eq!(first.id, "I1");
    assert_eq!(second.id, "I2");
    assert_eq!(third.id, "I3");
}

#[test]
fn test_get_issue() {
    let mut storage = IssueStorage::new();
    let created = storage.create(payment_issue("T1", "a@test.com"));

    let fetched = storage.get(&created.id).unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.subject, "Payment Failed");

    assert!(storage.get("I99").is_none());
}

#[test]
fn test_partial_update_merges_fields() {
    let mut storage = IssueStorage::new();
    let created = storage.create(payment_issue("T1", "a@test.com"));

    let updated = storage
        .update(
            &created.id,
            IssueUpdateInput {
                subject: Some("Payment stuck".to_string()),
                status: Some(IssueStatus::InProgress),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.subject, "Payment stuck");
    assert_eq!(updated.status, IssueStatus::InProgress);
    // Untouched fields survive the merge
    assert_eq!(updated.transaction_id, "T1");
    assert_eq!(updated.customer_email, "a@test.com");
    assert!(updated.updated_at >= updated.created_at);
}

#[test]
fn test_update_clears_optional_fields() {
    let mut storage = IssueStorage::new();
    let created = storage.create(payment_issue("T1", "a@test.com"));

    storage
        .update(
            &created.id,
            IssueUpdateInput {
                assigned_agent: Some(Some("A1".to_string())),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(
        storage.get(&created.id).unwrap().assigned_agent,
        Some("A1".to_string())
    );

    storage
        .update(
            &created.id,
            IssueUpdateInput {
                assigned_agent: Some(None),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(storage.get(&created.id).unwrap().assigned_agent, None);
}

#[test]
fn test_update_unknown_issue_fails() {
    let mut storage = IssueStorage::new();

    let result = storage.update(
        "I42",
        IssueUpdateInput {
            subject: Some("ghost".to_string()),
            ..Default::default()
        },
    );

    match result {
        Err(StorageError::NotFound(id)) => assert_eq!(id, "I42"),
        other => panic!("Expected NotFound error, got {:?}", other),
    }
    assert!(storage.is_empty());
}

#[test]
fn test_list_preserves_insertion_order() {
    let mut storage = IssueStorage::new();
    for n in 1..=4 {
        storage.create(payment_issue(&format!("T{}", n), "a@test.com"));
    }

    let ids: Vec<&str> = storage.list().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["I1", "I2", "I3", "I4"]);
    assert_eq!(storage.len(), 4);
}
