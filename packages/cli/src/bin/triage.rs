// ABOUTME: Triage CLI entry point
// ABOUTME: Runs the scripted support-desk demo scenario against an in-memory coordinator

use clap::{Parser, Subcommand};
use colored::*;
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table,
};
use tracing_subscriber::EnvFilter;
use triage_agents::AgentCreateInput;
use triage_assignment::{Assignment, AssignmentCoordinator, IssueFilter};
use triage_core::{IssueStatus, IssueType};
use triage_issues::{Issue, IssueCreateInput};

#[derive(Parser)]
#[command(name = "triage", about = "Customer issue resolution system", version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the scripted support-desk scenario
    Demo,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Demo => run_demo(),
    }
}

fn run_demo() -> anyhow::Result<()> {
    let mut coordinator = AssignmentCoordinator::new();

    println!("{}", "Triage support desk demo".blue().bold());
    println!();

    // Customers report issues
    coordinator.create_issue(IssueCreateInput {
        transaction_id: "T1".to_string(),
        issue_type: IssueType::PaymentRelated,
        subject: "Payment Failed".to_string(),
        description: "My payment failed but money is debited".to_string(),
        customer_email: "testUser1@test.com".to_string(),
    });
    coordinator.create_issue(IssueCreateInput {
        transaction_id: "T2".to_string(),
        issue_type: IssueType::MutualFundRelated,
        subject: "Purchase Failed".to_string(),
        description: "Unable to purchase Mutual Fund".to_string(),
        customer_email: "testUser2@test.com".to_string(),
    });
    coordinator.create_issue(IssueCreateInput {
        transaction_id: "T3".to_string(),
        issue_type: IssueType::PaymentRelated,
        subject: "Payment Failed".to_string(),
        description: "My payment failed but money is debited".to_string(),
        customer_email: "testUser2@test.com".to_string(),
    });

    // The support team comes online
    coordinator.add_agent(AgentCreateInput {
        email: "agent1@test.com".to_string(),
        name: "Agent 1".to_string(),
        expertise_types: vec![IssueType::PaymentRelated, IssueType::GoldRelated],
    });
    coordinator.add_agent(AgentCreateInput {
        email: "agent2@test.com".to_string(),
        name: "Agent 2".to_string(),
        expertise_types: vec![IssueType::MutualFundRelated],
    });

    // Route every open issue
    for issue_id in ["I1", "I2", "I3"] {
        match coordinator.assign(issue_id)? {
            Assignment::Assigned { issue_id, agent_id } => {
                println!("{} assigned to {}", issue_id.cyan(), agent_id.cyan());
            }
            Assignment::Waitlisted { issue_id, agent_id } => {
                println!(
                    "{} waitlisted behind {}'s current work",
                    issue_id.cyan(),
                    agent_id.cyan()
                );
            }
        }
    }

    println!();
    println!("{}", "Issues for testUser2@test.com".blue().bold());
    let user_issues = coordinator.filter_issues(&IssueFilter {
        customer_email: Some("testUser2@test.com".to_string()),
        ..Default::default()
    });
    print_issue_table(&user_issues);

    println!();
    println!("{}", "Payment related issues".blue().bold());
    let payment_issues = coordinator.filter_issues(&IssueFilter {
        issue_type: Some(IssueType::PaymentRelated),
        ..Default::default()
    });
    print_issue_table(&payment_issues);

    // A manual correction outside the protocol
    println!();
    coordinator.update_status(
        "I3",
        IssueStatus::InProgress,
        Some("Waiting for payment confirmation".to_string()),
    )?;

    // I3 never went through assignment, so resolving it is rejected
    if let Err(err) = coordinator.resolve("I3", "Debited amount will get reversed") {
        println!("{} {}", "Rejected:".yellow(), err);
    }

    // Resolving I1 frees Agent 1, who picks I3 up from the waitlist
    let resolution = coordinator.resolve("I1", "PaymentFailed debited amount will get reversed")?;
    println!(
        "{} resolved by {}",
        resolution.issue_id.cyan(),
        resolution.agent_id.cyan()
    );
    if let Some(promoted) = &resolution.promoted {
        println!("{} promoted from the waitlist", promoted.cyan());
    }

    coordinator.resolve("I2", "Mutual fund order replayed")?;

    println!();
    println!("{}", "Agents work history".blue().bold());
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Agent", "Issues worked on"]);
    for entry in coordinator.work_history() {
        let issues_text = if entry.issue_ids.is_empty() {
            "—".to_string()
        } else {
            entry.issue_ids.join(", ")
        };
        table.add_row(vec![entry.agent_id, issues_text]);
    }
    println!("{}", table);

    Ok(())
}

fn print_issue_table(issues: &[Issue]) {
    if issues.is_empty() {
        println!("{}", "No issues found".yellow());
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Transaction", "Type", "Subject", "Status", "Agent"]);

    for issue in issues {
        table.add_row(vec![
            issue.id.clone(),
            issue.transaction_id.clone(),
            issue.issue_type.to_string(),
            issue.subject.clone(),
            issue.status.to_string(),
            issue.assigned_agent.clone().unwrap_or_else(|| "—".to_string()),
        ]);
    }

    println!("{}", table);
    println!("Total: {} issues", issues.len().to_string().cyan());
}
