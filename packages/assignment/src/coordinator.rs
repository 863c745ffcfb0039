// ABOUTME: Assignment coordinator implementing the assign/resolve/waitlist protocol
// ABOUTME: Owns the issue and agent stores; the stores know nothing about assignment policy

use thiserror::Error;
use tracing::{info, warn};
use triage_agents::{Agent, AgentCreateInput, AgentStorage, AgentUpdateInput};
use triage_core::{IssueStatus, IssueType};
use triage_issues::{Issue, IssueCreateInput, IssueStorage, IssueUpdateInput};

use crate::types::{AgentWorkHistory, Assignment, IssueFilter, Resolution};

/// Coordinator errors. All are local to the rejected call; no variant ever
/// corresponds to partially-applied state.
#[derive(Error, Debug)]
pub enum CoordinatorError {
    #[error("Issue not found: {0}")]
    IssueNotFound(String),
    #[error("Agent not found: {0}")]
    AgentNotFound(String),
    #[error("Issue {issue_id} is already assigned to agent {agent_id}")]
    AlreadyAssigned { issue_id: String, agent_id: String },
    #[error("Issue {0} is not assigned to any agent")]
    NotAssigned(String),
    #[error("Issue {issue_id} is not in progress (status: {status})")]
    NotInProgress {
        issue_id: String,
        status: IssueStatus,
    },
    #[error("No agent with expertise in {0} found")]
    NoExpertAvailable(IssueType),
    #[error("Issue store error: {0}")]
    IssueStore(#[from] triage_issues::StorageError),
    #[error("Agent store error: {0}")]
    AgentStore(#[from] triage_agents::StorageError),
}

/// Matches issues to agents by expertise and drives the waitlist protocol.
///
/// Every multi-entity transition validates both records before the first
/// mutation, so a rejected call leaves the stores exactly as they were.
#[derive(Debug, Default)]
pub struct AssignmentCoordinator {
    issues: IssueStorage,
    agents: AgentStorage,
}

impl AssignmentCoordinator {
    pub fn new() -> Self {
        Self {
            issues: IssueStorage::new(),
            agents: AgentStorage::new(),
        }
    }

    pub fn issues(&self) -> &IssueStorage {
        &self.issues
    }

    pub fn agents(&self) -> &AgentStorage {
        &self.agents
    }

    pub fn create_issue(&mut self, input: IssueCreateInput) -> Issue {
        self.issues.create(input)
    }

    pub fn add_agent(&mut self, input: AgentCreateInput) -> Agent {
        self.agents.create(input)
    }

    /// Assign an open issue to an agent with matching expertise.
    ///
    /// The first free matching agent (store order) takes the issue and it
    /// moves to in-progress. If every matching agent is busy, the issue
    /// joins the first matching agent's waitlist and stays open. Never
    /// double-assigns.
    pub fn assign(&mut self, issue_id: &str) -> Result<Assignment, CoordinatorError> {
        let issue = self
            .issues
            .get(issue_id)
            .ok_or_else(|| CoordinatorError::IssueNotFound(issue_id.to_string()))?;

        if let Some(agent_id) = &issue.assigned_agent {
            warn!("Issue {} is already assigned to agent {}", issue_id, agent_id);
            return Err(CoordinatorError::AlreadyAssigned {
                issue_id: issue_id.to_string(),
                agent_id: agent_id.clone(),
            });
        }
        let issue_type = issue.issue_type;

        let free_expert = self
            .agents
            .list()
            .into_iter()
            .find(|agent| {
                agent.expertise_types.contains(&issue_type) && agent.current_issue.is_none()
            })
            .map(|agent| (agent.id.clone(), agent.issues_worked_on.clone()));

        if let Some((agent_id, mut worked_on)) = free_expert {
            worked_on.push(issue_id.to_string());
            self.issues.update(
                issue_id,
                IssueUpdateInput {
                    status: Some(IssueStatus::InProgress),
                    assigned_agent: Some(Some(agent_id.clone())),
                    ..Default::default()
                },
            )?;
            self.agents.update(
                &agent_id,
                AgentUpdateInput {
                    current_issue: Some(Some(issue_id.to_string())),
                    issues_worked_on: Some(worked_on),
                    ..Default::default()
                },
            )?;

            info!("Issue {} assigned to agent {}", issue_id, agent_id);
            return Ok(Assignment::Assigned {
                issue_id: issue_id.to_string(),
                agent_id,
            });
        }

        // All matching agents are busy; queue on the first one regardless
        // of availability.
        let any_expert = self
            .agents
            .list()
            .into_iter()
            .find(|agent| agent.expertise_types.contains(&issue_type))
            .map(|agent| (agent.id.clone(), agent.waitlist.clone()));

        match any_expert {
            Some((agent_id, mut waitlist)) => {
                waitlist.push(issue_id.to_string());
                self.agents.update(
                    &agent_id,
                    AgentUpdateInput {
                        waitlist: Some(waitlist),
                        ..Default::default()
                    },
                )?;

                info!("Issue {} added to waitlist of agent {}", issue_id, agent_id);
                Ok(Assignment::Waitlisted {
                    issue_id: issue_id.to_string(),
                    agent_id,
                })
            }
            None => {
                warn!("No agent with expertise in {} found", issue_type);
                Err(CoordinatorError::NoExpertAvailable(issue_type))
            }
        }
    }

    /// Resolve an in-progress issue and promote the head of the resolving
    /// agent's waitlist, if any.
    ///
    /// At most one waitlist entry is promoted per call; deeper entries wait
    /// for the next resolve. A popped id leaves the waitlist whether or not
    /// the issue it names still exists.
    pub fn resolve(
        &mut self,
        issue_id: &str,
        resolution: &str,
    ) -> Result<Resolution, CoordinatorError> {
        let issue = self
            .issues
            .get(issue_id)
            .ok_or_else(|| CoordinatorError::IssueNotFound(issue_id.to_string()))?;

        // Resolving anything but an in-progress issue is rejected outright;
        // a second resolve on the same issue must not pop the waitlist again.
        if issue.status != IssueStatus::InProgress {
            warn!(
                "Issue {} is not in progress (status: {}), refusing to resolve",
                issue_id, issue.status
            );
            return Err(CoordinatorError::NotInProgress {
                issue_id: issue_id.to_string(),
                status: issue.status,
            });
        }

        let agent_id = issue
            .assigned_agent
            .clone()
            .ok_or_else(|| {
                warn!("Issue {} is not assigned to any agent", issue_id);
                CoordinatorError::NotAssigned(issue_id.to_string())
            })?;

        let agent = self
            .agents
            .get(&agent_id)
            .ok_or_else(|| CoordinatorError::AgentNotFound(agent_id.clone()))?;
        let mut waitlist = agent.waitlist.clone();
        let mut worked_on = agent.issues_worked_on.clone();

        self.issues.update(
            issue_id,
            IssueUpdateInput {
                status: Some(IssueStatus::Resolved),
                resolution: Some(Some(resolution.to_string())),
                ..Default::default()
            },
        )?;

        let mut current_issue = None;
        let mut promoted = None;
        if !waitlist.is_empty() {
            let next_id = waitlist.remove(0);
            if self.issues.get(&next_id).is_some() {
                self.issues.update(
                    &next_id,
                    IssueUpdateInput {
                        status: Some(IssueStatus::InProgress),
                        assigned_agent: Some(Some(agent_id.clone())),
                        ..Default::default()
                    },
                )?;
                worked_on.push(next_id.clone());
                current_issue = Some(next_id.clone());
                info!(
                    "Agent {} assigned to next issue {} from waitlist",
                    agent_id, next_id
                );
                promoted = Some(next_id);
            } else {
                warn!(
                    "Dropped waitlist entry {} for agent {}: issue no longer exists",
                    next_id, agent_id
                );
            }
        }

        self.agents.update(
            &agent_id,
            AgentUpdateInput {
                current_issue: Some(current_issue),
                waitlist: Some(waitlist),
                issues_worked_on: Some(worked_on),
                ..Default::default()
            },
        )?;

        info!("Issue {} marked resolved", issue_id);
        Ok(Resolution {
            issue_id: issue_id.to_string(),
            agent_id,
            promoted,
        })
    }

    /// Overwrite an issue's status (and optionally its resolution text)
    /// directly, bypassing the assignment protocol. Agent state is never
    /// touched; intended for manual corrections.
    pub fn update_status(
        &mut self,
        issue_id: &str,
        status: IssueStatus,
        resolution: Option<String>,
    ) -> Result<Issue, CoordinatorError> {
        let issue = self.issues.update(
            issue_id,
            IssueUpdateInput {
                status: Some(status),
                resolution: resolution.map(Some),
                ..Default::default()
            },
        )?;

        info!("Issue {} status updated to {}", issue_id, status);
        Ok(issue)
    }

    /// All issues matching every supplied criterion; absent criteria are
    /// wildcards.
    pub fn filter_issues(&self, filter: &IssueFilter) -> Vec<Issue> {
        self.issues
            .list()
            .into_iter()
            .filter(|issue| {
                filter
                    .customer_email
                    .as_deref()
                    .map_or(true, |email| issue.customer_email == email)
                    && filter
                        .issue_type
                        .map_or(true, |issue_type| issue.issue_type == issue_type)
                    && filter.status.map_or(true, |status| issue.status == status)
                    && filter
                        .assigned_agent
                        .as_deref()
                        .map_or(true, |agent_id| {
                            issue.assigned_agent.as_deref() == Some(agent_id)
                        })
            })
            .cloned()
            .collect()
    }

    /// Work history for every agent, in store order.
    pub fn work_history(&self) -> Vec<AgentWorkHistory> {
        self.agents
            .list()
            .into_iter()
            .map(|agent| AgentWorkHistory {
                agent_id: agent.id.clone(),
                issue_ids: agent.issues_worked_on.clone(),
            })
            .collect()
    }
}
