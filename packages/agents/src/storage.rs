// ABOUTME: Agent storage layer, in-memory
// ABOUTME: Handles CRUD operations for support agents keyed by generated sequential ids

use chrono::Utc;
use indexmap::IndexMap;
use thiserror::Error;
use tracing::{debug, info};
use triage_core::IdSequence;

use crate::types::{Agent, AgentCreateInput, AgentUpdateInput};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Agent not found: {0}")]
    NotFound(String),
}

/// In-memory agent store. Iteration order is insertion order; the
/// coordinator's "first matching agent" tie-break relies on this, so the
/// earliest-created matching agent always wins.
#[derive(Debug)]
pub struct AgentStorage {
    agents: IndexMap<String, Agent>,
    ids: IdSequence,
}

impl Default for AgentStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentStorage {
    pub fn new() -> Self {
        Self {
            agents: IndexMap::new(),
            ids: IdSequence::new("A"),
        }
    }

    /// Create a new agent with an empty waitlist and work history.
    pub fn create(&mut self, input: AgentCreateInput) -> Agent {
        let now = Utc::now();
        let agent = Agent {
            id: self.ids.next(),
            email: input.email,
            name: input.name,
            expertise_types: input.expertise_types,
            current_issue: None,
            waitlist: Vec::new(),
            issues_worked_on: Vec::new(),
            created_at: now,
            updated_at: now,
        };

        info!("Agent {} ({}) added to the team", agent.id, agent.name);
        self.agents.insert(agent.id.clone(), agent.clone());
        agent
    }

    pub fn get(&self, agent_id: &str) -> Option<&Agent> {
        debug!("Fetching agent: {}", agent_id);
        self.agents.get(agent_id)
    }

    /// Merge the provided fields into the stored agent and refresh
    /// `updated_at`. Sequence fields are replaced, not appended.
    pub fn update(
        &mut self,
        agent_id: &str,
        updates: AgentUpdateInput,
    ) -> Result<Agent, StorageError> {
        let agent = self
            .agents
            .get_mut(agent_id)
            .ok_or_else(|| StorageError::NotFound(agent_id.to_string()))?;

        if let Some(email) = updates.email {
            agent.email = email;
        }
        if let Some(name) = updates.name {
            agent.name = name;
        }
        if let Some(expertise_types) = updates.expertise_types {
            agent.expertise_types = expertise_types;
        }
        if let Some(current_issue) = updates.current_issue {
            agent.current_issue = current_issue;
        }
        if let Some(waitlist) = updates.waitlist {
            agent.waitlist = waitlist;
        }
        if let Some(issues_worked_on) = updates.issues_worked_on {
            agent.issues_worked_on = issues_worked_on;
        }
        agent.updated_at = Utc::now();

        debug!("Updated agent {}", agent_id);
        Ok(agent.clone())
    }

    /// All agents in insertion order.
    pub fn list(&self) -> Vec<&Agent> {
        debug!("Fetching all agents");
        self.agents.values().collect()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
