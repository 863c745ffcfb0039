// ABOUTME: Support agent management for Triage
// ABOUTME: Provides agent types and the in-memory agent storage layer

pub mod storage;
pub mod types;

// Re-export main types
pub use storage::{AgentStorage, StorageError};
pub use types::{Agent, AgentCreateInput, AgentUpdateInput};
