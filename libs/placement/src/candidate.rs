use std::collections::BTreeMap;

use berth_id::{AgentId, JobId, TaskId};
use serde::{Deserialize, Serialize};

/// An agent the scheduler is considering for a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCandidate {
    pub agent_id: AgentId,
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl AgentCandidate {
    pub fn new(agent_id: AgentId) -> Self {
        Self {
            agent_id,
            attributes: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// The task being placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequest {
    pub task_id: TaskId,
    pub job_id: JobId,
}

impl TaskRequest {
    pub fn new(task_id: TaskId, job_id: JobId) -> Self {
        Self { task_id, job_id }
    }
}
