//! Side files: capacity group ceilings, agent candidates and the active task snapshot.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use berth_job::ResourceDimension;
use berth_placement::{ActivePlacementFact, AgentCandidate};
use serde::de::DeserializeOwned;

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}: {}", what, path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("invalid {} JSON: {}", what, path.display()))
}

/// `{"<capacity group>": {"cpu": 8, "memoryMb": 16384, ...}, ...}`
pub fn capacity_groups(path: Option<&Path>) -> Result<HashMap<String, ResourceDimension>> {
    match path {
        Some(path) => read_json(path, "capacity groups"),
        None => Ok(HashMap::new()),
    }
}

/// `[{"agentId": "agent_...", "attributes": {"zone": "us-east-1a"}}, ...]`
pub fn agents(path: &Path) -> Result<Vec<AgentCandidate>> {
    read_json(path, "agents")
}

/// `[{"taskId": "task_...", "jobId": "job_...", "hostId": "agent_...", "zone": "us-east-1a"}, ...]`
pub fn snapshot(path: Option<&Path>) -> Result<Vec<ActivePlacementFact>> {
    match path {
        Some(path) => read_json(path, "snapshot"),
        None => Ok(Vec::new()),
    }
}
