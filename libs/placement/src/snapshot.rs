//! Read-only view of where tasks currently run.

use std::sync::Arc;

use berth_id::{AgentId, JobId, TaskId};
use serde::{Deserialize, Serialize};

/// One active task as seen by the scheduler's live state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivePlacementFact {
    pub task_id: TaskId,
    pub job_id: JobId,
    pub host_id: AgentId,
    /// Value of the zone attribute on the host, if it had one.
    #[serde(default)]
    pub zone: Option<String>,
}

/// Source of active placement facts.
///
/// Called from many evaluation workers at once and on every evaluation, so
/// implementations must be cheap and must not block. Results may lag the
/// real cluster.
pub trait ActiveTasks: Send + Sync {
    fn active_tasks(&self) -> Vec<ActivePlacementFact>;
}

impl<F> ActiveTasks for F
where
    F: Fn() -> Vec<ActivePlacementFact> + Send + Sync,
{
    fn active_tasks(&self) -> Vec<ActivePlacementFact> {
        self()
    }
}

/// Shared handle to an [`ActiveTasks`] source.
pub type ActiveTasksSupplier = Arc<dyn ActiveTasks>;

/// Supplier over a fixed list of facts.
pub fn snapshot_supplier(facts: Vec<ActivePlacementFact>) -> ActiveTasksSupplier {
    Arc::new(move || facts.clone())
}
