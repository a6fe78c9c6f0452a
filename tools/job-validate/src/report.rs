//! Admission verdict plus optional placement preview for one job.

use std::collections::HashMap;

use berth_admission::{JobValidator, ViolationMap};
use berth_id::{AgentId, JobId, TaskId};
use berth_job::{JobSpec, ResourceDimension};
use berth_placement::{
    snapshot_supplier, ActivePlacementFact, AgentCandidate, CandidateVerdict,
    ConstraintTransformer, PlacementEvaluator, TaskRequest,
};
use serde::Serialize;
use tracing::info;

use crate::config::Config;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub job_id: JobId,
    pub admitted: bool,
    pub violations: ViolationMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<PlacementPreview>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementPreview {
    pub task_id: TaskId,
    /// Eligible agents, best first.
    pub ranked: Vec<RankedAgent>,
    pub rejected: Vec<RejectedAgent>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedAgent {
    pub agent_id: AgentId,
    pub fitness: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedAgent {
    pub agent_id: AgentId,
    pub reasons: Vec<String>,
}

/// Agents and the active task snapshot to preview placement against.
pub struct PlacementInput {
    pub agents: Vec<AgentCandidate>,
    pub snapshot: Vec<ActivePlacementFact>,
    pub task_id: Option<TaskId>,
}

pub fn build_report(
    config: &Config,
    job: &JobSpec,
    capacity_groups: HashMap<String, ResourceDimension>,
    placement: Option<PlacementInput>,
) -> Report {
    let validator = JobValidator::new(config.validation.clone(), move |group| {
        capacity_groups
            .get(group)
            .copied()
            .unwrap_or_else(ResourceDimension::empty)
    });

    let violations = validator.validate_job(job);
    let admitted = violations.is_empty();

    // A rejected job never reaches placement.
    let placement = match placement {
        Some(input) if admitted => Some(preview_placement(config, job, input)),
        _ => None,
    };

    Report {
        job_id: job.job_id,
        admitted,
        violations,
        placement,
    }
}

fn preview_placement(config: &Config, job: &JobSpec, input: PlacementInput) -> PlacementPreview {
    let task = TaskRequest::new(input.task_id.unwrap_or_default(), job.job_id);
    let transformer = ConstraintTransformer::new(config.zones.clone());
    let evaluator = PlacementEvaluator::from_declarations(
        &transformer,
        task,
        &job.container.hard_constraints,
        &job.container.soft_constraints,
        snapshot_supplier(input.snapshot),
    );

    let rejected = input
        .agents
        .iter()
        .filter_map(|agent| match evaluator.evaluate(agent) {
            CandidateVerdict::Rejected { reasons } => Some(RejectedAgent {
                agent_id: agent.agent_id,
                reasons,
            }),
            CandidateVerdict::Eligible { .. } => None,
        })
        .collect::<Vec<_>>();

    let ranked = evaluator
        .rank(&input.agents)
        .into_iter()
        .map(|r| RankedAgent {
            agent_id: r.agent_id,
            fitness: r.fitness,
        })
        .collect::<Vec<_>>();

    info!(
        task_id = %task.task_id,
        hard = evaluator.hard_predicates().len(),
        soft = evaluator.soft_scorers().len(),
        eligible = ranked.len(),
        rejected = rejected.len(),
        "Placement preview computed"
    );

    PlacementPreview {
        task_id: task.task_id,
        ranked,
        rejected,
    }
}
