//! Hard predicates and soft scorers built from placement rules.

use std::collections::BTreeMap;

use tracing::trace;

use crate::candidate::{AgentCandidate, TaskRequest};
use crate::constraint::PlacementRule;
use crate::snapshot::{ActivePlacementFact, ActiveTasksSupplier};
use crate::zone::ZoneAttributeRegistry;

/// Outcome of a hard predicate for one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateResult {
    pub passed: bool,
    /// Why the candidate was rejected.
    pub reason: Option<String>,
}

impl PredicateResult {
    pub fn pass() -> Self {
        Self {
            passed: true,
            reason: None,
        }
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        Self {
            passed: false,
            reason: Some(reason.into()),
        }
    }
}

/// Eliminates candidates that break a placement rule.
#[derive(Clone)]
pub struct HardPredicate {
    rule: PlacementRule,
    active_tasks: ActiveTasksSupplier,
    zones: ZoneAttributeRegistry,
}

/// Ranks candidates by how well they satisfy a placement rule.
#[derive(Clone)]
pub struct SoftScorer {
    rule: PlacementRule,
    active_tasks: ActiveTasksSupplier,
    zones: ZoneAttributeRegistry,
}

impl std::fmt::Debug for HardPredicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HardPredicate")
            .field("rule", &self.rule)
            .field("zones", &self.zones)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Debug for SoftScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoftScorer")
            .field("rule", &self.rule)
            .field("zones", &self.zones)
            .finish_non_exhaustive()
    }
}

impl HardPredicate {
    pub(crate) fn new(
        rule: PlacementRule,
        active_tasks: ActiveTasksSupplier,
        zones: ZoneAttributeRegistry,
    ) -> Self {
        Self {
            rule,
            active_tasks,
            zones,
        }
    }

    pub fn rule(&self) -> PlacementRule {
        self.rule
    }

    pub fn evaluate(&self, task: &TaskRequest, agent: &AgentCandidate) -> PredicateResult {
        let facts = self.active_tasks.active_tasks();

        let result = match self.rule {
            PlacementRule::ExclusiveHost => {
                let on_host = tasks_on_host(&facts, task, agent, false);
                if on_host == 0 {
                    PredicateResult::pass()
                } else {
                    PredicateResult::fail(format!(
                        "agent {} already runs {} active task(s)",
                        agent.agent_id, on_host
                    ))
                }
            }
            PlacementRule::UniqueHost => {
                let on_host = tasks_on_host(&facts, task, agent, true);
                if on_host == 0 {
                    PredicateResult::pass()
                } else {
                    PredicateResult::fail(format!(
                        "agent {} already runs {} task(s) of job {}",
                        agent.agent_id, on_host, task.job_id
                    ))
                }
            }
            PlacementRule::ZoneBalance => self.zone_balance(&facts, task, agent),
        };

        if !result.passed {
            trace!(rule = %self.rule, agent_id = %agent.agent_id, reason = ?result.reason, "Candidate rejected");
        }
        result
    }

    fn zone_balance(
        &self,
        facts: &[ActivePlacementFact],
        task: &TaskRequest,
        agent: &AgentCandidate,
    ) -> PredicateResult {
        let attribute = self.zones.attribute_name();
        let Some(zone) = agent.attribute(attribute).filter(|z| !z.is_empty()) else {
            return PredicateResult::fail(format!(
                "agent {} has no '{}' attribute",
                agent.agent_id, attribute
            ));
        };

        let loads = zone_loads(facts, task);
        if loads.is_empty() {
            return PredicateResult::pass();
        }

        // Fewer zones in use than expected: an unused zone exists, so the floor is zero.
        let least = if loads.len() < self.zones.expected_zone_count() {
            0
        } else {
            loads.values().copied().min().unwrap_or(0)
        };
        let here = loads.get(zone).copied().unwrap_or(0);

        if here <= least {
            PredicateResult::pass()
        } else {
            PredicateResult::fail(format!(
                "zone '{}' already has {} task(s) of job {}; least loaded zone has {}",
                zone, here, task.job_id, least
            ))
        }
    }
}

impl SoftScorer {
    pub(crate) fn new(
        rule: PlacementRule,
        active_tasks: ActiveTasksSupplier,
        zones: ZoneAttributeRegistry,
    ) -> Self {
        Self {
            rule,
            active_tasks,
            zones,
        }
    }

    pub fn rule(&self) -> PlacementRule {
        self.rule
    }

    /// Fitness in `[0, 1]`; 1 means the rule is fully satisfied.
    pub fn score(&self, task: &TaskRequest, agent: &AgentCandidate) -> f64 {
        let facts = self.active_tasks.active_tasks();

        let load = match self.rule {
            PlacementRule::ExclusiveHost => tasks_on_host(&facts, task, agent, false),
            PlacementRule::UniqueHost => tasks_on_host(&facts, task, agent, true),
            // A missing or blank zone attribute scores as an empty zone.
            PlacementRule::ZoneBalance => agent
                .attribute(self.zones.attribute_name())
                .filter(|zone| !zone.is_empty())
                .and_then(|zone| zone_loads(&facts, task).get(zone).copied())
                .unwrap_or(0),
        };

        inverse_load(load)
    }
}

fn inverse_load(load: usize) -> f64 {
    1.0 / (1.0 + load as f64)
}

/// Other active tasks on the candidate, optionally only those of the same job.
fn tasks_on_host(
    facts: &[ActivePlacementFact],
    task: &TaskRequest,
    agent: &AgentCandidate,
    same_job_only: bool,
) -> usize {
    facts
        .iter()
        .filter(|f| f.task_id != task.task_id)
        .filter(|f| f.host_id == agent.agent_id)
        .filter(|f| !same_job_only || f.job_id == task.job_id)
        .count()
}

/// Tasks of the job per known zone, excluding the task being placed. Blank zones are unknown.
fn zone_loads<'a>(
    facts: &'a [ActivePlacementFact],
    task: &TaskRequest,
) -> BTreeMap<&'a str, usize> {
    let mut loads = BTreeMap::new();
    for fact in facts {
        if fact.job_id != task.job_id || fact.task_id == task.task_id {
            continue;
        }
        if let Some(zone) = fact.zone.as_deref().filter(|z| !z.is_empty()) {
            *loads.entry(zone).or_insert(0) += 1;
        }
    }
    loads
}
