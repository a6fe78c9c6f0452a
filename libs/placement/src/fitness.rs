//! Combining evaluators for one task and ranking candidates with them.
//!
//! The scheduler loop owns iteration order and candidate selection; this is
//! the per-task bundle it calls into, with the soft-score aggregation
//! pluggable.

use std::cmp::Ordering;
use std::sync::Arc;

use berth_id::AgentId;
use berth_job::ConstraintDeclaration;

use crate::candidate::{AgentCandidate, TaskRequest};
use crate::evaluator::{HardPredicate, SoftScorer};
use crate::snapshot::ActiveTasksSupplier;
use crate::transformer::ConstraintTransformer;

/// Folds per-constraint soft scores (each in `[0, 1]`) into one fitness.
pub trait FitnessAggregator: Send + Sync {
    fn aggregate(&self, scores: &[f64]) -> f64;
}

/// Arithmetic mean; no scores means a perfect fit.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanAggregator;

impl FitnessAggregator for MeanAggregator {
    fn aggregate(&self, scores: &[f64]) -> f64 {
        if scores.is_empty() {
            return 1.0;
        }
        scores.iter().sum::<f64>() / scores.len() as f64
    }
}

/// Weighted mean. Weights line up with scorers by position; scorers past the
/// end of the list weigh 1.0. Negative weights count as zero.
#[derive(Debug, Clone, Default)]
pub struct WeightedAggregator {
    weights: Vec<f64>,
}

impl WeightedAggregator {
    pub fn new(weights: Vec<f64>) -> Self {
        Self { weights }
    }
}

impl FitnessAggregator for WeightedAggregator {
    fn aggregate(&self, scores: &[f64]) -> f64 {
        let (weighted, total) = scores
            .iter()
            .enumerate()
            .map(|(i, score)| {
                let weight = self.weights.get(i).copied().unwrap_or(1.0).max(0.0);
                (score * weight, weight)
            })
            .fold((0.0, 0.0), |(ws, wt), (s, w)| (ws + s, wt + w));

        if total == 0.0 {
            1.0
        } else {
            weighted / total
        }
    }
}

/// Result of evaluating one candidate.
#[derive(Debug, Clone, PartialEq)]
pub enum CandidateVerdict {
    Eligible { fitness: f64 },
    /// Every failed hard predicate's reason.
    Rejected { reasons: Vec<String> },
}

impl CandidateVerdict {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Self::Eligible { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedCandidate {
    pub agent_id: AgentId,
    pub fitness: f64,
}

/// Hard predicates and soft scorers for one task.
#[derive(Clone)]
pub struct PlacementEvaluator {
    task: TaskRequest,
    hard: Vec<HardPredicate>,
    soft: Vec<SoftScorer>,
    aggregator: Arc<dyn FitnessAggregator>,
}

impl std::fmt::Debug for PlacementEvaluator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacementEvaluator")
            .field("task", &self.task)
            .field("hard", &self.hard)
            .field("soft", &self.soft)
            .finish_non_exhaustive()
    }
}

impl PlacementEvaluator {
    pub fn new(task: TaskRequest, hard: Vec<HardPredicate>, soft: Vec<SoftScorer>) -> Self {
        Self {
            task,
            hard,
            soft,
            aggregator: Arc::new(MeanAggregator),
        }
    }

    /// Transform a job's declarations for one of its tasks. Declarations that
    /// produce nothing are skipped.
    pub fn from_declarations(
        transformer: &ConstraintTransformer,
        task: TaskRequest,
        hard: &[ConstraintDeclaration],
        soft: &[ConstraintDeclaration],
        active_tasks: ActiveTasksSupplier,
    ) -> Self {
        let hard = hard
            .iter()
            .filter_map(|d| transformer.hard_constraint(d, Arc::clone(&active_tasks)))
            .collect();
        let soft = soft
            .iter()
            .filter_map(|d| transformer.soft_constraint(d, Arc::clone(&active_tasks)))
            .collect();
        Self::new(task, hard, soft)
    }

    #[must_use]
    pub fn with_aggregator(mut self, aggregator: Arc<dyn FitnessAggregator>) -> Self {
        self.aggregator = aggregator;
        self
    }

    pub fn task(&self) -> &TaskRequest {
        &self.task
    }

    pub fn hard_predicates(&self) -> &[HardPredicate] {
        &self.hard
    }

    pub fn soft_scorers(&self) -> &[SoftScorer] {
        &self.soft
    }

    pub fn evaluate(&self, agent: &AgentCandidate) -> CandidateVerdict {
        let reasons: Vec<String> = self
            .hard
            .iter()
            .map(|p| p.evaluate(&self.task, agent))
            .filter(|r| !r.passed)
            .map(|r| r.reason.unwrap_or_default())
            .collect();

        if !reasons.is_empty() {
            return CandidateVerdict::Rejected { reasons };
        }

        let scores: Vec<f64> = self
            .soft
            .iter()
            .map(|s| s.score(&self.task, agent))
            .collect();
        CandidateVerdict::Eligible {
            fitness: self.aggregator.aggregate(&scores),
        }
    }

    /// Eligible candidates, best first. Equal fitness is ordered by agent ID.
    pub fn rank(&self, agents: &[AgentCandidate]) -> Vec<RankedCandidate> {
        let mut ranked: Vec<RankedCandidate> = agents
            .iter()
            .filter_map(|agent| match self.evaluate(agent) {
                CandidateVerdict::Eligible { fitness } => Some(RankedCandidate {
                    agent_id: agent.agent_id,
                    fitness,
                }),
                CandidateVerdict::Rejected { .. } => None,
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.fitness
                .partial_cmp(&a.fitness)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.agent_id.cmp(&b.agent_id))
        });
        ranked
    }
}
