//! Placement constraints.
//!
//! Jobs declare scheduling hints as `name = value` pairs. This crate turns
//! them into evaluators the scheduler loop runs against every agent candidate:
//!
//! - **Hard predicates** eliminate a candidate outright.
//! - **Soft scorers** return a fitness contribution in `[0, 1]` (1 is best).
//!
//! Recognized names (case-insensitive, enabled only by the value `"true"`):
//!
//! | name            | hard                                      | soft                          |
//! |-----------------|-------------------------------------------|-------------------------------|
//! | `exclusiveHost` | host must run no active task              | `1 / (1 + tasks on host)`     |
//! | `uniqueHost`    | host must run no task of the same job     | `1 / (1 + job tasks on host)` |
//! | `zoneBalance`   | candidate zone must be among least loaded | `1 / (1 + job tasks in zone)` |
//!
//! `host` and `serverGroup` are accepted names with no evaluator yet; any
//! other name is unknown. Both produce nothing and are logged.
//!
//! Cross-task knowledge comes only from an [`ActiveTasksSupplier`], queried on
//! every evaluation and never cached. Its view may be stale; the scheduler
//! reconciles placements afterwards.

mod candidate;
mod constraint;
mod error;
mod evaluator;
mod fitness;
mod snapshot;
mod transformer;
mod zone;

pub use candidate::{AgentCandidate, TaskRequest};
pub use constraint::{ConstraintKind, PlacementRule};
pub use error::PlacementConfigError;
pub use evaluator::{HardPredicate, PredicateResult, SoftScorer};
pub use fitness::{
    CandidateVerdict, FitnessAggregator, MeanAggregator, PlacementEvaluator, RankedCandidate,
    WeightedAggregator,
};
pub use snapshot::{snapshot_supplier, ActivePlacementFact, ActiveTasks, ActiveTasksSupplier};
pub use transformer::ConstraintTransformer;
pub use zone::{ZoneAttributeRegistry, DEFAULT_EXPECTED_ZONE_COUNT, DEFAULT_ZONE_ATTRIBUTE_NAME};
