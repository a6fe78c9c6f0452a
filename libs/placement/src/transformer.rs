//! Turns job constraint declarations into evaluators.

use berth_job::ConstraintDeclaration;
use tracing::{debug, warn};

use crate::constraint::{ConstraintKind, PlacementRule};
use crate::evaluator::{HardPredicate, SoftScorer};
use crate::snapshot::ActiveTasksSupplier;
use crate::zone::ZoneAttributeRegistry;

/// Value that switches a constraint on. Matched exactly.
const ENABLED: &str = "true";

/// Stateless: the registry is fixed at construction and the supplier is
/// passed in per call.
#[derive(Debug, Clone, Default)]
pub struct ConstraintTransformer {
    zones: ZoneAttributeRegistry,
}

impl ConstraintTransformer {
    pub fn new(zones: ZoneAttributeRegistry) -> Self {
        Self { zones }
    }

    pub fn zones(&self) -> &ZoneAttributeRegistry {
        &self.zones
    }

    /// Build the hard predicate for a declaration, if it names an enabled rule.
    pub fn hard_constraint(
        &self,
        declaration: &ConstraintDeclaration,
        active_tasks: ActiveTasksSupplier,
    ) -> Option<HardPredicate> {
        self.enabled_rule(declaration, "hard")
            .map(|rule| HardPredicate::new(rule, active_tasks, self.zones.clone()))
    }

    /// Build the soft scorer for a declaration, if it names an enabled rule.
    pub fn soft_constraint(
        &self,
        declaration: &ConstraintDeclaration,
        active_tasks: ActiveTasksSupplier,
    ) -> Option<SoftScorer> {
        self.enabled_rule(declaration, "soft")
            .map(|rule| SoftScorer::new(rule, active_tasks, self.zones.clone()))
    }

    fn enabled_rule(
        &self,
        declaration: &ConstraintDeclaration,
        flavor: &'static str,
    ) -> Option<PlacementRule> {
        let kind = ConstraintKind::parse(&declaration.name);

        let Some(rule) = kind.rule() else {
            match kind {
                ConstraintKind::Unrecognized(_) => warn!(
                    constraint = %declaration.name,
                    flavor,
                    "Unknown job constraint"
                ),
                _ => warn!(
                    constraint = %declaration.name,
                    flavor,
                    "Job constraint not supported by this scheduler"
                ),
            }
            return None;
        };

        if declaration.value != ENABLED {
            debug!(
                constraint = %declaration.name,
                value = %declaration.value,
                flavor,
                "Job constraint not enabled"
            );
            return None;
        }

        Some(rule)
    }
}
