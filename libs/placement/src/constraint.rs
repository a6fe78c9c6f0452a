//! Constraint name dispatch.

/// Every constraint name a job can declare, resolved case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    ExclusiveHost,
    UniqueHost,
    ZoneBalance,
    /// Accepted name without an evaluator.
    Host,
    /// Accepted name without an evaluator.
    ServerGroup,
    /// Anything else; carries the name as declared.
    Unrecognized(String),
}

/// Constraints that have an evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementRule {
    ExclusiveHost,
    UniqueHost,
    ZoneBalance,
}

impl ConstraintKind {
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "exclusivehost" => Self::ExclusiveHost,
            "uniquehost" => Self::UniqueHost,
            "zonebalance" => Self::ZoneBalance,
            "host" => Self::Host,
            "servergroup" => Self::ServerGroup,
            _ => Self::Unrecognized(name.to_string()),
        }
    }

    /// The rule to evaluate, or `None` for names without an evaluator.
    pub fn rule(&self) -> Option<PlacementRule> {
        match self {
            Self::ExclusiveHost => Some(PlacementRule::ExclusiveHost),
            Self::UniqueHost => Some(PlacementRule::UniqueHost),
            Self::ZoneBalance => Some(PlacementRule::ZoneBalance),
            Self::Host | Self::ServerGroup | Self::Unrecognized(_) => None,
        }
    }
}

impl std::fmt::Display for PlacementRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::ExclusiveHost => "exclusiveHost",
            Self::UniqueHost => "uniqueHost",
            Self::ZoneBalance => "zoneBalance",
        };
        f.write_str(name)
    }
}
