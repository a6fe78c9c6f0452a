use serde::{Deserialize, Serialize};

/// A scheduling hint declared on a job, e.g. `uniqueHost = "true"`.
///
/// Names are matched case-insensitively by the placement layer; values are
/// kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConstraintDeclaration {
    pub name: String,
    pub value: String,
}

impl ConstraintDeclaration {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for ConstraintDeclaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}
