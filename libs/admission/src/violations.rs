//! The violation map returned by every admission check.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Violation codes. These strings are part of the submission API.
pub mod codes {
    /// At least one environment variable name is empty.
    pub const EMPTY: &str = "empty";
    /// At least one environment variable name starts with an illegal character.
    pub const INVALID_FIRST_CHARACTER: &str = "invalidFirstCharacter";
    /// At least one environment variable name contains an illegal character.
    pub const INVALID_CHARACTER: &str = "invalidCharacter";
    /// The image digest is not `<algorithm>:<hex>`.
    pub const INVALID_DIGEST: &str = "invalidDigest";
    /// Some EBS volume and its paired IP allocation are in different zones.
    pub const EBS_IP_ZONE_MISMATCH: &str = "ebsIpZoneMismatch";
    /// Requested container resources exceed the capacity group ceiling.
    pub const RESOURCES_EXCEED_CAPACITY_GROUP: &str = "resourcesExceedCapacityGroup";
}

/// Violation code -> human readable message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViolationMap(BTreeMap<String, String>);

impl ViolationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation. A second insert under the same code replaces the message.
    pub fn insert(&mut self, code: impl Into<String>, message: impl Into<String>) {
        self.0.insert(code.into(), message.into());
    }

    /// Fold another map into this one.
    pub fn merge(&mut self, other: ViolationMap) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.0.contains_key(code)
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.0.get(code).map(String::as_str)
    }

    /// Codes in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for ViolationMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ViolationMap {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
