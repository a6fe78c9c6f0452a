//! Which agent attribute names the availability zone, and how many zones a
//! job is expected to spread across.

use crate::error::PlacementConfigError;

pub const DEFAULT_ZONE_ATTRIBUTE_NAME: &str = "zone";
pub const DEFAULT_EXPECTED_ZONE_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneAttributeRegistry {
    attribute_name: String,
    expected_zone_count: usize,
}

impl Default for ZoneAttributeRegistry {
    fn default() -> Self {
        Self {
            attribute_name: DEFAULT_ZONE_ATTRIBUTE_NAME.to_string(),
            expected_zone_count: DEFAULT_EXPECTED_ZONE_COUNT,
        }
    }
}

impl ZoneAttributeRegistry {
    pub fn new(
        attribute_name: impl Into<String>,
        expected_zone_count: usize,
    ) -> Result<Self, PlacementConfigError> {
        let attribute_name = attribute_name.into();
        if attribute_name.trim().is_empty() {
            return Err(PlacementConfigError::EmptyZoneAttribute);
        }
        if expected_zone_count == 0 {
            return Err(PlacementConfigError::ZeroZoneCount);
        }

        Ok(Self {
            attribute_name,
            expected_zone_count,
        })
    }

    /// Reads `BERTH_ZONE_ATTRIBUTE_NAME` and `BERTH_EXPECTED_ZONE_COUNT`,
    /// falling back to `zone` and `3`.
    pub fn from_env() -> Result<Self, PlacementConfigError> {
        Self::from_values(
            std::env::var("BERTH_ZONE_ATTRIBUTE_NAME").ok(),
            std::env::var("BERTH_EXPECTED_ZONE_COUNT").ok(),
        )
    }

    fn from_values(
        attribute_name: Option<String>,
        expected_zone_count: Option<String>,
    ) -> Result<Self, PlacementConfigError> {
        let expected_zone_count = match expected_zone_count {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| PlacementConfigError::InvalidZoneCount(raw))?,
            None => DEFAULT_EXPECTED_ZONE_COUNT,
        };

        Self::new(
            attribute_name.unwrap_or_else(|| DEFAULT_ZONE_ATTRIBUTE_NAME.to_string()),
            expected_zone_count,
        )
    }

    /// Agent attribute whose value is the agent's zone.
    pub fn attribute_name(&self) -> &str {
        &self.attribute_name
    }

    pub fn expected_zone_count(&self) -> usize {
        self.expected_zone_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let registry = ZoneAttributeRegistry::from_values(None, None).unwrap();
        assert_eq!(registry, ZoneAttributeRegistry::default());
        assert_eq!(registry.attribute_name(), "zone");
        assert_eq!(registry.expected_zone_count(), 3);
    }

    #[test]
    fn test_overrides() {
        let registry = ZoneAttributeRegistry::from_values(
            Some("topology.kubernetes.io/zone".to_string()),
            Some(" 4 ".to_string()),
        )
        .unwrap();
        assert_eq!(registry.attribute_name(), "topology.kubernetes.io/zone");
        assert_eq!(registry.expected_zone_count(), 4);
    }

    #[test]
    fn test_invalid_configuration_is_an_error() {
        assert_eq!(
            ZoneAttributeRegistry::new("  ", 3).unwrap_err(),
            PlacementConfigError::EmptyZoneAttribute
        );
        assert_eq!(
            ZoneAttributeRegistry::new("zone", 0).unwrap_err(),
            PlacementConfigError::ZeroZoneCount
        );
        assert_eq!(
            ZoneAttributeRegistry::from_values(None, Some("three".to_string())).unwrap_err(),
            PlacementConfigError::InvalidZoneCount("three".to_string())
        );
    }
}
