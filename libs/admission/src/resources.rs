//! Requested resources against the capacity group ceiling.

use berth_job::{ContainerResources, ResourceDimension};

use crate::violations::{codes, ViolationMap};

pub(crate) fn check_resources(
    capacity_group: &str,
    requested: &ContainerResources,
    ceiling: &ResourceDimension,
) -> ViolationMap {
    let mut violations = ViolationMap::new();

    // Unknown group: nothing to compare against.
    if ceiling.is_empty() {
        return violations;
    }

    let exceeded: Vec<String> = requested
        .dimensions()
        .iter()
        .zip(ceiling.dimensions().iter())
        .filter(|((_, want), (_, limit))| want > limit)
        .map(|((name, want), (_, limit))| format!("{name} {want} > {limit}"))
        .collect();

    if !exceeded.is_empty() {
        violations.insert(
            codes::RESOURCES_EXCEED_CAPACITY_GROUP,
            format!(
                "Container resources exceed the limits of capacity group '{}': {}",
                capacity_group,
                exceeded.join(", ")
            ),
        );
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ceiling() -> ResourceDimension {
        ResourceDimension {
            cpu: 8.0,
            memory_mb: 16_384,
            disk_mb: 100_000,
            network_mbps: 1_000,
            gpu: 0,
        }
    }

    #[test]
    fn test_within_ceiling() {
        let requested = ContainerResources {
            cpu: 8.0,
            memory_mb: 4_096,
            ..Default::default()
        };
        assert!(check_resources("flex", &requested, &ceiling()).is_empty());
    }

    #[test]
    fn test_empty_ceiling_imposes_no_limit() {
        let requested = ContainerResources {
            cpu: 512.0,
            gpu: 16,
            ..Default::default()
        };
        assert!(check_resources("unknown", &requested, &ResourceDimension::empty()).is_empty());
    }

    #[test]
    fn test_exceeded_dimensions_share_one_entry() {
        let requested = ContainerResources {
            cpu: 16.0,
            memory_mb: 4_096,
            gpu: 1,
            ..Default::default()
        };
        let v = check_resources("flex", &requested, &ceiling());
        assert_eq!(v.len(), 1);
        let message = v.get(codes::RESOURCES_EXCEED_CAPACITY_GROUP).unwrap();
        assert!(message.contains("'flex'"));
        assert!(message.contains("cpu 16 > 8"));
        assert!(message.contains("gpu 1 > 0"));
        assert!(!message.contains("memoryMb"));
    }
}
