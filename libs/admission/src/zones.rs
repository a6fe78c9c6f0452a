//! EBS volume / reserved IP zone consistency.

use berth_job::{EbsVolumeAttachment, SignedIpAddressAllocation};

use crate::violations::{codes, ViolationMap};

fn display_zone(zone: &str) -> &str {
    if zone.is_empty() {
        "<unset>"
    } else {
        zone
    }
}

/// Volumes and allocations are paired by position. Any mismatched pair makes
/// the job zone-inconsistent; the pairs are listed in a single message.
pub(crate) fn check_zones(
    ebs_volumes: &[EbsVolumeAttachment],
    ip_allocations: &[SignedIpAddressAllocation],
) -> ViolationMap {
    let mismatches: Vec<String> = ebs_volumes
        .iter()
        .zip(ip_allocations)
        .enumerate()
        .filter(|(_, (volume, allocation))| {
            volume.availability_zone != allocation.availability_zone()
        })
        .map(|(index, (volume, allocation))| {
            format!(
                "#{} {} ({}) vs {} ({})",
                index,
                volume.volume_id,
                display_zone(&volume.availability_zone),
                allocation.allocation.allocation_id,
                display_zone(allocation.availability_zone()),
            )
        })
        .collect();

    let mut violations = ViolationMap::new();
    if !mismatches.is_empty() {
        violations.insert(
            codes::EBS_IP_ZONE_MISMATCH,
            format!(
                "EBS volume and IP allocation availability zones do not match: {}",
                mismatches.join("; ")
            ),
        );
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use berth_job::{IpAddressAllocation, IpAddressLocation};

    const ZONES: [&str; 4] = ["us-east-1a", "us-east-1b", "us-east-1c", "us-east-1d"];

    fn volumes(zones: &[&str]) -> Vec<EbsVolumeAttachment> {
        zones
            .iter()
            .enumerate()
            .map(|(i, zone)| EbsVolumeAttachment {
                volume_id: format!("vol-{i}"),
                mount_point: format!("/ebs/{i}"),
                availability_zone: zone.to_string(),
            })
            .collect()
    }

    fn allocations(zones: &[&str]) -> Vec<SignedIpAddressAllocation> {
        zones
            .iter()
            .enumerate()
            .map(|(i, zone)| SignedIpAddressAllocation {
                allocation: IpAddressAllocation {
                    allocation_id: format!("ipa-{i}"),
                    ip_address_location: IpAddressLocation {
                        region: "us-east-1".to_string(),
                        availability_zone: zone.to_string(),
                        subnet_id: format!("subnet-{i}"),
                    },
                    ip_address: format!("10.0.0.{i}"),
                },
                signature: "sig".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_matching_zones_pass() {
        assert!(check_zones(&volumes(&ZONES), &allocations(&ZONES)).is_empty());
    }

    #[test]
    fn test_nothing_to_compare_passes() {
        assert!(check_zones(&[], &[]).is_empty());
        assert!(check_zones(&volumes(&ZONES), &[]).is_empty());
        assert!(check_zones(&[], &allocations(&ZONES)).is_empty());
    }

    #[test]
    fn test_unset_ip_zones_yield_one_violation() {
        let unset = vec![SignedIpAddressAllocation::default(); ZONES.len()];
        let v = check_zones(&volumes(&ZONES), &unset);
        assert_eq!(v.len(), 1);
        let message = v.get(codes::EBS_IP_ZONE_MISMATCH).unwrap();
        assert!(message.contains("#0 vol-0 (us-east-1a)"));
        assert!(message.contains("#3 vol-3 (us-east-1d)"));
        assert!(message.contains("<unset>"));
    }

    #[test]
    fn test_single_mismatch_among_many() {
        let v = check_zones(
            &volumes(&ZONES),
            &allocations(&["us-east-1a", "us-east-1b", "us-east-1a", "us-east-1d"]),
        );
        assert_eq!(v.len(), 1);
        let message = v.get(codes::EBS_IP_ZONE_MISMATCH).unwrap();
        assert!(message.contains("#2"));
        assert!(!message.contains("#0"));
    }

    #[test]
    fn test_extra_volumes_are_not_paired() {
        let v = check_zones(&volumes(&ZONES), &allocations(&ZONES[..2]));
        assert!(v.is_empty());
    }
}
