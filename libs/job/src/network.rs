//! Reserved (static) IP address allocations.

use serde::{Deserialize, Serialize};

/// Where a reserved IP address lives. Unset fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IpAddressLocation {
    pub region: String,
    pub availability_zone: String,
    pub subnet_id: String,
}

/// A reserved IP address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpAddressAllocation {
    pub allocation_id: String,
    #[serde(default)]
    pub ip_address_location: IpAddressLocation,
    #[serde(default)]
    pub ip_address: String,
}

/// An IP allocation together with the signature proving the submitter owns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedIpAddressAllocation {
    pub allocation: IpAddressAllocation,
    #[serde(default)]
    pub signature: String,
}

impl SignedIpAddressAllocation {
    /// Availability zone of the reserved address (`""` when unset).
    pub fn availability_zone(&self) -> &str {
        &self.allocation.ip_address_location.availability_zone
    }
}
