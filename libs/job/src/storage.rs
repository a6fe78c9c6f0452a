use serde::{Deserialize, Serialize};

/// An EBS volume the job's tasks attach at a fixed mount point.
///
/// The volume lives in exactly one availability zone, so any task using it
/// must run in that zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EbsVolumeAttachment {
    pub volume_id: String,
    pub mount_point: String,
    #[serde(default)]
    pub availability_zone: String,
}
