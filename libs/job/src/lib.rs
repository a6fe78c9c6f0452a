//! Job specification model.
//!
//! A job is submitted as a single document describing one container (image,
//! environment, resources, placement constraints) plus the block-storage
//! volumes and reserved IP addresses its tasks need. The types here are plain
//! data; admission rules live in `berth-admission` and placement rules in
//! `berth-placement`.
//!
//! Wire format is camelCase JSON (or TOML with the same keys). Optional
//! collections default to empty and unset zones default to `""`.

mod constraint;
mod container;
mod error;
mod network;
mod storage;

use berth_id::JobId;
use serde::{Deserialize, Serialize};

pub use constraint::ConstraintDeclaration;
pub use container::{Container, ContainerImage, ContainerResources, ResourceDimension};
pub use error::JobFileError;
pub use network::{IpAddressAllocation, IpAddressLocation, SignedIpAddressAllocation};
pub use storage::EbsVolumeAttachment;

/// A complete job specification as submitted for admission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSpec {
    pub job_id: JobId,

    /// Capacity group the job's resources are charged against.
    #[serde(default)]
    pub capacity_group: String,

    pub container: Container,

    #[serde(default)]
    pub ebs_volumes: Vec<EbsVolumeAttachment>,

    #[serde(default)]
    pub ip_allocations: Vec<SignedIpAddressAllocation>,
}

impl JobSpec {
    /// Parse a job from JSON.
    pub fn from_json_str(contents: &str) -> Result<Self, JobFileError> {
        serde_json::from_str(contents).map_err(JobFileError::Json)
    }

    /// Parse a job from TOML.
    pub fn from_toml_str(contents: &str) -> Result<Self, JobFileError> {
        toml::from_str(contents).map_err(JobFileError::Toml)
    }

    /// Read a job file, choosing the format by extension (`.toml`, otherwise JSON).
    pub fn from_path(path: &std::path::Path) -> Result<Self, JobFileError> {
        let contents = std::fs::read_to_string(path).map_err(|source| JobFileError::Read {
            path: path.display().to_string(),
            source,
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&contents),
            _ => Self::from_json_str(&contents),
        }
    }
}
