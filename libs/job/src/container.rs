//! Container image, environment and resource declarations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ConstraintDeclaration;

/// The single container every task of the job runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    pub image: ContainerImage,

    /// Environment variables, name -> value.
    #[serde(default)]
    pub env: BTreeMap<String, String>,

    #[serde(default)]
    pub resources: ContainerResources,

    #[serde(default)]
    pub hard_constraints: Vec<ConstraintDeclaration>,

    #[serde(default)]
    pub soft_constraints: Vec<ConstraintDeclaration>,
}

/// Image reference. When a digest is present it pins the exact image content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerImage {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Resources requested by each task of the job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerResources {
    pub cpu: f64,
    pub memory_mb: u64,
    pub disk_mb: u64,
    pub network_mbps: u64,
    pub gpu: u64,
}

impl ContainerResources {
    /// Named dimensions, in a fixed order shared with [`ResourceDimension`].
    pub fn dimensions(&self) -> [(&'static str, f64); 5] {
        dimension_table(self.cpu, self.memory_mb, self.disk_mb, self.network_mbps, self.gpu)
    }
}

/// Upper bound on resources, e.g. the per-task ceiling of a capacity group.
///
/// An all-zero dimension means "nothing known" rather than "nothing allowed".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceDimension {
    pub cpu: f64,
    pub memory_mb: u64,
    pub disk_mb: u64,
    pub network_mbps: u64,
    pub gpu: u64,
}

impl ResourceDimension {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }

    pub fn dimensions(&self) -> [(&'static str, f64); 5] {
        dimension_table(self.cpu, self.memory_mb, self.disk_mb, self.network_mbps, self.gpu)
    }
}

fn dimension_table(
    cpu: f64,
    memory_mb: u64,
    disk_mb: u64,
    network_mbps: u64,
    gpu: u64,
) -> [(&'static str, f64); 5] {
    [
        ("cpu", cpu),
        ("memoryMb", memory_mb as f64),
        ("diskMb", disk_mb as f64),
        ("networkMbps", network_mbps as f64),
        ("gpu", gpu as f64),
    ]
}
