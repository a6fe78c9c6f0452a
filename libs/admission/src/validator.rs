//! The job-level validator.

use std::collections::BTreeMap;
use std::sync::Arc;

use berth_job::{
    ContainerImage, ContainerResources, EbsVolumeAttachment, JobSpec, ResourceDimension,
    SignedIpAddressAllocation,
};
use tracing::{debug, info, instrument};

use crate::config::ValidationConfig;
use crate::violations::ViolationMap;
use crate::{environment, image, resources, zones};

/// Capacity group name -> per-task resource ceiling.
///
/// Expected to be a fast in-memory read; it is called on the admission path.
pub type ResourceDimensionLookup = Arc<dyn Fn(&str) -> ResourceDimension + Send + Sync>;

/// Stateless admission validator.
///
/// Cheap to clone and safe to share across request handlers.
#[derive(Clone)]
pub struct JobValidator {
    config: ValidationConfig,
    resource_lookup: ResourceDimensionLookup,
}

impl std::fmt::Debug for JobValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobValidator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl JobValidator {
    pub fn new<F>(config: ValidationConfig, resource_lookup: F) -> Self
    where
        F: Fn(&str) -> ResourceDimension + Send + Sync + 'static,
    {
        Self {
            config,
            resource_lookup: Arc::new(resource_lookup),
        }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Names must match `[A-Z_][A-Z0-9_]*`.
    ///
    /// Reports at most one entry per rule class (`empty`,
    /// `invalidFirstCharacter`, `invalidCharacter`), not one per name.
    pub fn validate_environment_variable_names(
        &self,
        env: &BTreeMap<String, String>,
    ) -> ViolationMap {
        environment::check_names(env)
    }

    /// A present digest must be `<algorithm>:<lowercase hex>` with a
    /// configured algorithm. No digest is not a violation.
    pub fn validate_image(&self, image: &ContainerImage) -> ViolationMap {
        image::check_image(image, &self.config.digest_algorithms)
    }

    /// Each EBS volume must be in the same zone as the IP allocation at the
    /// same position. At most one entry, however many pairs disagree.
    pub fn matching_ebs_and_ip_zones(
        &self,
        ebs_volumes: &[EbsVolumeAttachment],
        ip_allocations: &[SignedIpAddressAllocation],
    ) -> ViolationMap {
        zones::check_zones(ebs_volumes, ip_allocations)
    }

    /// Requested resources must fit the capacity group ceiling returned by
    /// the injected lookup. A group the lookup does not know imposes no limit.
    pub fn validate_container_resources(
        &self,
        capacity_group: &str,
        requested: &ContainerResources,
    ) -> ViolationMap {
        let ceiling = (self.resource_lookup)(capacity_group);
        resources::check_resources(capacity_group, requested, &ceiling)
    }

    /// Run every check and merge the results. Empty means the job is admitted.
    #[instrument(skip(self, job), fields(job_id = %job.job_id))]
    pub fn validate_job(&self, job: &JobSpec) -> ViolationMap {
        let mut violations = ViolationMap::new();

        violations.merge(self.validate_environment_variable_names(&job.container.env));
        violations.merge(self.validate_image(&job.container.image));
        violations.merge(self.matching_ebs_and_ip_zones(&job.ebs_volumes, &job.ip_allocations));
        violations.merge(
            self.validate_container_resources(&job.capacity_group, &job.container.resources),
        );

        if violations.is_empty() {
            debug!("Job passed admission checks");
        } else {
            info!(
                violations = ?violations.codes().collect::<Vec<_>>(),
                "Job rejected by admission checks"
            );
        }

        violations
    }
}
