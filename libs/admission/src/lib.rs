//! Job admission validation.
//!
//! Schema-valid jobs can still be impossible to run safely: an environment
//! variable the container runtime will refuse, an image digest no registry
//! resolves, or an EBS volume in one zone paired with a reserved IP in
//! another. The checks here catch those before a job is queued.
//!
//! # Contract
//!
//! - Every check returns a [`ViolationMap`] (code -> message). Empty means pass.
//! - Problems are data, never errors or panics.
//! - Reporting is per rule, not per offending item: a rule broken by five
//!   names shows up once. Existing callers key on these codes.
//! - [`JobValidator::validate_job`] runs every check and returns the complete
//!   set in one call; there is no fail-fast.

mod config;
mod environment;
mod image;
mod resources;
mod validator;
mod violations;
mod zones;

pub use config::{ValidationConfig, DEFAULT_DIGEST_ALGORITHMS};
pub use validator::{JobValidator, ResourceDimensionLookup};
pub use violations::{codes, ViolationMap};
