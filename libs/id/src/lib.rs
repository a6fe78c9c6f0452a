//! # berth-id
//!
//! Typed identifiers for the scheduler's resources.
//!
//! Every ID has the canonical form `{prefix}_{ulid}`:
//!
//! - `job_01HV4Z2WQXKJNM8GPQY6VBKC3D`
//! - `task_01HV4Z3MXNKPQR9HSTZ7WC8D4E`
//! - `agent_01HV4Z4NYPKTRS0JTMA8XDME5F`
//!
//! The prefix keeps a task ID from being handed to something that expects an
//! agent ID, and the ULID keeps IDs time-ordered.

mod error;
mod macros;
mod types;

pub use error::IdError;
pub use types::*;

/// Re-export ulid for consumers that need raw ULID operations
pub use ulid::Ulid;
