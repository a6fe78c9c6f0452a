//! berth-job-validate
//!
//! Runs the admission checks on a job document and, when agents are given,
//! previews where its first task could be placed.
//!
//! Exits non-zero when the job is rejected.

mod config;
mod input;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use berth_id::TaskId;
use berth_job::JobSpec;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::report::PlacementInput;

#[derive(Debug, Parser)]
#[command(name = "berth-job-validate", version, about)]
struct Args {
    /// Job document (`.json`, or `.toml`).
    #[arg(long)]
    job: PathBuf,

    /// Capacity group ceilings as JSON.
    #[arg(long, env = "BERTH_CAPACITY_GROUPS")]
    capacity_groups: Option<PathBuf>,

    /// Agent candidates as JSON. Enables the placement preview.
    #[arg(long)]
    agents: Option<PathBuf>,

    /// Active task snapshot as JSON. Defaults to an empty cluster.
    #[arg(long, requires = "agents")]
    snapshot: Option<PathBuf>,

    /// Task to place (defaults to a fresh task ID).
    #[arg(long, requires = "agents")]
    task_id: Option<TaskId>,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let config = config::Config::from_env()?;

    // Prefer RUST_LOG, fall back to BERTH_LOG_LEVEL. Stdout carries the report.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
        .init();

    info!(
        zone_attribute = %config.zones.attribute_name(),
        expected_zones = config.zones.expected_zone_count(),
        "Configuration loaded"
    );

    let job = JobSpec::from_path(&args.job)
        .with_context(|| format!("failed to load job {}", args.job.display()))?;
    let capacity_groups = input::capacity_groups(args.capacity_groups.as_deref())?;

    let placement = match args.agents.as_deref() {
        Some(path) => Some(PlacementInput {
            agents: input::agents(path)?,
            snapshot: input::snapshot(args.snapshot.as_deref())?,
            task_id: args.task_id,
        }),
        None => None,
    };

    let report = report::build_report(&config, &job, capacity_groups, placement);
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("failed to serialize report")?
    );

    if report.admitted {
        Ok(ExitCode::SUCCESS)
    } else {
        warn!(job_id = %report.job_id, "Job rejected");
        Ok(ExitCode::FAILURE)
    }
}
