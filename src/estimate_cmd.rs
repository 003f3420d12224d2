//! Estimate command: one room size, trials split across workers.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use birthday_parallel::ExecutionBackend;
use birthday_sweep::split_estimate;

use crate::backend::Backend;
use crate::cli::EstimateArgs;
use crate::convert;

/// Run a single estimate and print it.
pub fn run(args: EstimateArgs) -> Result<()> {
    let _cmd = info_span!("estimate").entered();
    let sim = convert::build_simulation_config(args.room_size, args.trials, !args.no_leap_day)?;

    let mut backend =
        Backend::from_workers(args.workers).context("failed to start worker backend")?;
    info!(
        room_size = sim.room_size(),
        n_trials = sim.n_trials(),
        backend = backend.name(),
        workers = backend.workers(),
        chunks = args.chunks,
        "running estimate"
    );

    let result =
        split_estimate(&sim, args.chunks, args.seed, &backend).context("estimate failed")?;
    backend.shutdown();

    let calendar = if sim.include_leap_day() {
        "365 days + leap day"
    } else {
        "365 days"
    };
    println!(
        "room size {}: P(shared birthday) = {:.4} +/- {:.4} ({} trials, {calendar})",
        sim.room_size(),
        result.probability(),
        result.standard_error(),
        result.n_trials()
    );
    Ok(())
}
