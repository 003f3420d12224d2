//! Curve command: probability over room sizes 1..=N.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use birthday_parallel::ExecutionBackend;
use birthday_sweep::probability_curve;

use crate::backend::Backend;
use crate::cli::CurveArgs;
use crate::config::BirthdayConfig;
use crate::convert::{self, OutputFormat};

/// Run the sweep and write the curve.
pub fn run(args: CurveArgs) -> Result<()> {
    let _cmd = info_span!("curve").entered();

    // 1. Load TOML (or defaults) and apply CLI overrides
    let mut config = match &args.config {
        Some(path) => BirthdayConfig::load(path)?,
        None => BirthdayConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    let sweep = convert::build_sweep_config(&config, args.max_room_size)?;
    let format = convert::parse_format(args.format.as_deref().unwrap_or(&config.output.format))?;
    let output = args.output.or(config.output.path);

    // 2. Run on the chosen backend
    let mut backend = Backend::from_workers(args.workers.or(config.parallel.workers))
        .context("failed to start worker backend")?;
    info!(
        max_room_size = sweep.max_room_size(),
        n_trials = sweep.n_trials(),
        backend = backend.name(),
        workers = backend.workers(),
        "running probability curve"
    );
    let curve = probability_curve(&sweep, &backend).context("probability curve failed")?;
    backend.shutdown();

    // 3. Report the crossing
    match curve.first_above(0.5) {
        Some(n) => println!("probability of a shared birthday first reaches 0.5 at room size {n}"),
        None => println!(
            "probability of a shared birthday stays below 0.5 up to room size {}",
            sweep.max_room_size()
        ),
    }

    // 4. Render and write
    let rendered = match format {
        OutputFormat::Csv => curve.to_csv(),
        OutputFormat::Json => curve.to_json_pretty().context("failed to render curve")?,
    };
    match output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("failed to write curve: {}", path.display()))?;
            info!(path = %path.display(), "curve written");
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
