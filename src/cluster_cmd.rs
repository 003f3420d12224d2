//! Cluster-config command: write or check the batch backend documents.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use birthday_cluster::{generate_templates, load_documents};

use crate::cli::ClusterConfigArgs;

/// Generate template documents, or validate existing ones with `--check`.
pub fn run(args: ClusterConfigArgs) -> Result<()> {
    let _cmd = info_span!("cluster_config").entered();

    if let Some(dir) = args.check {
        let (credentials, cluster) = load_documents(&dir)
            .with_context(|| format!("invalid configuration documents in {}", dir.display()))?;
        info!(dir = %dir.display(), "configuration documents valid");
        println!(
            "batch account '{}', pool '{}' ({}): up to {} concurrent tasks",
            credentials.batch_account().name,
            cluster.name(),
            cluster.vm_size(),
            cluster.max_concurrent_tasks()
        );
        return Ok(());
    }

    let dir = args.dir.context("either --dir or --check must be given")?;
    let paths = generate_templates(&dir, args.force)
        .with_context(|| format!("failed to generate templates in {}", dir.display()))?;
    println!("wrote {}", paths.credentials.display());
    println!("wrote {}", paths.cluster.display());
    Ok(())
}
