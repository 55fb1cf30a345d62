use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;

use stockledger_cli::{CliConfig, ScriptRunner};
use stockledger_inventory::Registry;

fn main() -> anyhow::Result<()> {
    stockledger_observability::init();

    let config = CliConfig::from_env().context("invalid STOCKLEDGER_* configuration")?;
    let registry = Registry::with_config(config.registry, config.ids.generator())
        .context("failed to build product registry")?;
    let mut runner = ScriptRunner::new(registry);

    let stdout = io::stdout().lock();
    let summary = match std::env::args().nth(1) {
        Some(path) if path != "-" => {
            let file = File::open(&path).with_context(|| format!("failed to open script {path}"))?;
            tracing::info!(script = %path, "running script");
            runner.run(BufReader::new(file), stdout)?
        }
        _ => runner.run(io::stdin().lock(), stdout)?,
    };

    tracing::info!(
        executed = summary.executed,
        failed = summary.failed,
        products = runner.registry().len(),
        "script finished"
    );
    Ok(())
}
