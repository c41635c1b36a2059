use std::io;
use std::process;

use anyhow::Result;
use healthcheck::{CheckConfig, HealthCheck};

fn main() -> Result<()> {
    let stdout = io::stdout();
    let mut check = HealthCheck::new(CheckConfig::default(), stdout.lock());
    let report = check.run()?;
    process::exit(report.exit_code());
}
