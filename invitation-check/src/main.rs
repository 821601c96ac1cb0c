mod config;
mod report;

use anyhow::bail;
use clap::Parser;
use log::{error, info};

use crate::config::{CheckConfig, Cli};
use crate::report::{check_file, summary_line, CheckSummary};

fn main() -> anyhow::Result<()> {
    // Initialize env_logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = CheckConfig::from_cli(&cli);
    info!(
        "Checking {} file(s), list_mode={}",
        cli.files.len(),
        config.list_mode
    );

    let summary = run(&cli, &config);
    println!("{}", summary);

    if !summary.is_success() {
        bail!("{} file(s) failed validation", summary.invalid_files);
    }
    Ok(())
}

fn run(cli: &Cli, config: &CheckConfig) -> CheckSummary {
    let mut summary = CheckSummary::default();

    for path in &cli.files {
        match check_file(path, config) {
            Ok(invitations) => {
                if !config.quiet {
                    println!("{}: ok", path.display());
                    for invitation in &invitations {
                        println!("  {}", summary_line(invitation));
                    }
                }
                summary.record_valid(&invitations);
            }
            Err(err) => {
                // context already names the file
                error!("{:#}", err);
                summary.record_invalid();
            }
        }
    }

    summary
}
