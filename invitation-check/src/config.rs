use clap::Parser;
use std::path::PathBuf;

/// Validate meetup invitation payloads against the backend contract
#[derive(Parser, Debug)]
#[command(name = "invitation-check", version)]
pub struct Cli {
    /// JSON files holding one invitation or an array of invitations
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Treat every file as an array of invitations
    #[arg(long)]
    pub list: bool,

    /// Only print files that fail
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckConfig {
    pub list_mode: bool,
    pub quiet: bool,
}

impl CheckConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        // INVITATION_CHECK_LIST=true turns list mode on without the flag
        let list_from_env = std::env::var("INVITATION_CHECK_LIST")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(false);

        CheckConfig {
            list_mode: cli.list || list_from_env,
            quiet: cli.quiet,
        }
    }
}
