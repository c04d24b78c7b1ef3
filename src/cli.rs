use anyhow::Result;
use clap::{ArgAction, Parser, error::ErrorKind};

use crate::{
    aws::{self, FederationClient, HttpTransport, ProfileCredentialResolver},
    browser,
    config::ConsoleConfig,
    constants::DEFAULT_PROFILE,
};

/// Process exit status for a successful run, `--help` or `--version`
pub const EXIT_SUCCESS: u8 = 0;

/// Process exit status for every failure, usage errors included
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Clone, Parser)]
#[command(name = "console", version, about = "Log in to the AWS console", long_about = None)]
pub struct Cli {
    #[arg(
        short = 'p',
        long,
        default_value = DEFAULT_PROFILE,
        help = "profile to use"
    )]
    pub profile: String,

    #[arg(short = 'v', long, action = ArgAction::Count, help = "Increase verbosity (-v info, -vv debug, -vvv trace)")]
    pub verbose: u8,
}

impl Cli {
    pub fn config(&self) -> ConsoleConfig {
        ConsoleConfig::new(self.profile.clone())
    }

    pub async fn execute(self) -> Result<()> {
        let config = self.config();
        let federation = FederationClient::new(HttpTransport::new()?, config.clone());
        let launcher = browser::system_launcher();

        aws::console::open_console(
            &config,
            &ProfileCredentialResolver::new(),
            &federation,
            launcher.as_ref(),
        )
        .await?;

        Ok(())
    }
}

/// Exit status for a command line clap refused to parse
pub fn usage_exit_code(err: &clap::Error) -> u8 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
        _ => EXIT_FAILURE,
    }
}

/// Exit status for a finished run
pub fn run_exit_code(result: &Result<()>) -> u8 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(_) => EXIT_FAILURE,
    }
}
