use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "cabview",
    version,
    about = "A terminal dashboard shell for an onboard driving companion",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Enable mouse support.
    #[arg(long)]
    pub mouse: Option<bool>,

    /// Seconds of inactivity before the display blanks (0 disables).
    #[arg(long, value_name = "SECS")]
    pub screen_timeout: Option<u64>,

    /// Clear the onboarding record and run onboarding again.
    #[arg(long)]
    pub reset_onboarding: bool,
}
