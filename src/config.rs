use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::animation::DEFAULT_ANIMATION_URL;

/// Command-line configuration.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about = "Job Risk Dashboard", long_about = None)]
pub struct Cli {
    /// CSV file to open at start-up
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Lottie JSON shown in the header
    #[arg(long, env = "JOB_RISK_ANIMATION_URL", default_value = DEFAULT_ANIMATION_URL)]
    pub animation_url: String,

    /// Skip fetching the header animation
    #[arg(long)]
    pub no_animation: bool,

    /// Timeout for the animation request, in seconds
    #[arg(long, default_value_t = 10)]
    pub http_timeout_secs: u64,
}

impl Cli {
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["job-risk-dashboard"]).unwrap();
        assert!(cli.file.is_none());
        assert!(!cli.no_animation);
        assert_eq!(cli.http_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn flags() {
        let cli = Cli::try_parse_from([
            "job-risk-dashboard",
            "--file",
            "jobs.csv",
            "--no-animation",
            "--animation-url",
            "http://localhost/anim.json",
            "--http-timeout-secs",
            "3",
        ])
        .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("jobs.csv")));
        assert!(cli.no_animation);
        assert_eq!(cli.animation_url, "http://localhost/anim.json");
        assert_eq!(cli.http_timeout_secs, 3);
    }
}
