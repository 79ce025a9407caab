use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::model::UserRole;

/// Terminal desk for automotive claims and repairs.
#[derive(Debug, Clone, Parser)]
#[command(name = "claimdesk", version, about)]
pub struct Cli {
    /// Role of the signed-in user
    #[arg(long, value_enum, default_value_t = UserRole::Repairer)]
    pub role: UserRole,

    /// JSON dataset to use instead of the built-in sample data
    #[arg(long, value_name = "FILE")]
    pub data: Option<PathBuf>,

    /// Log filter when RUST_LOG is unset (e.g. "debug", "claimdesk=trace")
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Redraw interval in milliseconds
    #[arg(long, default_value_t = 250)]
    pub tick_ms: u64,
}

impl Cli {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["claimdesk"]);
        assert_eq!(cli.role, UserRole::Repairer);
        assert!(cli.data.is_none());
        assert_eq!(cli.log_level, "info");
        assert_eq!(cli.tick_rate(), Duration::from_millis(250));
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::parse_from([
            "claimdesk",
            "--role",
            "insured",
            "--data",
            "/tmp/folders.json",
            "--log-level",
            "debug",
            "--tick-ms",
            "100",
        ]);
        assert_eq!(cli.role, UserRole::Insured);
        assert_eq!(cli.data, Some(PathBuf::from("/tmp/folders.json")));
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.tick_ms, 100);
    }

    #[test]
    fn rejects_unknown_role() {
        assert!(Cli::try_parse_from(["claimdesk", "--role", "mechanic"]).is_err());
    }
}
