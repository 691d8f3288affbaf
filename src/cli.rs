use std::path::PathBuf;

use clap::Parser;

/// Booking console for travel agencies.
#[derive(Debug, Parser)]
#[command(name = "tourdesk", version, about)]
pub struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Screen to open on startup, e.g. /bookings.
    #[arg(long, value_name = "PATH", default_value = "/")]
    pub route: String,

    /// Event loop tick interval override in milliseconds.
    #[arg(long, value_name = "MS")]
    pub tick_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_open_the_dashboard() {
        let cli = Cli::parse_from(["tourdesk"]);
        assert!(cli.config.is_none());
        assert_eq!(cli.route, "/");
        assert!(cli.tick_ms.is_none());
    }

    #[test]
    fn overrides_are_parsed() {
        let cli = Cli::parse_from([
            "tourdesk",
            "--config",
            "/tmp/alt.toml",
            "--route",
            "/reports",
            "--tick-ms",
            "100",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/alt.toml")));
        assert_eq!(cli.route, "/reports");
        assert_eq!(cli.tick_ms, Some(100));
    }
}
