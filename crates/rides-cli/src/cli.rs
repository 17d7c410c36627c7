use clap::{Parser, ValueEnum};
use rides_config::RidesConfig;
use std::path::PathBuf;

/// Log level options for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    Off,
    /// Error messages only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages (default)
    Info,
    /// Debug messages
    Debug,
    /// Trace-level messages (most verbose)
    Trace,
}

impl LogLevel {
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "rides")]
#[command(about = "rides - record and page through rides over HTTP")]
#[command(version)]
pub struct Cli {
    /// Config file path (TOML)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Host to bind to (overrides config and RIDES_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides config and RIDES_PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Database file, or ":memory:" (overrides config and RIDES_DB_PATH)
    #[arg(long)]
    pub db_path: Option<PathBuf>,

    /// Set log level (off, error, warn, info, debug, trace)
    #[arg(short = 'l', long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Directory for daily log files (logs go to stderr when unset)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Answer errors with 400/404/500 instead of 200
    #[arg(long)]
    pub strict_status_codes: bool,
}

impl Cli {
    /// Layer command-line flags over an already loaded config.
    pub fn apply(&self, mut config: RidesConfig) -> RidesConfig {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(path) = &self.db_path {
            config.storage.path = path.clone();
        }
        if let Some(level) = self.log_level {
            config.logging.level = level.as_directive().to_string();
        }
        if let Some(dir) = &self.log_dir {
            config.logging.directory = Some(dir.clone());
        }
        if self.strict_status_codes {
            config.server.strict_status_codes = true;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_keeps_config() {
        let cli = Cli::try_parse_from(["rides"]).unwrap();
        assert_eq!(cli.apply(RidesConfig::default()), RidesConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "rides",
            "--port",
            "9001",
            "--db-path",
            "/tmp/rides.db",
            "-l",
            "debug",
            "--log-dir",
            "logs",
            "--strict-status-codes",
        ])
        .unwrap();

        let config = cli.apply(RidesConfig::default());
        assert_eq!(config.server.port, 9001);
        assert_eq!(config.storage.path, PathBuf::from("/tmp/rides.db"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.directory, Some(PathBuf::from("logs")));
        assert!(config.server.strict_status_codes);
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["rides", "--port", "99999"]).is_err());
    }
}
