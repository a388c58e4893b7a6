//! Command line configuration.

use anyhow::Context;
use std::path::PathBuf;
use taskdesk_core::default_log_level;

/// CLI arguments for the interactive task tracker.
#[derive(clap::Parser, Debug)]
#[command(version, about = "Interactive task tracker")]
pub struct CliArgs {
    /// Append-only file receiving one record per task-creation attempt.
    #[arg(long, default_value = "tasks.txt")]
    pub tasks_file: PathBuf,

    /// Directory for rolling diagnostic logs (default: `./logs`).
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Fully resolved CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub tasks_file: PathBuf,
    /// Always absolute.
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl CliConfig {
    /// Resolves defaults and makes the log directory absolute against the
    /// current working directory.
    pub fn resolve(args: &CliArgs) -> anyhow::Result<Self> {
        let cwd = std::env::current_dir().context("failed to read current directory")?;
        Ok(Self::resolve_in(args, cwd))
    }

    fn resolve_in(args: &CliArgs, cwd: PathBuf) -> Self {
        let log_dir = match &args.log_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => cwd.join(dir),
            None => cwd.join("logs"),
        };
        Self {
            tasks_file: args.tasks_file.clone(),
            log_dir,
            log_level: args
                .log_level
                .clone()
                .unwrap_or_else(|| default_log_level().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CliArgs, CliConfig};
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn defaults_resolve_against_working_directory() {
        let args = CliArgs::parse_from(["taskdesk"]);
        let config = CliConfig::resolve_in(&args, PathBuf::from("/work"));

        assert_eq!(config.tasks_file, PathBuf::from("tasks.txt"));
        assert_eq!(config.log_dir, PathBuf::from("/work/logs"));
        assert!(!config.log_level.is_empty());
    }

    #[test]
    fn explicit_flags_override_defaults() {
        let args = CliArgs::parse_from([
            "taskdesk",
            "--tasks-file",
            "/data/tasks.txt",
            "--log-dir",
            "diag",
            "--log-level",
            "warn",
        ]);
        let config = CliConfig::resolve_in(&args, PathBuf::from("/work"));

        assert_eq!(config.tasks_file, PathBuf::from("/data/tasks.txt"));
        assert_eq!(config.log_dir, PathBuf::from("/work/diag"));
        assert_eq!(config.log_level, "warn");
    }
}
