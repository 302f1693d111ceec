// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::default_config_path;
use crate::types::TaskKind;

/// Command-line arguments for `launchpad`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "launchpad",
    version,
    about = "Bring up a local environment from named, ordered task profiles.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML). Missing file means defaults.
    #[arg(long, value_name = "PATH", default_value_os_t = default_config_path())]
    pub config: PathBuf,

    /// Profile store document; overrides `[store].path`.
    #[arg(long, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `LAUNCHPAD_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List profile names.
    Profiles,
    /// Create an empty profile.
    Create {
        #[arg(value_parser = parse_profile_name)]
        name: String,
    },
    /// Delete a profile (no error if it does not exist).
    Delete {
        #[arg(value_parser = parse_profile_name)]
        name: String,
    },
    /// Rename a profile.
    Rename {
        #[arg(value_parser = parse_profile_name)]
        from: String,
        #[arg(value_parser = parse_profile_name)]
        to: String,
    },
    /// Print a profile's tasks.
    Show { name: String },
    /// Append a task to a profile.
    Add {
        profile: String,
        #[command(flatten)]
        task: TaskArgs,
    },
    /// Replace the task at INDEX.
    Edit {
        profile: String,
        index: usize,
        #[command(flatten)]
        task: TaskArgs,
    },
    /// Remove the task at INDEX.
    Remove { profile: String, index: usize },
    /// Move a task so it ends up at position TO.
    Move {
        profile: String,
        from: usize,
        to: usize,
    },
    /// List task types and their parameters.
    Types,
    /// Validate a profile and print the commands a run would launch.
    Check { profile: String },
    /// Run a profile. Ctrl-C stops it after the current task.
    Run { profile: String },
}

/// Task fields shared by `add` and `edit`.
#[derive(Debug, Clone, Args)]
pub struct TaskArgs {
    /// Task type, e.g. `server_app` or `delay`.
    #[arg(long = "type", value_name = "TYPE")]
    pub kind: TaskKind,

    /// Task label.
    #[arg(long)]
    pub name: String,

    /// Task parameter, repeatable: `-p jar=/opt/app.jar`.
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, String)>,
}

/// Profile names are trimmed; a blank name is rejected.
pub fn parse_profile_name(s: &str) -> Result<String, String> {
    let name = s.trim();
    if name.is_empty() {
        return Err("profile name must not be empty".to_string());
    }
    Ok(name.to_string())
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("empty parameter key in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
