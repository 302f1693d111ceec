// src/config/validate.rs

use crate::config::model::{ConfigFile, Launchers, RawConfigFile};
use crate::errors::{LaunchpadError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::LaunchpadError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw))
    }
}

pub fn validate_config(cfg: &RawConfigFile) -> Result<()> {
    validate_store(cfg)?;
    validate_launchers(&cfg.launchers)?;
    validate_terminal(cfg)?;
    validate_run(cfg)?;
    Ok(())
}

fn validate_store(cfg: &RawConfigFile) -> Result<()> {
    if cfg.store.path.as_os_str().is_empty() {
        return Err(LaunchpadError::ConfigError(
            "[store].path must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_launchers(launchers: &Launchers) -> Result<()> {
    let fields = [
        ("java", &launchers.java),
        ("container_tool", &launchers.container_tool),
        ("broker_launcher", &launchers.broker_launcher),
        ("engine_launcher", &launchers.engine_launcher),
        ("default_compose_file", &launchers.default_compose_file),
        ("change_dir", &launchers.change_dir),
    ];
    for (key, value) in fields {
        if value.trim().is_empty() {
            return Err(LaunchpadError::ConfigError(format!(
                "[launchers].{key} must not be empty"
            )));
        }
    }
    Ok(())
}

fn validate_terminal(cfg: &RawConfigFile) -> Result<()> {
    let argv = &cfg.terminal.command;
    if argv.is_empty() || argv[0].trim().is_empty() {
        return Err(LaunchpadError::ConfigError(
            "[terminal].command must name a program".to_string(),
        ));
    }
    if !argv.iter().any(|arg| arg.contains("{command}")) {
        return Err(LaunchpadError::ConfigError(
            "[terminal].command must contain a {command} placeholder".to_string(),
        ));
    }
    Ok(())
}

fn validate_run(cfg: &RawConfigFile) -> Result<()> {
    if cfg.run.tick_millis == 0 {
        return Err(LaunchpadError::ConfigError(
            "[run].tick_millis must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}
