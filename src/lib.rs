// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod exec;
pub mod fs;
pub mod logging;
pub mod profile;
pub mod task;
pub mod types;

use std::sync::Arc;

use anyhow::Result;
use tokio_stream::StreamExt;
use tracing::{debug, info};

use crate::cli::{CliArgs, Command, TaskArgs};
use crate::config::{ConfigFile, load_and_validate};
use crate::engine::{Orchestrator, RunEvent, RunOptions, TaskAction};
use crate::exec::ShellSpawner;
use crate::fs::{FileSystem, RealFileSystem};
use crate::profile::{ProfileStore, TaskDescriptor};
use crate::types::TaskKind;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - the profile store on the real filesystem
/// - the orchestrator with the shell spawner (for `run`)
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let cfg = load_and_validate(&args.config)?;
    let store_path = args.store.clone().unwrap_or_else(|| cfg.store.path.clone());

    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
    let store = ProfileStore::open(fs, store_path);

    match args.command {
        Command::Profiles => {
            for name in store.profile_names() {
                println!("{name}");
            }
        }
        Command::Create { name } => store.create_profile(&name)?,
        Command::Delete { name } => store.delete_profile(&name)?,
        Command::Rename { from, to } => store.rename_profile(&from, &to)?,
        Command::Show { name } => print_profile(&store, &name)?,
        Command::Add { profile, task } => store.append_task(&profile, build_task(task)?)?,
        Command::Edit {
            profile,
            index,
            task,
        } => store.replace_task(&profile, index, build_task(task)?)?,
        Command::Remove { profile, index } => {
            let removed = store.remove_task(&profile, index)?;
            println!("removed [{index}] {}", removed.name());
        }
        Command::Move { profile, from, to } => store.move_task(&profile, from, to)?,
        Command::Types => print_types(),
        Command::Check { profile } => print_check(&cfg, &store, &profile)?,
        Command::Run { profile } => run_profile(&cfg, &store, &profile).await?,
    }

    Ok(())
}

fn build_task(args: TaskArgs) -> Result<TaskDescriptor> {
    let task = TaskDescriptor::new(args.kind, args.name.trim(), args.params)?;
    Ok(task)
}

/// Launch a profile snapshot and print its events until the run ends.
async fn run_profile(cfg: &ConfigFile, store: &ProfileStore, profile: &str) -> Result<()> {
    let tasks = store.snapshot(profile)?;
    if tasks.is_empty() {
        println!("profile '{profile}' has no tasks");
        return Ok(());
    }

    let orchestrator = Orchestrator::new(
        Arc::new(RealFileSystem),
        Arc::new(ShellSpawner::from_config(&cfg.terminal)),
        cfg.launchers.clone(),
        RunOptions::from(cfg.run),
    );

    let handle = orchestrator.launch(profile, tasks);
    let (mut events, cancel) = handle.into_stream();

    // Ctrl-C → stop after the current task.
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            info!("Ctrl+C received; stopping run after the current task");
            cancel.cancel();
        });
    }

    while let Some(event) = events.next().await {
        print_event(&event);
    }

    debug!(profile = %profile, "event stream closed");
    Ok(())
}

fn print_event(event: &RunEvent) {
    match event {
        RunEvent::Starting { task } => println!("> {} [{}]", task.name, task.kind),
        RunEvent::Tick { remaining, .. } => println!("  {remaining}s..."),
        RunEvent::Skipped { reason, .. } => println!("  skipped: {reason}"),
        RunEvent::Completed { .. } => println!("  done"),
        RunEvent::Failed { error, .. } => println!("  failed: {error}"),
        RunEvent::RunCompleted => println!("\n-- finished --"),
        RunEvent::Cancelled => println!("\n-- cancelled --"),
    }
}

fn print_profile(store: &ProfileStore, name: &str) -> Result<()> {
    let profile = store
        .get_profile(name)
        .ok_or_else(|| errors::LaunchpadError::ProfileNotFound(name.to_string()))?;

    println!("{} ({} tasks)", profile.name(), profile.tasks().len());
    for (index, task) in profile.tasks().iter().enumerate() {
        println!("  [{index}] {} ({})", task.name(), task.kind());
        for (key, value) in task.parameters() {
            if !value.is_empty() {
                println!("        {key}: {value}");
            }
        }
    }
    Ok(())
}

fn print_types() {
    for kind in TaskKind::ALL.iter() {
        println!("{kind}");
        for spec in kind.parameters().unwrap_or(&[]) {
            let marker = if spec.required { "required" } else { "optional" };
            println!("    {:<14} {:<9} {}", spec.key, marker, spec.label);
        }
    }
}

/// Validate every task without launching anything.
fn print_check(cfg: &ConfigFile, store: &ProfileStore, profile: &str) -> Result<()> {
    let tasks = store.snapshot(profile)?;
    println!("launchpad check: {profile} ({} tasks)", tasks.len());

    for (index, task) in tasks.iter().enumerate() {
        println!("  [{index}] {} ({})", task.name(), task.kind());
        match engine::plan_task(task, &RealFileSystem, &cfg.launchers) {
            TaskAction::Skip { reason } => println!("      would skip: {reason}"),
            TaskAction::Wait { seconds } => println!("      wait: {seconds}s"),
            TaskAction::Exec { command_line } => println!("      cmd: {command_line}"),
        }
    }

    debug!("check complete (no execution)");
    Ok(())
}
