// tests/cli_args.rs

use std::path::PathBuf;

use clap::Parser;

use launchpad::cli::{CliArgs, Command, parse_profile_name};
use launchpad::config::default_config_path;
use launchpad::types::TaskKind;

fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
    CliArgs::try_parse_from(std::iter::once("launchpad").chain(args.iter().copied()))
}

#[test]
fn config_defaults_to_the_standard_path() {
    let args = parse(&["profiles"]).unwrap();
    assert_eq!(args.config, default_config_path());
    assert_eq!(args.config, PathBuf::from("Launchpad.toml"));
    assert!(args.store.is_none());
}

#[test]
fn profile_names_are_trimmed() {
    match parse(&["create", "  dev "]).unwrap().command {
        Command::Create { name } => assert_eq!(name, "dev"),
        other => panic!("expected Create, got {other:?}"),
    }
    match parse(&["delete", " dev"]).unwrap().command {
        Command::Delete { name } => assert_eq!(name, "dev"),
        other => panic!("expected Delete, got {other:?}"),
    }
    match parse(&["rename", "dev ", " staging "]).unwrap().command {
        Command::Rename { from, to } => {
            assert_eq!(from, "dev");
            assert_eq!(to, "staging");
        }
        other => panic!("expected Rename, got {other:?}"),
    }
}

#[test]
fn blank_profile_names_are_rejected() {
    assert!(parse(&["create", "   "]).is_err());
    assert!(parse(&["delete", ""]).is_err());
    assert!(parse(&["rename", "dev", " "]).is_err());
    assert!(parse(&["rename", "\t", "dev"]).is_err());
    assert!(parse_profile_name("  ").is_err());
}

#[test]
fn add_collects_type_name_and_params() {
    let args = parse(&[
        "add",
        "dev",
        "--type",
        "Docker Compose",
        "--name",
        "db",
        "-p",
        "directory=/srv/db",
        "--param",
        "compose_file=compose.yaml",
    ])
    .unwrap();

    match args.command {
        Command::Add { profile, task } => {
            assert_eq!(profile, "dev");
            assert_eq!(task.kind, TaskKind::ComposeStack);
            assert_eq!(task.name, "db");
            assert_eq!(
                task.params,
                vec![
                    ("directory".to_string(), "/srv/db".to_string()),
                    ("compose_file".to_string(), "compose.yaml".to_string()),
                ]
            );
        }
        other => panic!("expected Add, got {other:?}"),
    }
}

#[test]
fn malformed_param_and_unknown_type_are_rejected() {
    assert!(parse(&["add", "dev", "--type", "delay", "--name", "w", "-p", "seconds"]).is_err());
    assert!(parse(&["add", "dev", "--type", "kubernetes", "--name", "k"]).is_err());
}
