// tests/task_validation.rs

use launchpad::fs::mock::MockFileSystem;
use launchpad::task::validate;
use launchpad::types::TaskKind;
use launchpad_test_utils::builders::{
    TaskBuilder, compose, container, container_host, delay, message_broker, search_engine,
    server_app, unix_launchers,
};

fn reason(result: Result<(), launchpad::task::ValidationFailure>) -> String {
    result.expect_err("expected a validation failure").reason
}

#[test]
fn server_app_needs_an_existing_readable_jar() {
    let fs = MockFileSystem::new();
    let launchers = unix_launchers();

    let blank = server_app("api", "   ");
    assert!(reason(validate(&blank, &fs, &launchers)).contains("not set"));

    let missing = server_app("api", "/opt/api.jar");
    assert!(reason(validate(&missing, &fs, &launchers)).contains("not found"));

    fs.add_file("/opt/api.jar", b"PK");
    assert!(validate(&missing, &fs, &launchers).is_ok());

    fs.set_unreadable("/opt/api.jar");
    assert!(reason(validate(&missing, &fs, &launchers)).contains("not readable"));
}

#[test]
fn server_app_path_is_trimmed_before_probing() {
    let fs = MockFileSystem::new();
    fs.add_file("/opt/api.jar", b"PK");

    let padded = server_app("api", "  /opt/api.jar \t");

    assert!(validate(&padded, &fs, &unix_launchers()).is_ok());
}

#[test]
fn broker_and_engine_need_their_launcher_script() {
    let fs = MockFileSystem::new();
    let launchers = unix_launchers();
    fs.add_file("/opt/activemq/bin/activemq", b"#!/bin/sh");

    assert!(validate(&message_broker("mq", "/opt/activemq"), &fs, &launchers).is_ok());
    assert!(reason(validate(&message_broker("mq", ""), &fs, &launchers)).contains("not set"));

    let es = search_engine("es", "/opt/es");
    let msg = reason(validate(&es, &fs, &launchers));
    assert!(msg.contains("/opt/es/bin/elasticsearch"), "{msg}");

    fs.add_file("/opt/es/bin/elasticsearch", b"#!/bin/sh");
    assert!(validate(&es, &fs, &launchers).is_ok());
}

#[test]
fn container_start_needs_a_name_and_host_start_always_passes() {
    let fs = MockFileSystem::new();
    let launchers = unix_launchers();

    assert!(validate(&container("web", "web-1"), &fs, &launchers).is_ok());
    assert!(validate(&container("web", "  "), &fs, &launchers).is_err());
    assert!(validate(&container_host("vm"), &fs, &launchers).is_ok());
}

#[test]
fn compose_stack_checks_directory_then_file() {
    let fs = MockFileSystem::new();
    let launchers = unix_launchers();

    assert!(reason(validate(&compose("db", "", ""), &fs, &launchers)).contains("not set"));

    let task = compose("db", "/srv/db", "");
    assert!(reason(validate(&task, &fs, &launchers)).contains("directory not found"));

    fs.add_dir("/srv/db");
    assert!(reason(validate(&task, &fs, &launchers)).contains("docker-compose.yaml"));

    fs.add_file("/srv/db/docker-compose.yaml", b"services: {}");
    assert!(validate(&task, &fs, &launchers).is_ok());

    let custom = compose("db", "/srv/db", "compose.dev.yaml");
    assert!(validate(&custom, &fs, &launchers).is_err());
}

#[test]
fn blank_compose_file_resolves_like_the_default() {
    let launchers = unix_launchers();
    let blank = compose("db", "/srv/db", "  ");
    let explicit = compose("db", "/srv/db", "docker-compose.yaml");

    let without = MockFileSystem::new();
    without.add_dir("/srv/db");
    let with = MockFileSystem::new();
    with.add_file("/srv/db/docker-compose.yaml", b"");

    for fs in [&without, &with] {
        assert_eq!(
            validate(&blank, fs, &launchers),
            validate(&explicit, fs, &launchers)
        );
    }
}

#[test]
fn delay_needs_a_non_negative_integer() {
    let fs = MockFileSystem::new();
    let launchers = unix_launchers();

    assert!(validate(&delay("wait", "0"), &fs, &launchers).is_ok());
    assert!(validate(&delay("wait", " 12 "), &fs, &launchers).is_ok());

    for bad in ["", "abc", "-1", "1.5"] {
        assert!(
            validate(&delay("wait", bad), &fs, &launchers).is_err(),
            "{bad:?} should be rejected"
        );
    }
}

#[test]
fn validation_is_repeatable() {
    let fs = MockFileSystem::new();
    fs.add_file("/opt/api.jar", b"PK");
    let launchers = unix_launchers();
    let tasks = [
        server_app("api", "/opt/api.jar"),
        server_app("api", "/missing.jar"),
        delay("wait", "x"),
    ];

    for task in &tasks {
        assert_eq!(
            validate(task, &fs, &launchers),
            validate(task, &fs, &launchers)
        );
    }
}

#[test]
fn unrecognized_kinds_pass_validation() {
    let fs = MockFileSystem::new();
    let task = TaskBuilder::new(TaskKind::Unrecognized("Kubernetes".into()), "k8s")
        .param("context", "kind")
        .build();

    assert!(validate(&task, &fs, &unix_launchers()).is_ok());
}
