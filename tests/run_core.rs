// tests/run_core.rs

use launchpad::engine::{RunCore, RunPhase, TaskAction, plan_task};
use launchpad::fs::mock::MockFileSystem;
use launchpad::types::TaskKind;
use launchpad_test_utils::builders::{
    TaskBuilder, container, delay, server_app, unix_launchers,
};

#[test]
fn core_walks_tasks_in_order_then_completes() {
    let fs = MockFileSystem::new();
    let launchers = unix_launchers();
    let mut core = RunCore::new(vec![delay("a", "1"), container("b", "web")]);

    assert_eq!(core.phase(), RunPhase::Idle);
    assert_eq!(core.len(), 2);

    let first = core.next_step(&fs, &launchers).unwrap();
    assert_eq!(first.task.index, 0);
    assert_eq!(first.task.name, "a");
    assert_eq!(first.action, TaskAction::Wait { seconds: 1 });
    assert_eq!(core.phase(), RunPhase::Running(0));

    let second = core.next_step(&fs, &launchers).unwrap();
    assert_eq!(second.task.kind, TaskKind::ContainerStart);
    assert_eq!(
        second.action,
        TaskAction::Exec {
            command_line: "podman start web".to_string()
        }
    );
    assert_eq!(core.phase(), RunPhase::Running(1));

    assert!(core.next_step(&fs, &launchers).is_none());
    assert_eq!(core.phase(), RunPhase::Completed);
    assert!(core.next_step(&fs, &launchers).is_none());
}

#[test]
fn empty_core_completes_immediately() {
    let mut core = RunCore::new(Vec::new());
    assert!(core.is_empty());
    assert!(core.next_step(&MockFileSystem::new(), &unix_launchers()).is_none());
    assert_eq!(core.phase(), RunPhase::Completed);
}

#[test]
fn cancelled_core_hands_out_nothing() {
    let fs = MockFileSystem::new();
    let launchers = unix_launchers();
    let mut core = RunCore::new(vec![delay("a", "1"), delay("b", "1")]);

    core.next_step(&fs, &launchers).unwrap();
    core.cancel();

    assert_eq!(core.phase(), RunPhase::Cancelled);
    assert!(core.next_step(&fs, &launchers).is_none());
    assert_eq!(core.phase(), RunPhase::Cancelled);
}

#[test]
fn cancel_after_completion_keeps_completed() {
    let mut core = RunCore::new(Vec::new());
    core.next_step(&MockFileSystem::new(), &unix_launchers());
    core.cancel();
    assert_eq!(core.phase(), RunPhase::Completed);
}

#[test]
fn plan_turns_failures_into_skips() {
    let fs = MockFileSystem::new();
    let launchers = unix_launchers();

    match plan_task(&server_app("api", "/missing.jar"), &fs, &launchers) {
        TaskAction::Skip { reason } => assert!(reason.contains("/missing.jar"), "{reason}"),
        other => panic!("expected Skip, got {other:?}"),
    }

    let unknown = TaskBuilder::new(TaskKind::Unrecognized("Kubernetes".into()), "k8s").build();
    assert_eq!(
        plan_task(&unknown, &fs, &launchers),
        TaskAction::Skip {
            reason: "unknown type".to_string()
        }
    );
}

#[test]
fn advance_hands_out_tasks_without_probing() {
    let mut core = RunCore::new(vec![server_app("api", "/missing.jar")]);

    let (task, descriptor) = core.advance().unwrap();
    assert_eq!(task.index, 0);
    assert_eq!(descriptor.param("jar"), "/missing.jar");
    assert_eq!(core.phase(), RunPhase::Running(0));

    assert!(core.advance().is_none());
    assert_eq!(core.phase(), RunPhase::Completed);
}
