// tests/shell_tasks.rs

//! Manifest-style shell tasks driven through the live strategy.

use std::sync::Arc;

use tempfile::TempDir;

use taskforge::env::RealEnvironment;
use taskforge::errors::TaskforgeError;
use taskforge::fs::RealFileSystem;
use taskforge::runner::{ExecutionContext, LiveStrategy, Task, TaskRunner, shell_action};
use taskforge_test_utils::init_tracing;

fn runner_in(dir: &TempDir) -> TaskRunner {
    let ctx = ExecutionContext::new(
        Arc::new(RealFileSystem),
        Arc::new(RealEnvironment),
        dir.path(),
    );
    TaskRunner::new(ctx)
}

#[test]
fn successful_command_completes_the_run() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let tasks = vec![Task::new("ok").with_action(shell_action("ok", "exit 0"))];

    runner_in(&dir).run(&tasks, &mut LiveStrategy::new()).unwrap();
}

#[test]
fn non_zero_exit_code_fails_the_task() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let tasks = vec![Task::new("bad").with_action(shell_action("bad", "exit 3"))];

    let err = runner_in(&dir)
        .run(&tasks, &mut LiveStrategy::new())
        .unwrap_err();

    match err {
        TaskforgeError::TaskFailed { task, reason } => {
            assert_eq!(task, "bad");
            assert!(reason.contains("3"));
        }
        other => panic!("expected TaskFailed, got: {other:?}"),
    }
}

#[test]
fn resolved_tool_paths_are_visible_to_actions() {
    init_tracing();
    let fixture = taskforge_test_utils::builders::ResolverFixture::new();
    fixture.env.set("CI", "1");

    let mut ctx = fixture.context();
    ctx.insert_tool_path("nuget", "/opt/nuget/nuget.exe".into());

    let tasks = vec![Task::new("check").with_action(Box::new(|ctx: &ExecutionContext| {
        assert_eq!(
            ctx.tool_path("nuget").unwrap().to_str().unwrap(),
            "/opt/nuget/nuget.exe"
        );
        assert_eq!(ctx.env().var("CI").as_deref(), Some("1"));
        Ok(())
    }))];

    TaskRunner::new(ctx)
        .run(&tasks, &mut LiveStrategy::new())
        .unwrap();
}

#[test]
fn commands_run_in_the_working_directory() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let tasks = vec![Task::new("touch").with_action(shell_action("touch", "echo hi > marker.txt"))];

    runner_in(&dir).run(&tasks, &mut LiveStrategy::new()).unwrap();

    assert!(dir.path().join("marker.txt").is_file());
}
