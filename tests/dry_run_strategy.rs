// tests/dry_run_strategy.rs

//! Dry-run guarantees: numbered previews, and absolutely no real work.

use proptest::prelude::*;

use taskforge::runner::{DryRunStrategy, ExecutionStrategy, Task, TaskRunner};
use taskforge_test_utils::{builders::ResolverFixture, init_tracing, probes::SpyAction};

fn preview(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}

#[test]
fn ordinals_start_at_one_and_increase_per_task() {
    init_tracing();
    let fixture = ResolverFixture::new();
    let ctx = fixture.context();

    let tasks = vec![Task::new("restore"), Task::new("build"), Task::new("test")];

    let mut buf = Vec::new();
    {
        let mut strategy = DryRunStrategy::new(&mut buf);
        for task in &tasks {
            strategy.execute(Some(task), &ctx).unwrap();
        }
    }

    assert_eq!(preview(buf), "1. restore\n2. build\n3. test\n");
}

#[test]
fn null_task_neither_increments_nor_reports() {
    init_tracing();
    let fixture = ResolverFixture::new();
    let ctx = fixture.context();

    let mut buf = Vec::new();
    {
        let mut strategy = DryRunStrategy::new(&mut buf);
        strategy.execute(Some(&Task::new("a")), &ctx).unwrap();
        strategy.execute(None, &ctx).unwrap();
        strategy.execute(Some(&Task::new("b")), &ctx).unwrap();
    }

    assert_eq!(preview(buf), "1. a\n2. b\n");
}

#[test]
fn action_is_never_invoked() {
    init_tracing();
    let fixture = ResolverFixture::new();
    let ctx = fixture.context();

    let spy = SpyAction::new();
    let task = Task::new("build").with_action(spy.action());

    let mut buf = Vec::new();
    let mut strategy = DryRunStrategy::new(&mut buf);
    strategy.execute(Some(&task), &ctx).unwrap();

    assert_eq!(spy.calls(), 0);
}

#[test]
fn setup_teardown_and_error_hooks_are_suppressed() {
    init_tracing();
    let fixture = ResolverFixture::new();
    let ctx = fixture.context();

    let spy = SpyAction::new();
    let setup = spy.action();
    let teardown = spy.action();
    let finalizer = spy.action();
    let reporter = spy.error_action();
    let handler = spy.error_action();

    let mut buf = Vec::new();
    let mut strategy = DryRunStrategy::new(&mut buf);

    strategy.perform_setup(Some(&setup), &ctx).unwrap();
    strategy.perform_teardown(Some(&teardown), &ctx).unwrap();
    strategy.invoke_finally(Some(&finalizer), &ctx).unwrap();
    strategy.report_errors(
        &reporter,
        &taskforge::errors::TaskforgeError::ConfigError("boom".into()),
    );
    strategy
        .handle_errors(
            &handler,
            taskforge::errors::TaskforgeError::ConfigError("boom".into()),
        )
        .unwrap();

    assert_eq!(spy.calls(), 0);
    assert!(buf.is_empty());
}

#[test]
fn full_run_previews_failing_tasks_without_failing() {
    init_tracing();
    let fixture = ResolverFixture::new();

    let spy = SpyAction::new();
    let tasks = vec![
        Task::new("broken").with_action(spy.failing_action("broken")),
        Task::new("after").with_action(spy.action()),
    ];

    let runner = TaskRunner::new(fixture.context());
    let mut buf = Vec::new();
    {
        let mut strategy = DryRunStrategy::new(&mut buf);
        runner.run(&tasks, &mut strategy).unwrap();
    }

    // No action ran, so nothing could fail; both tasks are enumerated.
    assert_eq!(spy.calls(), 0);
    assert_eq!(preview(buf), "1. broken\n2. after\n");
}

#[test]
fn skipped_tasks_are_not_reported_and_do_not_consume_ordinals() {
    init_tracing();
    let fixture = ResolverFixture::new();

    let tasks = vec![
        Task::new("first"),
        Task::new("gated").with_criteria(Box::new(|_| false)),
        Task::new("last"),
    ];

    let runner = TaskRunner::new(fixture.context());
    let mut buf = Vec::new();
    {
        let mut strategy = DryRunStrategy::new(&mut buf);
        runner.run(&tasks, &mut strategy).unwrap();
    }

    assert_eq!(preview(buf), "1. first\n2. last\n");
}

proptest! {
    /// For any N non-null tasks, the emitted ordinals are exactly 1..=N in
    /// call order.
    #[test]
    fn ordinal_sequence_is_exactly_one_to_n(names in prop::collection::vec("[a-z]{1,8}", 1..40)) {
        let fixture = ResolverFixture::new();
        let ctx = fixture.context();

        let mut buf = Vec::new();
        {
            let mut strategy = DryRunStrategy::new(&mut buf);
            for name in &names {
                strategy.execute(Some(&Task::new(name.clone())), &ctx).unwrap();
            }
        }

        let expected: String = names
            .iter()
            .enumerate()
            .map(|(i, name)| format!("{}. {}\n", i + 1, name))
            .collect();
        prop_assert_eq!(preview(buf), expected);
    }
}
