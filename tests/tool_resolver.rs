// tests/tool_resolver.rs

//! Precedence, caching and invalidation behaviour of the layered tool
//! resolver, observed through instrumented mock collaborators.

use std::path::PathBuf;

use taskforge::errors::TaskforgeError;
use taskforge::tools::ToolResolver;
use taskforge_test_utils::{builders::ResolverFixture, init_tracing};

#[test]
fn environment_override_wins_without_consulting_glob_or_path() {
    init_tracing();
    let fixture = ResolverFixture::new();
    fixture.fs.add_file("/opt/tool/tool.exe");
    fixture.env.set("TOOL_EXE", "/opt/tool/tool.exe");

    let mut resolver = fixture.resolver();
    let path = resolver.resolve_tool_path().unwrap();

    assert_eq!(path, PathBuf::from("/opt/tool/tool.exe"));
    // The glob layer walks directories; the PATH layer reads PATH. Neither
    // may run when the override hits.
    assert_eq!(fixture.fs.op_count("read_dir"), 0);
    assert_eq!(fixture.env.read_count("PATH"), 0);
}

#[test]
fn tools_directory_glob_used_when_no_override() {
    init_tracing();
    let fixture = ResolverFixture::new();
    fixture.fs.add_file("tools/sub/tool.exe");

    let mut resolver = fixture.resolver();
    let path = resolver.resolve_tool_path().unwrap();

    assert_eq!(path, PathBuf::from("tools/sub/tool.exe"));
    assert_eq!(fixture.env.read_count("TOOL_EXE"), 1);
    assert_eq!(fixture.env.read_count("PATH"), 0);
}

#[test]
fn override_pointing_at_missing_file_falls_through_to_glob() {
    init_tracing();
    let fixture = ResolverFixture::new();
    fixture.env.set("TOOL_EXE", "/nowhere/tool.exe");
    fixture.fs.add_file("tools/bin/tool.exe");

    let mut resolver = fixture.resolver();
    let path = resolver.resolve_tool_path().unwrap();

    assert_eq!(path, PathBuf::from("tools/bin/tool.exe"));
}

#[test]
fn path_search_is_the_last_resort() {
    init_tracing();
    let fixture = ResolverFixture::new();
    fixture.env.set("PATH", "/usr/bin;/usr/local/bin");
    fixture.fs.add_dir("/usr/bin");
    fixture.fs.add_dir("/usr/local/bin");
    fixture.fs.add_file("/usr/local/bin/tool.exe");

    let mut resolver = fixture.resolver();
    let path = resolver.resolve_tool_path().unwrap();

    assert_eq!(path, PathBuf::from("/usr/local/bin/tool.exe"));
    assert_eq!(fixture.env.read_count("TOOL_EXE"), 1);
    assert_eq!(fixture.env.read_count("PATH"), 1);
}

#[test]
fn path_entries_that_are_not_directories_are_skipped() {
    init_tracing();
    let fixture = ResolverFixture::new();
    fixture.env.set("PATH", "/does/not/exist;;/usr/local/bin");
    fixture.fs.add_dir("/usr/local/bin");
    fixture.fs.add_file("/usr/local/bin/tool.exe");

    let mut resolver = fixture.resolver();
    let path = resolver.resolve_tool_path().unwrap();

    assert_eq!(path, PathBuf::from("/usr/local/bin/tool.exe"));
}

#[test]
fn exhaustion_fails_with_tool_not_found() {
    init_tracing();
    let fixture = ResolverFixture::new();

    let mut resolver = fixture.resolver();
    let err = resolver.resolve_tool_path().unwrap_err();

    match err {
        TaskforgeError::ToolNotFound { tool } => assert_eq!(tool, "tool"),
        other => panic!("expected ToolNotFound, got: {other:?}"),
    }
}

#[test]
fn second_call_hits_the_cache_but_revalidates_existence() {
    init_tracing();
    let fixture = ResolverFixture::new();
    fixture.fs.add_file("/opt/tool/tool.exe");
    fixture.env.set("TOOL_EXE", "/opt/tool/tool.exe");

    let mut resolver = fixture.resolver();
    let first = resolver.resolve_tool_path().unwrap();

    let env_reads = fixture.env.read_count("TOOL_EXE");
    let is_file_before = fixture.fs.op_count("is_file");

    let second = resolver.resolve_tool_path().unwrap();

    assert_eq!(first, second);
    // No re-walk of layers 2-4: the override variable was not read again.
    assert_eq!(fixture.env.read_count("TOOL_EXE"), env_reads);
    // But the cached file's existence was checked exactly once more.
    assert_eq!(fixture.fs.op_count("is_file"), is_file_before + 1);
}

#[test]
fn stale_cache_entry_restarts_resolution_from_the_override_layer() {
    init_tracing();
    let fixture = ResolverFixture::new();
    fixture.fs.add_file("tools/sub/tool.exe");

    let mut resolver = fixture.resolver();
    let first = resolver.resolve_tool_path().unwrap();
    assert_eq!(first, PathBuf::from("tools/sub/tool.exe"));

    // The cached file disappears; an override now points elsewhere.
    fixture.fs.remove_file("tools/sub/tool.exe");
    fixture.fs.add_file("/opt/tool/tool.exe");
    fixture.env.set("TOOL_EXE", "/opt/tool/tool.exe");

    let second = resolver.resolve_tool_path().unwrap();
    assert_eq!(second, PathBuf::from("/opt/tool/tool.exe"));
}

#[test]
fn stale_cache_with_no_fallback_left_fails() {
    init_tracing();
    let fixture = ResolverFixture::new();
    fixture.fs.add_file("tools/bin/tool.exe");

    let mut resolver = fixture.resolver();
    resolver.resolve_tool_path().unwrap();

    fixture.fs.remove_file("tools/bin/tool.exe");

    let err = resolver.resolve_tool_path().unwrap_err();
    assert!(matches!(err, TaskforgeError::ToolNotFound { .. }));
}

#[test]
fn resolver_reports_its_tool_name() {
    let fixture = ResolverFixture::new();
    let resolver = fixture.resolver();
    assert_eq!(resolver.name(), "tool");
}
