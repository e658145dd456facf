// tests/resolver_real_fs.rs

//! The glob layer against a real directory tree.

use std::fs;
use std::sync::Arc;

use tempfile::TempDir;

use taskforge::env::mock::MockEnvironment;
use taskforge::fs::RealFileSystem;
use taskforge::tools::{LayeredToolResolver, ToolResolver, ToolSpec};

#[test]
fn finds_the_executable_under_a_real_tools_directory() {
    let dir = TempDir::new().unwrap();
    let tool_dir = dir.path().join("tools").join("nuget-4.0");
    fs::create_dir_all(&tool_dir).unwrap();
    let exe = tool_dir.join("nuget.exe");
    fs::write(&exe, b"").unwrap();

    let env = MockEnvironment::new();
    let mut resolver = LayeredToolResolver::new(
        ToolSpec::new("NuGet", "nuget.exe", "NUGET_EXE"),
        Arc::new(RealFileSystem),
        Arc::new(env),
    )
    .with_root(dir.path());

    let path = resolver.resolve_tool_path().unwrap();
    assert_eq!(path, exe);

    // Cached: deleting the file forces a fresh (and here, failing) walk.
    fs::remove_file(&exe).unwrap();
    assert!(resolver.resolve_tool_path().is_err());
}
