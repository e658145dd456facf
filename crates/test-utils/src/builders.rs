#![allow(dead_code)]

use std::sync::Arc;

use taskforge::env::mock::MockEnvironment;
use taskforge::fs::mock::MockFileSystem;
use taskforge::runner::ExecutionContext;
use taskforge::tools::{LayeredToolResolver, ToolSpec};

/// Shared mock filesystem + environment for resolver tests.
///
/// The mocks are cheaply cloneable handles over shared state, so a fixture
/// can hand clones to a resolver and still inspect call counts afterwards.
/// The PATH separator is pinned to `;` so PATH-layer tests behave the same
/// on every platform.
#[derive(Debug, Clone, Default)]
pub struct ResolverFixture {
    pub fs: MockFileSystem,
    pub env: MockEnvironment,
}

impl ResolverFixture {
    pub fn new() -> Self {
        Self {
            fs: MockFileSystem::new(),
            env: MockEnvironment::new(),
        }
    }

    /// A resolver for the canonical test tool: name `tool`, executable
    /// `tool.exe`, override variable `TOOL_EXE`.
    pub fn resolver(&self) -> LayeredToolResolver {
        self.resolver_for(ToolSpec::new("tool", "tool.exe", "TOOL_EXE"))
    }

    pub fn resolver_for(&self, spec: ToolSpec) -> LayeredToolResolver {
        LayeredToolResolver::new(
            spec,
            Arc::new(self.fs.clone()),
            Arc::new(self.env.clone()),
        )
        .with_path_separator(';')
    }

    /// An execution context backed by the fixture's mocks.
    pub fn context(&self) -> ExecutionContext {
        ExecutionContext::new(
            Arc::new(self.fs.clone()),
            Arc::new(self.env.clone()),
            ".",
        )
    }
}
