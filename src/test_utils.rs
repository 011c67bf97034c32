//! Test utilities for building temporary source trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for scanning.
///
/// The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        self.add_bytes(path, content.as_bytes())
    }

    /// Write raw bytes, e.g. content that is not valid UTF-8.
    pub fn add_bytes(&self, path: &str, content: &[u8]) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Populate a mixed-language project with `dirs` top-level directories,
    /// each holding `files_per_dir` files per language.
    pub fn with_sample_project(dirs: usize, files_per_dir: usize) -> Self {
        let tree = Self::new();
        for d in 0..dirs {
            for f in 0..files_per_dir {
                tree.add_file(&format!("proj{d}/src/Service{f}.cs"), SAMPLE_CSHARP);
                tree.add_file(&format!("proj{d}/web/component{f}.tsx"), SAMPLE_TSX);
                tree.add_file(&format!("proj{d}/tools/script{f}.py"), SAMPLE_PYTHON);
            }
            tree.add_file(&format!("proj{d}/node_modules/dep/index.js"), "ignored();\n");
        }
        tree
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

pub const SAMPLE_CSHARP: &str = r#"using System;

namespace Sample
{
    /// <summary>
    /// A sample service.
    /// </summary>
    public class Service
    {
        /* multi-line
           block comment */
        public int Add(int a, int b)
        {
            // add
            return a + b;
        }
    }
}
"#;

pub const SAMPLE_TSX: &str = r#"import React from "react";

// A sample component
export function Widget() {
  return (
    <div>
      {/* inline JSX comment */}
      <span>hello</span>
    </div>
  );
}
"#;

pub const SAMPLE_PYTHON: &str = r#""""Module docstring
spanning lines."""

# a comment
def main():
    return 1
"#;
