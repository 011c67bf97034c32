//! Directory pruning for tree walking

/// Directory names that are never descended into, at any depth.
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", ".git", "__pycache__", "bin", "obj", "dist"];

/// Check if a directory should be skipped entirely.
///
/// Matching is on the exact directory name, so `Bin` or `dist-utils` are
/// still visited.
pub fn is_excluded_dir(name: &str) -> bool {
    EXCLUDED_DIRS.contains(&name)
}
