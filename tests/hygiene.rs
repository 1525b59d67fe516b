//! Hygiene: source budgets for production code under `src/`.
//!
//! A panic inside a wasm event handler aborts the instance and leaves the page
//! half-wired, so panicking constructs are budgeted at zero. DOM writes such as
//! `set_property` and `toggle_with_force` return `Result`s that are cosmetic
//! to lose; those discards are budgeted at today's count. Budgets only ratchet
//! down: remove an existing hit before adding a new one.

use std::fs;
use std::path::{Path, PathBuf};

const MAX_UNWRAP: usize = 0;
const MAX_EXPECT: usize = 0;
const MAX_PANIC: usize = 0;
const MAX_UNREACHABLE: usize = 0;
const MAX_TODO: usize = 0;
const MAX_UNIMPLEMENTED: usize = 0;
const MAX_ALLOW_DEAD_CODE: usize = 0;

// Discarded DOM results.
const MAX_SILENT_DISCARD: usize = 21;
const MAX_DOT_OK: usize = 10;

/// Production sources: every `.rs` under `src/` except `*_test.rs`.
fn production_sources() -> Vec<(PathBuf, String)> {
    let mut out = Vec::new();
    walk(Path::new("src"), &mut out);
    out
}

fn walk(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_test || path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((path, content));
        }
    }
}

/// Fail when more than `max` lines contain `pattern`, listing where they are.
fn enforce(pattern: &str, max: usize) {
    let hits: Vec<(String, usize)> = production_sources()
        .into_iter()
        .filter_map(|(path, content)| {
            let count = content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (path.display().to_string(), count))
        })
        .collect();
    let found: usize = hits.iter().map(|(_, count)| count).sum();
    let listing = hits
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(found <= max, "`{pattern}` budget exceeded: found {found}, max {max}.\n{listing}");
}

#[test]
fn unwrap_budget() {
    enforce(".unwrap()", MAX_UNWRAP);
}

#[test]
fn expect_budget() {
    enforce(".expect(", MAX_EXPECT);
}

#[test]
fn panic_budget() {
    enforce("panic!(", MAX_PANIC);
}

#[test]
fn unreachable_budget() {
    enforce("unreachable!(", MAX_UNREACHABLE);
}

#[test]
fn todo_budget() {
    enforce("todo!(", MAX_TODO);
}

#[test]
fn unimplemented_budget() {
    enforce("unimplemented!(", MAX_UNIMPLEMENTED);
}

#[test]
fn allow_dead_code_budget() {
    enforce("#[allow(dead_code)]", MAX_ALLOW_DEAD_CODE);
}

#[test]
fn silent_discard_budget() {
    enforce("let _ =", MAX_SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    enforce(".ok()", MAX_DOT_OK);
}
