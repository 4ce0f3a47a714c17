//! Hygiene — enforces coding standards at test time
//!
//! Scans `src/` for patterns that would let a page enhancement crash the
//! module or swallow a failure without logging it. Every budget is zero.
//! Test files (`*_test.rs`) are exempt.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    Budget { pattern: ".unwrap()", max: 0, why: "panics abort the whole module" },
    Budget { pattern: ".expect(", max: 0, why: "panics abort the whole module" },
    Budget { pattern: "panic!(", max: 0, why: "panics abort the whole module" },
    Budget { pattern: "unreachable!(", max: 0, why: "panics abort the whole module" },
    Budget { pattern: "todo!(", max: 0, why: "stubs must not ship" },
    Budget { pattern: "unimplemented!(", max: 0, why: "stubs must not ship" },
    Budget { pattern: "let _ =", max: 0, why: "errors must be logged, not discarded" },
    Budget { pattern: ".ok()", max: 0, why: "errors must be logged, not discarded" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "dead code is deleted, not silenced" },
    Budget { pattern: "Reflect::set(", max: 0, why: "nothing is registered on page globals" },
];

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn count_in_source(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn source_tree_is_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "hygiene scan found no src/lib.rs");
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut violations = Vec::new();
    for budget in BUDGETS {
        let hits = count_in_source(&files, budget.pattern);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let detail = hits
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            violations.push(format!(
                "{} budget exceeded: found {count}, max {} ({})\n{detail}",
                budget.pattern, budget.max, budget.why
            ));
        }
    }
    assert!(violations.is_empty(), "{}", violations.join("\n"));
}
