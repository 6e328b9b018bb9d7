//! Support-import insertion for migrated files.
//!
//! Some replacements produce code that needs a helper in scope (for example a
//! `cn(` class-merging call). An [`ImportRule`] names the marker substrings
//! that signal the need and the import line to add. The line goes right after
//! the last statement of the top-of-file import block.

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Matches the trimmed line that closes an import statement.
static IMPORT_END_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:\bfrom\s*['"][^'"]+['"]|^import\s*['"][^'"]+['"])\s*;?\s*$"#).unwrap()
});

/// Matches an `import <clause> from "<module>"` statement, possibly spread over
/// several lines. Captures the clause and the module specifier.
static IMPORT_STMT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^\s*import\s+(?:type\s+)?([^;'"]+?)\s*\bfrom\s*['"]([^'"]+)['"]"#).unwrap()
});

/// Matches a module directive such as `'use client';`.
static DIRECTIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^['"]use [a-z]+['"]\s*;?$"#).unwrap());

/// Marker substrings and the import line they require.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImportRule {
    pub markers: Vec<String>,
    pub line: String,
}

impl Default for ImportRule {
    fn default() -> Self {
        Self {
            markers: vec!["cn(".to_string()],
            line: r#"import { cn } from "@/lib/utils";"#.to_string(),
        }
    }
}

impl ImportRule {
    /// `true` if `text` contains a marker and does not import what `line` imports yet.
    ///
    /// When `line` is an `import ... from "module"` statement, it counts as
    /// present once every name it binds is already bound by some import in
    /// `text`, whatever the quoting, spacing, or other names on that import. A
    /// second binding of the same name would not compile. Any other `line` must
    /// appear verbatim (ignoring surrounding whitespace).
    pub fn is_needed(&self, text: &str) -> bool {
        if !self.markers.iter().any(|m| text.contains(m.as_str())) {
            return false;
        }
        match parse_imports(&self.line).first() {
            Some(wanted) if !wanted.names.is_empty() => {
                let existing = parse_imports(text);
                wanted.names.iter().any(|name| {
                    match existing.iter().find(|stmt| stmt.binds(name)) {
                        Some(stmt) => {
                            if stmt.module != wanted.module {
                                debug!(
                                    "'{}' is already imported from '{}'; not adding {}",
                                    name,
                                    stmt.module,
                                    self.line.trim()
                                );
                            }
                            false
                        }
                        None => true,
                    }
                })
            }
            _ => {
                let wanted = self.line.trim();
                !text.lines().any(|l| l.trim() == wanted)
            }
        }
    }
}

/// A parsed `import ... from "module"` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ImportStatement {
    module: String,
    /// Local names the statement brings into scope.
    names: Vec<String>,
}

impl ImportStatement {
    fn binds(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

fn parse_imports(text: &str) -> Vec<ImportStatement> {
    IMPORT_STMT_RE
        .captures_iter(text)
        .map(|caps| ImportStatement {
            names: bound_names(&caps[1]),
            module: caps[2].to_string(),
        })
        .collect()
}

/// Local names bound by an import clause: `React`, `{ a, b as c }`, `* as ns`.
fn bound_names(clause: &str) -> Vec<String> {
    let (outer, named) = match (clause.find('{'), clause.rfind('}')) {
        (Some(open), Some(close)) if open < close => (
            format!("{},{}", &clause[..open], &clause[close + 1..]),
            &clause[open + 1..close],
        ),
        _ => (clause.to_string(), ""),
    };
    outer
        .split(',')
        .chain(named.split(','))
        // `a as b` and `type a` bind their last word; `* as ns` binds `ns`.
        .filter_map(|spec| spec.split_whitespace().last())
        .filter(|name| *name != "*")
        .map(str::to_string)
        .collect()
}

/// Inserts `import_line` after the top-of-file import block.
///
/// Without imports, the line goes after any leading directives and comments,
/// or at the very top. The file's line ending style (`\n` or `\r\n`) is kept.
pub fn insert_import(text: &str, import_line: &str) -> String {
    let newline = if text.contains("\r\n") { "\r\n" } else { "\n" };
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    let at = insertion_index(&lines);

    let mut out = String::with_capacity(text.len() + import_line.len() + 2);
    for line in &lines[..at] {
        out.push_str(line);
    }
    if !out.is_empty() && !out.ends_with('\n') {
        out.push_str(newline);
    }
    out.push_str(import_line.trim());
    out.push_str(newline);
    for line in &lines[at..] {
        out.push_str(line);
    }
    out
}

/// Index of the line before which the new import is inserted.
fn insertion_index(lines: &[&str]) -> usize {
    let mut insert_at = 0;
    let mut seen_import = false;
    let mut in_import = false;
    let mut in_block_comment = false;

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();

        if in_import {
            if IMPORT_END_RE.is_match(line) {
                in_import = false;
                insert_at = i + 1;
            }
            continue;
        }
        if in_block_comment {
            if line.contains("*/") {
                in_block_comment = false;
                if !seen_import {
                    insert_at = i + 1;
                }
            }
            continue;
        }
        if line.is_empty() {
            continue;
        }
        if line.starts_with("//") {
            if !seen_import {
                insert_at = i + 1;
            }
            continue;
        }
        if line.starts_with("/*") {
            if line.contains("*/") {
                if !seen_import {
                    insert_at = i + 1;
                }
            } else {
                in_block_comment = true;
            }
            continue;
        }
        if DIRECTIVE_RE.is_match(line) {
            if !seen_import {
                insert_at = i + 1;
            }
            continue;
        }
        if is_import_start(line) {
            seen_import = true;
            if IMPORT_END_RE.is_match(line) {
                insert_at = i + 1;
            } else {
                in_import = true;
            }
            continue;
        }
        break;
    }
    insert_at
}

fn is_import_start(line: &str) -> bool {
    line.starts_with("import ")
        || line.starts_with("import{")
        || line.starts_with("import'")
        || line.starts_with("import\"")
}
