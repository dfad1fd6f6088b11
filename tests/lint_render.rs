//! Lint: keep render code a pure function of the display snapshot.
//!
//! Two rules are checked over the sources under `src/games/`:
//!
//! 1. Any `[X]`-style key text displayed in a `render.rs` must be registered
//!    as a click target via `push_clickable()`. Using
//!    `cl.push(Line::from(... "[1]..." ...))` renders the text but makes it
//!    un-clickable, a common source of tap bugs on mobile.
//! 2. `render.rs` and `view.rs` must not re-derive economy numbers. Prices,
//!    rates and the click window belong to `catalog.rs` / `logic.rs`; the
//!    renderer only reads strings and flags from the view snapshot.

use std::fs;
use std::path::Path;

/// Check if a string literal contains a bracket-key pattern like `[C]`, `[1]`.
fn contains_bracket_key(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() < 3 {
        return false;
    }
    for i in 0..bytes.len() - 2 {
        if bytes[i] == b'[' && bytes[i + 2] == b']' {
            let ch = bytes[i + 1];
            if ch.is_ascii_alphanumeric() || b"-=!~{}|\\".contains(&ch) {
                return true;
            }
        }
    }
    false
}

/// Source before the first `#[cfg(test)]`. Test modules may build state.
fn non_test_source(source: &str) -> &str {
    match source.find("#[cfg(test)]") {
        Some(idx) => &source[..idx],
        None => source,
    }
}

fn is_comment(trimmed: &str) -> bool {
    trimmed.starts_with("//")
}

/// Scan source for `push(` calls (non-clickable) containing bracket-key patterns.
fn find_bracket_key_in_push(source: &str) -> Vec<(usize, String)> {
    let mut violations = Vec::new();

    for (line_num_0, line) in source.lines().enumerate() {
        let trimmed = line.trim();
        if is_comment(trimmed) || !contains_bracket_key(line) {
            continue;
        }

        let has_push = line.contains(".push(");
        let has_clickable = line.contains("push_clickable(");

        if has_push && !has_clickable {
            violations.push((line_num_0 + 1, trimmed.to_string()));
        }
    }

    violations
}

/// Tokens that mean a display file is computing economy numbers itself.
const ECONOMY_TOKENS: &[&str] = &[
    "1.15",
    "powi",
    "powf",
    "COST_GROWTH",
    "CLICK_WINDOW_MS",
    "base_cost",
    ".rate()",
];

/// Tokens that mean the renderer is reaching past the view snapshot.
const MODEL_TOKENS: &[&str] = &["FrisbeeState", "logic::"];

fn find_tokens(source: &str, tokens: &[&str]) -> Vec<(usize, String)> {
    let mut violations = Vec::new();
    for (line_num_0, line) in non_test_source(source).lines().enumerate() {
        let trimmed = line.trim();
        if is_comment(trimmed) {
            continue;
        }
        if tokens.iter().any(|t| line.contains(t)) {
            violations.push((line_num_0 + 1, trimmed.to_string()));
        }
    }
    violations
}

fn visit_files(dir: &Path, names: &[&str], out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            visit_files(&path, names, out);
        } else if path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| names.contains(&n))
            .unwrap_or(false)
        {
            let Ok(source) = fs::read_to_string(&path) else {
                continue;
            };
            out.push((path.display().to_string(), source));
        }
    }
}

fn games_dir() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src/games")
}

fn report(header: &str, violations: &[(String, usize, String)]) {
    if violations.is_empty() {
        return;
    }
    let mut msg = String::from(header);
    msg.push_str("\n\n");
    for (file, line_num, line) in violations {
        msg.push_str(&format!("  {}:{}: {}\n", file, line_num, line));
    }
    panic!("{}", msg);
}

#[test]
fn no_bracket_keys_in_non_clickable_push() {
    let mut files = Vec::new();
    visit_files(&games_dir(), &["render.rs"], &mut files);
    assert!(!files.is_empty(), "no render.rs found under src/games");

    let mut all = Vec::new();
    for (path, source) in &files {
        for (n, line) in find_bracket_key_in_push(source) {
            all.push((path.clone(), n, line));
        }
    }
    report(
        "Found bracket-key text [X] in non-clickable cl.push() calls.\n\
         These should use push_clickable() so the row is tappable.",
        &all,
    );
}

#[test]
fn display_code_does_not_compute_economy() {
    let mut files = Vec::new();
    visit_files(&games_dir(), &["render.rs", "view.rs"], &mut files);

    let mut all = Vec::new();
    for (path, source) in &files {
        for (n, line) in find_tokens(source, ECONOMY_TOKENS) {
            all.push((path.clone(), n, line));
        }
    }
    report(
        "Display code derives economy numbers.\n\
         Read prices and rates from the view snapshot instead.",
        &all,
    );
}

#[test]
fn render_reads_only_the_view() {
    let mut files = Vec::new();
    visit_files(&games_dir(), &["render.rs"], &mut files);

    let mut all = Vec::new();
    for (path, source) in &files {
        for (n, line) in find_tokens(source, MODEL_TOKENS) {
            all.push((path.clone(), n, line));
        }
    }
    report(
        "render.rs touches the model directly.\n\
         Render must draw a FrisbeeView snapshot only.",
        &all,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_bracket_key_in_push() {
        let source = r#"cl.push(Line::from(" [1] Pie Tin Converter"));"#;
        let violations = find_bracket_key_in_push(source);
        assert_eq!(violations.len(), 1);
    }

    #[test]
    fn allows_push_clickable() {
        let source = r#"cl.push_clickable(Line::from(" [1] Pie Tin Converter"), BUY);"#;
        let violations = find_bracket_key_in_push(source);
        assert!(violations.is_empty());
    }

    #[test]
    fn ignores_comments() {
        let source = r#"// cl.push(Line::from(" [C] Make"));"#;
        assert!(find_bracket_key_in_push(source).is_empty());
        assert!(find_tokens("// cost * 1.15", ECONOMY_TOKENS).is_empty());
    }

    #[test]
    fn bracket_key_detection() {
        assert!(contains_bracket_key("[C]"));
        assert!(contains_bracket_key("[1]"));
        assert!(contains_bracket_key("[-]"));
        assert!(!contains_bracket_key("[]"));
        assert!(!contains_bracket_key("[II]"));
        assert!(!contains_bracket_key("abc"));
    }

    #[test]
    fn economy_tokens_flagged_outside_tests_only() {
        let source = "let c = base * 1.15_f64.powi(n);\n#[cfg(test)]\nmod tests { let s = FrisbeeState::new(); }";
        assert_eq!(find_tokens(source, ECONOMY_TOKENS).len(), 1);
        assert!(find_tokens(source, MODEL_TOKENS).is_empty());
    }
}
