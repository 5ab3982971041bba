//! Diff windowing: keep headers, changed lines and one line of context around each change.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex_lite::Regex;

/// Returned in place of a diff when none was supplied.
pub const NO_DIFF_PLACEHOLDER: &str = "No diff available.";

/// File-pair header, index line, old/new file markers and hunk ranges.
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(diff --git |index |--- |\+\+\+ |@@ )").expect("header pattern is valid")
});

/// Classification of a single unified-diff line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header,
    Change,
    Context,
}

/// Classify one line. `+++ `/`--- ` file markers are headers, not changes.
pub fn classify_line(line: &str) -> LineKind {
    if HEADER_RE.is_match(line) {
        LineKind::Header
    } else if line.starts_with('+') || line.starts_with('-') {
        LineKind::Change
    } else {
        LineKind::Context
    }
}

/// Reduce a unified diff to its headers, changed lines and their immediate neighbours.
///
/// Header lines are always kept. For every change line the preceding and
/// following lines are kept too when they are plain context. Each source line
/// is emitted at most once and the original order is preserved, so the result
/// is a subsequence of the input lines.
///
/// Returns [`NO_DIFF_PLACEHOLDER`] when the diff is absent or empty.
pub fn window_diff(diff: Option<&str>) -> String {
    let diff = match diff {
        Some(d) if !d.trim().is_empty() => d,
        _ => return NO_DIFF_PLACEHOLDER.to_string(),
    };

    let lines: Vec<&str> = diff.lines().collect();
    let kinds: Vec<LineKind> = lines.iter().map(|l| classify_line(l)).collect();

    let mut seen: HashSet<usize> = HashSet::new();
    let mut out: Vec<&str> = Vec::new();

    let is_context = |idx: usize| kinds[idx] == LineKind::Context;

    for (i, kind) in kinds.iter().enumerate() {
        match kind {
            LineKind::Header => {
                if seen.insert(i) {
                    out.push(lines[i]);
                }
            }
            LineKind::Change => {
                if i > 0 && is_context(i - 1) && seen.insert(i - 1) {
                    out.push(lines[i - 1]);
                }
                if seen.insert(i) {
                    out.push(lines[i]);
                }
                if i + 1 < lines.len() && is_context(i + 1) && seen.insert(i + 1) {
                    out.push(lines[i + 1]);
                }
            }
            LineKind::Context => {}
        }
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_and_empty_yield_placeholder() {
        assert_eq!(window_diff(None), NO_DIFF_PLACEHOLDER);
        assert_eq!(window_diff(Some("")), NO_DIFF_PLACEHOLDER);
        assert_eq!(window_diff(Some("  \n")), NO_DIFF_PLACEHOLDER);
    }

    #[test]
    fn test_classify_headers() {
        assert_eq!(classify_line("diff --git a/x b/x"), LineKind::Header);
        assert_eq!(classify_line("index 83db48f..bf269f4 100644"), LineKind::Header);
        assert_eq!(classify_line("--- a/x"), LineKind::Header);
        assert_eq!(classify_line("+++ b/x"), LineKind::Header);
        assert_eq!(classify_line("--- /dev/null"), LineKind::Header);
        assert_eq!(classify_line("@@ -1,3 +1,4 @@ fn main()"), LineKind::Header);
    }

    #[test]
    fn test_classify_changes_and_context() {
        assert_eq!(classify_line("+let x = 1;"), LineKind::Change);
        assert_eq!(classify_line("-let x = 0;"), LineKind::Change);
        assert_eq!(classify_line("+"), LineKind::Change);
        assert_eq!(classify_line("---removed dashes"), LineKind::Change);
        assert_eq!(classify_line(" unchanged"), LineKind::Context);
        assert_eq!(classify_line(""), LineKind::Context);
    }

    #[test]
    fn test_keeps_one_line_of_context_each_side() {
        let diff = "\
@@ -1,7 +1,7 @@
 one
 two
 three
-four
+FOUR
 five
 six";
        let windowed = window_diff(Some(diff));
        assert_eq!(windowed, "@@ -1,7 +1,7 @@\n three\n-four\n+FOUR\n five");
    }

    #[test]
    fn test_change_at_first_and_last_index() {
        let diff = "+first\n middle\n-last";
        assert_eq!(window_diff(Some(diff)), "+first\n middle\n-last");
    }

    #[test]
    fn test_hunk_marker_is_not_used_as_context() {
        let diff = "@@ -1 +1 @@\n+added";
        // The hunk marker is emitted once, as a header, not again as context.
        assert_eq!(window_diff(Some(diff)), "@@ -1 +1 @@\n+added");
    }

    #[test]
    fn test_shared_context_not_duplicated() {
        let diff = "+a\n shared\n+b";
        assert_eq!(window_diff(Some(diff)), "+a\n shared\n+b");
    }

    #[test]
    fn test_distant_context_dropped() {
        let diff = "\
diff --git a/src/app.rs b/src/app.rs
index 1111111..2222222 100644
--- a/src/app.rs
+++ b/src/app.rs
@@ -10,9 +10,9 @@
 fn a() {}
 fn b() {}
 fn c() {}
-fn d() {}
+fn d() { todo() }
 fn e() {}
 fn f() {}
 fn g() {}";
        let windowed = window_diff(Some(diff));
        assert!(!windowed.contains("fn a()"));
        assert!(!windowed.contains("fn g()"));
        assert!(windowed.contains(" fn c() {}"));
        assert!(windowed.contains(" fn e() {}"));
        assert!(windowed.starts_with("diff --git a/src/app.rs b/src/app.rs\nindex"));
    }

    #[test]
    fn test_trailing_newline_does_not_add_lines() {
        let diff = "@@ -1 +1 @@\n-old\n+new\n";
        assert_eq!(window_diff(Some(diff)), "@@ -1 +1 @@\n-old\n+new");
    }
}
