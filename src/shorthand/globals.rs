//! Document-level directive collection.
//!
//! A directive line gives every task in the document a default: `#` lines
//! contribute tags, `@` and `!` lines set the defer and due dates. Each
//! collector is a pure pass over the line sequence.

use once_cell::sync::Lazy;
use regex::Regex;

// Anchored so only lines that BEGIN with the directive character count;
// "task @tomorrow" belongs to the per-line extractor, not to this pass.
static GLOBAL_DEFER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^@\(([^)]+)\)|^@(\S+)")
        .unwrap_or_else(|e| panic!("Invalid global defer regex: {e}"))
});

static GLOBAL_DUE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^!\(([^)]+)\)|^!(\S+)")
        .unwrap_or_else(|e| panic!("Invalid global due regex: {e}"))
});

/// Document-wide defaults collected from directive lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalDirectives {
    /// Tags applied to every task, in first-seen order.
    pub tags: Vec<String>,
    /// Defer date inherited by tasks without their own `@` token.
    pub defer: Option<String>,
    /// Due date inherited by tasks without their own `!` token.
    pub due: Option<String>,
}

impl GlobalDirectives {
    /// Run all three collectors over the document.
    #[must_use]
    pub fn collect(lines: &[&str]) -> Self {
        Self {
            tags: collect_global_tags(lines),
            defer: collect_global_defer(lines),
            due: collect_global_due(lines),
        }
    }

    /// Layer caller-supplied defaults on top of the document's directives.
    ///
    /// `defer`/`due` replace the document values when present; `extra_tags`
    /// append after the document tags, skipping duplicates. Per-task tokens
    /// still override everything here.
    pub fn apply_overrides(
        &mut self,
        extra_tags: &[String],
        defer: Option<&str>,
        due: Option<&str>,
    ) {
        for tag in extra_tags {
            if !self.tags.contains(tag) {
                self.tags.push(tag.clone());
            }
        }
        if let Some(value) = defer {
            self.defer = Some(value.to_string());
        }
        if let Some(value) = due {
            self.due = Some(value.to_string());
        }
    }
}

/// Collect tags from every `#` directive line, first-seen order, no
/// duplicates, case-sensitive.
///
/// `split_whitespace` drops empty tokens, so a bare `#` line is a no-op.
#[must_use]
pub fn collect_global_tags(lines: &[&str]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for line in lines {
        let Some(rest) = line.strip_prefix('#') else {
            continue;
        };
        for word in rest.split_whitespace() {
            if !tags.iter().any(|t| t == word) {
                tags.push(word.to_string());
            }
        }
    }
    tags
}

/// Collect the document defer date; later directive lines overwrite
/// earlier ones.
#[must_use]
pub fn collect_global_defer(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .filter_map(|line| date_value(&GLOBAL_DEFER_PATTERN, line))
        .last()
}

/// Collect the document due date; later directive lines overwrite earlier
/// ones.
#[must_use]
pub fn collect_global_due(lines: &[&str]) -> Option<String> {
    lines
        .iter()
        .filter_map(|line| date_value(&GLOBAL_DUE_PATTERN, line))
        .last()
}

/// Parenthesized literal when the directive is followed by `(`, bare
/// non-whitespace run otherwise.
fn date_value(pattern: &Regex, line: &str) -> Option<String> {
    let caps = pattern.captures(line)?;
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Global Tag Tests ====================

    #[test]
    fn test_single_tag_line() {
        assert_eq!(collect_global_tags(&["#work"]), vec!["work"]);
    }

    #[test]
    fn test_multiple_tags_one_line() {
        assert_eq!(
            collect_global_tags(&["#work home urgent"]),
            vec!["work", "home", "urgent"]
        );
    }

    #[test]
    fn test_tags_deduplicate_across_lines() {
        assert_eq!(
            collect_global_tags(&["#work", "#work home"]),
            vec!["work", "home"]
        );
    }

    #[test]
    fn test_tags_preserve_first_seen_order() {
        assert_eq!(
            collect_global_tags(&["#b a", "#c b"]),
            vec!["b", "a", "c"]
        );
    }

    #[test]
    fn test_tags_case_sensitive() {
        assert_eq!(
            collect_global_tags(&["#Work", "#work"]),
            vec!["Work", "work"]
        );
    }

    #[test]
    fn test_bare_hash_is_noop() {
        assert!(collect_global_tags(&["#"]).is_empty());
        assert!(collect_global_tags(&["#   "]).is_empty());
    }

    #[test]
    fn test_hash_not_first_char_ignored() {
        assert!(collect_global_tags(&["task #tag"]).is_empty());
        assert!(collect_global_tags(&[" #tag"]).is_empty());
    }

    #[test]
    fn test_second_hash_kept_in_word() {
        // Only the leading # is the directive marker.
        assert_eq!(collect_global_tags(&["#a#b"]), vec!["a#b"]);
    }

    #[test]
    fn test_no_directive_lines() {
        assert!(collect_global_tags(&["plain task", "", "another"]).is_empty());
    }

    // ==================== Global Date Tests ====================

    #[test]
    fn test_defer_bare_form() {
        assert_eq!(
            collect_global_defer(&["@tomorrow"]),
            Some("tomorrow".to_string())
        );
    }

    #[test]
    fn test_defer_parenthesized_form() {
        assert_eq!(
            collect_global_defer(&["@(May 5, 2019)"]),
            Some("May 5, 2019".to_string())
        );
    }

    #[test]
    fn test_defer_last_match_wins() {
        assert_eq!(
            collect_global_defer(&["@today", "@tomorrow"]),
            Some("tomorrow".to_string())
        );
    }

    #[test]
    fn test_defer_last_match_wins_mixed_forms() {
        assert_eq!(
            collect_global_defer(&["@(May 5, 2019)", "@2d"]),
            Some("2d".to_string())
        );
    }

    #[test]
    fn test_due_bare_form() {
        assert_eq!(collect_global_due(&["!Friday"]), Some("Friday".to_string()));
    }

    #[test]
    fn test_due_parenthesized_preserves_punctuation() {
        assert_eq!(
            collect_global_due(&["!(5/12/2019)"]),
            Some("5/12/2019".to_string())
        );
    }

    #[test]
    fn test_due_last_match_wins() {
        assert_eq!(
            collect_global_due(&["!Friday", "!(June 1, 2019)"]),
            Some("June 1, 2019".to_string())
        );
    }

    #[test]
    fn test_directive_char_alone_is_noop() {
        assert_eq!(collect_global_defer(&["@"]), None);
        assert_eq!(collect_global_due(&["!"]), None);
    }

    #[test]
    fn test_directive_with_space_after_is_noop() {
        // "@ tomorrow" has no token attached to the directive.
        assert_eq!(collect_global_defer(&["@ tomorrow"]), None);
    }

    #[test]
    fn test_unclosed_paren_falls_back_to_bare() {
        // Verbatim pass-through: the bare run includes the open paren.
        assert_eq!(collect_global_defer(&["@(May"]), Some("(May".to_string()));
    }

    #[test]
    fn test_mid_line_date_not_global() {
        assert_eq!(collect_global_defer(&["task @tomorrow"]), None);
        assert_eq!(collect_global_due(&["task !Friday"]), None);
    }

    #[test]
    fn test_defer_and_due_independent() {
        let lines = ["@2d", "!Friday"];
        assert_eq!(collect_global_defer(&lines), Some("2d".to_string()));
        assert_eq!(collect_global_due(&lines), Some("Friday".to_string()));
    }

    // ==================== Directive Struct Tests ====================

    #[test]
    fn test_collect_all() {
        let lines = ["#personal", "Write presentation", "@2d", "!Friday"];
        let globals = GlobalDirectives::collect(&lines);
        assert_eq!(globals.tags, vec!["personal"]);
        assert_eq!(globals.defer.as_deref(), Some("2d"));
        assert_eq!(globals.due.as_deref(), Some("Friday"));
    }

    #[test]
    fn test_collect_empty_document() {
        let globals = GlobalDirectives::collect(&[]);
        assert!(globals.tags.is_empty());
        assert!(globals.defer.is_none());
        assert!(globals.due.is_none());
    }

    #[test]
    fn test_apply_overrides_dates_replace() {
        let mut globals = GlobalDirectives {
            tags: vec!["personal".to_string()],
            defer: Some("2d".to_string()),
            due: None,
        };
        globals.apply_overrides(&[], Some("1w"), Some("Friday"));
        assert_eq!(globals.defer.as_deref(), Some("1w"));
        assert_eq!(globals.due.as_deref(), Some("Friday"));
    }

    #[test]
    fn test_apply_overrides_absent_dates_keep_document() {
        let mut globals = GlobalDirectives {
            defer: Some("2d".to_string()),
            ..GlobalDirectives::default()
        };
        globals.apply_overrides(&[], None, None);
        assert_eq!(globals.defer.as_deref(), Some("2d"));
    }

    #[test]
    fn test_apply_overrides_tags_append_dedup() {
        let mut globals = GlobalDirectives {
            tags: vec!["personal".to_string()],
            ..GlobalDirectives::default()
        };
        globals.apply_overrides(
            &["inbox".to_string(), "personal".to_string()],
            None,
            None,
        );
        assert_eq!(globals.tags, vec!["personal", "inbox"]);
    }
}
