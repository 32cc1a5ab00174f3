//! Per-line task extraction.
//!
//! Every pattern matches against the original immutable line; the title is
//! what remains after removing the union of all matched spans in one
//! position-sorted pass, so extraction order never affects the result. The
//! only sequencing rule is that token scans stop where the note begins —
//! tags and dates inside a note stay part of the note.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use super::globals::GlobalDirectives;
use super::task::Task;

// Compiled patterns. The date patterns prefer a parenthesized literal and
// fall back to a bare non-whitespace run.
static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#(\S+)").unwrap_or_else(|e| panic!("Invalid tag regex: {e}")));

static DEFER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@\(([^)]+)\)|@(\S+)").unwrap_or_else(|e| panic!("Invalid defer regex: {e}"))
});

static DUE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"!\(([^)]+)\)|!(\S+)").unwrap_or_else(|e| panic!("Invalid due regex: {e}"))
});

static NOTE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"--(.+)$").unwrap_or_else(|e| panic!("Invalid note regex: {e}")));

/// How a raw line participates in the document.
///
/// Classification looks only at the first character, before anything is
/// stripped; a directive line never also produces a task, and a line whose
/// first character is whitespace is a task even if a `#`/`@`/`!` follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// First character `#`: tags for every task in the document.
    GlobalTags,
    /// First character `@`: document-wide defer date.
    GlobalDefer,
    /// First character `!`: document-wide due date.
    GlobalDue,
    /// Empty or whitespace-only.
    Blank,
    /// Anything else becomes a task.
    Task,
}

impl LineKind {
    /// Classify a raw, unstripped line.
    #[must_use]
    pub fn classify(line: &str) -> Self {
        match line.chars().next() {
            None => Self::Blank,
            Some('#') => Self::GlobalTags,
            Some('@') => Self::GlobalDefer,
            Some('!') => Self::GlobalDue,
            Some(_) if line.trim().is_empty() => Self::Blank,
            Some(_) => Self::Task,
        }
    }
}

/// A captured value together with the bytes it occupied in the line.
struct Extraction {
    value: String,
    span: Range<usize>,
}

/// Parse a whole shorthand document into tasks.
///
/// Directive lines are collected first (wherever they appear), then each
/// task line is extracted against the full set of document defaults.
///
/// # Examples
///
/// ```
/// use omnidraft::shorthand::parse_document;
///
/// let tasks = parse_document("Asparagus #shopping --buy two bunches\n#personal");
/// assert_eq!(tasks.len(), 1);
/// assert_eq!(tasks[0].title, "Asparagus");
/// assert_eq!(tasks[0].tags, vec!["shopping", "personal"]);
/// assert_eq!(tasks[0].note.as_deref(), Some("buy two bunches"));
/// ```
#[must_use]
pub fn parse_document(text: &str) -> Vec<Task> {
    parse_document_with(text, &GlobalDirectives::default())
}

/// Parse a document with caller-supplied defaults layered over its own
/// directives (see [`GlobalDirectives::apply_overrides`]).
#[must_use]
pub fn parse_document_with(text: &str, overrides: &GlobalDirectives) -> Vec<Task> {
    let lines: Vec<&str> = text.lines().collect();
    let mut globals = GlobalDirectives::collect(&lines);
    globals.apply_overrides(
        &overrides.tags,
        overrides.defer.as_deref(),
        overrides.due.as_deref(),
    );
    lines
        .iter()
        .filter_map(|line| parse_task_line(line, &globals))
        .collect()
}

/// Extract a task from one line, or `None` for directives and blanks.
///
/// Never fails: malformed date syntax passes through as whatever matched,
/// and a line holding only tags and dates yields a task with an empty
/// title, which is still emitted.
#[must_use]
pub fn parse_task_line(line: &str, globals: &GlobalDirectives) -> Option<Task> {
    if LineKind::classify(line) != LineKind::Task {
        return None;
    }

    let note = NOTE_PATTERN.captures(line).and_then(|caps| {
        let whole = caps.get(0)?;
        let text = caps.get(1)?;
        Some(Extraction {
            value: text.as_str().trim().to_string(),
            span: whole.range(),
        })
    });

    // Token scans see only the text before the note delimiter. The prefix
    // shares byte offsets with the full line, so all spans index `line`.
    let head = note.as_ref().map_or(line, |n| &line[..n.span.start]);

    let mut tags: Vec<String> = Vec::new();
    let mut spans: Vec<Range<usize>> = Vec::new();
    for caps in TAG_PATTERN.captures_iter(head) {
        if let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) {
            if !tags.iter().any(|t| t == name.as_str()) {
                tags.push(name.as_str().to_string());
            }
            // Every occurrence leaves the title, duplicate or not.
            spans.push(whole.range());
        }
    }

    let defer = first_date(&DEFER_PATTERN, head);
    let due = first_date(&DUE_PATTERN, head);

    if let Some(extraction) = &note {
        spans.push(extraction.span.clone());
    }
    if let Some(extraction) = &defer {
        spans.push(extraction.span.clone());
    }
    if let Some(extraction) = &due {
        spans.push(extraction.span.clone());
    }

    let mut task = Task {
        title: remove_spans(line, spans),
        tags,
        defer: defer.map(|e| e.value),
        due: due.map(|e| e.value),
        note: note.map(|e| e.value),
    };
    if task.defer.is_none() {
        task.defer.clone_from(&globals.defer);
    }
    if task.due.is_none() {
        task.due.clone_from(&globals.due);
    }
    task.inherit_tags(&globals.tags);
    Some(task)
}

/// First date-token match in `text`: parenthesized literal preferred over
/// the bare form at the same position.
fn first_date(pattern: &Regex, text: &str) -> Option<Extraction> {
    let caps = pattern.captures(text)?;
    let whole = caps.get(0)?;
    let value = caps.get(1).or_else(|| caps.get(2))?;
    Some(Extraction {
        value: value.as_str().to_string(),
        span: whole.range(),
    })
}

/// Remove the union of `spans` from `line`, then collapse the whitespace
/// the removed tokens leave behind.
fn remove_spans(line: &str, mut spans: Vec<Range<usize>>) -> String {
    spans.sort_by_key(|span| span.start);
    let mut kept = String::with_capacity(line.len());
    let mut cursor = 0;
    for span in &spans {
        if span.start > cursor {
            kept.push_str(&line[cursor..span.start]);
        }
        cursor = cursor.max(span.end);
    }
    if cursor < line.len() {
        kept.push_str(&line[cursor..]);
    }
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}
