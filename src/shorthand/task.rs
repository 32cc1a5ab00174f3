//! The task record produced for each shorthand line.

use serde::{Deserialize, Serialize};

/// One captured task.
///
/// Built from a single input line plus the document-level directives, and
/// never modified after that; the TaskPaper emitter consumes it as-is. Date
/// fields hold whatever literal the line (or a directive) supplied — they
/// are passed through to OmniFocus verbatim, never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Line text remaining once tags, dates, and the note are removed.
    pub title: String,
    /// Local tags first, then inherited global tags, no duplicates.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Defer date literal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defer: Option<String>,
    /// Due date literal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<String>,
    /// Note text following the `--` delimiter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Task {
    /// True when the line held nothing but tags and dates.
    #[must_use]
    pub fn is_untitled(&self) -> bool {
        self.title.is_empty()
    }

    /// Append each inherited tag not already present, after the local tags.
    pub fn inherit_tags(&mut self, global_tags: &[String]) {
        for tag in global_tags {
            if !self.tags.contains(tag) {
                self.tags.push(tag.clone());
            }
        }
    }
}
