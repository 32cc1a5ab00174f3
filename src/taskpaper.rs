//! TaskPaper rendering.
//!
//! Emits one `- <title>` line per task with `@tags(...)`, `@defer(...)`,
//! and `@due(...)` attributes, plus a tab-indented note line when the task
//! carries a note. OmniFocus parses this format directly on paste.

use crate::shorthand::Task;

/// Render tasks as TaskPaper text, one block per task, in order.
///
/// Field order is fixed: title, tags, defer, due, note. The title and each
/// present field carry a trailing space; an omitted field drops its marker
/// and its space only. Every block ends with a newline, and tasks are
/// concatenated with no separator beyond that. An empty slice renders as
/// an empty string.
#[must_use]
pub fn render(tasks: &[Task]) -> String {
    let mut out = String::new();
    for task in tasks {
        out.push_str("- ");
        out.push_str(&task.title);
        out.push(' ');
        if !task.tags.is_empty() {
            out.push_str(&format!("@tags({}) ", task.tags.join(",")));
        }
        if let Some(defer) = &task.defer {
            out.push_str(&format!("@defer({defer}) "));
        }
        if let Some(due) = &task.due {
            out.push_str(&format!("@due({due}) "));
        }
        if let Some(note) = &task.note {
            out.push('\n');
            out.push('\t');
            out.push_str(note);
        }
        out.push('\n');
    }
    out
}
