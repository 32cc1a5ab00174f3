use colored::Colorize;

use crate::shorthand::Task;

/// Format parsed tasks as a pretty listing
#[must_use]
pub fn format_tasks_pretty(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "Tasks (0)\n  No tasks parsed".to_string();
    }

    let mut output = format!("Tasks ({})\n", tasks.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for task in tasks {
        let title = if task.is_untitled() {
            "(untitled)".dimmed().to_string()
        } else {
            task.title.bold().to_string()
        };

        let mut line = format!("{} {}", "[ ]".white(), title);

        if let Some(defer) = &task.defer {
            line.push_str(&format!("  {}", format!("defer {defer}").yellow()));
        }

        if let Some(due) = &task.due {
            line.push_str(&format!("  {}", format!("due {due}").yellow()));
        }

        if !task.tags.is_empty() {
            let tags_str = task
                .tags
                .iter()
                .map(|t| format!("#{t}"))
                .collect::<Vec<_>>()
                .join(" ");
            line.push_str(&format!("  {}", tags_str.cyan()));
        }

        output.push_str(&line);
        output.push('\n');

        if let Some(note) = &task.note {
            output.push_str(&format!("    {}\n", note.dimmed()));
        }
    }

    output
}
