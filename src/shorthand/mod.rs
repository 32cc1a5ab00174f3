//! Line-shorthand parsing for task capture.
//!
//! This module turns a block of shorthand text into structured tasks:
//! - "Write presentation !Friday #work"
//! - "Research gifts @1w !(5/12/2019) --Flowers are boring"
//! - "#personal", "@2d", "!Friday" as whole-document directives
//!
//! Lines starting with `#`, `@`, or `!` apply their tag or date to every
//! task in the document that lacks its own.

mod globals;
mod parser;
mod task;

pub use globals::{
    collect_global_defer, collect_global_due, collect_global_tags, GlobalDirectives,
};
pub use parser::{parse_document, parse_document_with, parse_task_line, LineKind};
pub use task::Task;
