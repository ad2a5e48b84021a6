//! CLI output formatting.
//!
//! Output is information-centric: every page leads with its positional index
//! and name, with the written files (or the failure cause) as indented
//! context lines, followed by a one-line summary and the final status line.
//!
//! ```text
//! 001 home → home.html
//! 002 blog → blog.html
//!     blog/first-post.html
//!     blog/second-post.html
//! 003 imprint: failed
//!     Metadata line 3 has no colon in content/imprint/about.md
//!
//! Rendered 2 pages, 1 failed
//! Rendered site with warnings
//! ```
//!
//! Each report has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::render::{PageOutcome, RenderReport};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Human-readable status line for an integer run status.
pub fn status_line(code: u8) -> &'static str {
    match code {
        0 => "Rendered site",
        1 => "Rendered site with warnings",
        2 => "Rendering was not successful!",
        _ => "Rendering exited with unknown code!",
    }
}

/// Format the per-page outcomes of a render run.
pub fn format_render_report(report: &RenderReport) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, outcome) in report.pages.iter().enumerate() {
        match outcome {
            PageOutcome::Rendered { name, files } => {
                match files.first() {
                    Some(first) => lines.push(format!("{} {} → {}", format_index(i + 1), name, first)),
                    None => lines.push(format!("{} {}", format_index(i + 1), name)),
                }
                for extra in files.iter().skip(1) {
                    lines.push(format!("    {}", extra));
                }
            }
            PageOutcome::Failed { name, error } => {
                lines.push(format!("{} {}: failed", format_index(i + 1), name));
                lines.push(format!("    {}", error));
            }
        }
    }

    let rendered = report
        .pages
        .iter()
        .filter(|p| matches!(p, PageOutcome::Rendered { .. }))
        .count();
    let failed = report.pages.len() - rendered;

    lines.push(String::new());
    if failed == 0 {
        lines.push(format!("Rendered {} pages", rendered));
    } else {
        lines.push(format!("Rendered {} pages, {} failed", rendered, failed));
    }

    lines
}

/// Print the render report to stdout.
pub fn print_render_report(report: &RenderReport) {
    for line in format_render_report(report) {
        println!("{}", line);
    }
}
