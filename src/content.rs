//! Content file parsing.
//!
//! A content file is plain text divided into four sections by a literal
//! separator line (`-----`):
//!
//! ```text
//! My First Post
//! -----
//! author: Jane
//! date: 2026-01-15
//! -----
//! A short hand-written summary, shown in listings.
//! -----
//! The full post, written in **markdown**.
//!
//! It can span as many lines as it needs.
//! ```
//!
//! The sections are, in order: title, metadata, preview, body. A single-pass
//! line scanner walks the file and accumulates each section; the separator
//! advances to the next one. Files with more than three separators are
//! rejected.
//!
//! ## Preview vs body
//!
//! The body is converted from markdown to HTML via [`richtext_to_markup`].
//! The preview is kept verbatim: previews are short manual summaries the
//! author writes as ready-to-use inline markup, while bodies are full rich
//! text.

use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Metadata line {line} has no colon in {path}")]
    MetadataLineWithoutColon { path: PathBuf, line: usize },
    #[error("More than three section separators in {path}")]
    TooManySections { path: PathBuf },
}

/// One parsed content file.
///
/// Immutable after parsing. `metadata` preserves first-seen key order;
/// a re-declared key updates its value in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentRecord {
    /// Title section, verbatim (a well-formed file has one title line).
    pub title: String,
    /// `key: value` pairs in first-seen order, both sides trimmed.
    pub metadata: Vec<(String, String)>,
    /// Preview section, verbatim. Treated as ready-to-use inline markup.
    pub preview: String,
    /// Body section converted to HTML.
    pub body: String,
}

impl ContentRecord {
    /// Look up a metadata value by key.
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

const SEPARATOR: &str = "-----";

/// Read and parse one content file.
pub fn parse_file(path: &Path) -> Result<ContentRecord, ContentError> {
    let text = fs::read_to_string(path)?;
    parse(&text, path)
}

/// Parse content text. `path` is used for error context only.
///
/// Each accumulated line contributes `line + "\n"` to its section, so
/// section text round-trips with trailing newlines intact.
pub fn parse(text: &str, path: &Path) -> Result<ContentRecord, ContentError> {
    let mut section = 0usize;
    let mut title = String::new();
    let mut metadata: Vec<(String, String)> = Vec::new();
    let mut preview = String::new();
    let mut body = String::new();

    for (idx, line) in text.lines().enumerate() {
        if line == SEPARATOR {
            section += 1;
            if section > 3 {
                return Err(ContentError::TooManySections {
                    path: path.to_path_buf(),
                });
            }
            continue;
        }
        match section {
            0 => {
                title.push_str(line);
                title.push('\n');
            }
            1 => {
                let Some((key, value)) = line.split_once(':') else {
                    return Err(ContentError::MetadataLineWithoutColon {
                        path: path.to_path_buf(),
                        line: idx + 1,
                    });
                };
                let key = key.trim();
                let value = value.trim().to_string();
                match metadata.iter_mut().find(|(k, _)| k == key) {
                    Some(entry) => entry.1 = value,
                    None => metadata.push((key.to_string(), value)),
                }
            }
            2 => {
                preview.push_str(line);
                preview.push('\n');
            }
            _ => {
                body.push_str(line);
                body.push('\n');
            }
        }
    }

    Ok(ContentRecord {
        title,
        metadata,
        preview,
        body: richtext_to_markup(&body),
    })
}

/// Convert rich text (markdown) to HTML.
pub fn richtext_to_markup(text: &str) -> String {
    let parser = Parser::new(text);
    let mut html = String::new();
    md_html::push_html(&mut html, parser);
    html
}
