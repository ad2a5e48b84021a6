//! Rendering orchestration.
//!
//! Walks the configured pages in order and turns each one into output files:
//!
//! ```text
//! site/
//! ├── home.html                  # default page: one aggregate overview
//! ├── blog.html                  # article page: preview index
//! └── blog/
//!     ├── first-post.html        # one detail page per content record
//!     └── second-post.html
//! ```
//!
//! For every page the orchestrator discovers `*.md` files under
//! `<content>/<file>/`, parses them, assembles a [`PageContext`], and writes
//! the rendered markup. Article pages additionally get one detail page per
//! record inside a subfolder named after the page.
//!
//! Content files are sorted lexicographically by file name before parsing,
//! so listing order and output are reproducible regardless of filesystem
//! enumeration order. A page's missing content subfolder yields an empty
//! listing, not an error.
//!
//! ## Failure policy
//!
//! A failure while processing one page (unreadable or malformed content,
//! write error) aborts that page's remaining steps only; the run continues
//! with the next page and the failure is recorded in the [`RenderReport`].
//! The aggregate [`RunStatus`] is `Success` when every page rendered,
//! `Warning` when some did, and `Failure` when none did or the output root
//! could not be created at all.

use crate::config::{ContentType, PageSpec, SiteConfig};
use crate::content::{self, ContentError};
use crate::page::{ContentItem, PageContext};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Content(#[from] ContentError),
}

/// Aggregate result of one render run, as reported to the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    Warning,
    Failure,
}

impl RunStatus {
    /// The integer contract returned to the caller.
    pub fn code(self) -> u8 {
        match self {
            RunStatus::Success => 0,
            RunStatus::Warning => 1,
            RunStatus::Failure => 2,
        }
    }
}

/// Outcome of one configured page.
#[derive(Debug)]
pub enum PageOutcome {
    /// Page rendered; `files` are the written paths relative to the output root.
    Rendered { name: String, files: Vec<String> },
    /// Page aborted; later pages were still attempted.
    Failed { name: String, error: RenderError },
}

/// Per-page outcomes of a whole run, in configuration order.
#[derive(Debug, Default)]
pub struct RenderReport {
    pub pages: Vec<PageOutcome>,
}

impl RenderReport {
    pub fn status(&self) -> RunStatus {
        let failed = self
            .pages
            .iter()
            .filter(|p| matches!(p, PageOutcome::Failed { .. }))
            .count();
        if failed == 0 {
            RunStatus::Success
        } else if failed < self.pages.len() {
            RunStatus::Warning
        } else {
            RunStatus::Failure
        }
    }
}

/// Render every configured page into the output root.
///
/// Only failure to create the output root itself is fatal; everything else
/// is recorded per page.
pub fn render_site(config: &SiteConfig) -> Result<RenderReport, RenderError> {
    fs::create_dir_all(&config.base.output)?;

    let mut report = RenderReport::default();
    for page in &config.pages {
        let outcome = match render_page(config, page) {
            Ok(files) => PageOutcome::Rendered {
                name: page.name.clone(),
                files,
            },
            Err(error) => PageOutcome::Failed {
                name: page.name.clone(),
                error,
            },
        };
        report.pages.push(outcome);
    }
    Ok(report)
}

/// Delete previously generated output. Missing output is not an error.
pub fn reset(config: &SiteConfig) -> std::io::Result<()> {
    if config.base.output.exists() {
        fs::remove_dir_all(&config.base.output)?;
    }
    Ok(())
}

fn render_page(config: &SiteConfig, page: &PageSpec) -> Result<Vec<String>, RenderError> {
    let output_root = &config.base.output;

    if page.content_type == ContentType::Article {
        fs::create_dir_all(output_root.join(&page.file))?;
    }

    let items = discover_items(&config.base.content.join(&page.file))?;

    let mut written = Vec::new();

    let index = PageContext::assemble(page, &config.pages, config, &items);
    let index_file = format!("{}.html", page.file);
    fs::write(output_root.join(&index_file), index.render().into_string())?;
    written.push(index_file);

    if page.content_type == ContentType::Article {
        for item in &items {
            let detail = PageContext::detail(page, &config.pages, config, item);
            let detail_file = format!("{}/{}.html", page.file, item.slug);
            fs::write(output_root.join(&detail_file), detail.render().into_string())?;
            written.push(detail_file);
        }
    }

    Ok(written)
}

/// List and parse the `*.md` files under `dir`, sorted by file name.
fn discover_items(dir: &Path) -> Result<Vec<ContentItem>, RenderError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map(|e| e.eq_ignore_ascii_case("md"))
                    .unwrap_or(false)
        })
        .collect();
    files.sort();

    let mut items = Vec::new();
    for path in &files {
        let slug = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let record = content::parse_file(path)?;
        items.push(ContentItem { slug, record });
    }
    Ok(items)
}
