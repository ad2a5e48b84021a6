//! Page assembly.
//!
//! A [`PageContext`] is the full value set one output page is rendered from:
//! title, author, the two navigation areas, social links, and the content
//! blocks. One context is assembled per output page, consumed once by the
//! page-shell template, then discarded.
//!
//! The content-rendering strategy is resolved exactly once, when the context
//! is assembled, into a tagged [`ContentBlocks`] variant. Every later call
//! site goes through the uniform [`PageContext::content_markup`] capability
//! instead of re-checking the content type:
//!
//! - `default` pages render every record's full body as one overview block.
//! - `article` pages render twice: the index as a preview listing linking to
//!   detail pages, and each record again as its own detail page.

use crate::config::{ContentType, PageSpec, SiteConfig};
use crate::content::ContentRecord;
use crate::nav::{self, NavEntry, NavPlacement};
use crate::templates;
use maud::Markup;
use std::collections::BTreeMap;

/// A parsed content record paired with the slug naming its detail page.
///
/// The slug is the source file's stem (`first-post.md` -> `first-post`),
/// which keeps detail output names stable across runs.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentItem {
    pub slug: String,
    pub record: ContentRecord,
}

/// Content blocks plus the strategy rendering them, resolved once.
enum ContentBlocks<'a> {
    /// All records as one overview block, full bodies.
    Overview(&'a [ContentItem]),
    /// Article index: preview listing linking into the `dir` subfolder.
    ArticleIndex {
        dir: &'a str,
        items: &'a [ContentItem],
    },
    /// Article detail: a single record, full body.
    ArticleDetail(&'a ContentItem),
}

/// The aggregate value set one output page is rendered from.
pub struct PageContext<'a> {
    pub title: String,
    pub author: &'a str,
    pub main_nav: Vec<NavEntry>,
    pub footer_nav: Vec<NavEntry>,
    pub social: &'a BTreeMap<String, String>,
    content: ContentBlocks<'a>,
}

impl<'a> PageContext<'a> {
    /// Assemble the index context for a configured page.
    pub fn assemble(
        current: &'a PageSpec,
        all_pages: &'a [PageSpec],
        site: &'a SiteConfig,
        items: &'a [ContentItem],
    ) -> Self {
        let content = match current.content_type {
            ContentType::Default => ContentBlocks::Overview(items),
            ContentType::Article => ContentBlocks::ArticleIndex {
                dir: &current.file,
                items,
            },
        };
        Self::build(current.title.clone(), current, all_pages, site, content)
    }

    /// Assemble the detail context for one record of an article page.
    ///
    /// The record's own title becomes the page title; an empty title falls
    /// back to the configured page title.
    pub fn detail(
        current: &'a PageSpec,
        all_pages: &'a [PageSpec],
        site: &'a SiteConfig,
        item: &'a ContentItem,
    ) -> Self {
        let title = match item.record.title.trim() {
            "" => current.title.clone(),
            t => t.to_string(),
        };
        Self::build(
            title,
            current,
            all_pages,
            site,
            ContentBlocks::ArticleDetail(item),
        )
    }

    fn build(
        title: String,
        current: &'a PageSpec,
        all_pages: &'a [PageSpec],
        site: &'a SiteConfig,
        content: ContentBlocks<'a>,
    ) -> Self {
        PageContext {
            title,
            author: &site.base.author,
            main_nav: nav::build_nav(all_pages, NavPlacement::Main, current),
            footer_nav: nav::build_nav(all_pages, NavPlacement::Footer, current),
            social: &site.social_media,
            content,
        }
    }

    /// Render the content blocks with the strategy resolved at assembly.
    pub fn content_markup(&self) -> Markup {
        match &self.content {
            ContentBlocks::Overview(items) => templates::overview(items),
            ContentBlocks::ArticleIndex { dir, items } => templates::article_overview(dir, items),
            ContentBlocks::ArticleDetail(item) => templates::article_detail(item),
        }
    }

    /// Render the complete output page.
    pub fn render(&self) -> Markup {
        templates::page_shell(self)
    }
}
