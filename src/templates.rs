//! HTML templates.
//!
//! All markup is produced with [maud](https://maud.lambda.xyz/) compile-time
//! templates: malformed HTML is a build error, template values are typed
//! Rust expressions, and interpolation is auto-escaped by default. There is
//! no template directory to ship or to get out of sync with the code.
//!
//! One function per template the pipeline recognizes:
//!
//! | Function | Template |
//! |----------|----------|
//! | [`page_shell`] | outer document shared by every page |
//! | [`nav_fragment`] | navigation list for one area |
//! | [`social_fragment`] | social links in the footer |
//! | [`social_header`] | `rel="me"` link tags in the document head |
//! | [`overview`] | full-body listing for `default` pages |
//! | [`article_overview`] | preview listing for `article` index pages |
//! | [`article_detail`] | single record on its own detail page |
//!
//! Content bodies are inserted with `PreEscaped`: they are HTML produced by
//! the markdown conversion, and previews are author-written inline markup.
//! Everything else goes through maud's escaping.
//!
//! Links are root-relative (`/<file>.html`) so navigation works identically
//! from the site root and from inside article subfolders.

use crate::nav::NavEntry;
use crate::page::{ContentItem, PageContext};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::collections::BTreeMap;

const CSS: &str = include_str!("../static/style.css");

/// The outer document structure every page shares.
pub fn page_shell(ctx: &PageContext) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="author" content=(ctx.author);
                title { (ctx.title) }
                style { (CSS) }
                (social_header(ctx.social))
            }
            body {
                header.site-header {
                    nav.site-nav { (nav_fragment(&ctx.main_nav)) }
                }
                main.page-content {
                    (ctx.content_markup())
                }
                footer.site-footer {
                    nav.footer-nav { (nav_fragment(&ctx.footer_nav)) }
                    (social_fragment(ctx.social))
                    @if !ctx.author.is_empty() {
                        p.site-author { (ctx.author) }
                    }
                }
            }
        }
    }
}

/// Navigation list for one area; the active entry is flagged with a class.
pub fn nav_fragment(entries: &[NavEntry]) -> Markup {
    html! {
        ul {
            @for entry in entries {
                li class=[entry.is_active.then_some("active")] {
                    a href={ "/" (entry.href) } { (entry.label) }
                }
            }
        }
    }
}

/// Social links rendered as a footer list.
pub fn social_fragment(social: &BTreeMap<String, String>) -> Markup {
    html! {
        @if !social.is_empty() {
            ul.social {
                @for (platform, url) in social {
                    li { a href=(url) rel="me noopener" { (platform) } }
                }
            }
        }
    }
}

/// `rel="me"` identity links for the document head.
pub fn social_header(social: &BTreeMap<String, String>) -> Markup {
    html! {
        @for url in social.values() {
            link rel="me" href=(url);
        }
    }
}

/// Full-body listing: every record of a `default` page as one block.
pub fn overview(items: &[ContentItem]) -> Markup {
    html! {
        div.overview {
            @for item in items {
                section.content-block {
                    (PreEscaped(&item.record.body))
                }
            }
        }
    }
}

/// Preview listing for an `article` index page.
///
/// Each entry links to its detail page under the page's subfolder.
pub fn article_overview(dir: &str, items: &[ContentItem]) -> Markup {
    html! {
        div.article-list {
            @for item in items {
                article.article-preview {
                    h2 {
                        a href={ "/" (dir) "/" (item.slug) ".html" } {
                            (item.record.title.trim())
                        }
                    }
                    p.preview { (PreEscaped(&item.record.preview)) }
                }
            }
        }
    }
}

/// A single record rendered in full on its detail page.
pub fn article_detail(item: &ContentItem) -> Markup {
    html! {
        article.article-detail {
            h1 { (item.record.title.trim()) }
            @if !item.record.metadata.is_empty() {
                dl.article-meta {
                    @for (key, value) in &item.record.metadata {
                        dt { (key) }
                        dd { (value) }
                    }
                }
            }
            div.article-body { (PreEscaped(&item.record.body)) }
        }
    }
}
