//! Navigation building.
//!
//! Each configured page declares which navigation areas it appears in (main
//! header, footer, both, or neither). For every page being rendered the
//! builder recomputes the entry list for each area, flagging the entry that
//! matches the current page as active.

use crate::config::PageSpec;
use serde::{Deserialize, Serialize};

/// Navigation area a page can be placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavPlacement {
    Main,
    Footer,
}

/// One rendered navigation link. Derived per target page, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub href: String,
    pub label: String,
    pub is_active: bool,
}

/// Build the navigation entries for one placement, relative to `current`.
///
/// A stable filter over `all_pages` in configuration order; no re-sorting.
/// At most one entry is active. Zero active entries is a valid outcome:
/// the current page may itself be excluded from this placement.
pub fn build_nav(
    all_pages: &[PageSpec],
    placement: NavPlacement,
    current: &PageSpec,
) -> Vec<NavEntry> {
    all_pages
        .iter()
        .filter(|p| p.nav.contains(&placement))
        .map(|p| NavEntry {
            href: format!("{}.html", p.file),
            label: p.name.clone(),
            is_active: p.name == current.name,
        })
        .collect()
}
