//! # Plainsite
//!
//! A minimal static site generator for plain-text content. A declarative
//! `config.toml` names the logical pages of a site; each page pulls its
//! content from plain-text files in a matching subfolder of the content
//! root, and every run renders the whole site from scratch.
//!
//! # Architecture: Forward-Only Pipeline
//!
//! Every run flows strictly forward; no stage mutates its predecessor's
//! output and nothing is cached between runs:
//!
//! ```text
//! raw content files  →  content records  →  page contexts  →  HTML files
//!       (parse)            (assemble)          (render)        (write)
//! ```
//!
//! Per configured page the pipeline discovers `*.md` files under
//! `<content>/<file>/`, parses each into a structured record, aggregates the
//! records with navigation and site-wide parameters into a render context,
//! and writes the output. Pages with the `article` content type get an
//! index of previews plus one detail page per record; `default` pages get a
//! single aggregate page.
//!
//! # Content File Format
//!
//! A content file is four sections split by a literal `-----` line: title,
//! `key: value` metadata, a hand-written preview, and a markdown body. See
//! [`content`] for the exact state-machine rules.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Parses one content file into a record (title, metadata, preview, body) |
//! | [`nav`] | Builds per-page navigation entry lists with an active flag |
//! | [`page`] | Aggregates records, navigation, and site params into a render context |
//! | [`render`] | Orchestrates discovery, parsing, assembly, and output writing |
//! | [`config`] | `config.toml` loading and validation |
//! | [`templates`] | Maud HTML components: page shell, listings, fragments |
//! | [`output`] | CLI reporting — per-page outcome lines and the status line |
//!
//! # Design Decisions
//!
//! ## Compile-Time Templates
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/) rather than a
//! runtime template engine. Malformed markup is a build error, template
//! values are typed Rust expressions, interpolation is escaped by default,
//! and there is no template directory that can be missing or stale at run
//! time.
//!
//! ## Page-Scoped Failures
//!
//! One broken content file should not take the whole site down. A parse or
//! write failure aborts only the owning page; the run continues, reports
//! which page failed, and exits with a warning status instead of silently
//! succeeding or failing everything.
//!
//! ## Deterministic Output
//!
//! Content files are processed in lexicographic file-name order and social
//! links in platform-name order, so two runs over the same inputs produce
//! byte-identical sites regardless of filesystem enumeration order.

pub mod config;
pub mod content;
pub mod nav;
pub mod output;
pub mod page;
pub mod render;
pub mod templates;
