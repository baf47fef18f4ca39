//! docq — interactive documentation search
//!
//! A terminal UI over a directory of Markdown pages: fuzzy search with a
//! popular-terms suggestion panel, breadcrumbs, page preview with a
//! lightweight front-matter check, and clipboard helpers for page paths and
//! edit links.

pub mod app;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod input;
pub mod notification;
pub mod search;
pub mod site;
pub mod suggest;
pub mod validate;
pub mod widgets;
