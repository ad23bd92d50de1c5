//! Page helpers for documentation sites: a table of contents built from heading
//! tokens, and copy-to-clipboard buttons for code blocks.

pub mod cli;
pub mod config;
pub mod copy;
pub mod markdown;
pub mod page;
pub mod utils;

pub use page::{build_page, init, PageEnvironment};
