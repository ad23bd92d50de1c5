mod generator;
mod parser;

pub use generator::{build_toc, generate_toc};
pub use parser::HtmlHeadings;

use crate::markdown::types::{HeadingLevel, DEFAULT_TOC_LEVELS};

/// Options for table of contents generation
#[derive(Debug, Clone, PartialEq)]
pub struct TocOptions {
    /// Heading levels to list
    pub levels: Vec<HeadingLevel>,
    /// How deeply nested a heading may be and still be listed
    pub depth: usize,
    /// CSS class for the TOC list
    pub list_class: String,
    /// CSS class for each entry link
    pub link_class: String,
    /// Left margin added per level below the shallowest, in rem
    pub indent_step_rem: f32,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            levels: DEFAULT_TOC_LEVELS.to_vec(),
            depth: 1,
            list_class: "monospace".to_string(),
            link_class: "nu".to_string(),
            indent_step_rem: 2.0,
        }
    }
}
