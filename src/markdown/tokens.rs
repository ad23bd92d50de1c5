use log::debug;

use crate::markdown::engine::{collect_headings, create_comrak_options, RawHeading};
use crate::markdown::types::{HeadingLevel, HeadingToken};
use crate::markdown::utils::SlugTracker;

/// Supplies the headings of a page to the table-of-contents builder
pub trait HeadingSource {
    /// Headings whose level is one of `levels`, in document order.
    ///
    /// `depth` bounds how deeply nested a heading may sit: `0` finds nothing,
    /// `1` only looks at top-level blocks, and every enclosing container adds one.
    fn headings(&self, depth: usize, levels: &[HeadingLevel]) -> Vec<HeadingToken>;

    /// Whether any heading of the given levels exists at any depth
    fn has_headings(&self, levels: &[HeadingLevel]) -> bool;
}

/// Headings parsed from a markdown page
#[derive(Debug, Clone)]
pub struct MarkdownHeadings {
    headings: Vec<RawHeading>,
}

impl MarkdownHeadings {
    /// Parse markdown and assign every heading its page anchor
    pub fn parse(markdown: &str) -> Self {
        let options = create_comrak_options();
        Self::from_raw(collect_headings(markdown, &options))
    }

    /// Assign page anchors to headings already collected from a document tree
    pub fn from_raw(mut headings: Vec<RawHeading>) -> Self {
        let mut tracker = SlugTracker::new();
        for heading in &mut headings {
            let anchor = tracker.unique_slug(&heading.token.text);
            heading.token.anchor = Some(anchor);
        }

        debug!("Found {} headings in markdown source", headings.len());
        Self { headings }
    }

    /// All headings regardless of level or nesting
    pub fn all(&self) -> impl Iterator<Item = &HeadingToken> {
        self.headings.iter().map(|h| &h.token)
    }

    pub fn len(&self) -> usize {
        self.headings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }
}

impl HeadingSource for MarkdownHeadings {
    fn headings(&self, depth: usize, levels: &[HeadingLevel]) -> Vec<HeadingToken> {
        self.headings
            .iter()
            .filter(|h| h.nesting <= depth && levels.contains(&h.token.level))
            .map(|h| h.token.clone())
            .collect()
    }

    fn has_headings(&self, levels: &[HeadingLevel]) -> bool {
        self.headings.iter().any(|h| levels.contains(&h.token.level))
    }
}

/// Headings supplied directly by the host page
#[derive(Debug, Clone, Default)]
pub struct TokenList(pub Vec<HeadingToken>);

impl HeadingSource for TokenList {
    fn headings(&self, depth: usize, levels: &[HeadingLevel]) -> Vec<HeadingToken> {
        if depth == 0 {
            return Vec::new();
        }

        self.0
            .iter()
            .filter(|t| levels.contains(&t.level))
            .cloned()
            .collect()
    }

    fn has_headings(&self, levels: &[HeadingLevel]) -> bool {
        self.0.iter().any(|t| levels.contains(&t.level))
    }
}

impl From<Vec<HeadingToken>> for TokenList {
    fn from(tokens: Vec<HeadingToken>) -> Self {
        TokenList(tokens)
    }
}
