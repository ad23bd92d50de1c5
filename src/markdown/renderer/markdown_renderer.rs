use lazy_static::lazy_static;
use log::{debug, warn};
use regex::{Captures, Regex};

use crate::markdown::engine::{create_comrak_options, render_with_headings};
use crate::markdown::tokens::MarkdownHeadings;
use crate::markdown::types::HeadingToken;
use crate::utils::error::Result;

lazy_static! {
    static ref BARE_HEADING_REGEX: Regex = Regex::new(r"<h([1-6])>").unwrap();
}

/// Rendered page body with the headings it contains
#[derive(Debug, Clone)]
pub struct RenderedBody {
    pub html: String,
    pub headings: MarkdownHeadings,
}

impl RenderedBody {
    /// Heading tokens of the page, each carrying the id injected into the HTML
    pub fn tokens(&self) -> impl Iterator<Item = &HeadingToken> {
        self.headings.all()
    }
}

/// Render a markdown page body, giving every heading its unique slug as `id`
pub fn render_page_body(markdown: &str) -> Result<RenderedBody> {
    let options = create_comrak_options();
    let (html, raw) = render_with_headings(markdown, &options)?;
    let headings = MarkdownHeadings::from_raw(raw);

    let html = inject_heading_ids(&html, &headings);
    Ok(RenderedBody { html, headings })
}

/// Add `id` attributes to bare heading tags, pairing them with headings in document order
fn inject_heading_ids(html: &str, headings: &MarkdownHeadings) -> String {
    let mut remaining = headings.all().peekable();

    let result = BARE_HEADING_REGEX.replace_all(html, |caps: &Captures| {
        let tag = &caps[0];
        let Some(token) = remaining.peek() else {
            return tag.to_string();
        };

        // Keep the token for the next tag so one stray heading cannot shift the rest
        if caps[1] != token.level.depth().to_string() {
            warn!(
                "Rendered <h{}> does not match the heading on line {}, leaving it without an id",
                &caps[1], token.line
            );
            return tag.to_string();
        }
        let Some(token) = remaining.next() else {
            return tag.to_string();
        };

        match &token.anchor {
            Some(anchor) => format!(
                "<h{} id=\"{}\">",
                &caps[1],
                html_escape::encode_double_quoted_attribute(anchor)
            ),
            None => tag.to_string(),
        }
    });

    debug!("Injected ids into {} headings", headings.len());
    result.into_owned()
}
