use ::comrak::nodes::{AstNode, NodeValue};
use ::comrak::{format_html, Arena, Options};

use crate::markdown::types::{HeadingLevel, HeadingToken};
use crate::utils::error::{DocpageError, Result};

/// Create default comrak options with GitHub Flavored Markdown settings
pub fn create_comrak_options<'a>() -> Options<'a> {
    let mut options = Options::default();

    // Extension options - GitHub Flavored Markdown
    options.extension.strikethrough = true;
    options.extension.tagfilter = true;
    options.extension.table = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options.extension.superscript = true;
    options.extension.footnotes = true;
    options.extension.description_lists = true;
    // Heading ids come from the page slug tracker instead
    options.extension.header_ids = None;

    // Render options
    options.render.hardbreaks = false;
    options.render.github_pre_lang = true;
    // Raw HTML headings would otherwise pick up injected ids
    options.render.unsafe_ = false;

    // Parse options
    options.parse.smart = true;

    options
}

/// Render markdown to HTML using comrak
pub fn render_markdown(content: &str, options: &Options) -> String {
    ::comrak::markdown_to_html(content, options)
}

/// A heading found in the document tree, with its block nesting depth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawHeading {
    pub token: HeadingToken,
    /// 1 for top-level blocks, plus one per enclosing container
    pub nesting: usize,
}

/// Collect every heading of a markdown document in document order
pub fn collect_headings(content: &str, options: &Options) -> Vec<RawHeading> {
    let arena = Arena::new();
    let root = ::comrak::parse_document(&arena, content, options);

    let mut headings = Vec::new();
    walk_headings(root, 1, &mut headings);
    headings
}

/// Render markdown and collect its headings from the same document tree
pub fn render_with_headings(content: &str, options: &Options) -> Result<(String, Vec<RawHeading>)> {
    let arena = Arena::new();
    let root = ::comrak::parse_document(&arena, content, options);

    let mut headings = Vec::new();
    walk_headings(root, 1, &mut headings);

    let mut html = Vec::new();
    format_html(root, options, &mut html)
        .map_err(|e| DocpageError::Markdown(format!("Failed to format HTML: {}", e)))?;
    let html = String::from_utf8(html)
        .map_err(|e| DocpageError::Markdown(format!("Rendered HTML is not UTF-8: {}", e)))?;

    Ok((html, headings))
}

fn walk_headings<'a>(node: &'a AstNode<'a>, nesting: usize, out: &mut Vec<RawHeading>) {
    for child in node.children() {
        let heading = {
            let data = child.data.borrow();
            match &data.value {
                NodeValue::Heading(heading) => {
                    Some((heading.level, data.sourcepos.start.line))
                }
                _ => None,
            }
        };

        match heading {
            Some((level, line)) => {
                if let Some(level) = HeadingLevel::from_depth(level as usize) {
                    let text = collect_heading_text(child);
                    out.push(RawHeading {
                        token: HeadingToken::new(level, text.trim()).at_line(line),
                        nesting,
                    });
                }
            }
            None => walk_headings(child, nesting + 1, out),
        }
    }
}

/// Recursively collect the plain-text content of a heading node
fn collect_heading_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for child in node.children() {
        match &child.data.borrow().value {
            NodeValue::Text(s) => text.push_str(s),
            NodeValue::Code(c) => text.push_str(&c.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => text.push(' '),
            _ => text.push_str(&collect_heading_text(child)),
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comrak_rendering() {
        let options = create_comrak_options();
        let markdown = "# Hello, World!\n\nThis is a **bold** statement.";
        let html = render_markdown(markdown, &options);

        assert!(html.contains("<h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_collect_headings_with_nesting() {
        let options = create_comrak_options();
        let markdown = "# Top\n\n> ## Quoted\n\n- ### In a list\n\n## Plain `code`\n";
        let headings = collect_headings(markdown, &options);

        let summary: Vec<(&str, usize, usize)> = headings
            .iter()
            .map(|h| (h.token.text.as_str(), h.token.level.depth(), h.nesting))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("Top", 1, 1),
                ("Quoted", 2, 2),
                ("In a list", 3, 3),
                ("Plain code", 2, 1),
            ]
        );
        assert_eq!(headings[0].token.line, 1);
    }

    #[test]
    fn test_render_with_headings() {
        let options = create_comrak_options();
        let markdown = "# One\n\ntext\n\n## Two\n";
        let (html, headings) = render_with_headings(markdown, &options).unwrap();

        assert_eq!(html, render_markdown(markdown, &options));
        assert_eq!(headings.len(), 2);
        assert_eq!(headings[1].token.text, "Two");
    }
}
