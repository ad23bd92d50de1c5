use log::debug;

use crate::markdown::tokens::HeadingSource;
use crate::markdown::toc::TocOptions;
use crate::markdown::types::HeadingToken;
use crate::markdown::utils::{SlugTracker, Slugger};

/// Render the table of contents for an ordered list of heading tokens.
///
/// Tokens outside `options.levels` are skipped. A token that already carries its
/// page anchor links to it; otherwise the anchor comes from `slugger`.
pub fn build_toc(tokens: &[HeadingToken], options: &TocOptions, slugger: &mut dyn Slugger) -> String {
    let shallowest = options
        .levels
        .iter()
        .map(|level| level.depth())
        .min()
        .unwrap_or(1);

    let mut items = String::new();
    let mut count = 0;

    for token in tokens.iter().filter(|t| options.levels.contains(&t.level)) {
        let anchor = match &token.anchor {
            Some(anchor) => anchor.clone(),
            None => slugger.slug(&token.text),
        };

        let offset = token.level.depth().saturating_sub(shallowest);
        if offset == 0 {
            items.push_str("<li>");
        } else {
            items.push_str(&format!(
                "<li style=\"margin-left:{}rem\">",
                options.indent_step_rem * offset as f32
            ));
        }

        items.push_str(&format!(
            "<a class=\"{}\" href=\"#{}\">{}</a></li>",
            options.link_class,
            html_escape::encode_double_quoted_attribute(&anchor),
            html_escape::encode_text(&token.text)
        ));
        count += 1;
    }

    debug!("Built table of contents with {} items", count);

    format!("<ul class=\"{}\">{}</ul>", options.list_class, items)
}

/// Generate a table of contents straight from a page's heading source
pub fn generate_toc(source: &dyn HeadingSource, options: &TocOptions) -> String {
    let tokens = source.headings(options.depth, &options.levels);
    let mut tracker = SlugTracker::new();
    build_toc(&tokens, options, &mut tracker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::tokens::{MarkdownHeadings, TokenList};
    use crate::markdown::types::HeadingLevel;

    fn intro_details() -> Vec<HeadingToken> {
        vec![
            HeadingToken::new(HeadingLevel::H1, "Intro"),
            HeadingToken::new(HeadingLevel::H2, "Details"),
        ]
    }

    #[test]
    fn test_two_levels() {
        let toc = build_toc(&intro_details(), &TocOptions::default(), &mut SlugTracker::new());

        assert_eq!(
            toc,
            "<ul class=\"monospace\">\
             <li><a class=\"nu\" href=\"#intro\">Intro</a></li>\
             <li style=\"margin-left:2rem\"><a class=\"nu\" href=\"#details\">Details</a></li>\
             </ul>"
        );
        assert_eq!(toc.matches("<li").count(), 2);
    }

    #[test]
    fn test_colliding_texts_get_unique_anchors() {
        let tokens = vec![
            HeadingToken::new(HeadingLevel::H1, "Intro"),
            HeadingToken::new(HeadingLevel::H2, "Intro"),
        ];
        let toc = build_toc(&tokens, &TocOptions::default(), &mut SlugTracker::new());

        assert!(toc.contains("href=\"#intro\""));
        assert!(toc.contains("href=\"#intro-1\""));
    }

    #[test]
    fn test_empty_tokens() {
        let toc = build_toc(&[], &TocOptions::default(), &mut SlugTracker::new());
        assert_eq!(toc, "<ul class=\"monospace\"></ul>");
    }

    #[test]
    fn test_nothing_matches_filter() {
        let tokens = vec![HeadingToken::new(HeadingLevel::H3, "Deep")];
        let toc = build_toc(&tokens, &TocOptions::default(), &mut SlugTracker::new());
        assert_eq!(toc, "<ul class=\"monospace\"></ul>");
    }

    #[test]
    fn test_custom_levels_indent_from_shallowest() {
        let options = TocOptions {
            levels: vec![HeadingLevel::H2, HeadingLevel::H4],
            ..TocOptions::default()
        };
        let tokens = vec![
            HeadingToken::new(HeadingLevel::H1, "Skipped"),
            HeadingToken::new(HeadingLevel::H2, "Top"),
            HeadingToken::new(HeadingLevel::H4, "Deeper"),
        ];
        let toc = build_toc(&tokens, &options, &mut SlugTracker::new());

        assert!(!toc.contains("Skipped"));
        assert!(toc.contains("<li><a class=\"nu\" href=\"#top\">Top</a></li>"));
        assert!(toc.contains("<li style=\"margin-left:4rem\">"));
    }

    #[test]
    fn test_text_is_escaped() {
        let tokens = vec![HeadingToken::new(HeadingLevel::H1, "Vec<T> & friends")];
        let toc = build_toc(&tokens, &TocOptions::default(), &mut SlugTracker::new());

        assert!(toc.contains(">Vec&lt;T&gt; &amp; friends</a>"));
        assert!(toc.contains("href=\"#vec---friends\""));
    }

    #[test]
    fn test_preassigned_anchor_wins() {
        let tokens = vec![HeadingToken::new(HeadingLevel::H1, "Intro").with_anchor("intro-3")];
        let toc = build_toc(&tokens, &TocOptions::default(), &mut SlugTracker::new());
        assert!(toc.contains("href=\"#intro-3\""));
    }

    #[test]
    fn test_generate_toc_matches_page_anchors() {
        let source = MarkdownHeadings::parse("# A\n\n### Notes\n\n## Notes\n");
        let toc = generate_toc(&source, &TocOptions::default());

        // The h3 took "notes" first on the page
        assert!(toc.contains("href=\"#notes-1\""));
        assert!(!toc.contains("href=\"#notes\""));
    }

    #[test]
    fn test_generate_toc_from_token_list() {
        let source = TokenList::from(intro_details());
        let toc = generate_toc(&source, &TocOptions::default());
        assert_eq!(toc.matches("<li").count(), 2);
    }
}
