use lazy_static::lazy_static;
use regex::Regex;

use crate::markdown::tokens::HeadingSource;
use crate::markdown::types::{HeadingLevel, HeadingToken};

lazy_static! {
    static ref HEADING_REGEX: Regex = Regex::new(
        r#"(?is)<h([1-6])(\s[^>]*)?>(.*?)</h([1-6])\s*>"#
    ).unwrap();

    static ref ID_REGEX: Regex = Regex::new(r#"(?i)(?:^|\s)id\s*=\s*["']([^"']+)["']"#).unwrap();

    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();
}

/// Headings found in an already rendered HTML fragment
#[derive(Debug, Clone, Default)]
pub struct HtmlHeadings {
    tokens: Vec<HeadingToken>,
}

impl HtmlHeadings {
    /// Extract `<h1>`..`<h6>` elements, keeping any existing `id` as the anchor
    pub fn parse(html: &str) -> Self {
        let mut tokens = Vec::new();

        for cap in HEADING_REGEX.captures_iter(html) {
            // Mismatched open and close tags are not headings
            if cap[1] != cap[4] {
                continue;
            }

            let level = match cap[1].parse().ok().and_then(HeadingLevel::from_depth) {
                Some(level) => level,
                None => continue,
            };

            let line = html[..cap.get(0).map_or(0, |m| m.start())].matches('\n').count() + 1;
            let mut token = HeadingToken::new(level, strip_html_tags(&cap[3])).at_line(line);

            if let Some(id) = cap.get(2).and_then(|attrs| ID_REGEX.captures(attrs.as_str())) {
                token.anchor = Some(id[1].to_string());
            }

            tokens.push(token);
        }

        Self { tokens }
    }

    pub fn tokens(&self) -> &[HeadingToken] {
        &self.tokens
    }
}

impl HeadingSource for HtmlHeadings {
    fn headings(&self, depth: usize, levels: &[HeadingLevel]) -> Vec<HeadingToken> {
        if depth == 0 {
            return Vec::new();
        }

        self.tokens
            .iter()
            .filter(|t| levels.contains(&t.level))
            .cloned()
            .collect()
    }

    fn has_headings(&self, levels: &[HeadingLevel]) -> bool {
        self.tokens.iter().any(|t| levels.contains(&t.level))
    }
}

/// Strip HTML tags from text and decode entities
fn strip_html_tags(text: &str) -> String {
    let stripped = TAG_REGEX.replace_all(text, "");
    html_escape::decode_html_entities(stripped.trim()).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markdown::types::DEFAULT_TOC_LEVELS;

    #[test]
    fn test_extract_headings() {
        let html = r#"
            <h1 id="intro">Introduction</h1>
            <p>Some text</p>
            <h2 id="chapter-1">Chapter <em>1</em></h2>
            <h3>Section 1.1</h3>
            <h2>Tips &amp; tricks</h2>
        "#;

        let source = HtmlHeadings::parse(html);
        let tokens = source.tokens();

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].anchor.as_deref(), Some("intro"));
        assert_eq!(tokens[0].line, 2);
        assert_eq!(tokens[1].text, "Chapter 1");
        assert_eq!(tokens[2].anchor, None);
        assert_eq!(tokens[3].text, "Tips & tricks");
    }

    #[test]
    fn test_filter_levels() {
        let html = "<h1>A</h1><h2>B</h2><h3>C</h3><h2>D</h5>";
        let source = HtmlHeadings::parse(html);

        let texts: Vec<String> = source
            .headings(1, &DEFAULT_TOC_LEVELS)
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(texts, vec!["A", "B"]);
        assert!(source.has_headings(&[HeadingLevel::H3]));
    }
}
