use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use crate::utils::error::DocpageError;

/// Slug base for headings whose text leaves nothing to slug
const FALLBACK_SLUG: &str = "section";

/// Words left lowercase by `make_title` unless they open the title
const SHORT_WORDS: [&str; 13] = [
    "a", "an", "and", "the", "on", "to", "in", "for", "nor", "or", "from", "but", "is",
];

/// Turn heading text into an anchor slug.
///
/// Inline markup is skipped, with each closing `>` leaving a `-` behind.
/// Letters and numbers are lowercased, whitespace and `-` become `-`, and
/// everything else is dropped.
pub fn make_slug(source: &str) -> String {
    let mut slug = String::with_capacity(source.len());
    let mut inside_element = false;

    for c in source.chars() {
        match c {
            '<' => inside_element = true,
            '>' => {
                inside_element = false;
                slug.push('-');
            }
            _ if inside_element => {}
            c if c.is_alphanumeric() => slug.extend(c.to_lowercase()),
            c if c.is_whitespace() || c == '-' => slug.push('-'),
            _ => {}
        }
    }

    slug
}

/// Title-case a phrase, keeping short joining words lowercase
pub fn make_title(input: &str) -> String {
    input
        .split(' ')
        .enumerate()
        .map(|(i, word)| {
            if i > 0 && SHORT_WORDS.contains(&word) {
                return word.to_string();
            }

            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shorten text to at most `max_chars` characters, breaking on a word where possible
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut = text
        .char_indices()
        .nth(max_chars)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let truncated = &text[..cut];

    match truncated.rfind(' ') {
        Some(pos) if pos > 0 => format!("{}...", truncated[..pos].trim_end()),
        _ => format!("{}...", truncated),
    }
}

/// Produces anchor slugs for heading text
pub trait Slugger {
    fn slug(&mut self, text: &str) -> String;
}

/// Hands out slugs that are unique within one page
#[derive(Debug, Default, Clone)]
pub struct SlugTracker {
    seen: HashMap<String, usize>,
    issued: HashSet<String>,
}

impl SlugTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slug for `text`, suffixed with `-N` when an earlier heading took it
    pub fn unique_slug(&mut self, text: &str) -> String {
        let mut base = make_slug(text);
        if base.is_empty() {
            base = FALLBACK_SLUG.to_string();
        }
        let count = self.seen.entry(base.clone()).or_insert(0);

        let mut candidate = if *count == 0 {
            base.clone()
        } else {
            format!("{}-{}", base, count)
        };
        *count += 1;

        // A literal heading such as "intro-1" may already own the suffixed form
        while self.issued.contains(&candidate) {
            candidate = format!("{}-{}", base, count);
            *count += 1;
        }

        self.issued.insert(candidate.clone());
        candidate
    }

    /// Number of slugs handed out so far
    pub fn len(&self) -> usize {
        self.issued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issued.is_empty()
    }
}

impl Slugger for SlugTracker {
    fn slug(&mut self, text: &str) -> String {
        self.unique_slug(text)
    }
}

/// Text transformations available to page templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextModifier {
    Slug,
    UniqueSlug,
    Upper,
    Lower,
    Title,
}

impl TextModifier {
    pub fn apply(self, tracker: &mut SlugTracker, text: &str) -> String {
        match self {
            TextModifier::Slug => make_slug(text),
            TextModifier::UniqueSlug => tracker.unique_slug(text),
            TextModifier::Upper => text.to_uppercase(),
            TextModifier::Lower => text.to_lowercase(),
            TextModifier::Title => make_title(text),
        }
    }
}

impl FromStr for TextModifier {
    type Err = DocpageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slug" | "s" => Ok(TextModifier::Slug),
            "unique_slug" | "uslug" | "us" => Ok(TextModifier::UniqueSlug),
            "upper" => Ok(TextModifier::Upper),
            "lower" => Ok(TextModifier::Lower),
            "title" => Ok(TextModifier::Title),
            other => Err(DocpageError::Generic(format!("Unknown text modifier: {}", other))),
        }
    }
}
