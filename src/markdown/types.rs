use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};

use crate::utils::error::DocpageError;

/// Heading level of a page heading, written as a run of `#` markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

/// Levels included in a table of contents unless configured otherwise
pub const DEFAULT_TOC_LEVELS: [HeadingLevel; 2] = [HeadingLevel::H1, HeadingLevel::H2];

impl HeadingLevel {
    /// All heading levels, shallowest first
    pub const ALL: [HeadingLevel; 6] = [
        HeadingLevel::H1,
        HeadingLevel::H2,
        HeadingLevel::H3,
        HeadingLevel::H4,
        HeadingLevel::H5,
        HeadingLevel::H6,
    ];

    /// Numeric depth, 1 for `#` through 6 for `######`
    pub fn depth(self) -> usize {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
            HeadingLevel::H5 => 5,
            HeadingLevel::H6 => 6,
        }
    }

    /// Build a level from a numeric depth
    pub fn from_depth(depth: usize) -> Option<Self> {
        Self::ALL.get(depth.checked_sub(1)?).copied()
    }

    /// The markup token for this level, e.g. `##`
    pub fn marker(self) -> &'static str {
        &"######"[..self.depth()]
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

impl FromStr for HeadingLevel {
    type Err = DocpageError;

    /// Accepts a marker (`##`) or a tag name (`h2`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let depth = if !s.is_empty() && s.chars().all(|c| c == '#') {
            Some(s.len())
        } else {
            s.strip_prefix(['h', 'H']).and_then(|n| n.parse::<usize>().ok())
        };

        depth
            .and_then(HeadingLevel::from_depth)
            .ok_or_else(|| DocpageError::Markdown(format!("Unknown heading level: {:?}", s)))
    }
}

impl TryFrom<String> for HeadingLevel {
    type Error = DocpageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<HeadingLevel> for String {
    fn from(level: HeadingLevel) -> Self {
        level.marker().to_string()
    }
}

/// A single page heading as handed to the table-of-contents builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingToken {
    pub level: HeadingLevel,
    pub text: String,
    /// 1-based source line, 0 when unknown
    #[serde(default)]
    pub line: usize,
    /// Anchor already assigned to the heading on the page
    #[serde(default)]
    pub anchor: Option<String>,
}

impl HeadingToken {
    pub fn new(level: HeadingLevel, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
            line: 0,
            anchor: None,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_round_trip() {
        for level in HeadingLevel::ALL {
            assert_eq!(level.marker().parse::<HeadingLevel>().unwrap(), level);
        }
        assert_eq!(HeadingLevel::H3.marker(), "###");
    }

    #[test]
    fn test_parse_tag_names() {
        assert_eq!("h2".parse::<HeadingLevel>().unwrap(), HeadingLevel::H2);
        assert_eq!("H6".parse::<HeadingLevel>().unwrap(), HeadingLevel::H6);
        assert!("h7".parse::<HeadingLevel>().is_err());
        assert!("#######".parse::<HeadingLevel>().is_err());
        assert!("".parse::<HeadingLevel>().is_err());
    }

    #[test]
    fn test_deserialize_levels() {
        let levels: Vec<HeadingLevel> = serde_yaml::from_str("['#', '##', h3]").unwrap();
        assert_eq!(levels, vec![HeadingLevel::H1, HeadingLevel::H2, HeadingLevel::H3]);
    }
}
