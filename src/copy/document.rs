use std::fmt;
use std::sync::Arc;

use lazy_static::lazy_static;
use log::warn;
use regex::Regex;

use crate::copy::clipboard::Clipboard;
use crate::utils::error::{DocpageError, Result};

lazy_static! {
    static ref PRE_REGEX: Regex = Regex::new(r"(?is)(<pre(?:\s[^>]*)?>)(.*?)</pre\s*>").unwrap();
    static ref CODE_REGEX: Regex = Regex::new(r"(?is)<code(?:\s[^>]*)?>(.*?)</code\s*>").unwrap();
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]*>").unwrap();
    static ref TRAILING_BUTTONS_REGEX: Regex =
        Regex::new(r"(?i)(?:<button(?:\s[^>]*)?>[^<]*</button\s*>\s*)+$").unwrap();
    static ref BUTTON_REGEX: Regex = Regex::new(r"(?i)<button(?:\s[^>]*)?>").unwrap();
}

/// Copy control attached to a code block
#[derive(Clone)]
pub struct CopyButton {
    pub class_name: String,
    pub label: String,
    clipboard: Arc<dyn Clipboard>,
}

impl CopyButton {
    pub fn new(class_name: impl Into<String>, label: impl Into<String>, clipboard: Arc<dyn Clipboard>) -> Self {
        Self {
            class_name: class_name.into(),
            label: label.into(),
            clipboard,
        }
    }

    fn to_html(&self) -> String {
        format!(
            "<button class=\"{}\">{}</button>",
            html_escape::encode_double_quoted_attribute(&self.class_name),
            html_escape::encode_text(&self.label)
        )
    }
}

impl fmt::Debug for CopyButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CopyButton")
            .field("class_name", &self.class_name)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// A `pre` element of the page
#[derive(Debug, Clone)]
pub struct CodeBlock {
    open_tag: String,
    inner_html: String,
    /// Buttons already present in the parsed markup
    existing_markup: String,
    existing_count: usize,
    buttons: Vec<CopyButton>,
}

impl CodeBlock {
    fn parse(open_tag: &str, inner: &str) -> Self {
        let (inner_html, existing_markup) = match TRAILING_BUTTONS_REGEX.find(inner) {
            Some(found) => (&inner[..found.start()], found.as_str()),
            None => (inner, ""),
        };

        Self {
            open_tag: open_tag.to_string(),
            inner_html: inner_html.to_string(),
            existing_markup: existing_markup.to_string(),
            existing_count: BUTTON_REGEX.find_iter(existing_markup).count(),
            buttons: Vec::new(),
        }
    }

    /// Whether the block already has a button, from the parsed markup or added since
    pub fn has_button(&self) -> bool {
        self.existing_count > 0 || !self.buttons.is_empty()
    }

    /// Markup inside the `pre` element, excluding installed buttons
    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    /// Text content of the nested `code` element, if there is one
    pub fn code_text(&self) -> Option<String> {
        let cap = CODE_REGEX.captures(&self.inner_html)?;
        let text = TAG_REGEX.replace_all(&cap[1], "");
        Some(html_escape::decode_html_entities(&text).into_owned())
    }

    pub fn buttons(&self) -> &[CopyButton] {
        &self.buttons
    }

    pub fn add_button(&mut self, button: CopyButton) {
        self.buttons.push(button);
    }

    /// Buttons read back from the parsed markup, which carry no clipboard
    pub fn existing_button_count(&self) -> usize {
        self.existing_count
    }

    /// Activate one of this block's buttons, copying the code text
    pub async fn activate(&self, button: usize) -> Result<()> {
        let button = self.buttons.get(button).ok_or_else(|| {
            DocpageError::Generic(format!("Code block has no button #{}", button))
        })?;

        match self.code_text() {
            Some(text) => button.clipboard.write_text(&text).await,
            None => {
                warn!("Code block has no code element, nothing copied");
                Ok(())
            }
        }
    }

    fn to_html(&self) -> String {
        let mut html = String::with_capacity(
            self.open_tag.len() + self.inner_html.len() + self.existing_markup.len() + 6,
        );
        html.push_str(&self.open_tag);
        html.push_str(&self.inner_html);
        html.push_str(&self.existing_markup);
        for button in &self.buttons {
            html.push_str(&button.to_html());
        }
        html.push_str("</pre>");
        html
    }
}

#[derive(Debug, Clone)]
enum Segment {
    Markup(String),
    Block(CodeBlock),
}

/// An HTML page fragment split around its code blocks
#[derive(Debug, Clone, Default)]
pub struct Document {
    segments: Vec<Segment>,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        let mut segments = Vec::new();
        let mut last = 0;

        for cap in PRE_REGEX.captures_iter(html) {
            let whole = match cap.get(0) {
                Some(whole) => whole,
                None => continue,
            };

            if whole.start() > last {
                segments.push(Segment::Markup(html[last..whole.start()].to_string()));
            }
            segments.push(Segment::Block(CodeBlock::parse(&cap[1], &cap[2])));
            last = whole.end();
        }

        if last < html.len() {
            segments.push(Segment::Markup(html[last..].to_string()));
        }

        Self { segments }
    }

    /// Every `pre` block, in document order
    pub fn blocks(&self) -> impl Iterator<Item = &CodeBlock> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Block(block) => Some(block),
            Segment::Markup(_) => None,
        })
    }

    pub fn blocks_mut(&mut self) -> impl Iterator<Item = &mut CodeBlock> {
        self.segments.iter_mut().filter_map(|segment| match segment {
            Segment::Block(block) => Some(block),
            Segment::Markup(_) => None,
        })
    }

    pub fn block(&self, index: usize) -> Option<&CodeBlock> {
        self.blocks().nth(index)
    }

    /// Total number of installed buttons
    pub fn button_count(&self) -> usize {
        self.blocks().map(|block| block.buttons.len()).sum()
    }

    /// Activate the `index`-th button of the page, counted in document order
    pub async fn activate(&self, index: usize) -> Result<()> {
        let mut remaining = index;
        for block in self.blocks() {
            if remaining < block.buttons.len() {
                return block.activate(remaining).await;
            }
            remaining -= block.buttons.len();
        }

        Err(DocpageError::Generic(format!(
            "Page has {} buttons, cannot activate #{}",
            self.button_count(),
            index
        )))
    }

    pub fn to_html(&self) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Markup(markup) => markup.clone(),
                Segment::Block(block) => block.to_html(),
            })
            .collect()
    }
}
