use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::config::Config;
use crate::copy::{Clipboard, CopyInstaller, CopyOptions, Document};
use crate::markdown::{generate_toc, render_page_body};
use crate::utils::error::Result;

/// Capabilities the hosting page offers to the page helpers
#[derive(Clone, Default)]
pub struct PageEnvironment {
    pub clipboard: Option<Arc<dyn Clipboard>>,
}

impl PageEnvironment {
    pub fn with_clipboard(clipboard: Arc<dyn Clipboard>) -> Self {
        Self { clipboard: Some(clipboard) }
    }

    pub fn without_clipboard() -> Self {
        Self { clipboard: None }
    }

    pub fn has_clipboard(&self) -> bool {
        self.clipboard.is_some()
    }
}

impl fmt::Debug for PageEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageEnvironment")
            .field("clipboard", &self.has_clipboard())
            .finish()
    }
}

/// Page load entry point, called once by the host for each page
pub fn init(document: &mut Document, env: &PageEnvironment, options: &CopyOptions) {
    CopyInstaller::new(options.clone()).install(document, env.clipboard.clone());
}

/// Render a markdown page body, with an optional table of contents and copy buttons
pub fn build_page(markdown: &str, config: &Config, env: &PageEnvironment, with_toc: bool) -> Result<Document> {
    let body = render_page_body(markdown)?;

    let mut html = String::new();
    if with_toc {
        html.push_str(&generate_toc(&body.headings, &config.toc_options()));
        html.push('\n');
    }
    html.push_str(&body.html);

    let mut document = Document::parse(&html);
    if config.copy.enabled {
        init(&mut document, env, &config.copy_options());
    } else {
        debug!("Copy buttons disabled in configuration");
    }

    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::copy::MemoryClipboard;

    const PAGE: &str = "# Install\n\n```sh\ncargo install docpage\n```\n\n## Usage\n\n```sh\ndocpage toc README.md\n```\n";

    #[test]
    fn test_init_installs_with_clipboard() {
        let mut doc = Document::parse("<pre><code>a</code></pre><pre><code>b</code></pre>");
        let env = PageEnvironment::with_clipboard(Arc::new(MemoryClipboard::new()));

        init(&mut doc, &env, &CopyOptions::default());
        assert_eq!(doc.button_count(), 2);
    }

    #[test]
    fn test_init_without_clipboard() {
        let mut doc = Document::parse("<pre><code>a</code></pre>");

        init(&mut doc, &PageEnvironment::without_clipboard(), &CopyOptions::default());
        assert_eq!(doc.button_count(), 0);
    }

    #[test]
    fn test_build_page_with_toc() {
        let env = PageEnvironment::with_clipboard(Arc::new(MemoryClipboard::new()));
        let doc = build_page(PAGE, &Config::default(), &env, true).unwrap();
        let html = doc.to_html();

        assert!(html.starts_with("<ul class=\"monospace\"><li><a class=\"nu\" href=\"#install\">"));
        assert!(html.contains("<h2 id=\"usage\">Usage</h2>"));
        assert_eq!(doc.button_count(), 2);
    }

    #[test]
    fn test_build_page_copy_disabled() {
        let mut config = Config::default();
        config.copy.enabled = false;
        let env = PageEnvironment::with_clipboard(Arc::new(MemoryClipboard::new()));

        let doc = build_page(PAGE, &config, &env, false).unwrap();
        assert_eq!(doc.button_count(), 0);
        assert!(!doc.to_html().contains("<ul class=\"monospace\">"));
    }

    #[tokio::test]
    async fn test_built_page_buttons_copy_code() {
        let memory = Arc::new(MemoryClipboard::new());
        let env = PageEnvironment::with_clipboard(memory.clone());
        let doc = build_page(PAGE, &Config::default(), &env, false).unwrap();

        doc.activate(1).await.unwrap();
        assert_eq!(memory.contents().as_deref(), Some("docpage toc README.md\n"));
    }
}
