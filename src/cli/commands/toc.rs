use std::path::Path;

use log::debug;

use crate::config::Config;
use crate::markdown::{generate_toc, HeadingLevel, HeadingSource, HtmlHeadings, MarkdownHeadings};
use crate::utils::error::{BoxResult, Result};
use crate::utils::fs;

/// Handle the toc command
pub fn handle_toc_command(
    config: &Config,
    file: &Path,
    levels: &[String],
    depth: Option<usize>,
) -> BoxResult<()> {
    let content = fs::read_input(file)?;

    let mut options = config.toc_options();
    if !levels.is_empty() {
        options.levels = parse_levels(levels)?;
    }
    if let Some(depth) = depth {
        options.depth = depth;
    }

    let source: Box<dyn HeadingSource> = if is_html(file) {
        debug!("Reading headings from HTML {}", file.display());
        Box::new(HtmlHeadings::parse(&content))
    } else {
        debug!("Reading headings from markdown {}", file.display());
        Box::new(MarkdownHeadings::parse(&content))
    };

    println!("{}", generate_toc(source.as_ref(), &options));
    Ok(())
}

fn parse_levels(levels: &[String]) -> Result<Vec<HeadingLevel>> {
    levels.iter().map(|level| level.parse()).collect()
}

fn is_html(file: &Path) -> bool {
    file.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}
