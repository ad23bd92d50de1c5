use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::copy::StdoutClipboard;
use crate::page::{build_page, PageEnvironment};
use crate::utils::error::BoxResult;
use crate::utils::fs;

/// Handle the render command
pub fn handle_render_command(config: &Config, file: &Path, toc: bool, no_copy: bool) -> BoxResult<()> {
    let markdown = fs::read_input(file)?;

    // Buttons only need a clipboard once the page is loaded, so any capability will do here
    let env = if no_copy {
        PageEnvironment::without_clipboard()
    } else {
        PageEnvironment::with_clipboard(Arc::new(StdoutClipboard))
    };

    let document = build_page(&markdown, config, &env, toc)?;
    println!("{}", document.to_html());
    Ok(())
}
