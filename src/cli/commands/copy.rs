use std::path::Path;
use std::sync::Arc;

use log::info;

use crate::config::Config;
use crate::copy::{Document, StdoutClipboard};
use crate::page::{init, PageEnvironment};
use crate::utils::error::BoxResult;
use crate::utils::fs;

/// Handle the copy command
pub async fn handle_copy_command(
    config: &Config,
    file: &Path,
    no_clipboard: bool,
    activate: Option<usize>,
) -> BoxResult<()> {
    let html = fs::read_input(file)?;
    let mut document = Document::parse(&html);

    let env = if no_clipboard {
        PageEnvironment::without_clipboard()
    } else {
        PageEnvironment::with_clipboard(Arc::new(StdoutClipboard))
    };

    init(&mut document, &env, &config.copy_options());

    match activate {
        Some(index) => {
            info!("Activating copy button {}", index);
            document.activate(index).await?;
        }
        None => println!("{}", document.to_html()),
    }

    Ok(())
}
