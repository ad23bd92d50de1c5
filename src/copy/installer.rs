use std::sync::Arc;

use log::{debug, info};

use crate::copy::clipboard::Clipboard;
use crate::copy::document::{CopyButton, Document};

/// Options for the copy buttons added to code blocks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyOptions {
    /// Text shown on the button
    pub label: String,
    /// CSS classes of the button
    pub class_name: String,
    /// Leave blocks that already have a button alone
    pub skip_installed: bool,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            label: "⌗".to_string(),
            class_name: "copy mono".to_string(),
            skip_installed: false,
        }
    }
}

/// Adds a copy button to every code block of a page
#[derive(Debug, Clone, Default)]
pub struct CopyInstaller {
    options: CopyOptions,
}

impl CopyInstaller {
    pub fn new(options: CopyOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CopyOptions {
        &self.options
    }

    /// Install one button per `pre` block.
    ///
    /// Without a clipboard nothing happens. Running it twice installs a second
    /// button per block unless `skip_installed` is set.
    pub fn install(&self, document: &mut Document, clipboard: Option<Arc<dyn Clipboard>>) {
        let Some(clipboard) = clipboard else {
            debug!("No clipboard available, skipping copy buttons");
            return;
        };

        let mut installed = 0;
        for block in document.blocks_mut() {
            if self.options.skip_installed && block.has_button() {
                continue;
            }

            block.add_button(CopyButton::new(
                self.options.class_name.as_str(),
                self.options.label.as_str(),
                Arc::clone(&clipboard),
            ));
            installed += 1;
        }

        info!("Installed {} copy buttons", installed);
    }
}
