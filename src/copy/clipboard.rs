use std::sync::Mutex;

use futures_util::future::{BoxFuture, FutureExt};
use tokio::io::AsyncWriteExt;

use crate::utils::error::{DocpageError, Result};

/// Clipboard write capability offered by the host environment
pub trait Clipboard: Send + Sync {
    /// Replace the clipboard contents with `text`
    fn write_text<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Result<()>>;
}

/// Keeps every write in memory, newest last
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    writes: Mutex<Vec<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clipboard contents
    pub fn contents(&self) -> Option<String> {
        self.writes.lock().ok()?.last().cloned()
    }

    /// All writes so far, oldest first
    pub fn history(&self) -> Vec<String> {
        self.writes
            .lock()
            .map(|writes| writes.clone())
            .unwrap_or_default()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Result<()>> {
        async move {
            let mut writes = self
                .writes
                .lock()
                .map_err(|_| DocpageError::Clipboard("clipboard lock poisoned".to_string()))?;
            writes.push(text.to_string());
            Ok(())
        }
        .boxed()
    }
}

/// Writes copied text to standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutClipboard;

impl Clipboard for StdoutClipboard {
    fn write_text<'a>(&'a self, text: &'a str) -> BoxFuture<'a, Result<()>> {
        async move {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(text.as_bytes()).await?;
            stdout.flush().await?;
            Ok(())
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_clipboard_records_writes() {
        let clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.contents(), None);

        clipboard.write_text("first").await.unwrap();
        clipboard.write_text("second").await.unwrap();

        assert_eq!(clipboard.contents().as_deref(), Some("second"));
        assert_eq!(clipboard.history(), vec!["first", "second"]);
    }
}
