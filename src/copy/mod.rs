pub mod clipboard;
pub mod document;
pub mod installer;

pub use clipboard::{Clipboard, MemoryClipboard, StdoutClipboard};
pub use document::{CodeBlock, CopyButton, Document};
pub use installer::{CopyInstaller, CopyOptions};
