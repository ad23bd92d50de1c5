pub mod engine;
pub mod renderer;
pub mod toc;
pub mod tokens;
pub mod types;
pub mod utils;

pub use renderer::{render_page_body, RenderedBody};
pub use toc::{build_toc, generate_toc, HtmlHeadings, TocOptions};
pub use tokens::{HeadingSource, MarkdownHeadings, TokenList};
pub use types::{HeadingLevel, HeadingToken, DEFAULT_TOC_LEVELS};
pub use utils::{make_slug, SlugTracker, Slugger, TextModifier};
