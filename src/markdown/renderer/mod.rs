mod markdown_renderer;

pub use markdown_renderer::{render_page_body, RenderedBody};
