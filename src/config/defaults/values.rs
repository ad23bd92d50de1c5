use crate::markdown::types::{HeadingLevel, DEFAULT_TOC_LEVELS};

/// Config file names looked up in the page directory, merged in this order
pub const CONFIG_FILES: [&str; 4] = ["docpage.yml", "docpage.yaml", "docpage.toml", "docpage.json"];

/// Default heading levels listed in the table of contents
pub fn default_toc_levels() -> Vec<HeadingLevel> {
    DEFAULT_TOC_LEVELS.to_vec()
}

/// Default heading nesting depth searched for the table of contents
pub fn default_toc_depth() -> usize {
    1
}

/// Default CSS class of the table of contents list
pub fn default_list_class() -> String {
    "monospace".to_string()
}

/// Default CSS class of table of contents links
pub fn default_link_class() -> String {
    "nu".to_string()
}

/// Default indentation step per heading level, in rem
pub fn default_indent_step() -> f32 {
    2.0
}

/// Copy buttons are installed unless turned off
pub fn default_copy_enabled() -> bool {
    true
}

/// Default copy button label
pub fn default_copy_label() -> String {
    "⌗".to_string()
}

/// Default copy button classes
pub fn default_copy_class() -> String {
    "copy mono".to_string()
}
