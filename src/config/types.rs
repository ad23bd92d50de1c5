use serde::{Serialize, Deserialize};

use crate::config::defaults;
use crate::copy::CopyOptions;
use crate::markdown::toc::TocOptions;
use crate::markdown::types::HeadingLevel;

/// Table of contents configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TocConfig {
    /// Heading levels to list, as markers (`#`, `##`) or tag names (`h1`)
    #[serde(default = "defaults::default_toc_levels")]
    pub levels: Vec<HeadingLevel>,

    /// How deeply nested a heading may sit and still be listed
    #[serde(default = "defaults::default_toc_depth")]
    pub depth: usize,

    /// CSS class of the list
    #[serde(default = "defaults::default_list_class")]
    pub list_class: String,

    /// CSS class of each link
    #[serde(default = "defaults::default_link_class")]
    pub link_class: String,

    /// Indentation per level below the shallowest, in rem
    #[serde(default = "defaults::default_indent_step")]
    pub indent_step_rem: f32,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            levels: defaults::default_toc_levels(),
            depth: defaults::default_toc_depth(),
            list_class: defaults::default_list_class(),
            link_class: defaults::default_link_class(),
            indent_step_rem: defaults::default_indent_step(),
        }
    }
}

/// Copy button configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CopyConfig {
    /// Install copy buttons at all
    #[serde(default = "defaults::default_copy_enabled")]
    pub enabled: bool,

    /// Button label
    #[serde(default = "defaults::default_copy_label")]
    pub label: String,

    /// Button CSS classes
    #[serde(default = "defaults::default_copy_class", alias = "class")]
    pub class_name: String,

    /// Skip blocks that already carry a button when installing again
    #[serde(default)]
    pub skip_installed: bool,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::default_copy_enabled(),
            label: defaults::default_copy_label(),
            class_name: defaults::default_copy_class(),
            skip_installed: false,
        }
    }
}

/// Page helper configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub toc: TocConfig,

    #[serde(default)]
    pub copy: CopyConfig,
}

impl Config {
    pub fn toc_options(&self) -> TocOptions {
        TocOptions {
            levels: self.toc.levels.clone(),
            depth: self.toc.depth,
            list_class: self.toc.list_class.clone(),
            link_class: self.toc.link_class.clone(),
            indent_step_rem: self.toc.indent_step_rem,
        }
    }

    pub fn copy_options(&self) -> CopyOptions {
        CopyOptions {
            label: self.copy.label.clone(),
            class_name: self.copy.class_name.clone(),
            skip_installed: self.copy.skip_installed,
        }
    }
}
