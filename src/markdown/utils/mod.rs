pub mod text;

pub use text::{make_slug, make_title, truncate, SlugTracker, Slugger, TextModifier};
