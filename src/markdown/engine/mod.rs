mod comrak;

pub use self::comrak::{collect_headings, create_comrak_options, render_markdown, render_with_headings, RawHeading};
