//! Content module - loads projects and certificates from markdown

mod error;
mod frontmatter;
pub mod loader;
mod markdown;
mod record;

pub use error::ContentError;
pub use frontmatter::{parse_date_string, FrontMatter};
pub use loader::{Catalog, ContentLoader};
pub use markdown::MarkdownRenderer;
pub use record::{sort_by_date_desc, ContentRecord, Section};
