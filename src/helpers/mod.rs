//! Helper functions for templates
//!
//! URL and HTML building, icon lookup and scroll-reveal hooks used while
//! rendering pages.

mod html;
mod icon;
mod reveal;
mod url;

pub use html::*;
pub use icon::*;
pub use reveal::*;
pub use url::*;
