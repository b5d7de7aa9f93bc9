//! Configuration module

mod site;

pub use site::ColorsConfig;
pub use site::LinkConfig;
pub use site::RevealConfig;
pub use site::SectionConfig;
pub use site::SiteConfig;
