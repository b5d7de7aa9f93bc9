//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::content::Section;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub tagline: String,
    pub description: String,
    pub language: String,
    pub email: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub content_dir: String,
    pub static_dir: String,
    pub public_dir: String,
    pub archive_dir: String,
    pub tech_dir: String,

    // Sections
    #[serde(default)]
    pub projects: SectionConfig,
    #[serde(default)]
    pub certificates: SectionConfig,

    // Navigation
    #[serde(default)]
    pub social_media: Vec<LinkConfig>,
    pub nav_links: Vec<LinkConfig>,

    // Presentation
    #[serde(default)]
    pub colors: ColorsConfig,
    pub icon_base_url: String,
    #[serde(default)]
    pub reveal: RevealConfig,
    /// Suppresses every scroll-reveal hook when set
    pub reduced_motion: bool,
    pub console_banner: Option<String>,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            author: "John Doe".to_string(),
            tagline: String::new(),
            description: String::new(),
            language: "en".to_string(),
            email: String::new(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            content_dir: "content".to_string(),
            static_dir: "static".to_string(),
            public_dir: "public".to_string(),
            archive_dir: "archive".to_string(),
            tech_dir: "tech".to_string(),

            projects: SectionConfig::default(),
            certificates: SectionConfig::default(),

            social_media: Vec::new(),
            nav_links: default_nav_links(),

            colors: ColorsConfig::default(),
            icon_base_url: "https://icons-theta.vercel.app/icon".to_string(),
            reveal: RevealConfig::default(),
            reduced_motion: false,
            console_banner: None,

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {:?}", path))?;
        tracing::debug!("Loaded site config from {:?}", path);
        Ok(config)
    }

    /// Section settings with per-section defaults applied
    pub fn section(&self, section: Section) -> &SectionConfig {
        match section {
            Section::Projects => &self.projects,
            Section::Certificates => &self.certificates,
        }
    }

    /// Number of records shown before the "show more" affordance
    pub fn display_limit(&self, section: Section) -> usize {
        self.section(section)
            .display_limit
            .unwrap_or_else(|| section.default_display_limit())
    }

    /// Heading rendered above a section
    pub fn heading(&self, section: Section) -> String {
        self.section(section)
            .heading
            .clone()
            .unwrap_or_else(|| section.title().to_string())
    }
}

fn default_nav_links() -> Vec<LinkConfig> {
    [
        ("About", "/#about"),
        ("Projects", "/#projects"),
        ("Certificates", "/#certificates"),
        ("Contact", "/#contact"),
    ]
    .into_iter()
    .map(|(name, url)| LinkConfig {
        name: name.to_string(),
        url: url.to_string(),
    })
    .collect()
}

/// Per-section listing configuration; unset fields fall back to the section's defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionConfig {
    pub heading: Option<String>,
    /// Line under the heading; omitted when unset
    pub subtitle: Option<String>,
    pub display_limit: Option<usize>,
}

/// A named link (social profile or navigation entry)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkConfig {
    pub name: String,
    pub url: String,
}

/// Theme palette
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    pub green: String,
    pub navy: String,
    pub dark_navy: String,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        Self {
            green: "#64ffda".to_string(),
            navy: "#0a192f".to_string(),
            dark_navy: "#020c1b".to_string(),
        }
    }
}

/// Scroll-reveal defaults, passed through to the client-side reveal library
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub script_url: String,
    pub origin: String,
    pub distance: String,
    pub duration: u32,
    pub delay: u32,
    pub opacity: f32,
    pub scale: f32,
    pub easing: String,
    pub mobile: bool,
    pub reset: bool,
    pub view_factor: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            script_url: "https://unpkg.com/scrollreveal@4".to_string(),
            origin: "bottom".to_string(),
            distance: "20px".to_string(),
            duration: 500,
            delay: 200,
            opacity: 0.0,
            scale: 1.0,
            easing: "cubic-bezier(0.645, 0.045, 0.355, 1)".to_string(),
            mobile: true,
            reset: false,
            view_factor: 0.25,
        }
    }
}
