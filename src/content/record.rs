//! Content records: one project or certificate

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Which listing a record belongs to, decided by its content sub-directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Projects,
    Certificates,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Projects, Section::Certificates];

    /// Directory name under the content dir
    pub fn dir_name(self) -> &'static str {
        match self {
            Section::Projects => "projects",
            Section::Certificates => "certificates",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Projects => "Projects",
            Section::Certificates => "Certificates",
        }
    }

    pub fn default_display_limit(self) -> usize {
        match self {
            Section::Projects => 6,
            Section::Certificates => 4,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "project" | "projects" => Ok(Section::Projects),
            "certificate" | "certificates" | "cert" | "certs" => Ok(Section::Certificates),
            other => Err(format!(
                "Unknown section: {}. Available: projects, certificates",
                other
            )),
        }
    }
}

/// A project or certificate loaded from markdown.
///
/// Records are immutable once loaded; view models only ever borrow them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentRecord {
    pub title: String,
    pub date: Option<NaiveDate>,
    /// Free-form, case-sensitive tags in author order
    pub tech: Vec<String>,
    pub company: Option<String>,
    pub github: Option<String>,
    pub external: Option<String>,
    /// Rendered markdown body
    pub body_html: String,
    pub show_in_listing: bool,
    pub section: Section,
    /// Path relative to the content directory
    pub source: PathBuf,
}

impl ContentRecord {
    /// Create a record with only the required fields set
    pub fn new(title: impl Into<String>, section: Section) -> Self {
        Self {
            title: title.into(),
            date: None,
            tech: Vec::new(),
            company: None,
            github: None,
            external: None,
            body_html: String::new(),
            show_in_listing: true,
            section,
            source: PathBuf::new(),
        }
    }

    pub fn year(&self) -> Option<i32> {
        self.date.map(|d| d.year())
    }

    /// True when any of the record's tags is in `tags`
    pub fn has_any_tag<'a, I>(&self, tags: I) -> bool
    where
        I: IntoIterator<Item = &'a String>,
    {
        tags.into_iter().any(|tag| self.tech.contains(tag))
    }
}

/// Sort newest first; undated records go last and keep their relative order
pub fn sort_by_date_desc(records: &mut [ContentRecord]) {
    records.sort_by(|a, b| match (a.date, b.date) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}
