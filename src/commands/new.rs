//! Create a new project or certificate

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::content::{parse_date_string, Section};
use crate::Folio;

pub(crate) const PROJECT_SCAFFOLD: &str = r#"---
date: {{ date }}
title: {{ title }}
github: ''
external: ''
tech: {{ tech }}
company: {{ company }}
showInProjects: true
---
"#;

pub(crate) const CERTIFICATE_SCAFFOLD: &str = r#"---
date: {{ date }}
title: {{ title }}
github: ''
external: ''
tech: {{ tech }}
company: {{ company }}
---
"#;

/// Front-matter values for a new record
#[derive(Debug, Clone, Default)]
pub struct NewRecord {
    pub title: String,
    pub tech: Vec<String>,
    pub company: Option<String>,
    /// Defaults to today
    pub date: Option<String>,
    /// File name without extension; defaults to the slugified title
    pub path: Option<String>,
}

/// Write a new record from the section's scaffold and return its path
pub fn create_record(folio: &Folio, section: Section, record: &NewRecord) -> Result<PathBuf> {
    if record.title.trim().is_empty() {
        anyhow::bail!("Title must not be empty");
    }

    let date = match &record.date {
        Some(date) => {
            if parse_date_string(date).is_none() {
                anyhow::bail!("Invalid date: {:?}. Expected YYYY-MM-DD", date);
            }
            date.clone()
        }
        None => chrono::Local::now().format("%Y-%m-%d").to_string(),
    };

    let target_dir = folio.content_dir.join(section.dir_name());
    fs::create_dir_all(&target_dir)?;

    let filename = match &record.path {
        Some(p) => format!("{}.md", p.trim_end_matches(".md")),
        None => format!("{}.md", slug::slugify(&record.title)),
    };
    let file_path = target_dir.join(filename);

    // Check if file already exists
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let scaffold_content = load_scaffold(folio, section)?;
    let tech = record
        .tech
        .iter()
        .map(|t| yaml_quote(t))
        .collect::<Vec<_>>()
        .join(", ");
    let content = scaffold_content
        .replace("{{ title }}", &yaml_quote(&record.title))
        .replace("{{ date }}", &yaml_quote(&date))
        .replace("{{ tech }}", &format!("[{}]", tech))
        .replace(
            "{{ company }}",
            &yaml_quote(record.company.as_deref().unwrap_or_default()),
        );

    fs::write(&file_path, content).with_context(|| format!("Failed to write {:?}", file_path))?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

/// The site's scaffold for a section, or the built-in one
fn load_scaffold(folio: &Folio, section: Section) -> Result<String> {
    let name = match section {
        Section::Projects => "project",
        Section::Certificates => "certificate",
    };
    let scaffold_path = folio.base_dir.join("scaffolds").join(format!("{}.md", name));

    if scaffold_path.exists() {
        fs::read_to_string(&scaffold_path)
            .with_context(|| format!("Failed to read {:?}", scaffold_path))
    } else {
        Ok(match section {
            Section::Projects => PROJECT_SCAFFOLD,
            Section::Certificates => CERTIFICATE_SCAFFOLD,
        }
        .to_string())
    }
}

/// Single-quoted YAML scalar
pub(crate) fn yaml_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}
