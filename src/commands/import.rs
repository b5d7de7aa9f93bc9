//! Import certificates from a directory of PDFs
//!
//! Files named `YYYY_MM_DD_Title.pdf` become certificate records dated from
//! the name. The title keeps its underscores.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use super::new::yaml_quote;
use crate::helpers::encode_url;

lazy_static! {
    static ref PDF_NAME: Regex =
        Regex::new(r"(?i)^(\d{4})_(\d{2})_(\d{2})_(.+)\.pdf$").unwrap();
}

/// Issuer written when none is given
pub const DEFAULT_ISSUER: &str = "Certificates";

#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Prefix for each record's external link, e.g. a repository's blob URL
    pub link_base: Option<String>,
    pub issuer: Option<String>,
}

/// A PDF whose name carries a date and a title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateFile {
    pub file_name: String,
    pub date: NaiveDate,
    pub title: String,
}

impl CertificateFile {
    /// Parse `YYYY_MM_DD_Title.pdf`; anything else is `None`
    pub fn parse(file_name: &str) -> Option<Self> {
        let caps = PDF_NAME.captures(file_name)?;
        let date = NaiveDate::from_ymd_opt(
            caps[1].parse().ok()?,
            caps[2].parse().ok()?,
            caps[3].parse().ok()?,
        )?;
        let title = caps[4].trim().to_string();
        if title.is_empty() {
            return None;
        }
        Some(Self {
            file_name: file_name.to_string(),
            date,
            title,
        })
    }

    fn stem(&self) -> &str {
        // The regex guarantees a four-byte ".pdf" suffix
        &self.file_name[..self.file_name.len() - 4]
    }

    /// Markdown with the certificate's front-matter
    pub fn to_markdown(&self, options: &ImportOptions) -> String {
        let external = options
            .link_base
            .as_deref()
            .map(|base| format!("{}/{}", base.trim_end_matches('/'), encode_url(&self.file_name)))
            .unwrap_or_default();
        let issuer = options.issuer.as_deref().unwrap_or(DEFAULT_ISSUER);

        format!(
            "---\ndate: {}\ntitle: {}\ngithub: ''\nexternal: {}\ntech: []\ncompany: {}\nshowInProjects: false\n---\n",
            yaml_quote(&self.date.format("%Y-%m-%d").to_string()),
            yaml_quote(&self.title),
            yaml_quote(&external),
            yaml_quote(issuer),
        )
    }
}

/// What an import run did
#[derive(Debug, Default)]
pub struct ImportReport {
    pub created: Vec<PathBuf>,
    /// PDFs whose names do not carry a date
    pub skipped: Vec<PathBuf>,
}

/// Write one certificate record per dated PDF in `pdf_dir` into `output_dir`
pub fn import_certificates(
    pdf_dir: &Path,
    output_dir: &Path,
    options: &ImportOptions,
) -> Result<ImportReport> {
    if !pdf_dir.is_dir() {
        anyhow::bail!("Not a directory: {:?}", pdf_dir);
    }
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create {:?}", output_dir))?;

    let pattern = format!(
        "{}/*.pdf",
        glob::Pattern::escape(&pdf_dir.to_string_lossy())
    );
    let match_options = glob::MatchOptions {
        case_sensitive: false,
        ..Default::default()
    };

    let mut report = ImportReport::default();
    for entry in glob::glob_with(&pattern, match_options)? {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some(certificate) = CertificateFile::parse(file_name) else {
            tracing::warn!("Skipping {:?}: expected YYYY_MM_DD_Title.pdf", file_name);
            report.skipped.push(path);
            continue;
        };

        let output_path = unique_path(output_dir, &certificate);
        fs::write(&output_path, certificate.to_markdown(options))
            .with_context(|| format!("Failed to write {:?}", output_path))?;
        tracing::info!("Created: {:?}", output_path);
        report.created.push(output_path);
    }

    Ok(report)
}

/// `{stem}.md`, or `{title} N.md` for the first free N starting at 2
fn unique_path(output_dir: &Path, certificate: &CertificateFile) -> PathBuf {
    let mut path = output_dir.join(format!("{}.md", certificate.stem()));
    let mut counter = 1;
    while path.exists() {
        counter += 1;
        path = output_dir.join(format!("{} {}.md", certificate.title, counter));
    }
    path
}
