//! Content loader - loads projects and certificates from the content directory

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{sort_by_date_desc, ContentError, ContentRecord, FrontMatter, MarkdownRenderer, Section};

/// Every record of a site, each section sorted newest first
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    pub projects: Vec<ContentRecord>,
    pub certificates: Vec<ContentRecord>,
}

impl Catalog {
    pub fn section(&self, section: Section) -> &[ContentRecord] {
        match section {
            Section::Projects => &self.projects,
            Section::Certificates => &self.certificates,
        }
    }

    pub fn len(&self) -> usize {
        self.projects.len() + self.certificates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Loads content from the content directory
pub struct ContentLoader {
    content_dir: PathBuf,
    renderer: MarkdownRenderer,
}

impl ContentLoader {
    /// Create a new content loader
    pub fn new(folio: &crate::Folio) -> Self {
        Self::from_dir(&folio.content_dir)
    }

    /// Create a loader over an explicit content directory
    pub fn from_dir<P: AsRef<Path>>(content_dir: P) -> Self {
        Self {
            content_dir: content_dir.as_ref().to_path_buf(),
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Load both sections
    pub fn load_catalog(&self) -> Result<Catalog> {
        Ok(Catalog {
            projects: self.load_section(Section::Projects)?,
            certificates: self.load_section(Section::Certificates)?,
        })
    }

    /// Load all records of one section, newest first
    pub fn load_section(&self, section: Section) -> Result<Vec<ContentRecord>> {
        let section_dir = self.content_dir.join(section.dir_name());
        if !section_dir.exists() {
            tracing::debug!("No {} directory at {:?}", section, section_dir);
            return Ok(Vec::new());
        }

        let mut paths: Vec<PathBuf> = WalkDir::new(&section_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .map(|e| e.into_path())
            .filter(|p| p.is_file() && is_markdown_file(p))
            .collect();
        // Directory iteration order is platform dependent; undated records keep this order
        paths.sort();

        let mut records = Vec::with_capacity(paths.len());
        for path in &paths {
            match self.load_record(path, section) {
                Ok(record) => records.push(record),
                Err(e) if e.is_skippable() => {
                    tracing::warn!("Skipping {:?}: {}", path, e);
                }
                Err(e) => return Err(e.into()),
            }
        }

        sort_by_date_desc(&mut records);
        tracing::debug!("Loaded {} {}", records.len(), section);

        Ok(records)
    }

    /// Load a single record from a file
    pub fn load_record(&self, path: &Path, section: Section) -> Result<ContentRecord, ContentError> {
        let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let (fm, body) = FrontMatter::parse(&content).map_err(|e| ContentError::FrontMatter {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let date = fm.parse_date().map_err(|value| ContentError::MalformedDate {
            path: path.to_path_buf(),
            value,
        })?;

        let title = fm
            .title
            .unwrap_or_else(|| {
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or_default()
                    .to_string()
            })
            .trim()
            .to_string();
        if title.is_empty() {
            return Err(ContentError::EmptyTitle {
                path: path.to_path_buf(),
            });
        }

        let body_html = self
            .renderer
            .render(body.trim())
            .map_err(|e| ContentError::Render {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let source = path
            .strip_prefix(&self.content_dir)
            .unwrap_or(path)
            .to_path_buf();

        Ok(ContentRecord {
            title,
            date,
            tech: fm.tech,
            company: fm.company,
            github: fm.github,
            external: fm.external,
            body_html,
            show_in_listing: fm.show_in_projects,
            section,
            source,
        })
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_load_section_sorted_newest_first() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "projects/a.md",
            "---\ntitle: Older\ndate: 2021-03-01\ntech:\n  - Go\n---\nOld one.\n",
        );
        write(
            tmp.path(),
            "projects/b.md",
            "---\ntitle: Newer\ndate: 2023-07-10\ngithub: ''\n---\nNew one.\n",
        );
        write(tmp.path(), "projects/notes.txt", "ignored");

        let loader = ContentLoader::from_dir(tmp.path());
        let records = loader.load_section(Section::Projects).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Newer");
        assert_eq!(records[0].github, None);
        assert!(records[0].tech.is_empty());
        assert_eq!(records[1].date, NaiveDate::from_ymd_opt(2021, 3, 1));
        assert_eq!(records[1].tech, vec!["Go"]);
        assert!(records[1].body_html.contains("Old one."));
        assert_eq!(records[1].source, PathBuf::from("projects/a.md"));
    }

    #[test]
    fn test_title_falls_back_to_file_stem() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "certificates/Rust_Basics.md", "---\ndate: 2022-01-01\n---\n");

        let loader = ContentLoader::from_dir(tmp.path());
        let records = loader.load_section(Section::Certificates).unwrap();
        assert_eq!(records[0].title, "Rust_Basics");
        assert_eq!(records[0].section, Section::Certificates);
    }

    #[test]
    fn test_malformed_date_fails_the_load() {
        let tmp = TempDir::new().unwrap();
        write(tmp.path(), "projects/bad.md", "---\ntitle: Bad\ndate: someday\n---\n");

        let loader = ContentLoader::from_dir(tmp.path());
        let err = loader.load_section(Section::Projects).unwrap_err();
        let content_err = err.downcast_ref::<ContentError>().unwrap();
        assert!(matches!(content_err, ContentError::MalformedDate { value, .. } if value == "someday"));
    }

    #[test]
    fn test_bad_show_flag_keeps_record_metadata() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "projects/p.md",
            "---\ntitle: Real Title\ndate: '2020-05-01'\ntech:\n  - Go\nshowInProjects: nope\n---\nBody.\n",
        );

        let loader = ContentLoader::from_dir(tmp.path());
        let records = loader.load_section(Section::Projects).unwrap();
        assert_eq!(records[0].title, "Real Title");
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2020, 5, 1));
        assert_eq!(records[0].tech, vec!["Go"]);
        assert!(records[0].show_in_listing);
        assert!(!records[0].body_html.contains("title:"));
    }

    #[test]
    fn test_broken_front_matter_is_skipped() {
        let tmp = TempDir::new().unwrap();
        write(
            tmp.path(),
            "projects/broken.md",
            "---\ntitle: [unclosed\ndate: 2020-05-01\n---\nBody.\n",
        );
        write(tmp.path(), "projects/ok.md", "---\ntitle: Fine\n---\n");

        let loader = ContentLoader::from_dir(tmp.path());
        let records = loader.load_section(Section::Projects).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Fine");

        let err = loader
            .load_record(&tmp.path().join("projects/broken.md"), Section::Projects)
            .unwrap_err();
        assert!(matches!(err, ContentError::FrontMatter { .. }));
    }

    #[test]
    fn test_missing_section_dir_is_empty() {
        let tmp = TempDir::new().unwrap();
        let loader = ContentLoader::from_dir(tmp.path());
        let catalog = loader.load_catalog().unwrap();
        assert!(catalog.is_empty());
    }
}
