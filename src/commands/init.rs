//! Initialize a new portfolio site

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::new::{CERTIFICATE_SCAFFOLD, PROJECT_SCAFFOLD};

const CONFIG: &str = r#"# Site
title: Portfolio
author: John Doe
tagline: I build things for the web.
description: ''
language: en
email: ''

# URL
url: http://example.com
root: /

# Directory
content_dir: content
static_dir: static
public_dir: public
archive_dir: archive
tech_dir: tech

# Sections
projects:
  heading: Projects
  display_limit: 6
certificates:
  heading: Certificates
  display_limit: 4

# Links
social_media:
  - name: GitHub
    url: https://github.com/
nav_links:
  - name: About
    url: /#about
  - name: Projects
    url: /#projects
  - name: Certificates
    url: /#certificates
  - name: Contact
    url: /#contact

# Presentation
colors:
  green: '#64ffda'
  navy: '#0a192f'
  dark_navy: '#020c1b'
icon_base_url: https://icons-theta.vercel.app/icon
reduced_motion: false
"#;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("A site already exists in {:?}", target_dir);
    }

    // Create directory structure
    for dir in [
        "content/projects",
        "content/certificates",
        "static",
        "scaffolds",
    ] {
        let path = target_dir.join(dir);
        fs::create_dir_all(&path).with_context(|| format!("Failed to create {:?}", path))?;
    }

    fs::write(&config_path, CONFIG)?;

    fs::write(target_dir.join("scaffolds/project.md"), PROJECT_SCAFFOLD)?;
    fs::write(target_dir.join("scaffolds/certificate.md"), CERTIFICATE_SCAFFOLD)?;

    // Create a sample of each kind
    let today = chrono::Local::now().format("%Y-%m-%d");
    let sample_project = format!(
        r#"---
date: '{}'
title: 'Hello Portfolio'
github: 'https://github.com/'
external: ''
tech:
  - Rust
  - Markdown
showInProjects: true
---

Your first project. Edit `content/projects/hello-portfolio.md`, or run
`folio-rs new project "My Project" --tech Rust` to add another one.
"#,
        today
    );
    fs::write(
        target_dir.join("content/projects/hello-portfolio.md"),
        sample_project,
    )?;

    let sample_certificate = format!(
        r#"---
date: '{}'
title: 'Getting Started'
company: 'Folio Academy'
tech:
  - Markdown
---
"#,
        today
    );
    fs::write(
        target_dir.join("content/certificates/getting-started.md"),
        sample_certificate,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Folio;
    use tempfile::TempDir;

    #[test]
    fn test_init_site_is_loadable() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();

        let folio = Folio::new(dir.path()).unwrap();
        assert_eq!(folio.config.title, "Portfolio");
        assert_eq!(folio.config.social_media.len(), 1);

        let catalog = folio.load_catalog().unwrap();
        assert_eq!(catalog.projects.len(), 1);
        assert_eq!(catalog.projects[0].tech, vec!["Rust", "Markdown"]);
        assert_eq!(catalog.projects[0].external, None);
        assert_eq!(catalog.certificates.len(), 1);
        assert_eq!(
            catalog.certificates[0].company.as_deref(),
            Some("Folio Academy")
        );
    }

    #[test]
    fn test_init_refuses_existing_site() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();
        assert!(init_site(dir.path()).is_err());
    }
}
