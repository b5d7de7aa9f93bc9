//! Clean the public directory

use anyhow::{Context, Result};
use std::fs;

use crate::Folio;

/// Delete the generated site
pub fn run(folio: &Folio) -> Result<()> {
    if folio.public_dir.exists() {
        fs::remove_dir_all(&folio.public_dir)
            .with_context(|| format!("Failed to delete {:?}", folio.public_dir))?;
        tracing::info!("Deleted: {:?}", folio.public_dir);
    } else {
        tracing::debug!("Nothing to clean at {:?}", folio.public_dir);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    #[test]
    fn test_clean_removes_public_dir() {
        let dir = TempDir::new().unwrap();
        let folio = Folio::with_config(dir.path(), SiteConfig::default());
        fs::create_dir_all(folio.public_dir.join("projects")).unwrap();
        fs::write(folio.public_dir.join("index.html"), "<html></html>").unwrap();

        run(&folio).unwrap();
        assert!(!folio.public_dir.exists());

        // Cleaning twice is fine
        run(&folio).unwrap();
    }
}
