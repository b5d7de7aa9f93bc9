//! Generate static files

use anyhow::Result;
use notify::RecursiveMode;
use notify_debouncer_mini::{new_debouncer, DebounceEventResult};
use std::time::Duration;

use crate::content::Catalog;
use crate::generator::Generator;
use crate::Folio;

/// Generate the static site
pub fn run(folio: &Folio) -> Result<()> {
    build(folio).map(|_| ())
}

/// Load content, render every page and hand back the loaded records
pub fn build(folio: &Folio) -> Result<Catalog> {
    let start = std::time::Instant::now();

    let catalog = folio.load_catalog()?;
    tracing::info!(
        "Loaded {} projects and {} certificates",
        catalog.projects.len(),
        catalog.certificates.len()
    );

    let generator = Generator::new(folio)?;
    generator.generate(&catalog)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(catalog)
}

/// Watch for file changes and regenerate
pub async fn watch(folio: &Folio) -> Result<()> {
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    // Saves within the window arrive as one batch
    let mut debouncer = new_debouncer(
        Duration::from_millis(500),
        move |result: DebounceEventResult| {
            let _ = tx.send(result);
        },
    )?;

    for dir in [&folio.content_dir, &folio.static_dir] {
        if dir.exists() {
            debouncer.watcher().watch(dir, RecursiveMode::Recursive)?;
        }
    }

    let config_path = folio.base_dir.join("_config.yml");
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    while let Some(result) = rx.recv().await {
        match result {
            Ok(events) if !events.is_empty() => {
                tracing::info!("{} file(s) changed, regenerating...", events.len());
                if let Err(e) = reload(folio).and_then(|folio| run(&folio)) {
                    tracing::error!("Generation failed: {:#}", e);
                }
            }
            Ok(_) => {}
            Err(e) => tracing::error!("Watch error: {:?}", e),
        }
    }

    Ok(())
}

/// Re-read `_config.yml` so edits to it take effect on the next build
pub fn reload(folio: &Folio) -> Result<Folio> {
    Folio::new(&folio.base_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_watch_regenerates_after_edit() {
        let dir = TempDir::new().unwrap();
        crate::commands::init::init_site(dir.path()).unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        run(&folio).unwrap();

        let watcher = {
            let folio = folio.clone();
            tokio::spawn(async move { watch(&folio).await })
        };
        tokio::time::sleep(Duration::from_millis(300)).await;

        fs::write(
            dir.path().join("content/projects/late.md"),
            "---\ntitle: Late Arrival\ntech:\n  - Zig\n---\n",
        )
        .unwrap();

        let page = dir.path().join("public/tech/zig/index.html");
        let regenerated = || {
            fs::read_to_string(&page)
                .map(|html| html.contains("Late Arrival"))
                .unwrap_or(false)
        };
        for _ in 0..100 {
            if regenerated() {
                break;
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        watcher.abort();

        assert!(regenerated());
    }
}
