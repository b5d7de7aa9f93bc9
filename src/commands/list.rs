//! List site content

use anyhow::Result;
use std::fmt::Write as _;

use crate::content::{Catalog, ContentRecord, Section};
use crate::view::{group_by_year_with_dividers, Listing, ViewState};
use crate::Folio;

/// List site content by type, with the listing state given by flags
pub fn run(folio: &Folio, content_type: &str, tech: &[String], all: bool) -> Result<()> {
    let catalog = folio.load_catalog()?;
    let state = ViewState::new(tech.iter().cloned(), all);
    print!("{}", render(folio, &catalog, content_type, &state)?);
    Ok(())
}

/// Render a listing as plain text
pub fn render(
    folio: &Folio,
    catalog: &Catalog,
    content_type: &str,
    state: &ViewState,
) -> Result<String> {
    let mut out = String::new();

    match content_type {
        "tag" | "tags" => {
            let listing = Listing::for_section(&catalog.projects, Section::Projects);
            writeln!(out, "Tags ({}):", listing.sorted_tags().len())?;
            for tag in listing.sorted_tags() {
                writeln!(out, "  {} ({})", tag.name, tag.count)?;
            }
        }
        "archive" => {
            let listing = Listing::for_section(&catalog.certificates, Section::Certificates);
            writeln!(out, "Archive ({} certificates):", listing.records().len())?;
            for entry in group_by_year_with_dividers(listing.records().iter().copied()) {
                if let Some(year) = entry.divider {
                    writeln!(out, "  -- {} --", year)?;
                }
                writeln!(out, "{}", record_line(entry.record))?;
            }
        }
        other => {
            let section: Section = other.parse().map_err(|_| {
                anyhow::anyhow!(
                    "Unknown type: {}. Available: projects, certificates, tags, archive",
                    other
                )
            })?;
            let listing = Listing::for_section(catalog.section(section), section);
            let view = listing.view(state, folio.config.display_limit(section));

            write!(
                out,
                "{} ({} of {}",
                folio.config.heading(section),
                view.shown.len(),
                view.visible_count
            )?;
            if !view.selected_tags.is_empty() {
                write!(out, ", tech: {}", view.selected_tags.join(", "))?;
            }
            writeln!(out, "):")?;

            if !view.sorted_tags.is_empty() {
                let tags: Vec<String> = view
                    .sorted_tags
                    .iter()
                    .map(|t| {
                        let mark = if state.is_selected(&t.name) { "*" } else { "" };
                        format!("{}{} ({})", mark, t.name, t.count)
                    })
                    .collect();
                writeln!(out, "Tags: {}", tags.join(", "))?;
            }

            for record in &view.shown {
                writeln!(out, "{}", record_line(record))?;
            }
            if view.has_more {
                writeln!(
                    out,
                    "  ... {} more (use --all)",
                    view.visible_count - view.shown.len()
                )?;
            }
        }
    }

    Ok(out)
}

fn record_line(record: &ContentRecord) -> String {
    let date = record
        .date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "----------".to_string());
    let mut line = format!("  {}  {}", date, record.title);
    if let Some(company) = &record.company {
        line.push_str(&format!(" ({})", company));
    }
    if !record.tech.is_empty() {
        line.push_str(&format!(" [{}]", record.tech.join(", ")));
    }
    line
}
