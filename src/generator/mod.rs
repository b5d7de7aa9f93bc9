//! Generator module - renders the portfolio with the built-in Tera templates

use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use tera::Context;
use walkdir::WalkDir;

use crate::config::LinkConfig;
use crate::content::{Catalog, ContentRecord, Section};
use crate::helpers::{
    card_transition_delay, full_url_for, icon_img, is_external, tag_slugs, url_for, Reveal,
};
use crate::templates::{
    ArchiveData, CertificateRowData, CertificatesSectionData, ColorsData, LinkData,
    ProjectCardData, ProjectsSectionData, SiteData, TagFilterData, TechData, TemplateRenderer,
    ToggleData,
};
use crate::view::{group_by_year_with_dividers, Listing, ViewState};
use crate::Folio;

/// Issuer shown for certificates without a company
const MISSING_FIELD: &str = "\u{2014}";

/// The static renderings of the projects listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ProjectsPage<'t> {
    /// Home page section: unfiltered, collapsed
    Home,
    /// `projects/`: unfiltered, expanded
    All,
    /// `tech/{slug}/`: one tag selected, expanded
    Tech(&'t str),
}

impl ProjectsPage<'_> {
    fn state(self) -> ViewState {
        match self {
            ProjectsPage::Home => ViewState::default(),
            ProjectsPage::All => ViewState::new(Vec::<String>::new(), true),
            ProjectsPage::Tech(tag) => ViewState::new([tag], true),
        }
    }
}

/// Static site generator using Tera templates
pub struct Generator {
    folio: Folio,
    renderer: TemplateRenderer,
    reveal: Reveal,
}

impl Generator {
    /// Create a new generator
    pub fn new(folio: &Folio) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;
        let reveal = Reveal::new(&folio.config.reveal, folio.config.reduced_motion);

        Ok(Self {
            folio: folio.clone(),
            renderer,
            reveal,
        })
    }

    /// Generate the entire site
    pub fn generate(&self, catalog: &Catalog) -> Result<()> {
        fs::create_dir_all(&self.folio.public_dir)
            .with_context(|| format!("Failed to create {:?}", self.folio.public_dir))?;

        self.copy_static_assets()?;

        let site = self.build_site_data();
        let projects = Listing::for_section(&catalog.projects, Section::Projects);
        let certificates = Listing::for_section(&catalog.certificates, Section::Certificates);
        let slugs = tag_slugs(projects.sorted_tags().iter().map(|t| t.name.as_str()));

        self.generate_index_page(&site, &projects, &certificates, &slugs)?;
        self.generate_projects_page(&site, &projects, &slugs)?;
        self.generate_tech_pages(&site, &projects, &slugs)?;
        self.generate_archive_page(&site, &certificates)?;
        self.generate_records_json(&projects, &certificates)?;

        Ok(())
    }

    /// Build site data for templates
    fn build_site_data(&self) -> SiteData {
        let config = &self.folio.config;
        let link = |l: &LinkConfig| LinkData {
            name: l.name.clone(),
            href: url_for(config, &l.url),
            external: is_external(&l.url),
        };

        SiteData {
            title: config.title.clone(),
            author: config.author.clone(),
            tagline: config.tagline.clone(),
            description: config.description.clone(),
            language: config.language.clone(),
            email: config.email.clone(),
            root: url_for(config, "/"),
            colors: ColorsData {
                green: config.colors.green.clone(),
                navy: config.colors.navy.clone(),
                dark_navy: config.colors.dark_navy.clone(),
            },
            nav: config.nav_links.iter().map(link).collect(),
            social: config.social_media.iter().map(link).collect(),
            reveal_enabled: self.reveal.enabled(),
            reveal_script_url: config.reveal.script_url.clone(),
            console_banner: config.console_banner.clone(),
            current_year: chrono::Local::now().format("%Y").to_string(),
        }
    }

    fn create_base_context(&self, site: &SiteData, path: &str) -> Context {
        let mut context = Context::new();
        context.insert("site", site);
        context.insert("canonical", &full_url_for(&self.folio.config, path));
        context
    }

    /// Site-relative path of the expanded, unfiltered projects page
    fn projects_path(&self) -> String {
        "projects/".to_string()
    }

    /// Site-relative path of a tag's page, by its assigned slug
    fn tech_path(&self, slug: &str) -> String {
        format!("{}/{}/", self.folio.config.tech_dir.trim_matches('/'), slug)
    }

    fn archive_path(&self) -> String {
        format!("{}/", self.folio.config.archive_dir.trim_matches('/'))
    }

    fn tech_data(&self, tech: &[String]) -> Vec<TechData> {
        tech.iter()
            .map(|name| TechData {
                name: name.clone(),
                icon: icon_img(&self.folio.config.icon_base_url, name),
            })
            .collect()
    }

    /// Projects section for one of its static renderings
    fn build_projects_section(
        &self,
        projects: &Listing,
        page: ProjectsPage,
        slugs: &IndexMap<String, String>,
    ) -> ProjectsSectionData {
        let config = &self.folio.config;
        let limit = config.display_limit(Section::Projects);
        let state = page.state();
        let view = projects.view(&state, limit);

        let filters = view
            .sorted_tags
            .iter()
            .enumerate()
            .map(|(i, tag)| {
                let selected = state.is_selected(&tag.name);
                // Toggling the selected tag off leads back to the unfiltered listing
                let href = match slugs.get(&tag.name) {
                    Some(slug) if !selected => self.tech_path(slug),
                    _ => self.projects_path(),
                };
                TagFilterData {
                    name: tag.name.clone(),
                    count: tag.count,
                    selected,
                    href: url_for(config, &href),
                    reveal: self.reveal.staggered_attr(i, 100),
                }
            })
            .collect();

        let cards = view
            .shown
            .iter()
            .enumerate()
            .map(|(i, record)| ProjectCardData {
                title: record.title.clone(),
                company: record.company.clone(),
                github: record.github.clone(),
                external: record.external.clone(),
                body_html: record.body_html.clone(),
                tech: self.tech_data(&record.tech),
                reveal: self.reveal.staggered_attr(i, 100),
                transition_delay: if self.reveal.enabled() {
                    card_transition_delay(i, limit)
                } else {
                    0
                },
            })
            .collect();

        let toggle = match page {
            ProjectsPage::Home if view.has_more => Some(ToggleData {
                label: "Show More".to_string(),
                href: url_for(config, &self.projects_path()),
            }),
            ProjectsPage::All if view.visible_count > limit => Some(ToggleData {
                label: "Show Less".to_string(),
                href: url_for(config, "/#projects"),
            }),
            _ => None,
        };

        let subtitle = match page {
            ProjectsPage::Tech(tag) => Some(format!(
                "{} of {} projects use {}",
                view.visible_count,
                projects.records().len(),
                tag
            )),
            _ => config.section(Section::Projects).subtitle.clone(),
        };

        ProjectsSectionData {
            heading: config.heading(Section::Projects),
            heading_reveal: self.reveal.attr(self.reveal.default_options()),
            subtitle,
            filters,
            selected: view.selected_tags.clone(),
            cards,
            visible_count: view.visible_count,
            toggle,
        }
    }

    fn certificate_row(
        &self,
        record: &ContentRecord,
        divider: Option<i32>,
        reveal: String,
    ) -> CertificateRowData {
        CertificateRowData {
            divider,
            year: record.year().map(|y| y.to_string()).unwrap_or_default(),
            title: record.title.clone(),
            company: record
                .company
                .clone()
                .unwrap_or_else(|| MISSING_FIELD.to_string()),
            tech: self.tech_data(&record.tech),
            github: record.github.clone(),
            external: record.external.clone(),
            reveal,
        }
    }

    /// Certificates section of the home page: the most recent few and a link to the rest
    fn build_certificates_section(&self, certificates: &Listing) -> CertificatesSectionData {
        let config = &self.folio.config;
        let view = certificates.view(
            &ViewState::default(),
            config.display_limit(Section::Certificates),
        );
        let rows = view
            .shown
            .iter()
            .map(|record| self.certificate_row(record, None, String::new()))
            .collect();

        CertificatesSectionData {
            heading: config.heading(Section::Certificates),
            heading_reveal: self.reveal.attr(self.reveal.default_options()),
            subtitle: config.section(Section::Certificates).subtitle.clone(),
            subtitle_reveal: self.reveal.attr(self.reveal.options(100)),
            table_reveal: self.reveal.attr(self.reveal.options(200)),
            rows,
            remaining: view.visible_count - view.shown.len(),
            ellipsis_reveal: self.reveal.attr(self.reveal.options(250)),
            archive_href: url_for(config, &self.archive_path()),
            archive_reveal: self.reveal.attr(self.reveal.options(300)),
        }
    }

    /// Generate the home page
    fn generate_index_page(
        &self,
        site: &SiteData,
        projects: &Listing,
        certificates: &Listing,
        slugs: &IndexMap<String, String>,
    ) -> Result<()> {
        let mut context = self.create_base_context(site, "/");
        context.insert(
            "projects",
            &self.build_projects_section(projects, ProjectsPage::Home, slugs),
        );
        context.insert("certificates", &self.build_certificates_section(certificates));

        let html = self.renderer.render("index.html", &context)?;
        self.write_page("", &html)?;
        tracing::info!("Generated index page");

        Ok(())
    }

    /// Generate the expanded projects page
    fn generate_projects_page(
        &self,
        site: &SiteData,
        projects: &Listing,
        slugs: &IndexMap<String, String>,
    ) -> Result<()> {
        let mut context = self.create_base_context(site, &self.projects_path());
        context.insert("page_title", &self.folio.config.heading(Section::Projects));
        context.insert(
            "projects",
            &self.build_projects_section(projects, ProjectsPage::All, slugs),
        );

        let html = self.renderer.render("projects.html", &context)?;
        self.write_page(&self.projects_path(), &html)?;

        Ok(())
    }

    /// Generate one filtered projects page per tag
    fn generate_tech_pages(
        &self,
        site: &SiteData,
        projects: &Listing,
        slugs: &IndexMap<String, String>,
    ) -> Result<()> {
        let mut count = 0;

        for tag in projects.sorted_tags() {
            let Some(slug) = slugs.get(&tag.name) else {
                tracing::warn!("Skipping tag page for {:?}: no usable slug", tag.name);
                continue;
            };

            let path = self.tech_path(slug);
            let mut context = self.create_base_context(site, &path);
            context.insert("page_title", &tag.name);
            context.insert(
                "projects",
                &self.build_projects_section(projects, ProjectsPage::Tech(&tag.name), slugs),
            );

            let html = self.renderer.render("projects.html", &context)?;
            self.write_page(&path, &html)?;
            count += 1;
        }

        tracing::info!("Generated {} tech pages", count);
        Ok(())
    }

    /// Generate the certificate archive, grouped by year
    fn generate_archive_page(&self, site: &SiteData, certificates: &Listing) -> Result<()> {
        let entries = group_by_year_with_dividers(certificates.records().iter().copied());
        let rows = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                self.certificate_row(entry.record, entry.divider, self.reveal.staggered_attr(i, 10))
            })
            .collect();

        let archive = ArchiveData {
            heading: "Archive".to_string(),
            subtitle: format!("{} certificates and counting ...", entries.len()),
            heading_reveal: self.reveal.attr(self.reveal.default_options()),
            table_reveal: self.reveal.attr(self.reveal.options_with(200, 0.0)),
            rows,
        };

        let mut context = self.create_base_context(site, &self.archive_path());
        context.insert("archive", &archive);

        let html = self.renderer.render("archive.html", &context)?;
        self.write_page(&self.archive_path(), &html)?;
        tracing::info!("Generated archive page");

        Ok(())
    }

    /// Generate records.json for client scripts
    fn generate_records_json(&self, projects: &Listing, certificates: &Listing) -> Result<()> {
        let section = |listing: &Listing, section: Section| {
            serde_json::json!({
                "heading": self.folio.config.heading(section),
                "displayLimit": self.folio.config.display_limit(section),
                "tags": listing.sorted_tags(),
                "records": listing.records(),
            })
        };
        let data = serde_json::json!({
            "projects": section(projects, Section::Projects),
            "certificates": section(certificates, Section::Certificates),
        });

        let output_path = self.folio.public_dir.join("records.json");
        let json = serde_json::to_string_pretty(&data)?;
        fs::write(&output_path, json)
            .with_context(|| format!("Failed to write {:?}", output_path))?;
        tracing::info!("Generated records.json");

        Ok(())
    }

    /// Write `{dir}/index.html` under the public directory
    fn write_page(&self, dir: &str, html: &str) -> Result<()> {
        let output_path = self
            .folio
            .public_dir
            .join(dir.trim_start_matches('/'))
            .join("index.html");
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create dir {:?}", parent))?;
        }
        fs::write(&output_path, html)
            .with_context(|| format!("Failed to write {:?}", output_path))?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(())
    }

    /// Copy static assets (images, fonts, resume) to the public directory
    fn copy_static_assets(&self) -> Result<()> {
        let static_dir = &self.folio.static_dir;
        if !static_dir.exists() {
            return Ok(());
        }

        let mut copied = 0;
        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || is_hidden(path) {
                continue;
            }

            let relative = path.strip_prefix(static_dir)?;
            let dest = self.folio.public_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest).with_context(|| format!("Failed to copy {:?}", path))?;
            copied += 1;
        }

        tracing::debug!("Copied {} static files", copied);
        Ok(())
    }
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with('.'))
        .unwrap_or(false)
}
