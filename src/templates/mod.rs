//! Built-in portfolio templates using the Tera template engine
//!
//! All templates are embedded directly in the binary, so a site needs no
//! theme directory of its own.

use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::helpers;

/// Template renderer with the embedded portfolio theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Values are escaped explicitly in the templates; rendered markdown
        // and reveal attributes must pass through untouched
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("folio/layout.html")),
            ("index.html", include_str!("folio/index.html")),
            ("projects.html", include_str!("folio/projects.html")),
            ("archive.html", include_str!("folio/archive.html")),
            // Partials
            ("partials/nav.html", include_str!("folio/partials/nav.html")),
            (
                "partials/projects.html",
                include_str!("folio/partials/projects.html"),
            ),
            ("macros.html", include_str!("folio/macros.html")),
            (
                "partials/reveal.html",
                include_str!("folio/partials/reveal.html"),
            ),
        ])?;

        tera.register_filter("rgba", rgba_filter);
        tera.register_filter("ui_icon", ui_icon_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Tera filter: `#rrggbb` to `rgba(..)`, `alpha` defaults to 1
fn rgba_filter(
    value: &tera::Value,
    args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let hex = tera::try_get_value!("rgba", "value", String, value);
    let alpha = match args.get("alpha") {
        Some(val) => tera::try_get_value!("rgba", "alpha", f32, val),
        None => 1.0,
    };
    // Leave values that are not plain hex colours (named colours, var(..)) alone
    Ok(tera::Value::String(
        helpers::hex_to_rgba(&hex, alpha).unwrap_or(hex),
    ))
}

/// Tera filter: inline SVG for a UI icon name, empty for unknown names
fn ui_icon_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let name = tera::try_get_value!("ui_icon", "value", String, value);
    Ok(tera::Value::String(
        helpers::ui_icon(&name).unwrap_or_default().to_string(),
    ))
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub author: String,
    pub tagline: String,
    pub description: String,
    pub language: String,
    pub email: String,
    pub root: String,
    pub colors: ColorsData,
    pub nav: Vec<LinkData>,
    pub social: Vec<LinkData>,
    pub reveal_enabled: bool,
    pub reveal_script_url: String,
    pub console_banner: Option<String>,
    pub current_year: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorsData {
    pub green: String,
    pub navy: String,
    pub dark_navy: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkData {
    pub name: String,
    pub href: String,
    pub external: bool,
}

/// A technology tag with its resolved icon
#[derive(Debug, Clone, Serialize)]
pub struct TechData {
    pub name: String,
    pub icon: String,
}

/// One checkbox-style entry of the tag filter bar
#[derive(Debug, Clone, Serialize)]
pub struct TagFilterData {
    pub name: String,
    pub count: usize,
    pub selected: bool,
    /// Page showing the listing with this tag toggled
    pub href: String,
    pub reveal: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectCardData {
    pub title: String,
    pub company: Option<String>,
    pub github: Option<String>,
    pub external: Option<String>,
    pub body_html: String,
    pub tech: Vec<TechData>,
    pub reveal: String,
    pub transition_delay: u32,
}

/// The "Show More" / "Show Less" affordance
#[derive(Debug, Clone, Serialize)]
pub struct ToggleData {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectsSectionData {
    pub heading: String,
    pub heading_reveal: String,
    pub subtitle: Option<String>,
    pub filters: Vec<TagFilterData>,
    pub selected: Vec<String>,
    pub cards: Vec<ProjectCardData>,
    pub visible_count: usize,
    pub toggle: Option<ToggleData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CertificateRowData {
    /// Year header rendered before this row
    pub divider: Option<i32>,
    pub year: String,
    pub title: String,
    /// Issuer, or an em dash when unknown
    pub company: String,
    pub tech: Vec<TechData>,
    pub github: Option<String>,
    pub external: Option<String>,
    pub reveal: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CertificatesSectionData {
    pub heading: String,
    pub heading_reveal: String,
    pub subtitle: Option<String>,
    pub subtitle_reveal: String,
    pub table_reveal: String,
    pub rows: Vec<CertificateRowData>,
    /// Certificates left out of the section
    pub remaining: usize,
    pub ellipsis_reveal: String,
    pub archive_href: String,
    pub archive_reveal: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArchiveData {
    pub heading: String,
    pub subtitle: String,
    pub heading_reveal: String,
    pub table_reveal: String,
    pub rows: Vec<CertificateRowData>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call(
        filter: fn(&tera::Value, &HashMap<String, tera::Value>) -> tera::Result<tera::Value>,
        value: &str,
        args: &[(&str, tera::Value)],
    ) -> String {
        let args: HashMap<String, tera::Value> =
            args.iter().map(|(k, v)| (k.to_string(), v.clone())).collect();
        filter(&tera::Value::String(value.to_string()), &args)
            .unwrap()
            .as_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_templates_load() {
        assert!(TemplateRenderer::new().is_ok());
    }

    #[test]
    fn test_rgba_filter() {
        assert_eq!(
            call(rgba_filter, "#64ffda", &[("alpha", tera::Value::from(0.5))]),
            "rgba(100,255,218,0.5)"
        );
        assert_eq!(call(rgba_filter, "#0a192f", &[]), "rgba(10,25,47,1)");
        assert_eq!(call(rgba_filter, "tomato", &[]), "tomato");
    }

    #[test]
    fn test_ui_icon_filter() {
        assert!(call(ui_icon_filter, "Folder", &[]).contains("feather-folder"));
        assert_eq!(call(ui_icon_filter, "Unknown", &[]), "");
    }
}
