//! Icon lookup: remote technology icons and the few inline UI icons

use super::html::html_escape;
use super::url::encode_url;

/// Lookup key the icon service expects: lower-cased, first hyphen removed
pub fn icon_key(tag: &str) -> String {
    tag.to_lowercase().replacen('-', "", 1)
}

/// Icon service URL for a technology tag
///
/// # Examples
/// ```ignore
/// icon_url("https://icons-theta.vercel.app/icon", "Next-JS") // -> ".../icon?i=nextjs"
/// ```
pub fn icon_url(base_url: &str, tag: &str) -> String {
    format!("{}?i={}", base_url, encode_url(&icon_key(tag)))
}

/// `<img>` for a technology tag; unknown tags fall back to the service's placeholder
pub fn icon_img(base_url: &str, tag: &str) -> String {
    format!(
        r#"<img class="tech-icon" src="{}" alt="{} icon" width="20" height="20" loading="lazy">"#,
        html_escape(&icon_url(base_url, tag)),
        html_escape(tag)
    )
}

const FOLDER: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" role="img" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1" stroke-linecap="round" stroke-linejoin="round" class="feather feather-folder"><title>Folder</title><path d="M22 19a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h5l2 3h9a2 2 0 0 1 2 2z"></path></svg>"#;

const GITHUB: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" role="img" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="feather feather-github"><title>GitHub</title><path d="M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"></path></svg>"#;

const EXTERNAL: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" role="img" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="feather feather-external-link"><title>External Link</title><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"></path><polyline points="15 3 21 3 21 9"></polyline><line x1="10" y1="14" x2="21" y2="3"></line></svg>"#;

const MAIL: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" role="img" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="feather feather-mail"><title>Mail</title><path d="M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"></path><polyline points="22,6 12,13 2,6"></polyline></svg>"#;

/// Inline SVG for a named UI icon, matched case-insensitively
pub fn ui_icon(name: &str) -> Option<&'static str> {
    match name.to_lowercase().as_str() {
        "folder" => Some(FOLDER),
        "github" => Some(GITHUB),
        "external" => Some(EXTERNAL),
        "mail" | "email" => Some(MAIL),
        _ => None,
    }
}
