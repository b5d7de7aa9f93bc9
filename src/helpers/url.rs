//! URL helper functions

use indexmap::IndexMap;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::collections::HashSet;

use crate::config::SiteConfig;

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/archive/") // -> "/folio/archive/"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    if is_external(path) || path.starts_with('#') || path.starts_with("mailto:") {
        return path.to_string();
    }

    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    let path = url_for(config, path);
    if is_external(&path) {
        path
    } else {
        format!("{}{}", base, path)
    }
}

/// Whether a link leaves the site
pub fn is_external(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}

// Unreserved marks stay readable, as with JavaScript's encodeURIComponent
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a query or path component
pub fn encode_url(component: &str) -> String {
    utf8_percent_encode(component, COMPONENT).to_string()
}

/// URL-friendly form of a tag, used for per-tag pages.
/// `+` and `#` are spelled out so that C, C++ and C# stay distinct.
pub fn tag_slug(tag: &str) -> String {
    slug::slugify(tag.replace('+', " plus ").replace('#', " sharp "))
}

/// Assign each tag a distinct page slug, in the order given.
///
/// Tags are case-sensitive but slugs are not, so a tag whose slug is already
/// taken gets the first free `-2`, `-3`, ... suffix. Tags without a usable
/// slug are left out.
pub fn tag_slugs<'a, I>(tags: I) -> IndexMap<String, String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut taken = HashSet::new();
    let mut slugs = IndexMap::new();

    for tag in tags {
        let base = tag_slug(tag);
        if base.is_empty() || slugs.contains_key(tag) {
            continue;
        }
        let mut slug = base.clone();
        let mut counter = 1;
        while taken.contains(&slug) {
            counter += 1;
            slug = format!("{}-{}", base, counter);
        }
        taken.insert(slug.clone());
        slugs.insert(tag.to_string(), slug);
    }

    slugs
}
