use std::fs;
use std::path::Path;

use folio_rs::commands::{generate, init};
use folio_rs::Folio;
use tempfile::TempDir;

const CONFIG: &str = r#"title: Test Folio
author: Jane Roe
projects:
  display_limit: 2
certificates:
  display_limit: 2
"#;

fn write(base: &Path, relative: &str, content: &str) {
    let path = base.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn project(base: &Path, name: &str, date: &str, tech: &[&str]) {
    let tech: String = tech.iter().map(|t| format!("  - '{}'\n", t)).collect();
    write(
        base,
        &format!("content/projects/{}.md", name),
        &format!(
            "---\ndate: '{}'\ntitle: {}\ntech:\n{}---\n\nAbout {}.\n",
            date, name, tech, name
        ),
    );
}

fn certificate(base: &Path, name: &str, date: &str, company: Option<&str>) {
    let company = company
        .map(|c| format!("company: {}\n", c))
        .unwrap_or_default();
    write(
        base,
        &format!("content/certificates/{}.md", name),
        &format!("---\ndate: '{}'\ntitle: {}\n{}---\n", date, name, company),
    );
}

fn sample_site(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    let base = dir.path();
    write(base, "_config.yml", config);

    project(base, "Compiler", "2023-06-01", &["Rust", "C++"]);
    project(base, "Dashboard", "2022-02-01", &["TypeScript"]);
    project(base, "Scheduler", "2021-09-01", &["Rust"]);

    certificate(base, "Kubernetes", "2023-05-30", Some("CNCF"));
    certificate(base, "Terraform", "2023-01-15", Some("HashiCorp"));
    certificate(base, "Docker", "2022-04-02", Some("Docker Inc"));
    certificate(base, "Networking", "2021-11-20", None);
    certificate(base, "Linux", "2021-03-03", Some("LPI"));

    write(base, "static/img/avatar.png", "png");
    dir
}

fn read(base: &Path, relative: &str) -> String {
    fs::read_to_string(base.join("public").join(relative)).unwrap()
}

#[test]
fn test_generate_writes_every_page() {
    let site = sample_site(CONFIG);
    let folio = Folio::new(site.path()).unwrap();
    let catalog = generate::build(&folio).unwrap();
    assert_eq!(catalog.projects.len(), 3);
    assert_eq!(catalog.certificates.len(), 5);

    let public = site.path().join("public");
    for page in [
        "index.html",
        "projects/index.html",
        "tech/rust/index.html",
        "tech/typescript/index.html",
        "tech/c-plus-plus/index.html",
        "archive/index.html",
        "records.json",
        "img/avatar.png",
    ] {
        assert!(public.join(page).exists(), "missing {}", page);
    }
}

#[test]
fn test_home_page_is_collapsed() {
    let site = sample_site(CONFIG);
    let folio = Folio::new(site.path()).unwrap();
    generate::run(&folio).unwrap();

    let index = read(site.path(), "index.html");
    assert!(index.contains("Compiler"));
    assert!(index.contains("Dashboard"));
    assert!(!index.contains("Scheduler"));
    assert!(index.contains("Show More"));
    assert!(index.contains("Rust (2)"));

    // Two of five certificates are shown before the archive link
    assert!(index.contains("Kubernetes"));
    assert!(!index.contains("Linux"));
    assert!(index.contains("Show other 3 certificates..."));
    assert!(index.contains("data-reveal"));
}

#[test]
fn test_projects_and_tech_pages() {
    let site = sample_site(CONFIG);
    let folio = Folio::new(site.path()).unwrap();
    generate::run(&folio).unwrap();

    let all = read(site.path(), "projects/index.html");
    assert!(all.contains("Scheduler"));
    assert!(all.contains("Show Less"));

    let rust = read(site.path(), "tech/rust/index.html");
    assert!(rust.contains("2 of 3 projects use Rust"));
    assert!(rust.contains("Compiler"));
    assert!(rust.contains("Scheduler"));
    assert!(!rust.contains("Dashboard"));
    assert!(rust.contains("tech-filter-item selected"));
}

#[test]
fn test_archive_has_year_dividers() {
    let site = sample_site(CONFIG);
    let folio = Folio::new(site.path()).unwrap();
    generate::run(&folio).unwrap();

    let archive = read(site.path(), "archive/index.html");
    assert!(archive.contains("5 certificates and counting ..."));
    assert!(archive.contains("<span class=\"overline\">2022</span>"));
    assert!(archive.contains("<span class=\"overline\">2021</span>"));
    // The newest year never opens a divider
    assert!(!archive.contains("<span class=\"overline\">2023</span>"));
    assert_eq!(archive.matches("divider-row").count(), 2);
    // Missing issuer falls back to a dash
    assert!(archive.contains("<span>\u{2014}</span>"));
}

#[test]
fn test_records_json() {
    let site = sample_site(CONFIG);
    let folio = Folio::new(site.path()).unwrap();
    generate::run(&folio).unwrap();

    let json: serde_json::Value = serde_json::from_str(&read(site.path(), "records.json")).unwrap();
    assert_eq!(json["projects"]["displayLimit"], 2);
    assert_eq!(json["projects"]["records"].as_array().unwrap().len(), 3);
    assert_eq!(json["projects"]["tags"][0]["name"], "Rust");
    assert_eq!(json["projects"]["tags"][0]["count"], 2);
    assert_eq!(json["certificates"]["records"].as_array().unwrap().len(), 5);
}

#[test]
fn test_reduced_motion_drops_reveal_hooks() {
    let config = format!("{}reduced_motion: true\n", CONFIG);
    let site = sample_site(&config);
    let folio = Folio::new(site.path()).unwrap();
    generate::run(&folio).unwrap();

    for page in ["index.html", "projects/index.html", "archive/index.html"] {
        let html = read(site.path(), page);
        assert!(!html.contains("data-reveal"), "{} still has reveal hooks", page);
    }
    let all = read(site.path(), "projects/index.html");
    assert_eq!(all.matches("transition-delay: 0ms").count(), 3);
}

#[test]
fn test_malformed_date_fails_the_build() {
    let site = sample_site(CONFIG);
    write(
        site.path(),
        "content/projects/broken.md",
        "---\ndate: 'someday'\ntitle: Broken\n---\n",
    );
    let folio = Folio::new(site.path()).unwrap();

    let err = generate::build(&folio).unwrap_err();
    assert!(format!("{:#}", err).contains("someday"));
}

#[test]
fn test_generate_initialized_site() {
    let dir = TempDir::new().unwrap();
    init::init_site(dir.path()).unwrap();

    let folio = Folio::new(dir.path()).unwrap();
    generate::run(&folio).unwrap();

    let index = read(dir.path(), "index.html");
    assert!(index.contains("Hello Portfolio"));
    assert!(index.contains("Getting Started"));
    assert!(!index.contains("Show other"));
    assert!(dir.path().join("public/tech/markdown/index.html").exists());

    folio.clean().unwrap();
    assert!(!dir.path().join("public").exists());
}

/// Generated HTML with `/` unescaped, so hrefs can be compared literally
fn read_decoded(base: &Path, relative: &str) -> String {
    read(base, relative).replace("&#x2F;", "/")
}

#[test]
fn test_case_distinct_tags_get_their_own_pages() {
    let dir = TempDir::new().unwrap();
    let base = dir.path();
    write(base, "_config.yml", "title: Tags\nurl: https://folio.example\n");
    project(base, "Foundry", "2023-01-01", &["Rust"]);
    project(base, "Quarry", "2022-01-01", &["rust"]);

    let folio = Folio::new(base).unwrap();
    generate::run(&folio).unwrap();

    let upper = read(base, "tech/rust/index.html");
    assert!(upper.contains("Foundry"));
    assert!(!upper.contains("Quarry"));

    let lower = read_decoded(base, "tech/rust-2/index.html");
    assert!(lower.contains("Quarry"));
    assert!(!lower.contains("Foundry"));
    // The other tag's filter leads to its own page, not back to this one
    assert!(lower.contains(r#"href="/tech/rust/" data-tag="Rust""#));
    assert!(lower.contains(r#"<link rel="canonical" href="https://folio.example/tech/rust-2/">"#));

    let index = read_decoded(base, "index.html");
    assert!(index.contains(r#"href="/tech/rust-2/" data-tag="rust""#));
    assert!(index.contains(r#"<link rel="canonical" href="https://folio.example/">"#));
}
