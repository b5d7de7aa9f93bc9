//! CLI entry point for folio-rs

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio_rs::commands::import::ImportOptions;
use folio_rs::commands::new::NewRecord;
use folio_rs::content::Section;

#[derive(Parser)]
#[command(name = "folio-rs")]
#[command(author = "Arman Grewal")]
#[command(version)]
#[command(about = "A static portfolio site generator for projects and certificates", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new portfolio site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new project or certificate
    New {
        /// Kind of record (project, certificate)
        kind: Section,

        /// Title of the new record
        title: String,

        /// Technology tag; repeat for several
        #[arg(short, long)]
        tech: Vec<String>,

        /// Company or issuer
        #[arg(long)]
        company: Option<String>,

        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,

        /// File name for the new record
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Generate static files
    #[command(alias = "g")]
    Generate {
        /// Watch for file changes
        #[arg(short, long)]
        watch: bool,
    },

    /// Start a local server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Open browser automatically
        #[arg(short, long)]
        open: bool,

        /// Enable static mode (no file watching)
        #[arg(long)]
        r#static: bool,
    },

    /// Clean the public folder
    Clean,

    /// List site information
    List {
        /// What to list (projects, certificates, tags, archive)
        #[arg(default_value = "projects")]
        r#type: String,

        /// Only show records with this technology; repeat for several
        #[arg(short, long)]
        tech: Vec<String>,

        /// Show every record instead of the first page
        #[arg(short, long)]
        all: bool,
    },

    /// Create certificate records from `YYYY_MM_DD_Title.pdf` files
    Import {
        /// Directory containing the PDFs
        pdf_dir: PathBuf,

        /// URL prefix for each certificate's link
        #[arg(long)]
        link_base: Option<String>,

        /// Issuer written to each record
        #[arg(long)]
        issuer: Option<String>,

        /// Output directory (defaults to the site's certificates directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio_rs=debug,info"
    } else {
        "folio_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to read the current directory")?,
    };

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            folio_rs::commands::init::init_site(&target_dir)?;
            println!("Initialized portfolio site in {:?}", target_dir);
        }

        Commands::New {
            kind,
            title,
            tech,
            company,
            date,
            path,
        } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Creating new {} with title: {}", kind, title);
            let record = NewRecord {
                title,
                tech,
                company,
                date,
                path,
            };
            let file_path = folio_rs::commands::new::create_record(&folio, kind, &record)?;
            println!("Created: {:?}", file_path);
        }

        Commands::Generate { watch } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Generating static files...");

            folio_rs::commands::generate::run(&folio)?;
            println!("Generated successfully!");

            if watch {
                tracing::info!("Watching for file changes...");
                folio_rs::commands::generate::watch(&folio).await?;
            }
        }

        Commands::Server {
            port,
            ip,
            open,
            r#static,
        } => {
            let folio = folio_rs::Folio::new(&base_dir)?;

            // Generate first
            tracing::info!("Generating static files...");
            let catalog = folio_rs::commands::generate::build(&folio)?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            folio_rs::server::start(&folio, catalog, &ip, port, !r#static, open).await?;
        }

        Commands::Clean => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            folio.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::List { r#type, tech, all } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio_rs::commands::list::run(&folio, &r#type, &tech, all)?;
        }

        Commands::Import {
            pdf_dir,
            link_base,
            issuer,
            output,
        } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            let output_dir = output
                .map(|dir| base_dir.join(dir))
                .unwrap_or_else(|| folio.content_dir.join(Section::Certificates.dir_name()));
            let options = ImportOptions { link_base, issuer };

            let report =
                folio_rs::commands::import::import_certificates(&pdf_dir, &output_dir, &options)?;
            println!(
                "Imported {} certificates into {:?} ({} skipped)",
                report.created.len(),
                output_dir,
                report.skipped.len()
            );
        }

        Commands::Version => {
            println!("folio-rs version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
