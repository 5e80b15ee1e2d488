//! CLI entry point for postern

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "postern")]
#[command(version)]
#[command(about = "A front-matter validator and post store for static blogs", long_about = None)]
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
    /// Initialize a new post store
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Create a new post or draft
    New {
        /// Title of the new post
        title: String,

        /// Create the document under _drafts instead of _posts
        #[arg(long)]
        draft: bool,

        /// Filename for the new post (without extension)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Validate every document in the store
    #[command(alias = "c")]
    Check,

    /// List store content
    #[command(alias = "l")]
    List {
        /// Type of content to list (post, category)
        #[arg(default_value = "post")]
        r#type: String,

        /// Emit the ordered sequence as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single post by slug
    Show {
        /// Post slug, e.g. 2024-04-30-performance-testing
        slug: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "postern=debug,info"
    } else {
        "postern=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing post store in {:?}", target_dir);
            postern::commands::init::init_store(&target_dir)?;
            println!("Initialized empty post store in {:?}", target_dir);
        }

        Commands::New { title, draft, path } => {
            let postern = postern::Postern::new(&base_dir)?;
            tracing::info!("Creating new document with title: {}", title);
            postern::commands::new::create_post(&postern, &title, draft, path.as_deref())?;
        }

        Commands::Check => {
            let postern = postern::Postern::new(&base_dir)?;
            tracing::info!("Validating store...");
            postern.check()?;
        }

        Commands::List { r#type, json } => {
            let postern = postern::Postern::new(&base_dir)?;
            postern::commands::list::run(&postern, &r#type, json)?;
        }

        Commands::Show { slug } => {
            let postern = postern::Postern::new(&base_dir)?;
            postern::commands::show::run(&postern, &slug)?;
        }

        Commands::Version => {
            println!("postern version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
