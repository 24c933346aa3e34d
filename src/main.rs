//! CLI entry point for pagesmith

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pagesmith")]
#[command(version)]
#[command(about = "Generate a personal site's index page from config.yml, markdown posts and HTML templates", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Defaults to `generate`
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate index.html and the blog post pages
    #[command(alias = "g")]
    Generate,

    /// List posts, books or gear without writing anything
    List {
        /// Type of content to list (post, book, gear)
        #[arg(default_value = "post")]
        r#type: String,
    },

    /// Delete generated pages
    Clean,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "pagesmith=debug,info"
    } else {
        "pagesmith=info"
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
        None => std::env::current_dir()?,
    };

    match cli.command.unwrap_or(Commands::Generate) {
        Commands::Generate => {
            println!("Loading configuration from {}...", pagesmith::CONFIG_FILE);
            let site = pagesmith::Site::new(&base_dir)?;

            println!("Generating complete HTML from templates...");
            let summary = site.generate()?;

            println!(
                "Successfully generated {} from templates!",
                pagesmith::OUTPUT_FILE
            );
            println!(
                "Generated {} book categories with {} books",
                summary.book_categories, summary.books
            );
            println!(
                "Generated {} gear categories with {} products",
                summary.gear_categories, summary.gear_items
            );
            println!("Rendered {} blog posts", summary.posts);
        }

        Commands::List { r#type } => {
            let site = pagesmith::Site::new(&base_dir)?;
            pagesmith::commands::list::run(&site, &r#type)?;
        }

        Commands::Clean => {
            let site = pagesmith::Site::new(&base_dir)?;
            tracing::info!("Cleaning generated pages...");
            site.clean()?;
            println!("Cleaned successfully!");
        }
    }

    Ok(())
}
