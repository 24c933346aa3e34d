//! pagesmith: a small static page generator for a personal site
//!
//! Reads `config.yml` and the markdown posts in `blog/`, renders them
//! through the HTML templates in `templates/`, and writes `index.html`
//! plus one standalone page per post.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod templates;

#[cfg(test)]
pub(crate) mod test_helpers;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Configuration file name, relative to the base directory
pub const CONFIG_FILE: &str = "config.yml";
/// Template directory name, relative to the base directory
pub const TEMPLATES_DIR: &str = "templates";
/// Assembled page, relative to the base directory
pub const OUTPUT_FILE: &str = "index.html";

/// The site being generated
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Markdown posts directory
    pub blog_dir: PathBuf,
    /// Template directory
    pub templates_dir: PathBuf,
    /// Assembled index page
    pub output_path: PathBuf,
}

impl Site {
    /// Load the site rooted at `base_dir`
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config = config::SiteConfig::load(base_dir.join(CONFIG_FILE))?;
        Ok(Self::from_config(base_dir, config))
    }

    /// Build a site from an already-parsed configuration
    pub fn from_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let blog_dir = base_dir.join(&config.blog.directory);
        let templates_dir = base_dir.join(TEMPLATES_DIR);
        let output_path = base_dir.join(OUTPUT_FILE);

        Self {
            config,
            base_dir,
            blog_dir,
            templates_dir,
            output_path,
        }
    }

    /// Generate the index page and every post page
    pub fn generate(&self) -> Result<commands::generate::Summary> {
        commands::generate::run(self)
    }

    /// Remove generated pages
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// `path` relative to the base directory, for display
    pub fn relative<'p>(&self, path: &'p Path) -> &'p Path {
        path.strip_prefix(&self.base_dir).unwrap_or(path)
    }
}
