//! Site configuration (config.yml)

use anyhow::{anyhow, Result};
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;

/// Deserialize a list that may be written as `null`
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Main site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    pub site: SiteSection,
    #[serde(default)]
    pub blog: BlogConfig,
    pub books: Catalog<Book>,
    pub gear: Catalog<GearItem>,
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config {:?}: {}", path, e))?;
        Self::from_yaml(&content).map_err(|e| anyhow!("Invalid config {:?}: {}", path, e))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn total_books(&self) -> usize {
        self.books.product_count()
    }

    pub fn total_gear(&self) -> usize {
        self.gear.product_count()
    }
}

/// Page copy and philosophy lists
#[derive(Debug, Clone, Deserialize)]
pub struct SiteSection {
    #[serde(default = "default_blog_intro")]
    pub blog_intro: String,
    pub books_intro: String,
    pub books_cta_text: String,
    pub books_philosophy: Vec<PhilosophyItem>,
    pub gear_intro: String,
    pub gear_cta_text: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub gear_philosophy: Vec<PhilosophyItem>,
}

fn default_blog_intro() -> String {
    "Welcome to my blog where I share insights about technology, engineering, and personal growth."
        .to_string()
}

/// Blog settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Directory holding the markdown posts, relative to the site root
    pub directory: String,
    pub words_per_minute: usize,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            directory: "blog".to_string(),
            words_per_minute: crate::helpers::WORDS_PER_MINUTE,
        }
    }
}

/// One principle in a philosophy section
#[derive(Debug, Clone, Deserialize)]
pub struct PhilosophyItem {
    pub icon: String,
    pub title: String,
    pub description: String,
}

/// An ordered list of product categories
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Catalog<T> {
    pub categories: Vec<Category<T>>,
}

impl<T> Catalog<T> {
    pub fn product_count(&self) -> usize {
        self.categories.iter().map(|c| c.products.len()).sum()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Category<T> {
    pub name: String,
    pub icon: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub products: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Book {
    pub name: String,
    pub author: String,
    pub description: String,
    pub image_path: String,
    pub amazon_url: String,
    pub fallback_gradient: String,
    pub fallback_icon: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GearItem {
    pub name: String,
    pub manufacturer: String,
    pub description: String,
    pub image_path: String,
    pub amazon_url: String,
    pub fallback_gradient: String,
    pub fallback_icon: String,
    #[serde(default)]
    pub tags: Vec<String>,
}
