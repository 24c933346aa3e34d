//! Fixed lookup tables: tag icons and empty-category descriptions

use lazy_static::lazy_static;
use std::collections::HashMap;

/// Icon used for tags missing from the table
pub const DEFAULT_TAG_ICON: &str = "fas fa-tag";

lazy_static! {
    static ref TAG_ICONS: HashMap<&'static str, &'static str> = HashMap::from([
        ("technical", "fas fa-code"),
        ("data-engineering", "fas fa-database"),
        ("python", "fab fa-python"),
        ("orchestration", "fas fa-cogs"),
        ("prefect", "fas fa-stream"),
        ("tutorial", "fas fa-graduation-cap"),
        ("guide", "fas fa-book"),
        ("best-practices", "fas fa-check-circle"),
        ("career", "fas fa-briefcase"),
        ("development", "fas fa-laptop-code"),
        ("cloud", "fas fa-cloud"),
        ("architecture", "fas fa-sitemap"),
        ("devops", "fas fa-tools"),
        ("security", "fas fa-shield-alt"),
        ("performance", "fas fa-tachometer-alt"),
        ("testing", "fas fa-vial"),
        ("deployment", "fas fa-rocket"),
        ("monitoring", "fas fa-chart-line"),
        ("automation", "fas fa-robot"),
        ("infrastructure", "fas fa-server"),
    ]);
    static ref BOOK_CATEGORIES: HashMap<&'static str, &'static str> = HashMap::from([
        (
            "Technical & Programming",
            "Programming, architecture, and technical books"
        ),
        (
            "Leadership & Personal Development",
            "Leadership, management, and personal growth books"
        ),
        (
            "Philosophy & Thinking",
            "Philosophy, thinking, and mindset books"
        ),
    ]);
    static ref GEAR_CATEGORIES: HashMap<&'static str, &'static str> = HashMap::from([
        (
            "Hardware",
            "Laptops, monitors, keyboards, and other physical devices"
        ),
        (
            "Apps",
            "Software applications, productivity tools, and mobile apps"
        ),
    ]);
}

/// Icon class for a tag, matched case-insensitively
pub fn tag_icon(tag: &str) -> &'static str {
    TAG_ICONS
        .get(tag.to_lowercase().as_str())
        .copied()
        .unwrap_or(DEFAULT_TAG_ICON)
}

/// Which product catalog a category belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Books,
    Gear,
}

impl CatalogKind {
    /// Description shown in the placeholder of an empty category
    pub fn placeholder_description(self, category_name: &str) -> &'static str {
        let (table, fallback) = match self {
            CatalogKind::Books => (&*BOOK_CATEGORIES, "Books for learning and growth"),
            CatalogKind::Gear => (&*GEAR_CATEGORIES, "Tools and utilities for productivity"),
        };
        table.get(category_name).copied().unwrap_or(fallback)
    }

    /// Template used to render one product of this catalog
    pub fn item_template(self) -> &'static str {
        match self {
            CatalogKind::Books => "book_item",
            CatalogKind::Gear => "gear_item",
        }
    }
}
