//! Configuration module

mod site;

pub use site::{Book, BlogConfig, Catalog, Category, GearItem, PhilosophyItem, SiteConfig, SiteSection};
