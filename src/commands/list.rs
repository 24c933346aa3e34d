//! List site content

use anyhow::Result;

use crate::config::Catalog;
use crate::content::loader::ContentLoader;
use crate::content::newest_first;
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    match content_type {
        "post" | "posts" => {
            let posts = ContentLoader::new(site).load_posts()?;
            println!("Posts ({}):", posts.len());
            for post in newest_first(&posts) {
                println!(
                    "  {} - {} ({} min read) [{}]",
                    post.date.display, post.title, post.reading_time, post.link
                );
            }
        }
        "book" | "books" => {
            print_catalog("Books", &site.config.books, |book| {
                format!("{} by {}", book.name, book.author)
            });
        }
        "gear" => {
            print_catalog("Gear", &site.config.gear, |item| {
                format!("{} by {}", item.name, item.manufacturer)
            });
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, book, gear",
                content_type
            );
        }
    }

    Ok(())
}

fn print_catalog<T>(label: &str, catalog: &Catalog<T>, describe: impl Fn(&T) -> String) {
    println!(
        "{} ({} categories, {} items):",
        label,
        catalog.categories.len(),
        catalog.product_count()
    );
    for category in &catalog.categories {
        println!("  {} ({})", category.name, category.products.len());
        for product in &category.products {
            println!("    {}", describe(product));
        }
    }
}
