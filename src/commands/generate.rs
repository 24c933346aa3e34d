//! Generate the index page and the standalone post pages

use anyhow::Result;
use std::time::Instant;

use crate::content::loader::ContentLoader;
use crate::generator::{writer, Generator};
use crate::templates::TemplateSet;
use crate::Site;

/// What a generation run produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub posts: usize,
    pub book_categories: usize,
    pub books: usize,
    pub gear_categories: usize,
    pub gear_items: usize,
}

impl Summary {
    fn new(site: &Site, posts: usize) -> Self {
        let config = &site.config;
        Self {
            posts,
            book_categories: config.books.categories.len(),
            books: config.total_books(),
            gear_categories: config.gear.categories.len(),
            gear_items: config.total_gear(),
        }
    }
}

/// Run the full pipeline. Any failure aborts the run; pages written before
/// the failure are left in place.
pub fn run(site: &Site) -> Result<Summary> {
    let start = Instant::now();

    let templates = TemplateSet::load(&site.templates_dir)?;

    let loader = ContentLoader::new(site);
    let posts = loader.load_posts()?;
    tracing::info!(
        "Loaded {} posts from {:?}",
        posts.len(),
        site.relative(&site.blog_dir)
    );

    let generator = Generator::new(site, &templates);

    for post in &posts {
        let page = generator.render_post_page(post)?;
        writer::write_page(&post.output, &page)?;
        tracing::debug!("Wrote {:?}", site.relative(&post.output));
    }

    tracing::debug!("Assembling index page");
    let html = generator.render_index(&posts)?;

    tracing::info!("Writing {:?}...", site.relative(&site.output_path));
    writer::write_page(&site.output_path, &html)?;

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(Summary::new(site, posts.len()))
}
