//! Generator module - assembles the index page from section fragments

pub mod sections;
pub mod writer;

use anyhow::Result;

use crate::content::Post;
use crate::templates::{Slots, TemplateSet};
use crate::Site;

/// Page assembler for one run
pub struct Generator<'a> {
    site: &'a Site,
    templates: &'a TemplateSet,
}

impl<'a> Generator<'a> {
    /// Create a new generator
    pub fn new(site: &'a Site, templates: &'a TemplateSet) -> Self {
        Self { site, templates }
    }

    /// Standalone page for one post
    pub fn render_post_page(&self, post: &Post) -> Result<String> {
        Ok(sections::post_page(self.templates, post)?)
    }

    /// The complete index page
    pub fn render_index(&self, posts: &[Post]) -> Result<String> {
        let blog_html = self.render_blog(posts)?;
        let books_html = self.render_books()?;
        let gear_html = self.render_gear()?;

        let html = self.templates.render(
            "base",
            &Slots::new()
                .with("header_content", self.templates.raw("header")?)
                .with("about_content", self.templates.raw("about")?)
                .with("blog_content", blog_html)
                .with("books_content", books_html)
                .with("gear_content", gear_html),
        )?;

        Ok(html)
    }

    fn render_blog(&self, posts: &[Post]) -> Result<String> {
        tracing::debug!("Rendering blog section with {} posts", posts.len());
        Ok(sections::blog_section(
            self.templates,
            &self.site.config.site.blog_intro,
            posts,
        )?)
    }

    fn render_books(&self) -> Result<String> {
        let site = &self.site.config.site;
        let books = &self.site.config.books;
        tracing::debug!("Rendering {} book categories", books.categories.len());

        let categories_content = sections::categories(self.templates, &books.categories)?;
        let philosophy_content =
            sections::philosophy_section(self.templates, &site.books_philosophy)?;

        Ok(self.templates.render(
            "books_section",
            &Slots::new()
                .with("books_intro", &site.books_intro)
                .with("books_cta_text", &site.books_cta_text)
                .with("categories_content", categories_content)
                .with("philosophy_content", philosophy_content),
        )?)
    }

    fn render_gear(&self) -> Result<String> {
        let site = &self.site.config.site;
        let gear = &self.site.config.gear;
        tracing::debug!("Rendering {} gear categories", gear.categories.len());

        let categories_content = sections::categories(self.templates, &gear.categories)?;

        let mut optional_sections = String::new();
        if !site.gear_cta_text.trim().is_empty() {
            optional_sections.push_str(
                &self
                    .templates
                    .render("cta_section", &Slots::new().with("cta_text", &site.gear_cta_text))?,
            );
        }
        if !site.gear_philosophy.is_empty() {
            optional_sections.push_str(&sections::philosophy_section(
                self.templates,
                &site.gear_philosophy,
            )?);
        }

        Ok(self.templates.render(
            "gear_section_clean",
            &Slots::new()
                .with("gear_intro", &site.gear_intro)
                .with("categories_content", categories_content)
                .with("optional_sections", optional_sections),
        )?)
    }
}
