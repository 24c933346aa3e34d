//! Content loader - loads blog posts from the blog directory

use anyhow::{anyhow, Result};
use std::fs;
use std::path::Path;
use std::time::SystemTime;
use walkdir::WalkDir;

use super::{ContentError, FrontMatter, MarkdownRenderer, Post, PostDate};
use crate::helpers::{reading_time, root_relative, title_from_stem, truncate_chars};
use crate::Site;

/// Length of an auto-extracted description, in characters
const DESCRIPTION_CHARS: usize = 200;

/// Loads posts from the blog directory
pub struct ContentLoader<'a> {
    site: &'a Site,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self {
            site,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Load every `*.md` file directly inside the blog directory, in file
    /// name order
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let blog_dir = &self.site.blog_dir;
        if !blog_dir.exists() {
            tracing::warn!("Blog directory {:?} not found, no posts loaded", blog_dir);
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(blog_dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && is_markdown_file(path) {
                posts.push(self.load_post(path)?);
            }
        }

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), blog_dir);
        Ok(posts)
    }

    /// Load a single post from a file
    pub fn load_post(&self, path: &Path) -> Result<Post> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read post {:?}: {}", path, e))?;
        let modified = fs::metadata(path).and_then(|m| m.modified()).ok();

        self.parse_post(path, &content, modified)
    }

    /// Build a post from already-read file content. CRLF line endings are
    /// read as LF.
    pub fn parse_post(
        &self,
        path: &Path,
        content: &str,
        modified: Option<SystemTime>,
    ) -> Result<Post> {
        let content = content.replace("\r\n", "\n");
        let (fm, body) = FrontMatter::parse(&content)
            .map_err(|e| anyhow!("Failed to parse post {:?}: {}", path, e))?;

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled")
            .to_string();

        // Get title from front-matter or filename
        let title = non_blank(fm.title).unwrap_or_else(|| title_from_stem(&stem));

        let date = match fm.date.as_deref() {
            Some(raw) => PostDate::from_front_matter(raw),
            None => PostDate::from_modified(modified.unwrap_or_else(SystemTime::now)),
        };

        let body = MarkdownRenderer::rewrite_image_paths(body);
        let content_html = self.renderer.render(&body)?;
        let reading_time = reading_time(&body, self.site.config.blog.words_per_minute);

        let description = match non_blank(fm.description) {
            Some(description) => description,
            None => excerpt(&body).ok_or_else(|| ContentError::MissingDescription {
                path: path.to_path_buf(),
            })?,
        };

        let link = format!(
            "{}/{}.html",
            self.site.config.blog.directory.trim_end_matches('/'),
            stem
        );

        tracing::debug!("Parsed post {:?} ({}, {} min)", title, date.display, reading_time);

        Ok(Post {
            title,
            date,
            description,
            reading_time,
            tags: fm.tags,
            image_path: non_blank(fm.image_path).as_deref().map(root_relative),
            content: content_html,
            output: path.with_extension("html"),
            stem,
            link,
        })
    }
}

/// The second blank-line separated chunk of `body`, cut to
/// [`DESCRIPTION_CHARS`] and followed by an ellipsis
fn excerpt(body: &str) -> Option<String> {
    body.split("\n\n")
        .nth(1)
        .map(|chunk| format!("{}...", truncate_chars(chunk, DESCRIPTION_CHARS)))
}

/// Blank metadata values count as absent
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md")
        .unwrap_or(false)
}
