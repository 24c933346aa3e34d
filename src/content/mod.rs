//! Content module - blog posts, front-matter and markdown rendering

mod frontmatter;
pub mod loader;
mod markdown;
mod post;

use std::path::PathBuf;
use thiserror::Error;

pub use frontmatter::{Document, FrontMatter};
pub use markdown::MarkdownRenderer;
pub use post::{newest_first, Post, PostDate};

/// Errors raised while turning a markdown file into a [`Post`]
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Invalid front-matter: {0}")]
    InvalidMetadata(#[source] serde_yaml::Error),

    #[error(
        "{path:?}: body must contain at least two paragraphs when no explicit description is given"
    )]
    MissingDescription { path: PathBuf },
}
