//! Blog post model

use chrono::NaiveDate;
use std::cmp::Ordering;
use std::path::PathBuf;
use std::time::SystemTime;

use crate::helpers::{full_date, full_date_from_system_time, parse_date_string, parse_full_date};

/// A post date as displayed, plus the calendar date used for ordering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDate {
    /// Long-form text, e.g. "January 15, 2024", or the raw front-matter
    /// value when it could not be parsed
    pub display: String,
    pub sort_key: Option<NaiveDate>,
}

impl PostDate {
    /// From an explicit front-matter value. Unparseable values are kept
    /// verbatim.
    pub fn from_front_matter(raw: &str) -> Self {
        match parse_date_string(raw) {
            Some(date) => Self::from_date(date),
            None => Self::from_display(raw.to_string()),
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            display: full_date(&date),
            sort_key: Some(date),
        }
    }

    /// From a file modification time
    pub fn from_modified(time: SystemTime) -> Self {
        Self::from_display(full_date_from_system_time(time))
    }

    fn from_display(display: String) -> Self {
        let sort_key = parse_full_date(&display);
        Self { display, sort_key }
    }
}

/// A blog post
#[derive(Debug, Clone)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Publication date
    pub date: PostDate,

    /// Short summary for the blog listing
    pub description: String,

    /// Estimated minutes to read
    pub reading_time: usize,

    /// Post tags
    pub tags: Vec<String>,

    /// Root-relative cover image
    pub image_path: Option<String>,

    /// Rendered HTML body
    pub content: String,

    /// File stem shared by the markdown source and the generated page
    pub stem: String,


    /// Where the standalone page is written
    pub output: PathBuf,

    /// Link from the index page, e.g. `blog/my-post.html`
    pub link: String,
}

/// Posts ordered most recent first. Posts with equal dates keep their
/// input order; posts without a usable date go last.
pub fn newest_first(posts: &[Post]) -> Vec<&Post> {
    let mut sorted: Vec<&Post> = posts.iter().collect();
    sorted.sort_by(|a, b| match (a.date.sort_key, b.date.sort_key) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    sorted
}
