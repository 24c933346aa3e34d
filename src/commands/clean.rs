//! Remove generated pages

use anyhow::Result;
use std::fs;
use walkdir::WalkDir;

use crate::Site;

/// Delete the index page and every post page that has a markdown source
pub fn run(site: &Site) -> Result<()> {
    if site.output_path.exists() {
        fs::remove_file(&site.output_path)?;
        tracing::info!("Deleted: {:?}", site.relative(&site.output_path));
    }

    if !site.blog_dir.exists() {
        return Ok(());
    }

    for entry in WalkDir::new(&site.blog_dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }

        let page = path.with_extension("html");
        if page.is_file() {
            fs::remove_file(&page)?;
            tracing::info!("Deleted: {:?}", site.relative(&page));
        }
    }

    Ok(())
}
