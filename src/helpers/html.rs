//! HTML helper functions

use super::lookup::tag_icon;

/// Make a site path root-relative. Paths that already start with `/` and
/// absolute URLs are returned unchanged.
///
/// # Examples
/// ```ignore
/// root_relative("images/cover.png") // -> "/images/cover.png"
/// ```
pub fn root_relative(path: &str) -> String {
    if path.starts_with('/') || path.contains("://") {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

/// A blog tag with its icon
///
/// # Examples
/// ```ignore
/// tag_span("python") // -> <span class="tag"><i class="fab fa-python"></i> python</span>
/// ```
pub fn tag_span(tag: &str) -> String {
    format!(
        r#"<span class="tag"><i class="{}"></i> {}</span>"#,
        tag_icon(tag),
        tag
    )
}

/// Cover image for a blog preview
pub fn cover_image(src: &str, title: &str) -> String {
    format!(r#"<img src="{}" alt="{}" class="blog-image">"#, src, title)
}

/// Gradient block shown when a post has no cover image
pub fn cover_fallback(date: &str) -> String {
    format!(
        r#"
            <div class="blog-cover-fallback" style="display: flex; flex-direction: column; align-items: center; justify-content: center; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; text-align: center; padding: 1.5rem; border-radius: 8px; box-shadow: 0 4px 20px rgba(0,0,0,0.15);">
                <i class="fas fa-pen-fancy" style="font-size: 4rem; margin-bottom: 1.5rem; opacity: 0.9;"></i>
                <div style="font-size: 0.8rem; opacity: 0.9; font-weight: 500;">{}</div>
            </div>
        "#,
        date
    )
}

/// Simple HTML escaping
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
