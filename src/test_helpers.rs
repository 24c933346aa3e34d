//! Shared test utilities: the fixture site and in-memory stand-ins for it.

use std::path::Path;
use tempfile::TempDir;

use crate::config::SiteConfig;
use crate::templates::TemplateSet;
use crate::Site;

/// Configuration used by tests that never read `config.yml` from disk
pub const TEST_CONFIG: &str = r#"
site:
  blog_intro: Notes on data work
  books_intro: Books that shaped me
  books_cta_text: Got a recommendation?
  books_philosophy:
    - icon: fas fa-seedling
      title: Compound learning
      description: Small reads add up
  gear_intro: What I work with
  gear_cta_text: "   "
  gear_philosophy: []
books:
  categories:
    - name: Technical & Programming
      icon: fas fa-code
      products:
        - name: The Pragmatic Programmer
          author: Hunt & Thomas
          description: Craft over dogma
          image_path: images/books/pragmatic.jpg
          amazon_url: https://example.com/pragmatic
          fallback_gradient: "linear-gradient(135deg, #1e3c72 0%, #2a5298 100%)"
          fallback_icon: fas fa-book
          tags: [Craft, Career]
    - name: Philosophy & Thinking
      icon: fas fa-brain
      products: []
gear:
  categories:
    - name: Hardware
      icon: fas fa-laptop
      products: []
    - name: Kitchen
      icon: fas fa-mug-hot
      products:
"#;

/// A site rooted at `base` with [`TEST_CONFIG`]
pub fn site_in(base: &Path) -> Site {
    let config = SiteConfig::from_yaml(TEST_CONFIG).unwrap();
    Site::from_config(base.to_path_buf(), config)
}

/// Minimal templates that expose every slot they receive
pub fn test_templates() -> TemplateSet {
    TemplateSet::from_sources([
        (
            "base",
            "<html>{header_content}|{about_content}|{blog_content}|{books_content}|{gear_content}</html>",
        ),
        ("header", "<header>{not a slot}</header>"),
        ("about", "<about/>"),
        ("blog_list", "<blog intro=\"{blog_intro}\">{blog_posts_content}</blog>"),
        (
            "blog_content",
            "<article><h1>{title}</h1><time>{date}</time><span>{reading_time} min</span>{tags_html}{content}</article>",
        ),
        (
            "blog_post",
            "<post href=\"{read_more_link}\" title=\"{title}\" date=\"{date}\">{image_html}<p>{description}</p></post>",
        ),
        (
            "books_section",
            "<books intro=\"{books_intro}\" cta=\"{books_cta_text}\">{categories_content}{philosophy_content}</books>",
        ),
        (
            "gear_section_clean",
            "<gear intro=\"{gear_intro}\">{categories_content}{optional_sections}</gear>",
        ),
        ("category", "<category icon=\"{icon}\" name=\"{name}\">{content}</category>"),
        (
            "book_item",
            "<book img=\"{image_path}\" url=\"{amazon_url}\" bg=\"{fallback_gradient}\" icon=\"{fallback_icon}\">{name} by {author}: {description} [{tags_html}]</book>",
        ),
        (
            "gear_item",
            "<gear-item img=\"{image_path}\" url=\"{amazon_url}\" bg=\"{fallback_gradient}\" icon=\"{fallback_icon}\">{name} by {manufacturer}: {description} [{tags_html}]</gear-item>",
        ),
        ("tag", "<tag>{tag}</tag>"),
        (
            "placeholder_item",
            "<placeholder icon=\"{icon}\" first=\"{first_word}\">{category_name}: {description}</placeholder>",
        ),
        ("philosophy_section", "<philosophy>{content}</philosophy>"),
        (
            "philosophy_item",
            "<principle icon=\"{icon}\">{title}: {description}</principle>",
        ),
        ("cta_section", "<cta>{cta_text}</cta>"),
    ])
}

/// Copy `fixtures/site/` to a temp directory and return it.
pub fn setup_fixture_site() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/site");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}
