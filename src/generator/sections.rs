//! Section builders
//!
//! Each builder applies one template per item and joins the results, every
//! fragment preceded by a newline, in input order.

use crate::config::{Book, Category, GearItem, PhilosophyItem};
use crate::content::{newest_first, Post};
use crate::helpers::{cover_fallback, cover_image, tag_icon, tag_span, CatalogKind};
use crate::templates::{Slots, TemplateError, TemplateSet};

type Result<T> = std::result::Result<T, TemplateError>;

/// A product that can be listed in a books or gear category
pub trait CatalogItem {
    const KIND: CatalogKind;

    fn tags(&self) -> &[String];

    /// Slots for the item template, except `tags_html`
    fn slots(&self) -> Slots;
}

impl CatalogItem for Book {
    const KIND: CatalogKind = CatalogKind::Books;

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn slots(&self) -> Slots {
        Slots::new()
            .with("image_path", &self.image_path)
            .with("name", &self.name)
            .with("author", &self.author)
            .with("description", &self.description)
            .with("amazon_url", &self.amazon_url)
            .with("fallback_gradient", &self.fallback_gradient)
            .with("fallback_icon", &self.fallback_icon)
    }
}

impl CatalogItem for GearItem {
    const KIND: CatalogKind = CatalogKind::Gear;

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn slots(&self) -> Slots {
        Slots::new()
            .with("image_path", &self.image_path)
            .with("name", &self.name)
            .with("manufacturer", &self.manufacturer)
            .with("description", &self.description)
            .with("amazon_url", &self.amazon_url)
            .with("fallback_gradient", &self.fallback_gradient)
            .with("fallback_icon", &self.fallback_icon)
    }
}

/// Concatenate fragments, each preceded by a newline
pub fn join_fragments<I>(fragments: I) -> String
where
    I: IntoIterator<Item = String>,
{
    fragments.into_iter().fold(String::new(), |mut acc, fragment| {
        acc.push('\n');
        acc.push_str(&fragment);
        acc
    })
}

/// Render each item with `render` and join the results
fn fold_items<T, F>(items: impl IntoIterator<Item = T>, render: F) -> Result<String>
where
    F: FnMut(T) -> Result<String>,
{
    let fragments = items.into_iter().map(render).collect::<Result<Vec<_>>>()?;
    Ok(join_fragments(fragments))
}

/// Standalone page for one post
pub fn post_page(templates: &TemplateSet, post: &Post) -> Result<String> {
    let tags_html: String = post.tags.iter().map(|tag| tag_span(tag)).collect();

    templates.render(
        "blog_content",
        &Slots::new()
            .with("title", &post.title)
            .with("date", &post.date.display)
            .with("reading_time", post.reading_time.to_string())
            .with("content", &post.content)
            .with("tags_html", tags_html),
    )
}

/// Preview card for the blog listing
pub fn blog_preview(templates: &TemplateSet, post: &Post) -> Result<String> {
    let image_html = match &post.image_path {
        Some(src) => cover_image(src, &post.title),
        None => cover_fallback(&post.date.display),
    };

    templates.render(
        "blog_post",
        &Slots::new()
            .with("title", &post.title)
            .with("date", &post.date.display)
            .with("description", &post.description)
            .with("image_html", image_html)
            .with("read_more_link", &post.link),
    )
}

/// The blog listing, newest post first
pub fn blog_section(templates: &TemplateSet, intro: &str, posts: &[Post]) -> Result<String> {
    let posts_content = fold_items(newest_first(posts), |post| blog_preview(templates, post))?;

    templates.render(
        "blog_list",
        &Slots::new()
            .with("blog_intro", intro)
            .with("blog_posts_content", posts_content),
    )
}

/// Product tags, concatenated without separators
pub fn product_tags(templates: &TemplateSet, tags: &[String]) -> Result<String> {
    let tag_template = templates.get("tag")?;
    tags.iter()
        .map(|tag| {
            tag_template.render(&Slots::new().with("tag", tag).with("icon", tag_icon(tag)))
        })
        .collect()
}

pub fn catalog_item<T: CatalogItem>(templates: &TemplateSet, item: &T) -> Result<String> {
    let mut slots = item.slots();
    slots.insert("tags_html", product_tags(templates, item.tags())?);
    templates.render(T::KIND.item_template(), &slots)
}

/// Stand-in shown for a category with no products
pub fn placeholder(
    templates: &TemplateSet,
    kind: CatalogKind,
    category_name: &str,
    icon: &str,
) -> Result<String> {
    let first_word = category_name.split_whitespace().next().unwrap_or("");

    templates.render(
        "placeholder_item",
        &Slots::new()
            .with("category_name", category_name)
            .with("icon", icon)
            .with("description", kind.placeholder_description(category_name))
            .with("first_word", first_word),
    )
}

pub fn category<T: CatalogItem>(templates: &TemplateSet, category: &Category<T>) -> Result<String> {
    let content = if category.products.is_empty() {
        join_fragments([placeholder(
            templates,
            T::KIND,
            &category.name,
            &category.icon,
        )?])
    } else {
        fold_items(&category.products, |item| catalog_item(templates, item))?
    };

    templates.render(
        "category",
        &Slots::new()
            .with("icon", &category.icon)
            .with("name", &category.name)
            .with("content", content),
    )
}

/// All categories of a catalog, in configuration order
pub fn categories<T: CatalogItem>(
    templates: &TemplateSet,
    categories: &[Category<T>],
) -> Result<String> {
    fold_items(categories, |c| category(templates, c))
}

pub fn philosophy_section(templates: &TemplateSet, items: &[PhilosophyItem]) -> Result<String> {
    let item_template = templates.get("philosophy_item")?;
    let content = fold_items(items, |item| {
        item_template.render(
            &Slots::new()
                .with("icon", &item.icon)
                .with("title", &item.title)
                .with("description", &item.description),
        )
    })?;

    templates.render("philosophy_section", &Slots::new().with("content", content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PostDate;
    use crate::test_helpers::test_templates;
    use std::path::PathBuf;

    fn post(stem: &str, date: &str, image: Option<&str>) -> Post {
        Post {
            title: format!("Post {}", stem),
            date: PostDate::from_front_matter(date),
            description: format!("About {}", stem),
            reading_time: 3,
            tags: vec!["python".to_string(), "unknown-xyz".to_string()],
            image_path: image.map(str::to_string),
            content: "<p>Body</p>".to_string(),
            stem: stem.to_string(),
            output: PathBuf::from(format!("blog/{}.html", stem)),
            link: format!("blog/{}.html", stem),
        }
    }

    fn gear_category(name: &str, products: Vec<GearItem>) -> Category<GearItem> {
        Category {
            name: name.to_string(),
            icon: "fas fa-laptop".to_string(),
            products,
        }
    }

    #[test]
    fn test_join_fragments() {
        assert_eq!(join_fragments(Vec::<String>::new()), "");
        assert_eq!(
            join_fragments(["a".to_string(), "b".to_string()]),
            "\na\nb"
        );
    }

    #[test]
    fn test_post_page() {
        let templates = test_templates();
        let html = post_page(&templates, &post("one", "2024-01-15", None)).unwrap();
        assert_eq!(
            html,
            concat!(
                "<article><h1>Post one</h1><time>January 15, 2024</time><span>3 min</span>",
                r#"<span class="tag"><i class="fab fa-python"></i> python</span>"#,
                r#"<span class="tag"><i class="fas fa-tag"></i> unknown-xyz</span>"#,
                "<p>Body</p></article>"
            )
        );
    }

    #[test]
    fn test_blog_preview_images() {
        let templates = test_templates();

        let with_cover =
            blog_preview(&templates, &post("a", "2024-01-15", Some("/img/a.png"))).unwrap();
        assert!(with_cover
            .contains(r#"<img src="/img/a.png" alt="Post a" class="blog-image">"#));
        assert!(with_cover.contains(r#"href="blog/a.html""#));

        let without_cover = blog_preview(&templates, &post("b", "2024-01-15", None)).unwrap();
        assert!(without_cover.contains("blog-cover-fallback"));
        assert!(without_cover.contains("January 15, 2024"));
    }

    #[test]
    fn test_blog_section_newest_first() {
        let templates = test_templates();
        let posts = vec![
            post("older", "2023-03-01", None),
            post("newest", "2024-06-01", None),
            post("middle", "2023-09-01", None),
        ];

        let html = blog_section(&templates, "Intro", &posts).unwrap();
        let newest = html.find("blog/newest.html").unwrap();
        let middle = html.find("blog/middle.html").unwrap();
        let older = html.find("blog/older.html").unwrap();
        assert!(newest < middle && middle < older);
        assert!(html.starts_with(r#"<blog intro="Intro">"#));
        assert!(html.contains(">\n<post"));
    }

    #[test]
    fn test_empty_category_uses_placeholder() {
        let templates = test_templates();
        let hardware = gear_category("Hardware", Vec::new());

        let expected_content = join_fragments([placeholder(
            &templates,
            CatalogKind::Gear,
            "Hardware",
            "fas fa-laptop",
        )
        .unwrap()]);
        let html = category(&templates, &hardware).unwrap();

        assert_eq!(
            html,
            format!(
                r#"<category icon="fas fa-laptop" name="Hardware">{}</category>"#,
                expected_content
            )
        );
        assert!(html.contains(
            r#"first="Hardware">Hardware: Laptops, monitors, keyboards, and other physical devices<"#
        ));
    }

    #[test]
    fn test_placeholder_fallback_and_first_word() {
        let templates = test_templates();
        let html = placeholder(&templates, CatalogKind::Books, "Science Fiction", "fas fa-rocket")
            .unwrap();
        assert_eq!(
            html,
            r#"<placeholder icon="fas fa-rocket" first="Science">Science Fiction: Books for learning and growth</placeholder>"#
        );
    }

    #[test]
    fn test_category_with_products() {
        let templates = test_templates();
        let keyboard = GearItem {
            name: "Keyboard".to_string(),
            manufacturer: "Keychron".to_string(),
            description: "Quiet switches".to_string(),
            image_path: "images/kb.jpg".to_string(),
            amazon_url: "https://example.com/kb".to_string(),
            fallback_gradient: "none".to_string(),
            fallback_icon: "fas fa-keyboard".to_string(),
            tags: vec!["Typing".to_string(), "Desk".to_string()],
        };
        let mut mouse = keyboard.clone();
        mouse.name = "Mouse".to_string();
        mouse.tags.clear();

        let html = category(&templates, &gear_category("Hardware", vec![keyboard, mouse])).unwrap();
        assert!(!html.contains("<placeholder"));
        assert!(html.contains("Keyboard by Keychron: Quiet switches [<tag>Typing</tag><tag>Desk</tag>]"));
        assert!(html.contains("\n<gear-item"));
        assert!(html.find("Keyboard by").unwrap() < html.find("Mouse by").unwrap());
        assert!(html.contains("Mouse by Keychron: Quiet switches []"));
    }

    #[test]
    fn test_philosophy_section() {
        let templates = test_templates();
        let items = vec![
            PhilosophyItem {
                icon: "fas fa-a".to_string(),
                title: "First".to_string(),
                description: "One".to_string(),
            },
            PhilosophyItem {
                icon: "fas fa-b".to_string(),
                title: "Second".to_string(),
                description: "Two".to_string(),
            },
        ];

        assert_eq!(
            philosophy_section(&templates, &items).unwrap(),
            concat!(
                "<philosophy>",
                "\n<principle icon=\"fas fa-a\">First: One</principle>",
                "\n<principle icon=\"fas fa-b\">Second: Two</principle>",
                "</philosophy>"
            )
        );
        assert_eq!(
            philosophy_section(&templates, &[]).unwrap(),
            "<philosophy></philosophy>"
        );
    }

    #[test]
    fn test_missing_template_propagates() {
        let templates = TemplateSet::default();
        let err = philosophy_section(&templates, &[]).unwrap_err();
        assert!(matches!(err, TemplateError::NotFound(name) if name == "philosophy_item"));
    }
}
