//! Front-matter parsing

use serde::{Deserialize, Deserializer};

use super::ContentError;

/// Marker that opens and closes the metadata block
const MARKER: &str = "---";

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// A markdown file split into its metadata block and body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document<'a> {
    /// Metadata text between the two markers, and everything after the
    /// closing marker
    WithMetadata { metadata: &'a str, body: &'a str },
    /// No complete metadata block; the whole file is body
    BodyOnly(&'a str),
}

impl<'a> Document<'a> {
    /// Split `content` on a `---` marker at the very start and the next
    /// `---` at the start of a line.
    pub fn split(content: &'a str) -> Self {
        let Some(rest) = content.strip_prefix(MARKER) else {
            return Document::BodyOnly(content);
        };

        match rest.find("\n---") {
            Some(pos) => Document::WithMetadata {
                metadata: &rest[..pos],
                body: &rest[pos + 1 + MARKER.len()..],
            },
            None => Document::BodyOnly(content),
        }
    }
}

/// Front-matter data from a blog post
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    #[serde(deserialize_with = "string_or_vec")]
    pub tags: Vec<String>,
    pub image_path: Option<String>,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, body)
    pub fn parse(content: &str) -> Result<(Self, &str), ContentError> {
        match Document::split(content) {
            Document::WithMetadata { metadata, body } => {
                Ok((Self::from_yaml(metadata)?, body))
            }
            Document::BodyOnly(body) => Ok((FrontMatter::default(), body)),
        }
    }

    fn from_yaml(metadata: &str) -> Result<Self, ContentError> {
        if metadata.trim().is_empty() {
            return Ok(FrontMatter::default());
        }
        serde_yaml::from_str(metadata).map_err(ContentError::InvalidMetadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_with_metadata() {
        let content = "---\ntitle: Hello\n---\n\n# Heading\n\nFirst paragraph.\n";
        assert_eq!(
            Document::split(content),
            Document::WithMetadata {
                metadata: "\ntitle: Hello",
                body: "\n\n# Heading\n\nFirst paragraph.\n",
            }
        );
    }

    #[test]
    fn test_split_without_marker() {
        let content = "# Just markdown\n\n---\n\nAfter a rule.";
        assert_eq!(Document::split(content), Document::BodyOnly(content));
    }

    #[test]
    fn test_split_single_marker() {
        let content = "---\ntitle: Never closed\n\nBody text.";
        assert_eq!(Document::split(content), Document::BodyOnly(content));
    }

    #[test]
    fn test_parse_yaml_frontmatter() {
        let content = r#"---
title: Orchestrating Pipelines
date: 2024-01-15
description: A short tour
tags:
  - Python
  - prefect
image_path: images/pipelines.png
---

Body here.
"#;

        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.title.as_deref(), Some("Orchestrating Pipelines"));
        assert_eq!(fm.date.as_deref(), Some("2024-01-15"));
        assert_eq!(fm.description.as_deref(), Some("A short tour"));
        assert_eq!(fm.tags, vec!["Python", "prefect"]);
        assert_eq!(fm.image_path.as_deref(), Some("images/pipelines.png"));
        assert_eq!(body, "\n\nBody here.\n");
    }

    #[test]
    fn test_parse_single_string_tag() {
        let content = "---\ntags: career\n---\nBody";
        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.tags, vec!["career"]);
    }

    #[test]
    fn test_empty_metadata_block() {
        let content = "---\n---\nBody";
        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert!(fm.title.is_none());
        assert!(fm.tags.is_empty());
        assert_eq!(body, "\nBody");
    }

    #[test]
    fn test_malformed_metadata() {
        let content = "---\ntitle: [unclosed\n---\nBody";
        let err = FrontMatter::parse(content).unwrap_err();
        assert!(matches!(err, ContentError::InvalidMetadata(_)));
    }
}
