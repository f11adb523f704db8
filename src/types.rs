//! Shared types passed between the source layer, the gallery view, and the
//! page generator.
//!
//! These mirror the JSON posts manifest one-to-one, so the same structs are
//! used for deserialization and rendering.

use serde::{Deserialize, Serialize};

/// A reference to an already-processed image.
///
/// The gallery never resizes or transforms images; it only emits whatever
/// the image pipeline produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Pre-built `srcset` attribute value, passed through verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub srcset: Option<String>,
}

impl ImageRef {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            width: None,
            height: None,
            srcset: None,
        }
    }
}

/// One image post as shown in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    /// Opaque unique identifier
    pub id: String,
    /// Navigation path of the post page
    pub path: String,
    #[serde(default)]
    pub title: String,
    /// Publication date, `YYYY-MM-DD`
    #[serde(default)]
    pub date: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    pub image: ImageRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<ImageRef>,
}

impl PostSummary {
    /// The image to show in the grid: thumbnail when present, else the
    /// primary image.
    pub fn display_image(&self) -> &ImageRef {
        self.thumbnail.as_ref().unwrap_or(&self.image)
    }
}

/// What the layout collaborator needs to render the page chrome and head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    /// Canonical path, e.g. `/tiny-paintings/`
    pub path: String,
    pub description: String,
    pub meta_image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_image_prefers_thumbnail() {
        let mut post = PostSummary {
            id: "a".into(),
            path: "/a/".into(),
            title: String::new(),
            date: String::new(),
            categories: vec![],
            image: ImageRef::new("full.jpg"),
            thumbnail: None,
        };
        assert_eq!(post.display_image().src, "full.jpg");

        post.thumbnail = Some(ImageRef::new("thumb.jpg"));
        assert_eq!(post.display_image().src, "thumb.jpg");
    }

    #[test]
    fn deserialize_minimal_post() {
        let json = r#"{"id": "x", "path": "/x/", "image": {"src": "x.jpg"}}"#;
        let post: PostSummary = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, "x");
        assert!(post.thumbnail.is_none());
        assert!(post.categories.is_empty());
        assert_eq!(post.image.width, None);
    }
}
