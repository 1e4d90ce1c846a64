//! Project and gallery image data model.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Tag;

/// Unique key of a project card (its `data-project` attribute).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An image shown in the gallery: a source URI and its accessible text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    /// Image source URI
    pub src: String,
    /// Accessible description
    #[serde(default)]
    pub alt: String,
}

impl GalleryImage {
    pub fn new(src: &str, alt: &str) -> Self {
        Self {
            src: src.to_string(),
            alt: alt.to_string(),
        }
    }
}

/// One project card as found on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Project key; cards without one cannot open a gallery
    pub id: Option<ProjectId>,
    /// Display title, if the card has a title element
    pub title: Option<String>,
    /// Tags shown on the card, in document order
    pub tags: Vec<Tag>,
    /// The card's own image, used when no gallery is configured
    pub primary_image: Option<GalleryImage>,
}

impl Project {
    /// Create a project with an id and tags and nothing else.
    pub fn new(id: &str, tags: &[&str]) -> Self {
        Self {
            id: Some(ProjectId::new(id)),
            title: None,
            tags: tags.iter().map(|t| Tag::from_text(t)).collect(),
            primary_image: None,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_primary_image(mut self, image: GalleryImage) -> Self {
        self.primary_image = Some(image);
        self
    }

    /// Whether any of this project's tags equals `tag`.
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Title for display, falling back to the project key.
    pub fn display_title(&self) -> &str {
        match (&self.title, &self.id) {
            (Some(title), _) => title.trim(),
            (None, Some(id)) => id.as_str(),
            (None, None) => "",
        }
    }
}
