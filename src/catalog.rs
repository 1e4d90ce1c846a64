//! Static gallery table.
//!
//! Maps project keys to the ordered images shown in the gallery modal. The
//! table is built once from configuration and never changes while the page
//! is open.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{GalleryImage, Project, ProjectId};

/// Project key to gallery images.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    galleries: BTreeMap<ProjectId, Vec<GalleryImage>>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the gallery of one project.
    pub fn with_gallery(mut self, id: &str, images: Vec<GalleryImage>) -> Self {
        self.galleries.insert(ProjectId::new(id), images);
        self
    }

    /// Configured images for a project; empty if none are configured.
    pub fn configured(&self, id: &ProjectId) -> &[GalleryImage] {
        self.galleries.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Images to show when `project`'s gallery is opened.
    ///
    /// Falls back to the card's own image when no gallery is configured. The
    /// result is empty only if the project has neither.
    pub fn images_for(&self, project: &Project) -> Vec<GalleryImage> {
        let configured = project
            .id
            .as_ref()
            .map(|id| self.configured(id))
            .unwrap_or(&[]);

        if !configured.is_empty() {
            return configured.to_vec();
        }

        project.primary_image.iter().cloned().collect()
    }

    /// Iterate over configured galleries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&ProjectId, &[GalleryImage])> {
        self.galleries.iter().map(|(id, images)| (id, images.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.galleries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.galleries.is_empty()
    }
}

/// Galleries shipped with the page.
pub fn default_catalog() -> Catalog {
    Catalog::new()
        .with_gallery(
            "project1",
            vec![
                GalleryImage::new(
                    "images/project1-diagram1.png",
                    "Boxplot visualization of the dataset",
                ),
                GalleryImage::new("images/project1-diagram2.png", "95% Confidence level"),
                GalleryImage::new("images/project1-diagram3.png", "The town's reported times"),
            ],
        )
        .with_gallery(
            "project2",
            vec![
                GalleryImage::new("images/project2-image1.png", "First prompt"),
                GalleryImage::new("images/project2-image2.png", "Results of first prompt"),
                GalleryImage::new("images/project2-image3.png", "Second prompt"),
            ],
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_gallery_wins() {
        let catalog = default_catalog();
        let project = Project::new("project1", &[])
            .with_primary_image(GalleryImage::new("cover.png", "Cover"));

        let images = catalog.images_for(&project);
        assert_eq!(images.len(), 3);
        assert_eq!(images[0].src, "images/project1-diagram1.png");
    }

    #[test]
    fn test_falls_back_to_primary_image() {
        let catalog = default_catalog();
        let cover = GalleryImage::new("images/project3.png", "Project three");
        let project = Project::new("project3", &[]).with_primary_image(cover.clone());

        assert_eq!(catalog.images_for(&project), vec![cover]);
    }

    #[test]
    fn test_empty_configured_gallery_falls_back() {
        let catalog = Catalog::new().with_gallery("p", Vec::new());
        let cover = GalleryImage::new("p.png", "P");
        let project = Project::new("p", &[]).with_primary_image(cover.clone());

        assert_eq!(catalog.images_for(&project), vec![cover]);
    }

    #[test]
    fn test_no_images_at_all() {
        let catalog = Catalog::new();
        assert!(catalog.images_for(&Project::new("p", &[])).is_empty());
    }

    #[test]
    fn test_serializes_as_map() {
        let catalog = Catalog::new().with_gallery("g", vec![GalleryImage::new("a.png", "A")]);
        let json = serde_json::to_string(&catalog).unwrap();
        assert_eq!(json, r#"{"g":[{"src":"a.png","alt":"A"}]}"#);
    }
}
