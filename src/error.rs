//! Error types for page event handling.
//!
//! None of these reach the browser: the dispatcher logs them and leaves the
//! page as it was.

use thiserror::Error;

use crate::model::ProjectId;

/// Errors that can occur while handling a page event.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FolioError {
    /// Gallery requested for a project key that no card carries
    #[error("Unknown project: {id}")]
    UnknownProject {
        /// The requested project key
        id: ProjectId,
    },

    /// Card clicked without a project key
    #[error("Project card {card} has no project key")]
    MissingProjectId {
        /// Index of the card in document order
        card: usize,
    },

    /// Filter value outside the known tag set
    #[error("Unknown tag '{tag}'")]
    UnknownTag {
        /// The rejected filter value
        tag: String,
    },

    /// Project has neither a configured gallery nor a primary image
    #[error("Project {id} has no images to show")]
    NoImages {
        /// The project that was opened
        id: ProjectId,
    },

    /// Thumbnail index past the end of the gallery
    #[error("Image index {index} out of range for gallery of {len}")]
    ImageIndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of images in the gallery
        len: usize,
    },

    /// Gallery operation while the modal is closed
    #[error("Gallery is not open")]
    GalleryClosed,

    /// Event referred to a card index the page does not have
    #[error("Unknown project card {0}")]
    UnknownCard(usize),

    /// Event referred to a filter button index the page does not have
    #[error("Unknown filter button {0}")]
    UnknownFilterButton(usize),

    /// Event referred to a tag element index the page does not have
    #[error("Unknown tag element {0}")]
    UnknownTagElement(usize),
}

impl FolioError {
    /// Create an unknown project error.
    pub fn unknown_project(id: &ProjectId) -> Self {
        Self::UnknownProject { id: id.clone() }
    }

    /// Create an unknown tag error.
    pub fn unknown_tag(tag: impl Into<String>) -> Self {
        Self::UnknownTag { tag: tag.into() }
    }
}
