//! Data models for the portfolio page.

mod project;
mod tag;

pub use project::{GalleryImage, Project, ProjectId};
pub use tag::Tag;
