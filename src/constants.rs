//! Global constants for the portfolio page.
//!
//! Selectors, class names and user-facing strings live here so the DOM
//! binding and the controllers agree on them.

/// Sentinel filter value that shows every project.
pub const ALL_FILTER: &str = "all";

/// Info line shown when no tag filter is active.
pub const SHOWING_ALL_MESSAGE: &str = "Showing all projects";

/// Info line shown while a tag filter is active.
pub fn filtered_by_message(tag: &str) -> String {
    format!("Filtered by {}", tag)
}

/// Title shown above the gallery for a project.
pub fn gallery_title(project_title: &str) -> String {
    format!("{} Gallery", project_title)
}

/// CSS selectors for the markup the page script drives.
pub mod selectors {
    /// Call-to-action button that scrolls to the projects section
    pub const SCROLL_TRIGGER: &str = ".cta-button";
    /// Project card container
    pub const PROJECT_CARD: &str = ".project-card";
    /// Title element inside a card
    pub const PROJECT_TITLE: &str = ".project-title";
    /// Primary image inside a card
    pub const PROJECT_IMAGE: &str = ".project-image img";
    /// Any technology tag inside a card (clickable or not)
    pub const TECH_TAG: &str = ".tech-tag";
    /// Link row inside a card; clicks there never open the gallery
    pub const PROJECT_LINKS: &str = ".project-links";
    /// Filter buttons above the project grid
    pub const FILTER_BUTTON: &str = ".filter-btn";
    /// Every tag that applies a filter when clicked, in document order
    pub const CLICKABLE_TAG: &str = ".tech-tag.clickable, .skill-tag.clickable";
    /// Visible project counter
    pub const FILTER_COUNT: &str = ".filter-count";
    /// Filter info line
    pub const FILTER_INFO: &str = ".filter-info";
}

/// Element ids of the gallery modal.
pub mod gallery_ids {
    pub const MODAL: &str = "galleryModal";
    pub const CLOSE: &str = "galleryClose";
    pub const TITLE: &str = "galleryTitle";
    pub const IMAGE: &str = "galleryImage";
    pub const PREV: &str = "galleryPrev";
    pub const NEXT: &str = "galleryNext";
    pub const THUMBNAILS: &str = "galleryThumbnails";
    /// Optional JSON page configuration block
    pub const CONFIG: &str = "folio-config";
}

/// Attribute names read from the markup.
pub mod attributes {
    /// Project key on a card
    pub const PROJECT: &str = "data-project";
    /// Filter value on a filter button
    pub const FILTER: &str = "data-filter";
    /// Position of a thumbnail in the gallery strip
    pub const THUMBNAIL_INDEX: &str = "data-index";
}

/// Class names toggled by the controllers.
pub mod classes {
    /// Card filtered out
    pub const HIDDEN: &str = "hidden";
    /// Active filter button, open modal, current thumbnail
    pub const ACTIVE: &str = "active";
    /// Tag matching the current filter
    pub const SELECTED: &str = "selected";
    /// Thumbnail image in the gallery strip
    pub const THUMBNAIL: &str = "gallery-thumbnail";
    /// Tags that sit inside a project card
    pub const TECH_TAG: &str = "tech-tag";
}

/// Reveal animation defaults.
pub mod reveal {
    /// Fraction of a card that must be visible before it is revealed
    pub const THRESHOLD: f64 = 0.1;
    /// Bottom root margin in pixels; negative fires before the card is fully in view
    pub const BOTTOM_MARGIN_PX: i32 = -50;
    /// Downward offset of a hidden card
    pub const OFFSET_PX: f32 = 20.0;
    /// Duration of the opacity and transform transitions
    pub const TRANSITION_SECS: f32 = 0.6;
}

/// Section scrolled to by the call-to-action button.
pub const DEFAULT_SCROLL_TARGET: &str = "projects";
