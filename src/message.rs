//! Page event message types.
//!
//! Every DOM event the page listens to is turned into a [`Message`] and handed
//! to `PortfolioApp::update`, Elm architecture style.

/// Where inside a project card a click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardClickOrigin {
    /// Anywhere that is not a link or a tag
    Body,
    /// Inside the card's link row
    Link,
    /// On one of the card's tags
    Tag,
}

/// Messages produced by page events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Navigation
    /// Call-to-action button clicked
    ScrollTriggerClicked,

    // Reveal
    /// Visibility of a card changed
    CardIntersected { card: usize, is_intersecting: bool },

    // Filter
    /// Filter button clicked, by index
    FilterButtonClicked(usize),
    /// Clickable tag clicked, by index in the page's tag list
    TagClicked(usize),

    // Gallery
    /// Project card clicked
    CardClicked { card: usize, origin: CardClickOrigin },
    /// Gallery close control clicked
    GalleryCloseClicked,
    /// Click inside the modal; `on_backdrop` when it hit the backdrop itself
    ModalClicked { on_backdrop: bool },
    /// Previous image control clicked
    GalleryPrevClicked,
    /// Next image control clicked
    GalleryNextClicked,
    /// Thumbnail clicked, by position in the strip
    ThumbnailClicked(usize),
    /// Key pressed anywhere on the page (`KeyboardEvent.key`)
    KeyPressed(String),
}

/// What the DOM listener should do with the original event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventResponse {
    /// Suppress the browser's default action
    pub prevent_default: bool,
    /// Keep the event from reaching enclosing elements
    pub stop_propagation: bool,
}

impl EventResponse {
    /// Let the event continue unchanged.
    pub const fn pass() -> Self {
        Self {
            prevent_default: false,
            stop_propagation: false,
        }
    }

    pub const fn prevent_default() -> Self {
        Self {
            prevent_default: true,
            stop_propagation: false,
        }
    }

    pub const fn stop_propagation() -> Self {
        Self {
            prevent_default: false,
            stop_propagation: true,
        }
    }
}
