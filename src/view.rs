//! Presentation seam between the controllers and the document.
//!
//! Controllers never touch the DOM directly. They compute the new state and
//! push it through [`PageView`]; the wasm build implements it on top of
//! `web_sys`, tests use `testing::RecordingView`.

use crate::model::GalleryImage;

/// Everything the gallery modal shows for one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryFrame<'a> {
    /// Modal heading
    pub title: &'a str,
    /// All images of the session, one thumbnail each
    pub images: &'a [GalleryImage],
    /// Index of the large image and the active thumbnail
    pub index: usize,
}

impl GalleryFrame<'_> {
    /// The image shown large.
    pub fn current(&self) -> Option<&GalleryImage> {
        self.images.get(self.index)
    }

    /// Prev/next controls are disabled when there is nothing to step to.
    pub fn navigation_disabled(&self) -> bool {
        self.images.len() <= 1
    }
}

/// Mutable presentation state of the page.
pub trait PageView {
    /// Show or hide a project card.
    fn set_card_visible(&mut self, card: usize, visible: bool);

    /// Highlight a filter button.
    fn set_filter_button_active(&mut self, button: usize, active: bool);

    /// Mark a clickable tag as matching the current filter.
    fn set_tag_selected(&mut self, tag: usize, selected: bool);

    /// Update the visible-project counter and the info line.
    fn set_filter_summary(&mut self, visible_count: usize, info: &str);

    /// Put a card in its hidden, offset pre-reveal state.
    fn prepare_reveal(&mut self, card: usize);

    /// Fade a card in and clear its offset.
    fn reveal_card(&mut self, card: usize);

    /// Smooth-scroll a section into view, top-aligned.
    ///
    /// Returns `false` if the page has no section with that id.
    fn scroll_to_section(&mut self, section_id: &str) -> bool;

    /// Draw the gallery: title, large image, thumbnails and nav controls.
    fn render_gallery(&mut self, frame: GalleryFrame<'_>);

    /// Show or hide the modal and lock or restore background scrolling.
    fn set_gallery_open(&mut self, open: bool);
}

/// In-memory view used by unit tests.
#[cfg(test)]
pub mod testing {
    use std::collections::{BTreeMap, BTreeSet};

    use super::{GalleryFrame, PageView};
    use crate::model::GalleryImage;

    /// Last rendered gallery state.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RenderedGallery {
        pub title: String,
        pub image: Option<GalleryImage>,
        pub thumbnails: Vec<GalleryImage>,
        pub active_thumbnail: usize,
        pub nav_disabled: bool,
    }

    /// A [`PageView`] that remembers what it was told.
    #[derive(Debug, Default)]
    pub struct RecordingView {
        pub hidden_cards: BTreeSet<usize>,
        pub active_buttons: BTreeSet<usize>,
        pub selected_tags: BTreeSet<usize>,
        pub count: Option<usize>,
        pub info: Option<String>,
        pub pending_reveal: BTreeSet<usize>,
        pub revealed: BTreeMap<usize, usize>,
        pub sections: BTreeSet<String>,
        pub scrolled_to: Vec<String>,
        pub gallery: Option<RenderedGallery>,
        pub gallery_renders: usize,
        pub modal_open: bool,
        pub scroll_locked: bool,
    }

    impl RecordingView {
        pub fn new() -> Self {
            Self::default()
        }

        /// A view whose document contains the given section ids.
        pub fn with_sections(sections: &[&str]) -> Self {
            Self {
                sections: sections.iter().map(|s| s.to_string()).collect(),
                ..Self::default()
            }
        }

        pub fn visible_cards(&self, card_count: usize) -> Vec<usize> {
            (0..card_count)
                .filter(|card| !self.hidden_cards.contains(card))
                .collect()
        }
    }

    impl PageView for RecordingView {
        fn set_card_visible(&mut self, card: usize, visible: bool) {
            if visible {
                self.hidden_cards.remove(&card);
            } else {
                self.hidden_cards.insert(card);
            }
        }

        fn set_filter_button_active(&mut self, button: usize, active: bool) {
            if active {
                self.active_buttons.insert(button);
            } else {
                self.active_buttons.remove(&button);
            }
        }

        fn set_tag_selected(&mut self, tag: usize, selected: bool) {
            if selected {
                self.selected_tags.insert(tag);
            } else {
                self.selected_tags.remove(&tag);
            }
        }

        fn set_filter_summary(&mut self, visible_count: usize, info: &str) {
            self.count = Some(visible_count);
            self.info = Some(info.to_string());
        }

        fn prepare_reveal(&mut self, card: usize) {
            self.pending_reveal.insert(card);
        }

        fn reveal_card(&mut self, card: usize) {
            self.pending_reveal.remove(&card);
            *self.revealed.entry(card).or_default() += 1;
        }

        fn scroll_to_section(&mut self, section_id: &str) -> bool {
            if self.sections.contains(section_id) {
                self.scrolled_to.push(section_id.to_string());
                true
            } else {
                false
            }
        }

        fn render_gallery(&mut self, frame: GalleryFrame<'_>) {
            self.gallery_renders += 1;
            self.gallery = Some(RenderedGallery {
                title: frame.title.to_string(),
                image: frame.current().cloned(),
                thumbnails: frame.images.to_vec(),
                active_thumbnail: frame.index,
                nav_disabled: frame.navigation_disabled(),
            });
        }

        fn set_gallery_open(&mut self, open: bool) {
            self.modal_open = open;
            self.scroll_locked = open;
        }
    }
}
