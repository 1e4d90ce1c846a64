//! [`PageView`] on top of the live document.

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlImageElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use super::scan::PageElements;
use crate::config::RevealConfig;
use crate::constants::{attributes, classes};
use crate::view::{GalleryFrame, PageView};

/// Renders controller state into the document.
pub struct DomView {
    document: Document,
    elements: PageElements,
    hidden_transform: String,
    transition: String,
}

impl DomView {
    pub fn new(document: Document, elements: PageElements, reveal: &RevealConfig) -> Self {
        Self {
            document,
            elements,
            hidden_transform: reveal.hidden_transform(),
            transition: reveal.transition(),
        }
    }

    pub fn elements(&self) -> &PageElements {
        &self.elements
    }

    fn rebuild_thumbnails(&self, strip: &Element, frame: &GalleryFrame<'_>) {
        strip.set_inner_html("");

        for (index, image) in frame.images.iter().enumerate() {
            let thumbnail = match self
                .document
                .create_element("img")
                .map(|e| e.dyn_into::<HtmlImageElement>())
            {
                Ok(Ok(thumbnail)) => thumbnail,
                _ => {
                    log::warn!("Failed to create gallery thumbnail");
                    return;
                }
            };

            thumbnail.set_src(&image.src);
            thumbnail.set_alt(&image.alt);
            if index == frame.index {
                thumbnail.set_class_name(&format!("{} {}", classes::THUMBNAIL, classes::ACTIVE));
            } else {
                thumbnail.set_class_name(classes::THUMBNAIL);
            }
            if let Err(e) = thumbnail.set_attribute(attributes::THUMBNAIL_INDEX, &index.to_string())
            {
                log::warn!("Failed to tag thumbnail {}: {:?}", index, e);
            }
            if let Err(e) = strip.append_child(&thumbnail) {
                log::warn!("Failed to add thumbnail {}: {:?}", index, e);
            }
        }
    }
}

fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        log::warn!("Failed to toggle class '{}': {:?}", class, e);
    }
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log::warn!("Failed to set style {}: {:?}", property, e);
    }
}

impl PageView for DomView {
    fn set_card_visible(&mut self, card: usize, visible: bool) {
        if let Some(element) = self.elements.cards.get(card) {
            set_class(element, classes::HIDDEN, !visible);
        }
    }

    fn set_filter_button_active(&mut self, button: usize, active: bool) {
        if let Some(element) = self.elements.filter_buttons.get(button) {
            set_class(element, classes::ACTIVE, active);
        }
    }

    fn set_tag_selected(&mut self, tag: usize, selected: bool) {
        if let Some(element) = self.elements.tags.get(tag) {
            set_class(element, classes::SELECTED, selected);
        }
    }

    fn set_filter_summary(&mut self, visible_count: usize, info: &str) {
        if let Some(count) = &self.elements.filter_count {
            count.set_text_content(Some(&visible_count.to_string()));
        }
        if let Some(line) = &self.elements.filter_info {
            line.set_text_content(Some(info));
        }
    }

    fn prepare_reveal(&mut self, card: usize) {
        if let Some(element) = self.elements.cards.get(card) {
            set_style(element, "opacity", "0");
            set_style(element, "transform", &self.hidden_transform);
            set_style(element, "transition", &self.transition);
        }
    }

    fn reveal_card(&mut self, card: usize) {
        if let Some(element) = self.elements.cards.get(card) {
            set_style(element, "opacity", "1");
            set_style(element, "transform", "translateY(0)");
        }
    }

    fn scroll_to_section(&mut self, section_id: &str) -> bool {
        let Some(section) = self.document.get_element_by_id(section_id) else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        section.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn render_gallery(&mut self, frame: GalleryFrame<'_>) {
        let Some(gallery) = &self.elements.gallery else {
            return;
        };

        if let Some(title) = &gallery.title {
            title.set_text_content(Some(frame.title));
        }

        if let (Some(image), Some(current)) = (&gallery.image, frame.current()) {
            image.set_src(&current.src);
            image.set_alt(&current.alt);
        }

        if let Some(strip) = &gallery.thumbnails {
            self.rebuild_thumbnails(strip, &frame);
        }

        let disabled = frame.navigation_disabled();
        for button in [&gallery.prev, &gallery.next].into_iter().flatten() {
            button.set_disabled(disabled);
        }
    }

    fn set_gallery_open(&mut self, open: bool) {
        if let Some(gallery) = &self.elements.gallery {
            set_class(&gallery.modal, classes::ACTIVE, open);
        }

        let Some(body) = self.document.body() else {
            return;
        };
        let style = body.style();
        let result = if open {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if let Err(e) = result {
            log::warn!("Failed to update page scrolling: {:?}", e);
        }
    }
}
