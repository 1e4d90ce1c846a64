//! One-time scan of the host document.
//!
//! Builds the [`PageModel`] the controllers work on, plus the element handles
//! the DOM view and the listeners need, in the same order.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlImageElement, NodeList};

use crate::constants::{attributes, classes, gallery_ids, selectors};
use crate::model::{GalleryImage, Project, ProjectId, Tag};
use crate::page::{PageModel, TagElement, TagKind};

/// Elements of the gallery modal.
pub struct GalleryElements {
    pub modal: Element,
    pub close: Option<Element>,
    pub title: Option<Element>,
    pub image: Option<HtmlImageElement>,
    pub prev: Option<HtmlButtonElement>,
    pub next: Option<HtmlButtonElement>,
    pub thumbnails: Option<Element>,
}

/// Element handles, index-aligned with [`PageModel`].
pub struct PageElements {
    pub scroll_trigger: Option<Element>,
    pub cards: Vec<HtmlElement>,
    pub filter_buttons: Vec<Element>,
    pub tags: Vec<Element>,
    pub filter_count: Option<Element>,
    pub filter_info: Option<Element>,
    pub gallery: Option<GalleryElements>,
}

/// Scan the document.
pub fn scan(document: &Document) -> (PageModel, PageElements) {
    let cards: Vec<HtmlElement> = query_all(document.query_selector_all(selectors::PROJECT_CARD));
    let projects = cards.iter().map(|card| scan_card(card)).collect();

    let filter_buttons: Vec<Element> =
        query_all(document.query_selector_all(selectors::FILTER_BUTTON));
    let filter_values = filter_buttons
        .iter()
        .map(|button| button.get_attribute(attributes::FILTER))
        .collect();

    let tags: Vec<Element> = query_all(document.query_selector_all(selectors::CLICKABLE_TAG));
    let tag_elements = tags.iter().map(|tag| scan_tag(tag, &cards)).collect();

    let page = PageModel {
        projects,
        filter_buttons: filter_values,
        tags: tag_elements,
    };

    let elements = PageElements {
        scroll_trigger: query_one(document, selectors::SCROLL_TRIGGER),
        cards,
        filter_buttons,
        tags,
        filter_count: query_one(document, selectors::FILTER_COUNT),
        filter_info: query_one(document, selectors::FILTER_INFO),
        gallery: scan_gallery(document),
    };

    log::debug!(
        "Scanned page: {} cards, {} filter buttons, {} clickable tags",
        page.projects.len(),
        page.filter_buttons.len(),
        page.tags.len()
    );

    (page, elements)
}

fn scan_card(card: &Element) -> Project {
    let id = card.get_attribute(attributes::PROJECT).map(ProjectId::new);

    let title = child(card, selectors::PROJECT_TITLE).and_then(|title| title.text_content());

    let tag_nodes: Vec<Element> = query_all(card.query_selector_all(selectors::TECH_TAG));
    let tags = tag_nodes
        .iter()
        .map(|tag| Tag::from_text(&tag.text_content().unwrap_or_default()))
        .collect();

    let primary_image = child(card, selectors::PROJECT_IMAGE)
        .and_then(|image| image.dyn_into::<HtmlImageElement>().ok())
        .map(|image| GalleryImage {
            src: image.src(),
            alt: image.alt(),
        });

    Project {
        id,
        title,
        tags,
        primary_image,
    }
}

fn scan_tag(tag: &Element, cards: &[HtmlElement]) -> TagElement {
    let text = Tag::from_text(&tag.text_content().unwrap_or_default());

    let card = if tag.class_list().contains(classes::TECH_TAG) {
        tag.closest(selectors::PROJECT_CARD)
            .ok()
            .flatten()
            .and_then(|owner| {
                cards.iter().position(|card| {
                    let card: &Element = card.as_ref();
                    *card == owner
                })
            })
    } else {
        None
    };

    TagElement {
        tag: text,
        kind: match card {
            Some(card) => TagKind::Inline { card },
            None => TagKind::Skill,
        },
    }
}

fn scan_gallery(document: &Document) -> Option<GalleryElements> {
    let Some(modal) = document.get_element_by_id(gallery_ids::MODAL) else {
        log::warn!("No #{} element, project galleries disabled", gallery_ids::MODAL);
        return None;
    };

    let by_id = |id: &str| {
        let element = document.get_element_by_id(id);
        if element.is_none() {
            log::warn!("Gallery element #{} not found", id);
        }
        element
    };

    Some(GalleryElements {
        modal,
        close: by_id(gallery_ids::CLOSE),
        title: by_id(gallery_ids::TITLE),
        image: by_id(gallery_ids::IMAGE).and_then(|e| e.dyn_into().ok()),
        prev: by_id(gallery_ids::PREV).and_then(|e| e.dyn_into().ok()),
        next: by_id(gallery_ids::NEXT).and_then(|e| e.dyn_into().ok()),
        thumbnails: by_id(gallery_ids::THUMBNAILS),
    })
}

fn query_one(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

fn child(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok().flatten()
}

/// Collect a selector result, skipping nodes of the wrong type.
fn query_all<T: JsCast>(result: Result<NodeList, JsValue>) -> Vec<T> {
    let list = match result {
        Ok(list) => list,
        Err(e) => {
            log::warn!("Selector query failed: {:?}", e);
            return Vec::new();
        }
    };

    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}
