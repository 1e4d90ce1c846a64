//! Message handlers for the portfolio page.
//!
//! Each handler processes one category of messages, keeping
//! `PortfolioApp::update` a plain routing table.

use crate::catalog::Catalog;
use crate::error::FolioError;
use crate::filter::{Filter, FilterEngine};
use crate::gallery::{Direction, GalleryController};
use crate::keybindings::{GalleryAction, KeyBindings};
use crate::message::CardClickOrigin;
use crate::page::PageModel;
use crate::view::PageView;

/// Handle a filter button click.
pub fn handle_filter_button(
    button: usize,
    filter: &mut FilterEngine,
    page: &PageModel,
    view: &mut impl PageView,
) -> Result<(), FolioError> {
    let value = page
        .filter_buttons
        .get(button)
        .ok_or(FolioError::UnknownFilterButton(button))?;

    let Some(value) = value else {
        log::debug!("Filter button {} has no filter value", button);
        return Ok(());
    };

    log::debug!("🏷️ Filter button '{}' clicked", value);
    filter.apply(Filter::parse(value), page, view)?;
    Ok(())
}

/// Handle a click on a tag element (inline or skill).
pub fn handle_tag_click(
    tag: usize,
    filter: &mut FilterEngine,
    page: &PageModel,
    view: &mut impl PageView,
) -> Result<(), FolioError> {
    let element = page
        .tags
        .get(tag)
        .ok_or(FolioError::UnknownTagElement(tag))?;

    log::debug!("🏷️ Tag '{}' clicked", element.tag);
    filter.apply(Filter::Tag(element.tag.clone()), page, view)?;
    Ok(())
}

/// Handle a click on a project card.
pub fn handle_card_click(
    card: usize,
    origin: CardClickOrigin,
    gallery: &mut GalleryController,
    page: &PageModel,
    catalog: &Catalog,
    view: &mut impl PageView,
) -> Result<(), FolioError> {
    if origin != CardClickOrigin::Body {
        return Ok(());
    }

    let project = page.projects.get(card).ok_or(FolioError::UnknownCard(card))?;
    let id = project
        .id
        .as_ref()
        .ok_or(FolioError::MissingProjectId { card })?;

    gallery.open(id, page, catalog, view)?;
    Ok(())
}

/// Handle a gallery action from a control or a key.
///
/// Ignored while the gallery is closed.
pub fn handle_gallery_action(
    action: GalleryAction,
    gallery: &mut GalleryController,
    view: &mut impl PageView,
) -> Result<(), FolioError> {
    if !gallery.is_open() {
        return Ok(());
    }

    match action {
        GalleryAction::Close => gallery.close(view),
        GalleryAction::Previous => {
            gallery.navigate(Direction::Previous, view)?;
        }
        GalleryAction::Next => {
            gallery.navigate(Direction::Next, view)?;
        }
    }
    Ok(())
}

/// Handle a key press. Keys only act while the gallery is open.
pub fn handle_key(
    key: &str,
    keybindings: &KeyBindings,
    gallery: &mut GalleryController,
    view: &mut impl PageView,
) -> Result<(), FolioError> {
    if !gallery.is_open() {
        return Ok(());
    }

    match keybindings.action_for_key(key) {
        Some(action) => {
            log::debug!("⌨️ Key '{}' -> {:?}", key, action);
            handle_gallery_action(action, gallery, view)
        }
        None => Ok(()),
    }
}
