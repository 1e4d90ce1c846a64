//! The portfolio page application.
//!
//! `PortfolioApp` owns one controller per concern and routes every
//! [`Message`] to them. Rendering goes through the [`PageView`] passed to each
//! call, so the same code drives the real document and the tests.

use crate::catalog::Catalog;
use crate::config::PageConfig;
use crate::filter::{Filter, FilterEngine};
use crate::gallery::GalleryController;
use crate::handlers;
use crate::keybindings::{GalleryAction, KeyBindings};
use crate::message::{EventResponse, Message};
use crate::page::{PageModel, TagKind};
use crate::reveal::RevealAnimator;
use crate::scroll::ScrollController;
use crate::view::PageView;

/// Page state and event dispatch.
pub struct PortfolioApp {
    page: PageModel,
    catalog: Catalog,
    keybindings: KeyBindings,
    scroll: ScrollController,
    reveal: RevealAnimator,
    filter: FilterEngine,
    gallery: GalleryController,
}

impl PortfolioApp {
    pub fn new(page: PageModel, config: &PageConfig) -> Self {
        let reveal = RevealAnimator::new(page.card_count());
        for key in config.keybindings.conflicts() {
            log::warn!("Key '{}' is bound to more than one gallery action", key);
        }
        Self {
            page,
            catalog: config.galleries.clone(),
            keybindings: config.keybindings.clone(),
            scroll: ScrollController::new(&config.scroll.target_section),
            reveal,
            filter: FilterEngine::new(),
            gallery: GalleryController::new(),
        }
    }

    /// Initial render: hide cards for the fade-in and show every project.
    pub fn start(&mut self, view: &mut impl PageView) {
        self.reveal.prepare(view);

        if let Err(e) = self.filter.apply(Filter::All, &self.page, view) {
            log::warn!("Initial filter failed: {}", e);
        }

        log::info!(
            "Portfolio ready: {} projects, {} tags, {} galleries",
            self.page.card_count(),
            self.page.tag_universe().len(),
            self.catalog.len()
        );
    }

    /// Handle one page event.
    ///
    /// Failures are logged and leave the page unchanged; they never stop the
    /// next event from being handled.
    pub fn update(&mut self, message: Message, view: &mut impl PageView) -> EventResponse {
        let response = self.response_for(&message);

        let result = match message {
            Message::ScrollTriggerClicked => {
                self.scroll.activate(view);
                Ok(())
            }
            Message::CardIntersected {
                card,
                is_intersecting,
            } => self
                .reveal
                .on_intersection(card, is_intersecting, view)
                .map(|_| ()),
            Message::FilterButtonClicked(button) => {
                handlers::handle_filter_button(button, &mut self.filter, &self.page, view)
            }
            Message::TagClicked(tag) => {
                handlers::handle_tag_click(tag, &mut self.filter, &self.page, view)
            }
            Message::CardClicked { card, origin } => handlers::handle_card_click(
                card,
                origin,
                &mut self.gallery,
                &self.page,
                &self.catalog,
                view,
            ),
            Message::GalleryCloseClicked => {
                handlers::handle_gallery_action(GalleryAction::Close, &mut self.gallery, view)
            }
            Message::ModalClicked { on_backdrop } => {
                if on_backdrop {
                    handlers::handle_gallery_action(GalleryAction::Close, &mut self.gallery, view)
                } else {
                    Ok(())
                }
            }
            Message::GalleryPrevClicked => {
                handlers::handle_gallery_action(GalleryAction::Previous, &mut self.gallery, view)
            }
            Message::GalleryNextClicked => {
                handlers::handle_gallery_action(GalleryAction::Next, &mut self.gallery, view)
            }
            Message::ThumbnailClicked(index) => self.gallery.select(index, view),
            Message::KeyPressed(key) => {
                handlers::handle_key(&key, &self.keybindings, &mut self.gallery, view)
            }
        };

        if let Err(e) = result {
            log::warn!("⚠️ {}", e);
        }

        response
    }

    /// How the originating DOM event should be treated, regardless of
    /// whether handling succeeds.
    fn response_for(&self, message: &Message) -> EventResponse {
        match message {
            Message::ScrollTriggerClicked => EventResponse::prevent_default(),
            Message::TagClicked(tag) => match self.page.tags.get(*tag).map(|t| t.kind) {
                Some(TagKind::Inline { .. }) => EventResponse::stop_propagation(),
                _ => EventResponse::pass(),
            },
            _ => EventResponse::pass(),
        }
    }

    pub fn page(&self) -> &PageModel {
        &self.page
    }

    pub fn current_filter(&self) -> &Filter {
        self.filter.current()
    }

    pub fn gallery(&self) -> &GalleryController {
        &self.gallery
    }

    pub fn reveal(&self) -> &RevealAnimator {
        &self.reveal
    }
}
