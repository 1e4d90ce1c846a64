//! DOM listener wiring.
//!
//! Every listener turns its event into a [`Message`] and dispatches it to the
//! shared [`Runtime`]. Listeners and the intersection observer live for the
//! whole page, so their closures are leaked with `forget`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, EventTarget, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, KeyboardEvent,
};

use super::dom_view::DomView;
use crate::app::PortfolioApp;
use crate::config::RevealConfig;
use crate::constants::{attributes, selectors};
use crate::message::{CardClickOrigin, EventResponse, Message};
use crate::reveal::RevealState;

/// Application state plus the view it renders into.
pub struct Runtime {
    pub app: PortfolioApp,
    pub view: DomView,
}

pub type SharedRuntime = Rc<RefCell<Runtime>>;

/// Route one message through the app.
fn dispatch(runtime: &SharedRuntime, message: Message) -> EventResponse {
    match runtime.try_borrow_mut() {
        Ok(mut runtime) => {
            let Runtime { app, view } = &mut *runtime;
            app.update(message, view)
        }
        Err(_) => {
            log::warn!("Dropped {:?}: another event is still being handled", message);
            EventResponse::pass()
        }
    }
}

fn apply_response(event: &Event, response: EventResponse) {
    if response.prevent_default {
        event.prevent_default();
    }
    if response.stop_propagation {
        event.stop_propagation();
    }
}

/// Register a page-lifetime listener.
fn listen(target: &EventTarget, event_type: &str, handler: impl FnMut(Event) + 'static) {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
    {
        log::warn!("Failed to add {} listener: {:?}", event_type, e);
    }
    closure.forget();
}

/// Register a click listener that always sends the same message.
fn on_click(runtime: &SharedRuntime, target: &EventTarget, message: Message) {
    let runtime = runtime.clone();
    listen(target, "click", move |event| {
        let response = dispatch(&runtime, message.clone());
        apply_response(&event, response);
    });
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn is_inside(element: &Element, selector: &str) -> bool {
    matches!(element.closest(selector), Ok(Some(_)))
}

/// Classify where a click inside a project card landed.
fn card_click_origin(event: &Event) -> CardClickOrigin {
    match event_element(event) {
        Some(target) if is_inside(&target, selectors::PROJECT_LINKS) => CardClickOrigin::Link,
        Some(target) if is_inside(&target, selectors::TECH_TAG) => CardClickOrigin::Tag,
        _ => CardClickOrigin::Body,
    }
}

/// Wire every listener the page needs.
pub fn wire(runtime: &SharedRuntime, document: &Document) {
    let borrowed = runtime.borrow();
    let elements = borrowed.view.elements();

    if let Some(trigger) = &elements.scroll_trigger {
        on_click(runtime, trigger, Message::ScrollTriggerClicked);
    }

    for (index, button) in elements.filter_buttons.iter().enumerate() {
        on_click(runtime, button, Message::FilterButtonClicked(index));
    }

    for (index, tag) in elements.tags.iter().enumerate() {
        on_click(runtime, tag, Message::TagClicked(index));
    }

    for (card, element) in elements.cards.iter().enumerate() {
        let runtime = runtime.clone();
        listen(element, "click", move |event| {
            let origin = card_click_origin(&event);
            let response = dispatch(&runtime, Message::CardClicked { card, origin });
            apply_response(&event, response);
        });
    }

    if let Some(gallery) = &elements.gallery {
        if let Some(close) = &gallery.close {
            on_click(runtime, close, Message::GalleryCloseClicked);
        }
        if let Some(prev) = &gallery.prev {
            on_click(runtime, prev, Message::GalleryPrevClicked);
        }
        if let Some(next) = &gallery.next {
            on_click(runtime, next, Message::GalleryNextClicked);
        }

        let modal = gallery.modal.clone();
        let modal_runtime = runtime.clone();
        listen(&gallery.modal, "click", move |event| {
            let on_backdrop = event_element(&event).is_some_and(|target| target == modal);
            let response = dispatch(&modal_runtime, Message::ModalClicked { on_backdrop });
            apply_response(&event, response);
        });

        // Thumbnails are rebuilt on every render; one listener on the strip
        // picks up clicks on whichever thumbnails exist at the time.
        if let Some(strip) = &gallery.thumbnails {
            let strip_runtime = runtime.clone();
            listen(strip, "click", move |event| {
                let index = event_element(&event)
                    .and_then(|target| target.get_attribute(attributes::THUMBNAIL_INDEX))
                    .and_then(|value| value.parse::<usize>().ok());
                if let Some(index) = index {
                    let response = dispatch(&strip_runtime, Message::ThumbnailClicked(index));
                    apply_response(&event, response);
                }
            });
        }

        let key_runtime = runtime.clone();
        listen(document, "keydown", move |event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                let response = dispatch(&key_runtime, Message::KeyPressed(event.key()));
                apply_response(event, response);
            }
        });
    }
}

/// Watch every card and reveal it the first time it scrolls into view.
pub fn observe_cards(runtime: &SharedRuntime, reveal: &RevealConfig) {
    let cards: Vec<Element> = runtime
        .borrow()
        .view
        .elements()
        .cards
        .iter()
        .map(|card| card.clone().unchecked_into::<Element>())
        .collect();

    if cards.is_empty() {
        return;
    }

    let callback_runtime = runtime.clone();
    let callback_cards = cards.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(card) = callback_cards.iter().position(|c| *c == target) else {
                    continue;
                };

                dispatch(
                    &callback_runtime,
                    Message::CardIntersected {
                        card,
                        is_intersecting: entry.is_intersecting(),
                    },
                );

                let revealed = callback_runtime
                    .try_borrow()
                    .map(|runtime| runtime.app.reveal().state(card) == Some(RevealState::Revealed))
                    .unwrap_or(false);
                if revealed {
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(reveal.threshold));
    options.set_root_margin(&reveal.root_margin());

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            for card in &cards {
                observer.observe(card);
            }
            callback.forget();
        }
        Err(e) => {
            // Without an observer cards would stay invisible
            log::warn!("IntersectionObserver unavailable, revealing all cards: {:?}", e);
            for card in 0..cards.len() {
                dispatch(
                    runtime,
                    Message::CardIntersected {
                        card,
                        is_intersecting: true,
                    },
                );
            }
        }
    }
}
