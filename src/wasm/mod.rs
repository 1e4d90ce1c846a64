//! Browser entry point.
//!
//! Scans the document once it is parsed, builds the app, and wires listeners.

mod dom_view;
mod events;
mod scan;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::app::PortfolioApp;
use crate::config::PageConfig;
use dom_view::DomView;
use events::Runtime;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        web_sys::console::log_1(&"folio: no document, nothing to do".into());
        return;
    };

    if document.ready_state() == "loading" {
        let ready_document = document.clone();
        let on_ready = Closure::once(move || init(&ready_document));
        if let Err(e) = document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        {
            web_sys::console::log_1(&format!("folio: failed to wait for DOM: {:?}", e).into());
            return;
        }
        on_ready.forget();
    } else {
        init(&document);
    }
}

fn init(document: &Document) {
    let loaded = PageConfig::from_document(document);
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => PageConfig::new(),
    };

    crate::logging::init(config.log_level.to_level_filter());
    match loaded {
        Ok(Some(_)) => log::info!("Loaded embedded page configuration"),
        Ok(None) => log::debug!("No embedded page configuration, using defaults"),
        Err(e) => log::warn!("Ignoring embedded page configuration: {}", e),
    }

    let (page, elements) = scan::scan(document);
    let mut app = PortfolioApp::new(page, &config);
    let mut view = DomView::new(document.clone(), elements, &config.reveal);
    app.start(&mut view);

    let runtime = Rc::new(RefCell::new(Runtime { app, view }));
    events::wire(&runtime, document);
    events::observe_cards(&runtime, &config.reveal);
}
