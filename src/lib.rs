//! Folio - portfolio page interactivity
//!
//! Smooth scrolling, fade-in on scroll, tag filtering and a lightbox gallery
//! for a static portfolio page. The controllers are platform independent and
//! render through [`view::PageView`]; the wasm build binds them to the
//! document.

pub mod app;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod gallery;
pub mod handlers;
pub mod keybindings;
pub mod logging;
pub mod message;
pub mod model;
pub mod page;
pub mod reveal;
pub mod scroll;
pub mod view;

pub use app::PortfolioApp;
pub use config::PageConfig;
pub use error::FolioError;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
