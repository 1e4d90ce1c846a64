//! Keyboard shortcuts for the gallery modal.
//!
//! Keys are matched on `KeyboardEvent.key` names. Bindings only take effect
//! while the gallery is open.

use serde::{Deserialize, Serialize};

/// Gallery action triggered by a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryAction {
    Close,
    Previous,
    Next,
}

/// Key names bound to gallery actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Key that closes the gallery
    #[serde(default = "default_close")]
    pub close: String,
    /// Key that shows the previous image
    #[serde(default = "default_previous")]
    pub previous: String,
    /// Key that shows the next image
    #[serde(default = "default_next")]
    pub next: String,
}

fn default_close() -> String {
    "Escape".to_string()
}

fn default_previous() -> String {
    "ArrowLeft".to_string()
}

fn default_next() -> String {
    "ArrowRight".to_string()
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            close: default_close(),
            previous: default_previous(),
            next: default_next(),
        }
    }
}

impl KeyBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the action bound to a key, if any.
    pub fn action_for_key(&self, key: &str) -> Option<GalleryAction> {
        if key == self.close {
            Some(GalleryAction::Close)
        } else if key == self.previous {
            Some(GalleryAction::Previous)
        } else if key == self.next {
            Some(GalleryAction::Next)
        } else {
            None
        }
    }

    /// Get the key bound to an action.
    pub fn key_for_action(&self, action: GalleryAction) -> &str {
        match action {
            GalleryAction::Close => &self.close,
            GalleryAction::Previous => &self.previous,
            GalleryAction::Next => &self.next,
        }
    }

    /// Key names bound to more than one action.
    pub fn conflicts(&self) -> Vec<&str> {
        let keys = [&self.close, &self.previous, &self.next];
        let mut conflicts: Vec<&str> = Vec::new();
        for (i, key) in keys.iter().enumerate() {
            if keys[i + 1..].contains(key) && !conflicts.contains(&key.as_str()) {
                conflicts.push(key.as_str());
            }
        }
        conflicts
    }
}
