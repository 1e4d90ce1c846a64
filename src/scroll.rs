//! Smooth scrolling from the call-to-action button.

use crate::constants::DEFAULT_SCROLL_TARGET;
use crate::view::PageView;

/// Scrolls a fixed section into view.
#[derive(Debug, Clone)]
pub struct ScrollController {
    target: String,
}

impl Default for ScrollController {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_TARGET)
    }
}

impl ScrollController {
    pub fn new(target: &str) -> Self {
        Self {
            target: target.to_string(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Scroll to the target section. Returns whether the section exists.
    pub fn activate(&self, view: &mut impl PageView) -> bool {
        let found = view.scroll_to_section(&self.target);
        if !found {
            log::debug!("No #{} section to scroll to", self.target);
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::testing::RecordingView;

    #[test]
    fn test_scrolls_to_projects() {
        let controller = ScrollController::default();
        let mut view = RecordingView::with_sections(&["about", "projects"]);
        assert!(controller.activate(&mut view));
        assert_eq!(view.scrolled_to, vec!["projects".to_string()]);
    }

    #[test]
    fn test_missing_section_is_noop() {
        let controller = ScrollController::new("contact");
        let mut view = RecordingView::with_sections(&["projects"]);
        assert!(!controller.activate(&mut view));
        assert!(view.scrolled_to.is_empty());
    }
}
