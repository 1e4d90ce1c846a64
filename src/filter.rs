//! Tag-based project filter.
//!
//! Exactly one filter is active at a time: either every project or the
//! projects carrying one tag. Applying a filter recomputes card visibility,
//! button and tag highlighting, and the summary line from scratch.

use std::fmt;

use crate::constants::{ALL_FILTER, SHOWING_ALL_MESSAGE, filtered_by_message};
use crate::error::FolioError;
use crate::model::Tag;
use crate::page::PageModel;
use crate::view::PageView;

/// The active filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    /// Show every project
    #[default]
    All,
    /// Show projects carrying this tag
    Tag(Tag),
}

impl Filter {
    /// Parse a filter button value or tag text. `"all"` is the sentinel.
    pub fn parse(value: &str) -> Self {
        let tag = Tag::from_text(value);
        if tag.as_str() == ALL_FILTER {
            Filter::All
        } else {
            Filter::Tag(tag)
        }
    }

    /// Whether a project with these tags is shown.
    pub fn matches(&self, tags: &[Tag]) -> bool {
        match self {
            Filter::All => true,
            Filter::Tag(selected) => tags.iter().any(|tag| tag == selected),
        }
    }

    /// The text form of the filter (`"all"` or the tag).
    pub fn as_str(&self) -> &str {
        match self {
            Filter::All => ALL_FILTER,
            Filter::Tag(tag) => tag.as_str(),
        }
    }

    /// Info line shown under the filter bar.
    pub fn info_message(&self) -> String {
        match self {
            Filter::All => SHOWING_ALL_MESSAGE.to_string(),
            Filter::Tag(tag) => filtered_by_message(tag.as_str()),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of applying a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSummary {
    /// Indices of the cards left visible
    pub visible: Vec<usize>,
    /// Info line text
    pub info: String,
}

impl FilterSummary {
    pub fn count(&self) -> usize {
        self.visible.len()
    }
}

/// Owns the current filter.
#[derive(Debug, Default)]
pub struct FilterEngine {
    current: Filter,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The filter applied last.
    pub fn current(&self) -> &Filter {
        &self.current
    }

    /// Apply `selected` to the page.
    ///
    /// A tag that labels no project is rejected and nothing changes.
    pub fn apply(
        &mut self,
        selected: Filter,
        page: &PageModel,
        view: &mut impl PageView,
    ) -> Result<FilterSummary, FolioError> {
        if let Filter::Tag(tag) = &selected {
            if !page.is_known_tag(tag) {
                return Err(FolioError::unknown_tag(tag.as_str()));
            }
        }

        for (button, value) in page.filter_buttons.iter().enumerate() {
            let active = match &selected {
                Filter::All => true,
                Filter::Tag(tag) => value.as_deref() == Some(tag.as_str()),
            };
            view.set_filter_button_active(button, active);
        }

        let mut visible = Vec::new();
        for (card, project) in page.projects.iter().enumerate() {
            let shown = selected.matches(&project.tags);
            view.set_card_visible(card, shown);
            if shown {
                visible.push(card);
            }
        }

        for (index, element) in page.tags.iter().enumerate() {
            let highlighted = match &selected {
                Filter::All => false,
                Filter::Tag(tag) => &element.tag == tag,
            };
            view.set_tag_selected(index, highlighted);
        }

        let info = selected.info_message();
        view.set_filter_summary(visible.len(), &info);

        log::debug!(
            "🏷️ Filter '{}' applied: {} of {} projects visible",
            selected,
            visible.len(),
            page.card_count()
        );

        self.current = selected;
        Ok(FilterSummary { visible, info })
    }
}
