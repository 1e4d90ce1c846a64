//! Static structure of the host page.
//!
//! The page is scanned once at start-up (see `wasm::scan`) and never changes
//! afterwards. Controllers refer to elements by their index in document order.

use std::collections::BTreeSet;

use crate::model::{Project, ProjectId, Tag};

/// Where a clickable tag element sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// Technology tag inside the project card at this index
    Inline { card: usize },
    /// Tag outside the project grid (e.g. the skills section)
    Skill,
}

/// A clickable tag element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagElement {
    pub tag: Tag,
    pub kind: TagKind,
}

impl TagElement {
    pub fn inline(text: &str, card: usize) -> Self {
        Self {
            tag: Tag::from_text(text),
            kind: TagKind::Inline { card },
        }
    }

    pub fn skill(text: &str) -> Self {
        Self {
            tag: Tag::from_text(text),
            kind: TagKind::Skill,
        }
    }
}

/// Scanned page structure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageModel {
    /// Project cards in document order
    pub projects: Vec<Project>,
    /// `data-filter` value of each filter button (`None` if the attribute is missing)
    pub filter_buttons: Vec<Option<String>>,
    /// Every clickable tag element, inline and skill, in document order
    pub tags: Vec<TagElement>,
}

impl PageModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a page with one inline clickable tag per project tag and an
    /// "all" button followed by one filter button per known tag.
    pub fn from_projects(projects: Vec<Project>) -> Self {
        let tags = projects
            .iter()
            .enumerate()
            .flat_map(|(card, project)| {
                project
                    .tags
                    .iter()
                    .map(move |tag| TagElement::inline(tag.as_str(), card))
            })
            .collect();

        let mut page = Self {
            projects,
            filter_buttons: Vec::new(),
            tags,
        };
        page.filter_buttons = std::iter::once(crate::constants::ALL_FILTER.to_string())
            .chain(page.tag_universe().iter().map(|t| t.to_string()))
            .map(Some)
            .collect();
        page
    }

    /// Every tag carried by at least one project.
    pub fn tag_universe(&self) -> BTreeSet<Tag> {
        self.projects
            .iter()
            .flat_map(|project| project.tags.iter().cloned())
            .filter(|tag| !tag.is_empty())
            .collect()
    }

    /// Whether `tag` labels at least one project.
    pub fn is_known_tag(&self, tag: &Tag) -> bool {
        self.projects.iter().any(|project| project.has_tag(tag))
    }

    /// Index and data of the first card with this project key.
    pub fn find_project(&self, id: &ProjectId) -> Option<(usize, &Project)> {
        self.projects
            .iter()
            .enumerate()
            .find(|(_, project)| project.id.as_ref() == Some(id))
    }

    pub fn card_count(&self) -> usize {
        self.projects.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PageModel {
        PageModel::from_projects(vec![
            Project::new("A", &["x", "y"]),
            Project::new("B", &["y"]),
        ])
    }

    #[test]
    fn test_tag_universe_from_projects() {
        let universe: Vec<String> = sample().tag_universe().iter().map(|t| t.to_string()).collect();
        assert_eq!(universe, vec!["x", "y"]);
    }

    #[test]
    fn test_from_projects_builds_controls() {
        let page = sample();
        assert_eq!(
            page.filter_buttons,
            vec![Some("all".to_string()), Some("x".to_string()), Some("y".to_string())]
        );
        assert_eq!(page.tags.len(), 3);
        assert_eq!(page.tags[2], TagElement::inline("y", 1));
    }

    #[test]
    fn test_find_project() {
        let page = sample();
        let (index, project) = page.find_project(&ProjectId::new("B")).unwrap();
        assert_eq!(index, 1);
        assert_eq!(project.tags, vec![Tag::from("y")]);
        assert!(page.find_project(&ProjectId::new("C")).is_none());
    }

    #[test]
    fn test_known_tag() {
        let page = sample();
        assert!(page.is_known_tag(&Tag::from("x")));
        assert!(!page.is_known_tag(&Tag::from("X")));
    }
}
