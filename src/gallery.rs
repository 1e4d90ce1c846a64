//! Lightbox gallery modal.
//!
//! A [`GallerySession`] exists only while the modal is open. Opening always
//! starts a fresh session at the first image, so nothing leaks from one
//! opening to the next.

use crate::catalog::Catalog;
use crate::constants::gallery_title;
use crate::error::FolioError;
use crate::model::{GalleryImage, ProjectId};
use crate::page::PageModel;
use crate::view::{GalleryFrame, PageView};

/// Step direction for gallery navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Index after stepping from `index` in a gallery of `len` images,
    /// wrapping at both ends.
    pub fn step(self, index: usize, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        match self {
            Direction::Previous => {
                if index == 0 {
                    len - 1
                } else {
                    (index - 1).min(len - 1)
                }
            }
            Direction::Next => {
                if index + 1 >= len {
                    0
                } else {
                    index + 1
                }
            }
        }
    }
}

/// State of an open gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GallerySession {
    project: ProjectId,
    title: String,
    images: Vec<GalleryImage>,
    index: usize,
}

impl GallerySession {
    pub fn project(&self) -> &ProjectId {
        &self.project
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &GalleryImage {
        &self.images[self.index]
    }

    fn frame(&self) -> GalleryFrame<'_> {
        GalleryFrame {
            title: &self.title,
            images: &self.images,
            index: self.index,
        }
    }
}

/// Owns the gallery session.
#[derive(Debug, Default)]
pub struct GalleryController {
    session: Option<GallerySession>,
}

impl GalleryController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// The open session, if any.
    pub fn session(&self) -> Option<&GallerySession> {
        self.session.as_ref()
    }

    /// Open the gallery of `id` at its first image.
    ///
    /// Unknown projects and projects with nothing to show leave the modal as
    /// it was.
    pub fn open(
        &mut self,
        id: &ProjectId,
        page: &PageModel,
        catalog: &Catalog,
        view: &mut impl PageView,
    ) -> Result<&GallerySession, FolioError> {
        let (_, project) = page
            .find_project(id)
            .ok_or_else(|| FolioError::unknown_project(id))?;

        let images = catalog.images_for(project);
        if images.is_empty() {
            return Err(FolioError::NoImages { id: id.clone() });
        }

        log::debug!("🖼️ Opening gallery '{}' with {} images", id, images.len());

        let session = GallerySession {
            project: id.clone(),
            title: gallery_title(project.display_title()),
            images,
            index: 0,
        };
        view.render_gallery(session.frame());
        view.set_gallery_open(true);

        Ok(self.session.insert(session))
    }

    /// Close the modal and drop the session.
    pub fn close(&mut self, view: &mut impl PageView) {
        if let Some(session) = self.session.take() {
            log::debug!("🖼️ Closing gallery '{}'", session.project);
            view.set_gallery_open(false);
        }
    }

    /// Step to the previous or next image, wrapping around.
    pub fn navigate(
        &mut self,
        direction: Direction,
        view: &mut impl PageView,
    ) -> Result<usize, FolioError> {
        let session = self.session.as_mut().ok_or(FolioError::GalleryClosed)?;
        session.index = direction.step(session.index, session.images.len());
        log::debug!(
            "🖼️ Gallery {:?} -> {}/{}",
            direction,
            session.index + 1,
            session.images.len()
        );
        view.render_gallery(session.frame());
        Ok(session.index)
    }

    /// Jump straight to a thumbnail.
    pub fn select(&mut self, index: usize, view: &mut impl PageView) -> Result<(), FolioError> {
        let session = self.session.as_mut().ok_or(FolioError::GalleryClosed)?;
        if index >= session.images.len() {
            return Err(FolioError::ImageIndexOutOfRange {
                index,
                len: session.images.len(),
            });
        }
        session.index = index;
        view.render_gallery(session.frame());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::default_catalog;
    use crate::model::Project;
    use crate::view::testing::RecordingView;

    fn three_images() -> Vec<GalleryImage> {
        vec![
            GalleryImage::new("g1.png", "one"),
            GalleryImage::new("g2.png", "two"),
            GalleryImage::new("g3.png", "three"),
        ]
    }

    fn fixture() -> (PageModel, Catalog) {
        let page = PageModel::from_projects(vec![
            Project::new("G", &["x"]).with_title("Gamma"),
            Project::new("S", &["y"])
                .with_title("Solo")
                .with_primary_image(GalleryImage::new("solo.png", "Solo cover")),
            Project::new("E", &["y"]),
        ]);
        let catalog = Catalog::new().with_gallery("G", three_images());
        (page, catalog)
    }

    #[test]
    fn test_step_wraps() {
        assert_eq!(Direction::Previous.step(0, 3), 2);
        assert_eq!(Direction::Next.step(2, 3), 0);
        assert_eq!(Direction::Next.step(0, 3), 1);
        assert_eq!(Direction::Previous.step(0, 1), 0);
        assert_eq!(Direction::Next.step(0, 1), 0);
    }

    #[test]
    fn test_index_stays_in_bounds() {
        for len in 1..6 {
            let mut index = 0;
            for i in 0..50 {
                let direction = if i % 3 == 0 { Direction::Previous } else { Direction::Next };
                index = direction.step(index, len);
                assert!(index < len);
            }
        }
    }

    #[test]
    fn test_scenario_three_images_wrap() {
        let (page, catalog) = fixture();
        let mut gallery = GalleryController::new();
        let mut view = RecordingView::new();

        let session = gallery.open(&ProjectId::new("G"), &page, &catalog, &mut view).unwrap();
        assert_eq!(session.index(), 0);
        assert_eq!(session.current(), &three_images()[0]);

        gallery.navigate(Direction::Next, &mut view).unwrap();
        assert_eq!(gallery.navigate(Direction::Next, &mut view).unwrap(), 2);
        assert_eq!(gallery.navigate(Direction::Next, &mut view).unwrap(), 0);

        let rendered = view.gallery.as_ref().unwrap();
        assert_eq!(rendered.image.as_ref().map(|i| i.src.as_str()), Some("g1.png"));
        assert_eq!(rendered.active_thumbnail, 0);
    }

    #[test]
    fn test_previous_from_first_goes_to_last() {
        let (page, catalog) = fixture();
        let mut gallery = GalleryController::new();
        let mut view = RecordingView::new();

        gallery.open(&ProjectId::new("G"), &page, &catalog, &mut view).unwrap();
        assert_eq!(gallery.navigate(Direction::Previous, &mut view).unwrap(), 2);
    }

    #[test]
    fn test_open_renders_and_locks_scroll() {
        let (page, catalog) = fixture();
        let mut gallery = GalleryController::new();
        let mut view = RecordingView::new();

        gallery.open(&ProjectId::new("G"), &page, &catalog, &mut view).unwrap();

        let rendered = view.gallery.as_ref().unwrap();
        assert_eq!(rendered.title, "Gamma Gallery");
        assert_eq!(rendered.thumbnails.len(), 3);
        assert!(!rendered.nav_disabled);
        assert!(view.modal_open);
        assert!(view.scroll_locked);
    }

    #[test]
    fn test_empty_gallery_uses_primary_image() {
        let (page, catalog) = fixture();
        let mut gallery = GalleryController::new();
        let mut view = RecordingView::new();

        let session = gallery.open(&ProjectId::new("S"), &page, &catalog, &mut view).unwrap();
        assert_eq!(session.images(), &[GalleryImage::new("solo.png", "Solo cover")]);

        let rendered = view.gallery.as_ref().unwrap();
        assert!(rendered.nav_disabled);

        // single image: navigation stays put
        assert_eq!(gallery.navigate(Direction::Next, &mut view).unwrap(), 0);
        assert_eq!(gallery.navigate(Direction::Previous, &mut view).unwrap(), 0);
    }

    #[test]
    fn test_unknown_project_is_noop() {
        let (page, catalog) = fixture();
        let mut gallery = GalleryController::new();
        let mut view = RecordingView::new();

        let err = gallery
            .open(&ProjectId::new("missing"), &page, &catalog, &mut view)
            .unwrap_err();
        assert_eq!(err, FolioError::unknown_project(&ProjectId::new("missing")));
        assert!(!gallery.is_open());
        assert!(!view.modal_open);
        assert_eq!(view.gallery_renders, 0);
    }

    #[test]
    fn test_project_without_images_does_not_open() {
        let (page, catalog) = fixture();
        let mut gallery = GalleryController::new();
        let mut view = RecordingView::new();

        let err = gallery.open(&ProjectId::new("E"), &page, &catalog, &mut view).unwrap_err();
        assert!(matches!(err, FolioError::NoImages { .. }));
        assert!(!gallery.is_open());
    }

    #[test]
    fn test_close_then_open_starts_fresh() {
        let page = PageModel::from_projects(vec![
            Project::new("project1", &["x"]).with_title("Survey"),
            Project::new("project2", &["y"]).with_title("Prompts"),
        ]);
        let catalog = default_catalog();
        let mut gallery = GalleryController::new();
        let mut view = RecordingView::new();

        gallery.open(&ProjectId::new("project1"), &page, &catalog, &mut view).unwrap();
        gallery.navigate(Direction::Next, &mut view).unwrap();
        gallery.close(&mut view);
        assert!(!gallery.is_open());
        assert!(!view.modal_open);
        assert!(!view.scroll_locked);

        let session = gallery
            .open(&ProjectId::new("project2"), &page, &catalog, &mut view)
            .unwrap();
        assert_eq!(session.index(), 0);
        assert_eq!(session.images(), catalog.configured(&ProjectId::new("project2")));
    }

    #[test]
    fn test_select_thumbnail() {
        let (page, catalog) = fixture();
        let mut gallery = GalleryController::new();
        let mut view = RecordingView::new();

        gallery.open(&ProjectId::new("G"), &page, &catalog, &mut view).unwrap();
        gallery.select(2, &mut view).unwrap();
        assert_eq!(gallery.session().unwrap().index(), 2);
        assert_eq!(view.gallery.as_ref().unwrap().active_thumbnail, 2);

        let err = gallery.select(3, &mut view).unwrap_err();
        assert_eq!(err, FolioError::ImageIndexOutOfRange { index: 3, len: 3 });
        assert_eq!(gallery.session().unwrap().index(), 2);
    }

    #[test]
    fn test_navigation_requires_open_gallery() {
        let mut gallery = GalleryController::new();
        let mut view = RecordingView::new();

        assert_eq!(
            gallery.navigate(Direction::Next, &mut view),
            Err(FolioError::GalleryClosed)
        );
        gallery.close(&mut view);
        assert_eq!(view.gallery_renders, 0);
    }
}
