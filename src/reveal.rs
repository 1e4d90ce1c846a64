//! Fade-in of project cards as they scroll into view.

use crate::error::FolioError;
use crate::view::PageView;

/// Reveal state of one card. Only ever moves from `Hidden` to `Revealed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

/// Tracks which cards have been revealed.
#[derive(Debug, Default)]
pub struct RevealAnimator {
    cards: Vec<RevealState>,
}

impl RevealAnimator {
    /// Create an animator for `card_count` cards, all hidden.
    pub fn new(card_count: usize) -> Self {
        Self {
            cards: vec![RevealState::Hidden; card_count],
        }
    }

    /// Put every card in its pre-reveal state.
    pub fn prepare(&self, view: &mut impl PageView) {
        for card in 0..self.cards.len() {
            view.prepare_reveal(card);
        }
    }

    pub fn state(&self, card: usize) -> Option<RevealState> {
        self.cards.get(card).copied()
    }

    /// Handle a visibility notification for `card`.
    ///
    /// Returns `true` only on the notification that reveals the card; the
    /// caller can stop watching it after that.
    pub fn on_intersection(
        &mut self,
        card: usize,
        is_intersecting: bool,
        view: &mut impl PageView,
    ) -> Result<bool, FolioError> {
        let state = self
            .cards
            .get_mut(card)
            .ok_or(FolioError::UnknownCard(card))?;

        if !is_intersecting || *state == RevealState::Revealed {
            return Ok(false);
        }

        *state = RevealState::Revealed;
        view.reveal_card(card);
        log::trace!("Card {} revealed", card);
        Ok(true)
    }

    pub fn revealed_count(&self) -> usize {
        self.cards
            .iter()
            .filter(|state| **state == RevealState::Revealed)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::testing::RecordingView;

    #[test]
    fn test_prepare_hides_all_cards() {
        let animator = RevealAnimator::new(3);
        let mut view = RecordingView::new();
        animator.prepare(&mut view);
        assert_eq!(view.pending_reveal.len(), 3);
    }

    #[test]
    fn test_reveal_is_one_way() {
        let mut animator = RevealAnimator::new(2);
        let mut view = RecordingView::new();
        animator.prepare(&mut view);

        assert!(!animator.on_intersection(0, false, &mut view).unwrap());
        assert_eq!(animator.state(0), Some(RevealState::Hidden));

        assert!(animator.on_intersection(0, true, &mut view).unwrap());
        assert_eq!(animator.state(0), Some(RevealState::Revealed));

        // leaving and re-entering the viewport changes nothing
        assert!(!animator.on_intersection(0, false, &mut view).unwrap());
        assert!(!animator.on_intersection(0, true, &mut view).unwrap());
        assert_eq!(animator.state(0), Some(RevealState::Revealed));
        assert_eq!(view.revealed.get(&0), Some(&1));

        assert_eq!(animator.revealed_count(), 1);
        assert!(view.pending_reveal.contains(&1));
    }

    #[test]
    fn test_unknown_card() {
        let mut animator = RevealAnimator::new(1);
        let mut view = RecordingView::new();
        assert_eq!(
            animator.on_intersection(5, true, &mut view),
            Err(FolioError::UnknownCard(5))
        );
    }
}
