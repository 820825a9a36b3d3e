use crate::error::RenderError;
use crate::slide::{Slide, SlideDeck};

/// One card slot in the rendered window. `slide == None` is a boundary
/// placeholder: the window has run past an end of the deck.
#[derive(Debug, Clone, Copy)]
pub struct Card<'a> {
    pub slide: Option<&'a Slide>,
    pub active: bool,
}

/// What a renderer is asked to draw: exactly three cards — the active slide
/// flanked by its left and right neighbors. Exactly one card (the middle) is
/// active, and the active card always carries a real slide.
#[derive(Debug, Clone, Copy)]
pub struct CarouselView<'a> {
    pub cards: [Card<'a>; 3],
    pub cursor: usize,
    pub total: usize,
}

impl<'a> CarouselView<'a> {
    pub(crate) fn new(deck: &'a SlideDeck, cursor: usize) -> Self {
        let [left, mid, right] = deck.window(cursor);
        Self {
            cards: [
                Card { slide: left, active: false },
                Card { slide: mid, active: true },
                Card { slide: right, active: false },
            ],
            cursor,
            total: deck.len(),
        }
    }

    pub fn active(&self) -> &Card<'a> {
        &self.cards[1]
    }
}

/// Drawing seam between the engine and the host container.
///
/// A render is a full rebuild: the implementation clears whatever it drew
/// previously and repopulates the container from the view alone, so repeated
/// renders of the same view are idempotent.
pub trait Renderer {
    fn render(&mut self, view: &CarouselView<'_>) -> Result<(), RenderError>;
}

/// A recorded copy of one rendered card: the slide source (or `None` for a
/// placeholder) and whether it was marked active.
pub type RecordedCard = (Option<String>, bool);

/// Renderer that keeps every view it is handed, for inspection. Used by this
/// crate's tests; hosts can use it the same way. `detach()` makes every
/// subsequent render fail with [`RenderError::Detached`], simulating a host
/// container that has been removed.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    frames: Vec<Vec<RecordedCard>>,
    detached: bool,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Vec<RecordedCard>] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Sources of the last rendered frame's cards, placeholders as `None`.
    pub fn last_frame(&self) -> Option<&[RecordedCard]> {
        self.frames.last().map(Vec::as_slice)
    }

    pub fn detach(&mut self) {
        self.detached = true;
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, view: &CarouselView<'_>) -> Result<(), RenderError> {
        if self.detached {
            return Err(RenderError::Detached);
        }
        self.frames.push(
            view.cards
                .iter()
                .map(|card| (card.slide.map(|s| s.source.clone()), card.active))
                .collect(),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slide::SlideDeck;

    fn deck(n: usize) -> SlideDeck {
        let slides = (0..n).map(|i| Slide::new(format!("s{i}"))).collect();
        SlideDeck::new(slides).unwrap()
    }

    #[test]
    fn view_always_has_three_cards_and_one_active() {
        let deck = deck(4);
        for cursor in 0..deck.len() {
            let view = CarouselView::new(&deck, cursor);
            assert_eq!(view.cards.len(), 3);
            assert_eq!(view.cards.iter().filter(|c| c.active).count(), 1);
            assert!(view.active().slide.is_some());
        }
    }

    #[test]
    fn active_card_is_the_middle_one() {
        let deck = deck(3);
        let view = CarouselView::new(&deck, 1);
        assert!(!view.cards[0].active);
        assert!(view.cards[1].active);
        assert!(!view.cards[2].active);
    }

    #[test]
    fn recording_renderer_captures_sources_in_order() {
        let deck = deck(3);
        let mut renderer = RecordingRenderer::new();
        renderer.render(&CarouselView::new(&deck, 0)).unwrap();
        assert_eq!(
            renderer.last_frame().unwrap(),
            &[
                (None, false),
                (Some("s0".into()), true),
                (Some("s1".into()), false),
            ]
        );
    }

    #[test]
    fn detached_renderer_refuses_to_draw() {
        let deck = deck(2);
        let mut renderer = RecordingRenderer::new();
        renderer.detach();
        let err = renderer.render(&CarouselView::new(&deck, 0)).unwrap_err();
        assert!(matches!(err, RenderError::Detached));
        assert_eq!(renderer.frame_count(), 0);
    }
}
