use crate::error::CarouselError;

/// One displayable unit of the carousel: a source reference plus optional
/// display hints. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub source: String,
    pub width: Option<u16>,
    pub height: Option<u16>,
}

impl Slide {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            width: None,
            height: None,
        }
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }
}

/// Ordered sequence of slides. Fixed in size after construction; the engine's
/// cursor ranges over `[0, len - 1]`.
///
/// Neighbor access is boundary-aware: where the cursor sits at either end of
/// the deck, [`SlideDeck::window`] yields `None` in place of the missing
/// neighbor and the renderer draws a placeholder card there.
#[derive(Debug, Clone)]
pub struct SlideDeck {
    slides: Vec<Slide>,
}

impl SlideDeck {
    /// Build a deck from a caller-supplied slide list.
    ///
    /// # Errors
    /// Returns [`CarouselError::EmptySlideList`] if `slides` is empty.
    pub fn new(slides: Vec<Slide>) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::EmptySlideList);
        }
        Ok(Self { slides })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Index of the last slide. The deck is never empty, so this is total.
    pub fn last_index(&self) -> usize {
        self.slides.len() - 1
    }

    /// The three-slot neighbor window around `cursor`: the slides at
    /// `cursor - 1`, `cursor`, `cursor + 1`, with `None` where the window
    /// runs past either end of the deck.
    pub fn window(&self, cursor: usize) -> [Option<&Slide>; 3] {
        [
            cursor.checked_sub(1).and_then(|i| self.slides.get(i)),
            self.slides.get(cursor),
            self.slides.get(cursor + 1),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(n: usize) -> SlideDeck {
        let slides = (0..n).map(|i| Slide::new(format!("slide-{i}.png"))).collect();
        SlideDeck::new(slides).unwrap()
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(
            SlideDeck::new(Vec::new()),
            Err(CarouselError::EmptySlideList)
        ));
    }

    #[test]
    fn window_in_the_middle_has_both_neighbors() {
        let deck = deck(5);
        let [left, mid, right] = deck.window(2);
        assert_eq!(left.unwrap().source, "slide-1.png");
        assert_eq!(mid.unwrap().source, "slide-2.png");
        assert_eq!(right.unwrap().source, "slide-3.png");
    }

    #[test]
    fn window_at_the_first_slide_has_a_left_placeholder() {
        let deck = deck(3);
        let [left, mid, right] = deck.window(0);
        assert!(left.is_none());
        assert_eq!(mid.unwrap().source, "slide-0.png");
        assert_eq!(right.unwrap().source, "slide-1.png");
    }

    #[test]
    fn window_at_the_last_slide_has_a_right_placeholder() {
        let deck = deck(3);
        let [left, mid, right] = deck.window(2);
        assert_eq!(left.unwrap().source, "slide-1.png");
        assert_eq!(mid.unwrap().source, "slide-2.png");
        assert!(right.is_none());
    }

    #[test]
    fn single_slide_deck_is_placeholders_on_both_sides() {
        let deck = deck(1);
        let [left, mid, right] = deck.window(0);
        assert!(left.is_none());
        assert!(mid.is_some());
        assert!(right.is_none());
    }

    #[test]
    fn slide_size_hints_are_optional() {
        let plain = Slide::new("a.png");
        assert_eq!(plain.width, None);
        let sized = Slide::new("b.png").with_size(200, 200);
        assert_eq!((sized.width, sized.height), (Some(200), Some(200)));
    }
}
