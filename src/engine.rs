//! The carousel engine: one mutable cursor over a fixed slide deck, driven by
//! two independent stimuli — manual navigation and autoplay ticks.
//!
//! Manual navigation clamps at the deck's ends and never wraps; the
//! autonomous advance wraps from the last slide back to the first and runs
//! indefinitely. Neither stimulus touches the other: navigation never re-arms
//! or cancels the timer, and a tick advances whatever cursor value is current
//! when it is applied. All cursor mutation happens on the host thread — the
//! timer thread only emits tick events (see [`crate::autoplay`]).

use std::time::Duration;

use tracing::{debug, warn};

use crate::autoplay::Autoplay;
use crate::constants::DEFAULT_INTERVAL_MS;
use crate::error::CarouselError;
use crate::render::{CarouselView, Renderer};
use crate::slide::{Slide, SlideDeck};

/// Construction options.
#[derive(Debug, Clone, Copy)]
pub struct CarouselOptions {
    /// Delay between autonomous advances.
    pub interval: Duration,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
        }
    }
}

pub struct Carousel<R: Renderer> {
    deck: SlideDeck,
    cursor: usize,
    renderer: R,
    autoplay: Autoplay,
}

impl<R: Renderer> Carousel<R> {
    /// Build the deck, set the cursor to the first slide, perform the initial
    /// render, and arm the autoplay timer.
    ///
    /// # Errors
    /// [`CarouselError::EmptySlideList`] for an empty slide list;
    /// [`CarouselError::Render`] if the initial render fails (the timer is
    /// not armed in that case).
    pub fn new(
        slides: Vec<Slide>,
        mut renderer: R,
        options: CarouselOptions,
    ) -> Result<Self, CarouselError> {
        let deck = SlideDeck::new(slides)?;
        renderer.render(&CarouselView::new(&deck, 0))?;
        let autoplay = Autoplay::start(options.interval);
        Ok(Self {
            deck,
            cursor: 0,
            renderer,
            autoplay,
        })
    }

    /// Convenience constructor with the default 3000 ms interval.
    pub fn with_defaults(slides: Vec<Slide>, renderer: R) -> Result<Self, CarouselError> {
        Self::new(slides, renderer, CarouselOptions::default())
    }

    /// Index of the active slide, always in `[0, len - 1]`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.deck.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Step back one slide. Clamped: at the first slide this is a no-op and
    /// no render happens. Does not touch the autoplay timer.
    pub fn previous(&mut self) -> Result<(), CarouselError> {
        if self.cursor == 0 {
            debug!(cursor = self.cursor, "previous ignored at first slide");
            return Ok(());
        }
        self.cursor -= 1;
        debug!(cursor = self.cursor, "manual previous");
        self.render()
    }

    /// Step forward one slide. Clamped: at the last slide this is a no-op and
    /// no render happens. Does not touch the autoplay timer.
    pub fn next(&mut self) -> Result<(), CarouselError> {
        if self.cursor == self.deck.last_index() {
            debug!(cursor = self.cursor, "next ignored at last slide");
            return Ok(());
        }
        self.cursor += 1;
        debug!(cursor = self.cursor, "manual next");
        self.render()
    }

    /// Apply any autoplay ticks that have fired since the last call, one
    /// advance-and-render per tick. Returns the number of ticks applied.
    ///
    /// Each tick reads the cursor as it is now, so a manual navigation
    /// between ticks shifts where the next advance lands instead of being
    /// overwritten by a stale value. A failed render is logged and dropped;
    /// it must not break the tick chain or block disposal.
    pub fn pump(&mut self) -> usize {
        let fired = self.autoplay.pending();
        for _ in 0..fired {
            self.advance();
            if let Err(err) = self.render() {
                warn!(cursor = self.cursor, error = %err, "render failed on autoplay tick");
            }
        }
        fired
    }

    /// Re-render the current view unchanged. Renders are full rebuilds, so
    /// this is idempotent; hosts use it after events that invalidate the
    /// container wholesale (a terminal resize, say).
    pub fn refresh(&mut self) -> Result<(), CarouselError> {
        self.render()
    }

    /// One autonomous advance: wraps from the last slide back to the first.
    fn advance(&mut self) {
        self.cursor = if self.cursor == self.deck.last_index() {
            0
        } else {
            self.cursor + 1
        };
        debug!(cursor = self.cursor, "autoplay advance");
    }

    fn render(&mut self) -> Result<(), CarouselError> {
        self.renderer
            .render(&CarouselView::new(&self.deck, self.cursor))?;
        Ok(())
    }

    /// Stop the autoplay timer and join its thread. Idempotent; also called
    /// from `Drop`, so letting the engine fall out of scope cannot leak the
    /// timer.
    pub fn dispose(&mut self) {
        self.autoplay.stop();
    }

    pub fn is_disposed(&self) -> bool {
        self.autoplay.is_stopped()
    }
}

impl<R: Renderer> Drop for Carousel<R> {
    fn drop(&mut self) {
        self.dispose();
    }
}
