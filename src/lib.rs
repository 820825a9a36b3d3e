//! Carousel navigation engine.
//!
//! An ordered slide deck, a single active cursor, and two independent ways
//! to move it: clamped manual navigation (no wraparound) and a cancellable
//! autoplay timer that advances every fixed interval and wraps from the last
//! slide back to the first. Rendering goes through the [`render::Renderer`]
//! seam: the active slide is always drawn flanked by its two neighbors, with
//! explicit placeholders where a neighbor runs past the deck's ends.
//!
//! The engine is single-threaded: the timer thread only emits tick events,
//! which the host applies via [`engine::Carousel::pump`] on its own loop.
//! [`engine::Carousel::dispose`] (also run on drop) cancels the timer.

mod autoplay;
pub mod constants;
pub mod engine;
pub mod error;
pub mod loader;
pub mod render;
pub mod slide;
pub mod terminal;

pub use engine::{Carousel, CarouselOptions};
pub use error::{CarouselError, RenderError};
pub use render::{Card, CarouselView, RecordingRenderer, Renderer};
pub use slide::{Slide, SlideDeck};
