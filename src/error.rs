use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by the carousel library.
#[derive(Debug, Error)]
pub enum CarouselError {
    /// Construction was attempted with no slides. A carousel over an empty
    /// deck has no valid cursor position, so this is rejected up front.
    #[error("slide list is empty")]
    EmptySlideList,

    /// The slide loader could not scan the given directory.
    #[error("failed to scan {path}")]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A render requested by manual navigation failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors reported by a [`Renderer`](crate::render::Renderer).
#[derive(Debug, Error)]
pub enum RenderError {
    /// The host container is no longer attached; nothing can be drawn into it.
    #[error("host container is detached")]
    Detached,

    /// Writing to the terminal failed.
    #[error("failed to write to terminal")]
    Io(#[from] io::Error),
}
