//! Terminal renderer: draws the three-card window to the alternate screen.
//!
//! Full rebuild on every render — clear, then redraw all three cards. The
//! active card gets a heavy border and highlighted title; boundary
//! placeholders are drawn as dimmed empty frames.

use std::io::{Stdout, Write, stdout};

use crossterm::cursor::MoveTo;
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::queue;

use crate::constants::{CARD_GAP, CARD_HEIGHT, CARD_WIDTH};
use crate::error::RenderError;
use crate::render::{Card, CarouselView, Renderer};

pub struct TerminalRenderer {
    out: Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self { out: stdout() }
    }

    fn draw_card(&mut self, card: &Card<'_>, left: u16, top: u16) -> Result<(), RenderError> {
        let (h_bar, v_bar, corners) = if card.active {
            ("━", "┃", ['┏', '┓', '┗', '┛'])
        } else {
            ("─", "│", ['┌', '┐', '└', '┘'])
        };
        let inner = (CARD_WIDTH - 2) as usize;

        if !card.active {
            queue!(self.out, SetAttribute(Attribute::Dim))?;
        }

        queue!(
            self.out,
            MoveTo(left, top),
            Print(format!("{}{}{}", corners[0], h_bar.repeat(inner), corners[1]))
        )?;
        for row in 1..CARD_HEIGHT - 1 {
            queue!(
                self.out,
                MoveTo(left, top + row),
                Print(format!("{}{}{}", v_bar, " ".repeat(inner), v_bar))
            )?;
        }
        queue!(
            self.out,
            MoveTo(left, top + CARD_HEIGHT - 1),
            Print(format!("{}{}{}", corners[2], h_bar.repeat(inner), corners[3]))
        )?;

        match card.slide {
            Some(slide) => {
                let title = trim_label(&slide.source, inner);
                let title_left = left + 1 + ((inner - title.chars().count()) / 2) as u16;
                if card.active {
                    queue!(self.out, SetAttribute(Attribute::Bold))?;
                }
                queue!(self.out, MoveTo(title_left, top + CARD_HEIGHT / 2 - 1), Print(title))?;
                if let (Some(w), Some(h)) = (slide.width, slide.height) {
                    let dims = format!("{w}x{h}");
                    let dims_left = left + 1 + ((inner - dims.len()) / 2) as u16;
                    queue!(
                        self.out,
                        SetAttribute(Attribute::Reset),
                        MoveTo(dims_left, top + CARD_HEIGHT / 2 + 1),
                        Print(dims)
                    )?;
                }
            }
            None => {
                // Boundary placeholder: an empty frame, nothing to label.
            }
        }
        queue!(self.out, SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, view: &CarouselView<'_>) -> Result<(), RenderError> {
        // A terminal we can no longer size is a detached container.
        let (cols, rows) = terminal::size().map_err(|_| RenderError::Detached)?;
        if cols == 0 || rows == 0 {
            return Err(RenderError::Detached);
        }

        queue!(self.out, Clear(ClearType::All))?;

        let strip_width = 3 * CARD_WIDTH + 2 * CARD_GAP;
        let left0 = cols.saturating_sub(strip_width) / 2;
        let top = rows.saturating_sub(CARD_HEIGHT + 2) / 2;
        for (i, card) in view.cards.iter().enumerate() {
            let left = left0 + i as u16 * (CARD_WIDTH + CARD_GAP);
            self.draw_card(card, left, top)?;
        }

        let footer = format!(
            "{}/{}   \u{2190}/\u{2192} navigate \u{b7} q quit",
            view.cursor + 1,
            view.total
        );
        let footer_left = cols.saturating_sub(footer.chars().count() as u16) / 2;
        queue!(
            self.out,
            MoveTo(footer_left, top + CARD_HEIGHT + 1),
            SetAttribute(Attribute::Dim),
            Print(footer),
            SetAttribute(Attribute::Reset)
        )?;

        self.out.flush()?;
        Ok(())
    }
}

/// Shorten a source reference to its file name, ellipsized to fit `max` cells.
fn trim_label(source: &str, max: usize) -> String {
    let name = source.rsplit(['/', '\\']).next().unwrap_or(source);
    if name.chars().count() <= max {
        return name.to_string();
    }
    let kept: String = name.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}\u{2026}")
}
