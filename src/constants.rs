pub const DEFAULT_INTERVAL_MS: u64 = 3000;    // Autoplay delay between slides (milliseconds)
pub const POLL_INTERVAL_MS: u64 = 50;         // Input poll granularity of the demo loop (milliseconds)

pub const CARD_WIDTH: u16 = 24;               // Terminal card width (columns)
pub const CARD_HEIGHT: u16 = 8;               // Terminal card height (rows)
pub const CARD_GAP: u16 = 2;                  // Columns between adjacent cards

pub const DEFAULT_SLIDE_WIDTH: u16 = 200;     // Display hint when the loader has no better value
pub const DEFAULT_SLIDE_HEIGHT: u16 = 200;    // Display hint when the loader has no better value
