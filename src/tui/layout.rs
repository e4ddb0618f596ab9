//! Width breakpoints for the feed layout
//!
//! Render code asks what fits at the current width instead of comparing
//! raw column counts.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: split pane
    Compact,
    /// 60-99 cols: half-screen
    Normal,
    /// 100+ cols: full terminal
    Wide,
}

/// Longest line a post card wraps to, however wide the terminal
const MAX_CARD_WIDTH: usize = 96;

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            _ => Breakpoint::Wide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
        }
    }

    /// Full category names need the whole width; narrower bars use short ones
    pub fn short_filter_labels(&self) -> bool {
        !self.at_least(Breakpoint::Wide)
    }

    /// Wrap width for post content given the columns available
    pub fn card_width(&self, available: usize) -> usize {
        match self {
            Breakpoint::Wide => available.min(MAX_CARD_WIDTH),
            _ => available,
        }
    }
}
