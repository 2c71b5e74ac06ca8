//! Comparison widget view modes.
//!
//! Three fixed presentation layouts for comparing the original and
//! colorized images, cycled with wraparound in both directions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Cycling direction for [`ViewMode::cycled`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Advance to the next mode (wraps from the last back to the first).
    Next,
    /// Step back to the previous mode (wraps from the first to the last).
    Prev,
}

/// Presentation layout for the comparison widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewMode {
    /// Original as base layer with the colorized result revealed up to
    /// the slider position.
    #[default]
    Split,
    /// Both images in two panes next to each other.
    SideBySide,
    /// Both images stacked vertically, labeled Before/After.
    BeforeAfter,
}

impl ViewMode {
    /// All modes in cycling order.
    pub const ALL: [Self; 3] = [Self::Split, Self::SideBySide, Self::BeforeAfter];

    /// Display label for the control bar.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Split => "Split View",
            Self::SideBySide => "Side by Side",
            Self::BeforeAfter => "Before & After",
        }
    }

    /// The neighboring mode in the given direction.
    ///
    /// Total over both inputs: repeated `Next` calls visit all three
    /// modes and then repeat.
    #[must_use]
    pub const fn cycled(self, direction: Direction) -> Self {
        match direction {
            Direction::Next => match self {
                Self::Split => Self::SideBySide,
                Self::SideBySide => Self::BeforeAfter,
                Self::BeforeAfter => Self::Split,
            },
            Direction::Prev => match self {
                Self::Split => Self::BeforeAfter,
                Self::SideBySide => Self::Split,
                Self::BeforeAfter => Self::SideBySide,
            },
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_split() {
        assert_eq!(ViewMode::default(), ViewMode::Split);
    }

    #[test]
    fn three_next_steps_return_to_start() {
        for start in ViewMode::ALL {
            let mut mode = start;
            for _ in 0..3 {
                mode = mode.cycled(Direction::Next);
            }
            assert_eq!(mode, start);
        }
    }

    #[test]
    fn prev_from_split_wraps_to_before_after() {
        assert_eq!(
            ViewMode::Split.cycled(Direction::Prev),
            ViewMode::BeforeAfter
        );
    }

    #[test]
    fn next_and_prev_are_inverses() {
        for mode in ViewMode::ALL {
            assert_eq!(mode.cycled(Direction::Next).cycled(Direction::Prev), mode);
            assert_eq!(mode.cycled(Direction::Prev).cycled(Direction::Next), mode);
        }
    }

    #[test]
    fn next_visits_every_mode() {
        let mut seen = std::collections::HashSet::new();
        let mut mode = ViewMode::Split;
        for _ in 0..ViewMode::ALL.len() {
            seen.insert(mode);
            mode = mode.cycled(Direction::Next);
        }
        assert_eq!(seen.len(), ViewMode::ALL.len());
    }
}
