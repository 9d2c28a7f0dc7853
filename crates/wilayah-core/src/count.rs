//! The bounded province display count.

use serde::{Deserialize, Serialize};

/// Upper bound on how many provinces can be displayed.
pub const MAX_DISPLAY_COUNT: u32 = 32;

/// How many provinces to display: 0 ("unset", nothing shown) or 1..=32.
///
/// Parsing is total. Any text that does not parse as an integer inside
/// `[1, 32]` silently resets the count to unset, without surfacing an
/// error to the user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayCount(u32);

impl DisplayCount {
    /// The unset count. No provinces are displayed.
    pub const UNSET: Self = Self(0);

    /// Parse free-form text into a count.
    ///
    /// Stores the integer when it is in `[1, MAX_DISPLAY_COUNT]`,
    /// otherwise resets to unset.
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<u32>() {
            Ok(n) if (1..=MAX_DISPLAY_COUNT).contains(&n) => Self(n),
            _ => Self::UNSET,
        }
    }

    /// Raw value: 0 when unset.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Whether a valid count is active.
    pub fn is_set(self) -> bool {
        self.0 > 0
    }

    /// Truncate a full list to the first `min(count, len)` entries.
    ///
    /// Original order, no wraparound when the count exceeds what is
    /// available. An unset count yields an empty slice.
    pub fn slice<'a, T>(self, full: &'a [T]) -> &'a [T] {
        let take = (self.0 as usize).min(full.len());
        &full[..take]
    }
}

impl std::fmt::Display for DisplayCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
