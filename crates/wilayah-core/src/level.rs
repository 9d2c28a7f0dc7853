//! Per-level load state.
//!
//! Each hierarchy level used to be an implicit pair of `loading: bool` plus
//! a list. Modeling it as a tagged state makes the impossible combinations
//! unrepresentable while keeping the same externally observable transitions:
//! `Loading` carries the previously displayed rows so a failed fetch can
//! restore exactly the pre-call value.

/// Load state of one hierarchy level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelState<T> {
    /// Nothing fetched yet (or the last fetch failed with nothing to show).
    NotLoaded,

    /// A fetch is in flight. `stale` holds the rows from before the fetch.
    Loading { stale: Vec<T> },

    /// The level is fully populated for its parent selection.
    Loaded(Vec<T>),
}

impl<T> LevelState<T> {
    /// Rows currently backing this level.
    ///
    /// While loading this is the stale list from before the fetch; rendering
    /// decides whether to show it or a loading indicator.
    pub fn rows(&self) -> &[T] {
        match self {
            LevelState::NotLoaded => &[],
            LevelState::Loading { stale } => stale,
            LevelState::Loaded(rows) => rows,
        }
    }

    /// Whether a fetch for this level is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, LevelState::Loading { .. })
    }

    /// Begin a fetch, carrying the current rows as the stale fallback.
    pub fn begin_load(&mut self) {
        let stale = std::mem::take(self).into_rows();
        *self = LevelState::Loading { stale };
    }

    /// Replace the level wholesale with freshly fetched rows.
    pub fn finish(&mut self, rows: Vec<T>) {
        *self = LevelState::Loaded(rows);
    }

    /// Fetch failed: restore the pre-call value.
    ///
    /// An empty stale list reverts to `NotLoaded`, which renders the same
    /// "no data yet" as a level that was never fetched.
    pub fn fail(&mut self) {
        let stale = std::mem::take(self).into_rows();
        *self = if stale.is_empty() {
            LevelState::NotLoaded
        } else {
            LevelState::Loaded(stale)
        };
    }

    /// Clear the level back to `NotLoaded`.
    pub fn reset(&mut self) {
        *self = LevelState::NotLoaded;
    }

    fn into_rows(self) -> Vec<T> {
        match self {
            LevelState::NotLoaded => Vec::new(),
            LevelState::Loading { stale } => stale,
            LevelState::Loaded(rows) => rows,
        }
    }
}

// Manual impl: the derive would bound `T: Default`, which the entities
// neither have nor need.
impl<T> Default for LevelState<T> {
    fn default() -> Self {
        LevelState::NotLoaded
    }
}
