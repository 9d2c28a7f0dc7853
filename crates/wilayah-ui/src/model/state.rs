//! UI state model for the region browser.
//!
//! These types are toolkit-independent to enable testing and clear
//! separation: all transitions here are pure state mutations, and the
//! controller decides which fetches they entail.

use wilayah_core::{DisplayCount, District, LevelState, Province, Regency};

// =============================================================================
// Focus
// =============================================================================

/// Which area receives keyboard input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// The count form at the bottom.
    #[default]
    CountInput,
    Provinces,
    Regencies,
    Districts,
}

impl Focus {
    /// Cycle to the next area.
    pub fn next(self) -> Self {
        match self {
            Focus::CountInput => Focus::Provinces,
            Focus::Provinces => Focus::Regencies,
            Focus::Regencies => Focus::Districts,
            Focus::Districts => Focus::CountInput,
        }
    }

    /// Cycle to the previous area.
    pub fn prev(self) -> Self {
        match self {
            Focus::CountInput => Focus::Districts,
            Focus::Provinces => Focus::CountInput,
            Focus::Regencies => Focus::Provinces,
            Focus::Districts => Focus::Regencies,
        }
    }
}

// =============================================================================
// Browser State
// =============================================================================

/// All browser state, owned by one controller instance.
///
/// Per-level generation counters fence async completions: every fetch
/// captures the generation current when it was issued, and a completion
/// whose generation no longer matches is discarded.
#[derive(Debug, Default)]
pub struct BrowserState {
    /// Whether the list area is rendered at all.
    pub menu_visible: bool,

    /// Raw text of the count input.
    pub input: String,

    /// Parsed count; re-derived from `input` on every edit.
    pub count: DisplayCount,

    // -------------------------------------------------------------------------
    // Hierarchy Data
    // -------------------------------------------------------------------------
    pub provinces: LevelState<Province>,
    pub regencies: LevelState<Regency>,
    pub districts: LevelState<District>,

    /// Fencing generations, one per level; bumped whenever a new fetch
    /// supersedes whatever is in flight.
    pub province_generation: u64,
    pub regency_generation: u64,
    pub district_generation: u64,

    // -------------------------------------------------------------------------
    // Selection State
    // -------------------------------------------------------------------------
    pub selected_province: Option<String>,
    pub selected_regency: Option<String>,
    pub selected_district: Option<String>,

    // -------------------------------------------------------------------------
    // Navigation State
    // -------------------------------------------------------------------------
    pub focus: Focus,
    pub province_cursor: usize,
    pub regency_cursor: usize,
    pub district_cursor: usize,
}

impl BrowserState {
    /// Create the initial state: menu hidden, nothing loaded, unset count.
    pub fn new() -> Self {
        Self::default()
    }

    /// Province subset actually displayed: the first `count` entries.
    pub fn visible_provinces(&self) -> &[Province] {
        self.count.slice(self.provinces.rows())
    }

    // -------------------------------------------------------------------------
    // Count Form
    // -------------------------------------------------------------------------

    /// Append a character to the count input and re-parse.
    pub fn input_char(&mut self, c: char) {
        self.input.push(c);
        self.reparse_count();
    }

    /// Remove the last character of the count input and re-parse.
    pub fn input_backspace(&mut self) {
        self.input.pop();
        self.reparse_count();
    }

    fn reparse_count(&mut self) {
        self.count = DisplayCount::parse(&self.input);
        self.clamp_cursors();
    }

    /// Submit the form: reveal the lists and begin a province fetch.
    ///
    /// Returns the generation the issued fetch must report back with.
    /// Submitting always re-fetches, even with an unset count; the slice of
    /// an unset count is simply empty.
    pub fn submit(&mut self) -> u64 {
        self.menu_visible = true;
        self.provinces.begin_load();
        self.province_generation += 1;
        self.province_generation
    }

    /// Show or hide the list area.
    pub fn toggle_menu(&mut self) {
        self.menu_visible = !self.menu_visible;
    }

    // -------------------------------------------------------------------------
    // Selection Transitions
    // -------------------------------------------------------------------------

    /// Select a province and begin a regency fetch for it.
    ///
    /// Clears the regency and district selections and the district list
    /// synchronously, before any network activity resolves. The regency
    /// rows stay in place as the stale fallback. Bumps the district
    /// generation too, so an in-flight district fetch for the previous
    /// regency can no longer land.
    pub fn select_province(&mut self, id: &str) -> u64 {
        self.selected_province = Some(id.to_string());
        self.selected_regency = None;
        self.selected_district = None;
        self.districts.reset();
        self.regencies.begin_load();
        self.regency_generation += 1;
        self.district_generation += 1;
        self.regency_cursor = 0;
        self.district_cursor = 0;
        self.regency_generation
    }

    /// Select a regency and begin a district fetch for it.
    pub fn select_regency(&mut self, id: &str) -> u64 {
        self.selected_regency = Some(id.to_string());
        self.selected_district = None;
        self.districts.begin_load();
        self.district_generation += 1;
        self.district_cursor = 0;
        self.district_generation
    }

    /// Select a district. Terminal leaf action: no further fetch.
    pub fn select_district(&mut self, id: &str) {
        self.selected_district = Some(id.to_string());
    }

    // -------------------------------------------------------------------------
    // Cursor Navigation
    // -------------------------------------------------------------------------

    /// Move focus to the next area.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus to the previous area.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Move the focused panel's cursor up.
    pub fn cursor_up(&mut self) {
        if let Some(cursor) = self.focused_cursor() {
            *cursor = cursor.saturating_sub(1);
        }
    }

    /// Move the focused panel's cursor down.
    pub fn cursor_down(&mut self) {
        let len = self.focused_len();
        if let Some(cursor) = self.focused_cursor() {
            if *cursor + 1 < len {
                *cursor += 1;
            }
        }
    }

    /// Id of the row under the focused panel's cursor, if any.
    pub fn cursor_row_id(&self) -> Option<String> {
        match self.focus {
            Focus::CountInput => None,
            Focus::Provinces => self
                .visible_provinces()
                .get(self.province_cursor)
                .map(|p| p.id.clone()),
            Focus::Regencies => self
                .regencies
                .rows()
                .get(self.regency_cursor)
                .map(|r| r.id.clone()),
            Focus::Districts => self
                .districts
                .rows()
                .get(self.district_cursor)
                .map(|d| d.id.clone()),
        }
    }

    /// Clamp all cursors to their panel's current row count.
    pub fn clamp_cursors(&mut self) {
        let province_len = self.visible_provinces().len();
        self.province_cursor = self.province_cursor.min(province_len.saturating_sub(1));
        let regency_len = self.regencies.rows().len();
        self.regency_cursor = self.regency_cursor.min(regency_len.saturating_sub(1));
        let district_len = self.districts.rows().len();
        self.district_cursor = self.district_cursor.min(district_len.saturating_sub(1));
    }

    fn focused_len(&self) -> usize {
        match self.focus {
            Focus::CountInput => 0,
            Focus::Provinces => self.visible_provinces().len(),
            Focus::Regencies => self.regencies.rows().len(),
            Focus::Districts => self.districts.rows().len(),
        }
    }

    fn focused_cursor(&mut self) -> Option<&mut usize> {
        match self.focus {
            Focus::CountInput => None,
            Focus::Provinces => Some(&mut self.province_cursor),
            Focus::Regencies => Some(&mut self.regency_cursor),
            Focus::Districts => Some(&mut self.district_cursor),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn province(id: &str) -> Province {
        Province::new(id, format!("Province {id}"))
    }

    fn loaded_provinces(n: usize) -> LevelState<Province> {
        LevelState::Loaded((1..=n).map(|i| province(&i.to_string())).collect())
    }

    #[test]
    fn test_initial_state() {
        let state = BrowserState::new();
        assert!(!state.menu_visible);
        assert!(!state.count.is_set());
        assert!(state.visible_provinces().is_empty());
        assert_eq!(state.focus, Focus::CountInput);
    }

    #[test]
    fn test_input_reparses_on_every_edit() {
        let mut state = BrowserState::new();
        state.input_char('4');
        assert_eq!(state.count.get(), 4);
        state.input_char('0');
        assert!(!state.count.is_set()); // "40" is out of range
        state.input_backspace();
        assert_eq!(state.count.get(), 4);
    }

    #[test]
    fn test_visible_slice_is_min_of_count_and_len() {
        let mut state = BrowserState::new();
        state.provinces = loaded_provinces(34);
        state.input = "5".to_string();
        state.count = DisplayCount::parse(&state.input);
        let visible = state.visible_provinces();
        assert_eq!(visible.len(), 5);
        assert_eq!(visible[0].id, "1");
        assert_eq!(visible[4].id, "5");

        state.count = DisplayCount::parse("32");
        state.provinces = loaded_provinces(3);
        assert_eq!(state.visible_provinces().len(), 3);
    }

    #[test]
    fn test_unset_count_shows_nothing_even_when_loaded() {
        let mut state = BrowserState::new();
        state.provinces = loaded_provinces(10);
        state.count = DisplayCount::parse("40");
        assert!(state.visible_provinces().is_empty());
    }

    #[test]
    fn test_submit_reveals_menu_and_bumps_generation() {
        let mut state = BrowserState::new();
        let first = state.submit();
        assert!(state.menu_visible);
        assert!(state.provinces.is_loading());
        let second = state.submit();
        assert_eq!(second, first + 1);
    }

    #[test]
    fn test_select_province_clears_lower_levels() {
        let mut state = BrowserState::new();
        state.regencies = LevelState::Loaded(vec![Regency::new("1101", "Old", "11")]);
        state.districts = LevelState::Loaded(vec![District::new("110101", "Old", "1101")]);
        state.selected_regency = Some("1101".to_string());
        state.selected_district = Some("110101".to_string());

        state.select_province("12");

        assert_eq!(state.selected_province.as_deref(), Some("12"));
        assert_eq!(state.selected_regency, None);
        assert_eq!(state.selected_district, None);
        assert_eq!(state.districts, LevelState::NotLoaded);
        // Stale regency rows stay in place until new data arrives.
        assert!(state.regencies.is_loading());
        assert_eq!(state.regencies.rows().len(), 1);
    }

    #[test]
    fn test_select_province_bumps_both_lower_generations() {
        let mut state = BrowserState::new();
        let regency_generation = state.select_province("11");
        assert_eq!(regency_generation, 1);
        assert_eq!(state.district_generation, 1);

        state.select_province("12");
        assert_eq!(state.regency_generation, 2);
        assert_eq!(state.district_generation, 2);
    }

    #[test]
    fn test_select_regency_resets_district_selection_only() {
        let mut state = BrowserState::new();
        state.selected_province = Some("11".to_string());
        state.districts = LevelState::Loaded(vec![District::new("110101", "Old", "1101")]);
        state.selected_district = Some("110101".to_string());

        let generation = state.select_regency("1102");

        assert_eq!(state.selected_province.as_deref(), Some("11"));
        assert_eq!(state.selected_regency.as_deref(), Some("1102"));
        assert_eq!(state.selected_district, None);
        assert!(state.districts.is_loading());
        assert_eq!(generation, 1);
    }

    #[test]
    fn test_select_district_is_terminal() {
        let mut state = BrowserState::new();
        state.select_district("110101");
        assert_eq!(state.selected_district.as_deref(), Some("110101"));
        assert_eq!(state.district_generation, 0);
        assert!(!state.districts.is_loading());
    }

    #[test]
    fn test_cursor_stays_within_visible_slice() {
        let mut state = BrowserState::new();
        state.provinces = loaded_provinces(10);
        state.count = DisplayCount::parse("3");
        state.focus = Focus::Provinces;

        state.cursor_down();
        state.cursor_down();
        state.cursor_down(); // clamped at the last visible row
        assert_eq!(state.province_cursor, 2);
        assert_eq!(state.cursor_row_id().as_deref(), Some("3"));

        state.cursor_up();
        assert_eq!(state.province_cursor, 1);
    }

    #[test]
    fn test_shrinking_count_clamps_cursor() {
        let mut state = BrowserState::new();
        state.provinces = loaded_provinces(10);
        state.input = "9".to_string();
        state.count = DisplayCount::parse("9");
        state.focus = Focus::Provinces;
        state.province_cursor = 8;

        // "9" -> "" -> "2": the empty intermediate clamps the cursor to 0.
        state.input_backspace();
        state.input_char('2');
        assert_eq!(state.count.get(), 2);
        assert_eq!(state.province_cursor, 0);
        assert!(state.province_cursor < state.visible_provinces().len());
    }

    #[test]
    fn test_focus_cycles() {
        let mut state = BrowserState::new();
        state.focus_next();
        assert_eq!(state.focus, Focus::Provinces);
        state.focus_next();
        state.focus_next();
        state.focus_next();
        assert_eq!(state.focus, Focus::CountInput);
        state.focus_prev();
        assert_eq!(state.focus, Focus::Districts);
    }
}
