//! Centralized actions for the region browser.
//!
//! Every user-visible behavior is an action dispatched to the controller;
//! the keymap translates key events into these.

/// An action the user can trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserAction {
    // -------------------------------------------------------------------------
    // Count Form
    // -------------------------------------------------------------------------
    /// Append a character to the count input and re-parse it.
    InputChar(char),

    /// Delete the last character of the count input and re-parse it.
    InputBackspace,

    /// Submit the form: reveal the lists and fetch provinces.
    SubmitCount,

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------
    /// Move focus to the next area (input → provinces → regencies → districts).
    FocusNext,

    /// Move focus to the previous area.
    FocusPrev,

    /// Move the focused panel's cursor up.
    CursorUp,

    /// Move the focused panel's cursor down.
    CursorDown,

    /// Activate the row under the cursor (select it).
    Activate,

    // -------------------------------------------------------------------------
    // Misc
    // -------------------------------------------------------------------------
    /// Show or hide the list area (the original burger button).
    ToggleMenu,

    /// Quit the browser.
    Quit,
}
