//! The browser controller.
//!
//! One `Browser` owns all state and the directory handle. User actions are
//! dispatched synchronously; fetches are spawned onto the tokio runtime and
//! report back through an unbounded channel of [`FetchOutcome`]s, which the
//! event loop drains and applies.
//!
//! In-flight fetches are never cancelled. Instead, every fetch captures the
//! generation current at issue time and a completion whose generation no
//! longer matches the level's current one is discarded.

use std::sync::Arc;

use tokio::sync::mpsc;
use wilayah_client::Directory;
use wilayah_core::{District, FetchError, Province, Regency};

use crate::actions::BrowserAction;
use crate::model::state::{BrowserState, Focus};

// =============================================================================
// Fetch Outcome
// =============================================================================

/// Completion of one spawned fetch, tagged with its issue-time generation.
#[derive(Debug)]
pub enum FetchOutcome {
    Provinces {
        generation: u64,
        result: Result<Vec<Province>, FetchError>,
    },
    Regencies {
        generation: u64,
        result: Result<Vec<Regency>, FetchError>,
    },
    Districts {
        generation: u64,
        result: Result<Vec<District>, FetchError>,
    },
}

// =============================================================================
// Browser
// =============================================================================

/// Top-level controller: all browser state plus the directory boundary.
pub struct Browser {
    state: BrowserState,
    directory: Arc<dyn Directory>,
    outcomes: mpsc::UnboundedSender<FetchOutcome>,
}

impl Browser {
    /// Create a browser over a directory.
    ///
    /// The returned receiver yields fetch completions; the event loop must
    /// drain it and feed each outcome to [`Browser::apply`].
    pub fn new(directory: Arc<dyn Directory>) -> (Self, mpsc::UnboundedReceiver<FetchOutcome>) {
        let (outcomes, rx) = mpsc::unbounded_channel();
        let browser = Self {
            state: BrowserState::new(),
            directory,
            outcomes,
        };
        (browser, rx)
    }

    /// Read access to the state, for rendering.
    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    // -------------------------------------------------------------------------
    // Action Dispatch
    // -------------------------------------------------------------------------

    /// Dispatch a user action. Returns `true` when the browser should quit.
    pub fn dispatch(&mut self, action: BrowserAction) -> bool {
        match action {
            BrowserAction::InputChar(c) => self.state.input_char(c),
            BrowserAction::InputBackspace => self.state.input_backspace(),
            BrowserAction::SubmitCount => self.submit_count(),
            BrowserAction::FocusNext => self.state.focus_next(),
            BrowserAction::FocusPrev => self.state.focus_prev(),
            BrowserAction::CursorUp => self.state.cursor_up(),
            BrowserAction::CursorDown => self.state.cursor_down(),
            BrowserAction::Activate => self.activate_cursor(),
            BrowserAction::ToggleMenu => self.state.toggle_menu(),
            BrowserAction::Quit => return true,
        }
        false
    }

    fn submit_count(&mut self) {
        let generation = self.state.submit();
        tracing::info!(count = self.state.count.get(), "count submitted");

        let fut = self.directory.provinces();
        let tx = self.outcomes.clone();
        tokio::spawn(async move {
            let result = fut.await;
            let _ = tx.send(FetchOutcome::Provinces { generation, result });
        });
    }

    /// Activate the row under the focused panel's cursor.
    ///
    /// Selecting a province or regency issues exactly one fetch for the
    /// level below; selecting a district only records the selection.
    fn activate_cursor(&mut self) {
        let Some(id) = self.state.cursor_row_id() else {
            return;
        };
        match self.state.focus {
            Focus::CountInput => {}
            Focus::Provinces => self.select_province(&id),
            Focus::Regencies => self.select_regency(&id),
            Focus::Districts => self.state.select_district(&id),
        }
    }

    fn select_province(&mut self, id: &str) {
        let generation = self.state.select_province(id);
        tracing::info!(province_id = id, "province selected");

        let fut = self.directory.regencies(id);
        let tx = self.outcomes.clone();
        tokio::spawn(async move {
            let result = fut.await;
            let _ = tx.send(FetchOutcome::Regencies { generation, result });
        });
    }

    fn select_regency(&mut self, id: &str) {
        let generation = self.state.select_regency(id);
        tracing::info!(regency_id = id, "regency selected");

        let fut = self.directory.districts(id);
        let tx = self.outcomes.clone();
        tokio::spawn(async move {
            let result = fut.await;
            let _ = tx.send(FetchOutcome::Districts { generation, result });
        });
    }

    // -------------------------------------------------------------------------
    // Outcome Application
    // -------------------------------------------------------------------------

    /// Apply one fetch completion.
    ///
    /// Failures are logged and swallowed: the level reverts to its pre-call
    /// value and the user retries by repeating the triggering action.
    pub fn apply(&mut self, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Provinces { generation, result } => {
                if generation != self.state.province_generation {
                    tracing::debug!(generation, "discarding superseded province response");
                    return;
                }
                match result {
                    Ok(rows) => self.state.provinces.finish(rows),
                    Err(e) => {
                        tracing::error!(error = %e, "Error fetching provinces");
                        self.state.provinces.fail();
                    }
                }
            }
            FetchOutcome::Regencies { generation, result } => {
                if generation != self.state.regency_generation {
                    tracing::debug!(generation, "discarding superseded regency response");
                    return;
                }
                match result {
                    Ok(rows) => self.state.regencies.finish(rows),
                    Err(e) => {
                        tracing::error!(error = %e, "Error fetching regencies");
                        self.state.regencies.fail();
                    }
                }
            }
            FetchOutcome::Districts { generation, result } => {
                if generation != self.state.district_generation {
                    tracing::debug!(generation, "discarding superseded district response");
                    return;
                }
                match result {
                    Ok(rows) => self.state.districts.finish(rows),
                    Err(e) => {
                        tracing::error!(error = %e, "Error fetching districts");
                        self.state.districts.fail();
                    }
                }
            }
        }
        self.state.clamp_cursors();
    }
}

// =============================================================================
// Mock Directory for Testing
// =============================================================================

#[cfg(test)]
pub mod mock {
    use super::*;
    use futures::future::BoxFuture;
    use parking_lot::Mutex;
    use std::time::Duration;

    /// Mock directory with canned responses and a call log.
    pub struct MockDirectory {
        pub provinces: Arc<Mutex<Vec<Province>>>,
        pub regencies: Arc<Mutex<Vec<Regency>>>,
        pub districts: Arc<Mutex<Vec<District>>>,
        pub fail_provinces: Arc<Mutex<bool>>,
        pub fail_regencies: Arc<Mutex<bool>>,
        pub fail_districts: Arc<Mutex<bool>>,
        pub delay: Duration,
        /// Every call, e.g. `"provinces"` or `"regencies/11"`.
        pub calls: Arc<Mutex<Vec<String>>>,
    }

    impl MockDirectory {
        /// Create a mock that returns empty lists.
        pub fn new() -> Self {
            Self {
                provinces: Arc::new(Mutex::new(Vec::new())),
                regencies: Arc::new(Mutex::new(Vec::new())),
                districts: Arc::new(Mutex::new(Vec::new())),
                fail_provinces: Arc::new(Mutex::new(false)),
                fail_regencies: Arc::new(Mutex::new(false)),
                fail_districts: Arc::new(Mutex::new(false)),
                delay: Duration::ZERO,
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Set the canned province list.
        pub fn with_provinces(self, provinces: Vec<Province>) -> Self {
            *self.provinces.lock() = provinces;
            self
        }

        /// Set the canned regency list (returned for any province id).
        pub fn with_regencies(self, regencies: Vec<Regency>) -> Self {
            *self.regencies.lock() = regencies;
            self
        }

        /// Set the canned district list (returned for any regency id).
        pub fn with_districts(self, districts: Vec<District>) -> Self {
            *self.districts.lock() = districts;
            self
        }

        /// Make province fetches fail.
        pub fn with_failing_provinces(self) -> Self {
            *self.fail_provinces.lock() = true;
            self
        }

        /// Make regency fetches fail.
        pub fn with_failing_regencies(self) -> Self {
            *self.fail_regencies.lock() = true;
            self
        }

        /// Add an artificial response delay.
        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }

        /// Calls recorded so far.
        pub fn recorded_calls(&self) -> Vec<String> {
            self.calls.lock().clone()
        }

        fn respond<T: Clone + Send + 'static>(
            &self,
            call: String,
            data: &Arc<Mutex<Vec<T>>>,
            fail: &Arc<Mutex<bool>>,
        ) -> BoxFuture<'static, Result<Vec<T>, FetchError>> {
            self.calls.lock().push(call);
            let data = data.clone();
            let fail = *fail.lock();
            let delay = self.delay;
            Box::pin(async move {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                if fail {
                    Err(FetchError::Status(500))
                } else {
                    Ok(data.lock().clone())
                }
            })
        }
    }

    impl Default for MockDirectory {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Directory for MockDirectory {
        fn provinces(&self) -> BoxFuture<'static, Result<Vec<Province>, FetchError>> {
            self.respond("provinces".to_string(), &self.provinces, &self.fail_provinces)
        }

        fn regencies(
            &self,
            province_id: &str,
        ) -> BoxFuture<'static, Result<Vec<Regency>, FetchError>> {
            self.respond(
                format!("regencies/{province_id}"),
                &self.regencies,
                &self.fail_regencies,
            )
        }

        fn districts(
            &self,
            regency_id: &str,
        ) -> BoxFuture<'static, Result<Vec<District>, FetchError>> {
            self.respond(
                format!("districts/{regency_id}"),
                &self.districts,
                &self.fail_districts,
            )
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
