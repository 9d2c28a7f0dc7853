//! Browser state model and controller.

mod browser;
mod state;

pub use browser::{Browser, FetchOutcome};
pub use state::{BrowserState, Focus};
