//! Core types for the wilayah region browser.
//!
//! This crate contains shared data structures used across all wilayah crates:
//! - Region entities (province, regency, district)
//! - Per-level load state
//! - The bounded display count
//! - Configuration types
//! - Error types

mod config;
mod count;
mod error;
mod level;
mod region;

pub use config::{config_path, ApiConfig, AppConfig, UiConfig, DEFAULT_BASE_URL};
pub use count::{DisplayCount, MAX_DISPLAY_COUNT};
pub use error::{ConfigError, FetchError};
pub use level::LevelState;
pub use region::{District, Province, Regency, Region};
