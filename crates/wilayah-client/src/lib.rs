//! Client for the `api-wilayah-indonesia` directory service.
//!
//! The [`Directory`] trait is the async boundary between the browser and
//! the outside world; [`HttpDirectory`] is the real implementation over
//! three read-only JSON endpoints. The trait returns boxed futures so the
//! caller decides how to spawn them, and so tests can substitute a mock.

mod directory;
mod http;

pub use directory::Directory;
pub use http::HttpDirectory;
