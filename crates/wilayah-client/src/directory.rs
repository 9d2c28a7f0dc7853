//! The directory service boundary.

use futures::future::BoxFuture;
use wilayah_core::{District, FetchError, Province, Regency};

/// Read-only access to the region directory.
///
/// All three operations return the full list for their scope; there is no
/// pagination and no write surface. Implementations must be `Send + Sync`
/// so fetches can be spawned from the UI thread.
pub trait Directory: Send + Sync {
    /// Fetch the full province list.
    fn provinces(&self) -> BoxFuture<'static, Result<Vec<Province>, FetchError>>;

    /// Fetch the regencies of one province.
    fn regencies(&self, province_id: &str) -> BoxFuture<'static, Result<Vec<Regency>, FetchError>>;

    /// Fetch the districts of one regency.
    fn districts(&self, regency_id: &str) -> BoxFuture<'static, Result<Vec<District>, FetchError>>;
}
