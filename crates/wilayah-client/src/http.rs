//! HTTP implementation of the directory boundary.

use futures::future::BoxFuture;
use serde::de::DeserializeOwned;
use wilayah_core::{District, FetchError, Province, Regency};

use crate::Directory;

/// Directory client over the public region API.
///
/// No authentication, no retry, and no explicit timeout: timeouts are
/// delegated to the underlying client's defaults.
#[derive(Debug, Clone)]
pub struct HttpDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl HttpDirectory {
    /// Create a client against the given API root (no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent(concat!("wilayah/", env!("CARGO_PKG_VERSION")))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into(),
        }
    }

    fn provinces_url(&self) -> String {
        format!("{}/provinces.json", self.base_url)
    }

    fn regencies_url(&self, province_id: &str) -> String {
        format!("{}/regencies/{}.json", self.base_url, province_id)
    }

    fn districts_url(&self, regency_id: &str) -> String {
        format!("{}/districts/{}.json", self.base_url, regency_id)
    }

    fn get_json<T>(&self, url: String) -> BoxFuture<'static, Result<Vec<T>, FetchError>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let client = self.client.clone();
        Box::pin(async move {
            tracing::debug!(%url, "directory fetch");

            let response = client
                .get(&url)
                .send()
                .await
                .map_err(|e| FetchError::Http(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            response
                .json::<Vec<T>>()
                .await
                .map_err(|e| FetchError::Decode(e.to_string()))
        })
    }
}

impl Directory for HttpDirectory {
    fn provinces(&self) -> BoxFuture<'static, Result<Vec<Province>, FetchError>> {
        self.get_json(self.provinces_url())
    }

    fn regencies(&self, province_id: &str) -> BoxFuture<'static, Result<Vec<Regency>, FetchError>> {
        self.get_json(self.regencies_url(province_id))
    }

    fn districts(&self, regency_id: &str) -> BoxFuture<'static, Result<Vec<District>, FetchError>> {
        self.get_json(self.districts_url(regency_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_urls() {
        let directory = HttpDirectory::new("https://example.test/api");
        assert_eq!(
            directory.provinces_url(),
            "https://example.test/api/provinces.json"
        );
        assert_eq!(
            directory.regencies_url("11"),
            "https://example.test/api/regencies/11.json"
        );
        assert_eq!(
            directory.districts_url("1171"),
            "https://example.test/api/districts/1171.json"
        );
    }

    #[test]
    fn test_payload_shapes_decode() {
        let provinces: Vec<Province> =
            serde_json::from_str(r#"[{"id":"11","name":"ACEH"},{"id":"12","name":"SUMATERA UTARA"}]"#)
                .unwrap();
        assert_eq!(provinces.len(), 2);
        assert_eq!(provinces[0], Province::new("11", "ACEH"));

        let regencies: Vec<Regency> = serde_json::from_str(
            r#"[{"id":"1171","province_id":"11","name":"KOTA BANDA ACEH"}]"#,
        )
        .unwrap();
        assert_eq!(regencies[0].province_id, "11");

        let districts: Vec<District> = serde_json::from_str(
            r#"[{"id":"117101","regency_id":"1171","name":"BAITURRAHMAN"}]"#,
        )
        .unwrap();
        assert_eq!(districts[0].regency_id, "1171");
    }

    #[test]
    fn test_non_array_payload_is_a_decode_error() {
        let result = serde_json::from_str::<Vec<Province>>(r#"{"error":"oops"}"#);
        assert!(result.is_err());
    }
}
