//! Configuration for the extraction workflow.
//!
//! Everything the workflow needs to know about its environment lives in
//! [`ExtractionConfig`], built via [`ExtractionConfigBuilder`]. The surface is
//! deliberately small: the endpoint is fixed per workflow instance, and there
//! are no retry or concurrency knobs because one submit means exactly one
//! request.

use crate::error::ExtractError;

/// Default extraction service address.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/extract";

/// Configuration for an upload-and-extract workflow.
///
/// Built via [`ExtractionConfig::builder()`] or
/// [`ExtractionConfig::default()`].
///
/// # Example
/// ```rust
/// use doc2fields::ExtractionConfig;
///
/// let config = ExtractionConfig::builder()
///     .endpoint("https://extract.example.com/extract")
///     .request_timeout_secs(30)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// URL the multipart POST is sent to. Default: [`DEFAULT_ENDPOINT`].
    ///
    /// Fixed for the lifetime of a workflow instance: every submit from that
    /// workflow goes to the same place. Point it at your deployment of the
    /// extraction service.
    pub endpoint: String,

    /// Whole-request timeout in seconds. Default: `None` (platform default).
    ///
    /// A submit is one-shot, so there is nothing to resume after a timeout;
    /// the attempt simply fails with the generic transport message. `None`
    /// leaves the decision to the HTTP stack, matching what a browser form
    /// post would do.
    pub request_timeout_secs: Option<u64>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl ExtractionConfig {
    /// Create a new builder for `ExtractionConfig`.
    pub fn builder() -> ExtractionConfigBuilder {
        ExtractionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ExtractionConfig`].
#[derive(Debug)]
pub struct ExtractionConfigBuilder {
    config: ExtractionConfig,
}

impl ExtractionConfigBuilder {
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.config.endpoint = url.into();
        self
    }

    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.config.request_timeout_secs = Some(secs);
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ExtractionConfig, ExtractError> {
        let c = &self.config;
        match reqwest::Url::parse(&c.endpoint) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => {
                return Err(ExtractError::InvalidConfig(format!(
                    "Endpoint must be http or https, got '{}'",
                    url.scheme()
                )));
            }
            Err(e) => {
                return Err(ExtractError::InvalidConfig(format!(
                    "Endpoint '{}' is not a valid URL: {e}",
                    c.endpoint
                )));
            }
        }
        if c.request_timeout_secs == Some(0) {
            return Err(ExtractError::InvalidConfig(
                "Request timeout must be ≥ 1 second".into(),
            ));
        }
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_service() {
        let c = ExtractionConfig::default();
        assert_eq!(c.endpoint, DEFAULT_ENDPOINT);
        assert!(c.request_timeout_secs.is_none());
    }

    #[test]
    fn builder_accepts_https_endpoint() {
        let c = ExtractionConfig::builder()
            .endpoint("https://extract.example.com/api/extract")
            .build()
            .unwrap();
        assert_eq!(c.endpoint, "https://extract.example.com/api/extract");
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = ExtractionConfig::builder()
            .endpoint("ftp://host/extract")
            .build()
            .unwrap_err();
        assert!(matches!(err, ExtractError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_unparseable_endpoint() {
        let err = ExtractionConfig::builder()
            .endpoint("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, ExtractError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_zero_timeout() {
        let err = ExtractionConfig::builder()
            .request_timeout_secs(0)
            .build()
            .unwrap_err();
        assert!(matches!(err, ExtractError::InvalidConfig(_)));
    }
}
