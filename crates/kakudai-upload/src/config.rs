//! Endpoint and captcha configuration.
//!
//! Values are baked in at compile time from `KAKUDAI_*` environment
//! variables; there is no runtime reconfiguration. Deployments override
//! the development defaults by exporting the variables before the build.

/// Development default for the upscaling service base URL.
const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Default API version path segment.
const DEFAULT_API_VERSION: &str = "v1";

/// Static configuration for the upload endpoint and the captcha gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the upscaling service.
    pub base_url: String,
    /// API version path segment appended to the base URL. May be empty,
    /// in which case requests go to the base URL itself.
    pub api_version: String,
    /// Site key for the third-party challenge widget. `None` disables
    /// the captcha gate entirely.
    pub captcha_site_key: Option<String>,
}

impl ApiConfig {
    /// Read the configuration baked in at compile time.
    ///
    /// `KAKUDAI_API_BASE_URL` and `KAKUDAI_API_VERSION` fall back to
    /// the development defaults; a missing `KAKUDAI_CAPTCHA_SITE_KEY`
    /// disables the captcha gate.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self {
            base_url: option_env!("KAKUDAI_API_BASE_URL")
                .unwrap_or(DEFAULT_BASE_URL)
                .to_owned(),
            api_version: option_env!("KAKUDAI_API_VERSION")
                .unwrap_or(DEFAULT_API_VERSION)
                .to_owned(),
            captcha_site_key: option_env!("KAKUDAI_CAPTCHA_SITE_KEY").map(str::to_owned),
        }
    }

    /// The upload endpoint: base URL joined with the version segment.
    ///
    /// Redundant slashes on either side of the join are dropped. An
    /// empty version segment yields the bare base URL.
    #[must_use]
    pub fn endpoint(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let version = self.api_version.trim_matches('/');
        if version.is_empty() {
            base.to_owned()
        } else {
            format!("{base}/{version}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str, api_version: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_owned(),
            api_version: api_version.to_owned(),
            captcha_site_key: None,
        }
    }

    #[test]
    fn endpoint_joins_base_and_version() {
        assert_eq!(
            config("http://localhost:8000", "v1").endpoint(),
            "http://localhost:8000/v1"
        );
    }

    #[test]
    fn endpoint_drops_redundant_slashes() {
        assert_eq!(
            config("http://localhost:8000/", "/v1/").endpoint(),
            "http://localhost:8000/v1"
        );
    }

    #[test]
    fn empty_version_yields_bare_base_url() {
        assert_eq!(
            config("http://localhost:8000/", "").endpoint(),
            "http://localhost:8000"
        );
    }

    #[test]
    fn build_env_defaults_apply() {
        // The build environment of this repository does not set the
        // KAKUDAI_* variables, so the development defaults are used.
        let cfg = ApiConfig::from_build_env();
        assert_eq!(cfg.endpoint(), "http://localhost:8000/v1");
        assert_eq!(cfg.captcha_site_key, None);
    }
}
