//! Configuration file support for the landing page.
//!
//! Loads optional `crescent-site.toml` from the site root. Every key is
//! optional; missing keys fall back to the published copy.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, SiteError};

/// Default config file name looked up by [`SiteConfig::load`].
pub const CONFIG_FILE_NAME: &str = "crescent-site.toml";

/// Placeholder endpoint shipped until the form service account is set up.
pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/your-endpoint";

/// Characters ending the `scheme://host[:port]` part of the form endpoint.
const ORIGIN_TERMINATORS: [char; 4] = ['/', '?', '#', ';'];

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub meta: PageMeta,
    pub contact: ContactConfig,
}

/// Document metadata placed in `<head>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub viewport: String,
    /// Value of the `lang` attribute on `<html>`
    pub lang: String,
}

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            title: "Crescent C Ranch".into(),
            description: "Crescent C Ranch — Adaptive Multi‑Paddock grazing in South Texas.".into(),
            viewport: "width=device-width, initial-scale=1".into(),
            lang: "en".into(),
        }
    }
}

/// Contact details and the external form handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// URL the contact form posts to. Treated as opaque beyond being http(s).
    pub form_endpoint: String,
    pub phone: String,
    pub email: String,
    pub location: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            form_endpoint: DEFAULT_FORM_ENDPOINT.into(),
            phone: "(###) ###‑####".into(),
            email: "info@crescentcranch.com".into(),
            location: "La Salle County, Texas".into(),
        }
    }
}

impl SiteConfig {
    /// Load config from `crescent-site.toml` in the given root directory.
    /// Returns the default config if the file doesn't exist.
    pub fn load(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load config from a specific path. The file must exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SiteError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| SiteError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), endpoint = %config.contact.form_endpoint, "loaded config");
        Ok(config)
    }

    /// Reject values the page cannot be built from.
    pub fn validate(&self) -> Result<()> {
        if self.meta.title.trim().is_empty() {
            return Err(SiteError::InvalidConfig("meta.title must not be empty".into()));
        }

        let endpoint = self.contact.form_endpoint.trim();
        if endpoint.is_empty() {
            return Err(SiteError::InvalidConfig(
                "contact.form_endpoint must not be empty".into(),
            ));
        }
        let has_host = endpoint
            .strip_prefix("https://")
            .or_else(|| endpoint.strip_prefix("http://"))
            .is_some_and(|rest| !rest.starts_with(ORIGIN_TERMINATORS) && !rest.is_empty());
        if !has_host {
            return Err(SiteError::InvalidConfig(format!(
                "contact.form_endpoint must be an absolute http(s) URL, got {endpoint:?}"
            )));
        }
        if endpoint.chars().any(char::is_whitespace) {
            return Err(SiteError::InvalidConfig(format!(
                "contact.form_endpoint must not contain whitespace, got {endpoint:?}"
            )));
        }
        // both separate source lists inside the content security policy
        if endpoint.contains([';', ',']) {
            return Err(SiteError::InvalidConfig(format!(
                "contact.form_endpoint must not contain ';' or ',', got {endpoint:?}"
            )));
        }
        Ok(())
    }

    /// Scheme and host of the form endpoint, e.g. `https://formspree.io`.
    ///
    /// Used for the `form-action` directive of the content security policy.
    pub fn form_origin(&self) -> &str {
        let endpoint = self.contact.form_endpoint.trim();
        let after_scheme = endpoint.find("://").map_or(0, |idx| idx + 3);
        match endpoint[after_scheme..].find(ORIGIN_TERMINATORS) {
            Some(end) => &endpoint[..after_scheme + end],
            None => endpoint,
        }
    }

    /// Serialize the effective configuration back to TOML.
    pub fn to_toml(&self) -> String {
        // Plain strings only, serialization cannot fail.
        toml::to_string_pretty(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.meta.title, "Crescent C Ranch");
        assert_eq!(config.contact.form_endpoint, DEFAULT_FORM_ENDPOINT);
        assert_eq!(config.contact.email, "info@crescentcranch.com");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = SiteConfig::load(temp.path()).expect("defaults");
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_load_from_missing_path_is_error() {
        let temp = TempDir::new().expect("temp dir");
        let err = SiteConfig::load_from_path(&temp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, SiteError::ReadConfig { .. }));
    }

    #[test]
    fn test_load_partial_config() {
        let temp = TempDir::new().expect("temp dir");
        let mut file =
            std::fs::File::create(temp.path().join(CONFIG_FILE_NAME)).expect("create config");
        writeln!(
            file,
            r#"
[contact]
form_endpoint = "https://forms.example.com/f/abc123"
phone = "(830) 555-0100"
"#
        )
        .expect("write config");

        let config = SiteConfig::load(temp.path()).expect("load");
        assert_eq!(
            config.contact.form_endpoint,
            "https://forms.example.com/f/abc123"
        );
        assert_eq!(config.contact.phone, "(830) 555-0100");
        // untouched keys keep their defaults
        assert_eq!(config.contact.location, "La Salle County, Texas");
        assert_eq!(config.meta, PageMeta::default());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[contact\nform_endpoint = ").expect("write config");

        let err = SiteConfig::load(temp.path()).unwrap_err();
        assert!(matches!(err, SiteError::ParseConfig { .. }));
    }

    #[test]
    fn test_validate_rejects_bad_endpoints() {
        for endpoint in ["", "   ", "formspree.io/f/x", "ftp://example.com", "https://", "https:///x", "https://a b"] {
            let mut config = SiteConfig::default();
            config.contact.form_endpoint = endpoint.into();
            assert!(
                matches!(config.validate(), Err(SiteError::InvalidConfig(_))),
                "endpoint {endpoint:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let mut config = SiteConfig::default();
        config.meta.title = " ".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_form_origin() {
        let mut config = SiteConfig::default();
        assert_eq!(config.form_origin(), "https://formspree.io");

        config.contact.form_endpoint = "http://localhost:8080".into();
        assert_eq!(config.form_origin(), "http://localhost:8080");

        for endpoint in ["https://h?x=1", "https://h#f", "https://h;sandbox", "https://h/f/abc"] {
            config.contact.form_endpoint = endpoint.into();
            assert_eq!(config.form_origin(), "https://h", "{endpoint}");
        }
    }

    #[test]
    fn test_validate_endpoint_without_path() {
        let mut config = SiteConfig::default();
        for endpoint in ["https://forms.example.com?form=ranch", "https://forms.example.com#top"] {
            config.contact.form_endpoint = endpoint.into();
            assert!(config.validate().is_ok(), "{endpoint}");
            assert_eq!(config.form_origin(), "https://forms.example.com");
        }

        for endpoint in ["https://forms.example.com;sandbox", "https://a.example,https://b.example", "https://?x=1"] {
            config.contact.form_endpoint = endpoint.into();
            assert!(
                matches!(config.validate(), Err(SiteError::InvalidConfig(_))),
                "endpoint {endpoint:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_to_toml_round_trips() {
        let mut config = SiteConfig::default();
        config.contact.phone = "(830) 555-0100".into();
        let parsed: SiteConfig = toml::from_str(&config.to_toml()).expect("parse");
        assert_eq!(parsed, config);
    }
}
