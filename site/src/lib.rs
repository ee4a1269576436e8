//! # crescent-site
//!
//! Leptos SSR renderer for the Crescent C Ranch landing page.
//!
//! The page is a fixed stack of stateless sections (navigation, hero, about,
//! grazing, cattle, hunting, carbon, contact, footer) rendered once into a
//! self-contained HTML document. The only inputs are the [`SiteConfig`]
//! (document metadata, contact details, form endpoint) and the copyright
//! year printed in the footer.
//!
//! ## Quick Start
//!
//! ```rust
//! use crescent_site::{render_page, SiteConfig};
//!
//! let html = render_page(&SiteConfig::default(), 2026);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains(r#"id="contact""#));
//! ```
//!
//! ## Architecture
//!
//! - [`content`] - static copy and the section structure
//! - [`config`] - TOML configuration
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS and content security policy
//! - [`audit`] - structural checks on rendered HTML
//!
//! No reactive runtime or hydration is involved: the output is plain HTML
//! and the contact form is submitted by the browser straight to the
//! external form service.

pub mod audit;
pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod styles;

use std::path::Path;

use chrono::Datelike;
use components::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use tracing::debug;

pub use audit::{AuditIssue, AuditReport, audit_page};
pub use config::SiteConfig;
pub use error::{Result, SiteError};

/// Render the complete landing page.
///
/// The output depends only on `config` and `year`: rendering twice with the
/// same arguments yields identical bytes.
///
/// # Example
///
/// ```rust
/// use crescent_site::{render_page, SiteConfig};
///
/// let html = render_page(&SiteConfig::default(), 2026);
/// assert!(html.contains("© 2026 Crescent C Ranch"));
/// ```
pub fn render_page(config: &SiteConfig, year: i32) -> String {
    debug!(year, endpoint = %config.contact.form_endpoint, "rendering landing page");
    let doc = view! {
        <PageDocument config=config.clone() year=year />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render the page with the footer showing the current local year.
pub fn render_page_now(config: &SiteConfig) -> String {
    render_page(config, current_year())
}

/// Calendar year on the local clock.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Write rendered HTML to `path`, creating parent directories as needed.
pub fn write_page(path: &Path, html: &str) -> Result<()> {
    let to_write_error = |source| SiteError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(to_write_error)?;
    }
    std::fs::write(path, html).map_err(to_write_error)?;
    debug!(path = %path.display(), bytes = html.len(), "wrote page");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{NAV_LINKS, SectionId};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn page() -> String {
        render_page(&SiteConfig::default(), 2026)
    }

    #[test]
    fn renders_document_shell() {
        let html = page();

        assert!(html.starts_with("<!DOCTYPE html>\n<html"));
        assert!(html.contains(r#"lang="en""#));
        assert!(html.contains("<title>Crescent C Ranch</title>"));
        assert!(html.contains(r#"name="viewport" content="width=device-width, initial-scale=1""#));
        assert!(html.contains("Adaptive Multi‑Paddock grazing in South Texas."));
        assert!(html.contains("Content-Security-Policy"));
    }

    #[test]
    fn each_nav_target_exists_once() {
        let html = page();
        for link in NAV_LINKS {
            let id = format!(r#"id="{}""#, link.target.as_str());
            assert_eq!(html.matches(&id).count(), 1, "{id}");
            assert!(html.contains(&format!(r##"href="#{}""##, link.target.as_str())));
        }
    }

    #[test]
    fn sections_render_in_page_order() {
        let html = page();
        let positions: Vec<usize> = SectionId::PAGE_ORDER
            .iter()
            .map(|s| {
                let marker = format!(r#"data-section="{}""#, s.as_str());
                assert_eq!(html.matches(&marker).count(), 1, "{marker}");
                html.find(&marker).unwrap_or_default()
            })
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn contact_form_posts_to_configured_endpoint() {
        let mut config = SiteConfig::default();
        config.contact.form_endpoint = "https://forms.example.com/f/ranch".into();
        let html = render_page(&config, 2026);

        assert!(html.contains(r#"action="https://forms.example.com/f/ranch""#));
        assert!(html.contains(r#"method="post""#));
        assert!(!html.contains("your-endpoint"));
        assert!(html.contains(r#"name="name""#));
        assert!(html.contains(r#"type="email""#));
        assert!(html.contains("<textarea"));
        assert_eq!(html.matches("required").count(), 3);
    }

    #[test]
    fn contact_details_come_from_config() {
        let mut config = SiteConfig::default();
        config.contact.phone = "(830) 555-0100".into();
        config.contact.email = "office@example.com".into();
        let html = render_page(&config, 2026);

        assert!(html.contains("(830) 555-0100"));
        assert!(html.contains("office@example.com"));
        assert!(html.contains("La Salle County, Texas"));
    }

    #[test]
    fn footer_shows_render_year() {
        assert!(page().contains("© 2026 Crescent C Ranch. All rights reserved."));
        let now = render_page_now(&SiteConfig::default());
        assert!(now.contains(&content::copyright_line(current_year())));
    }

    #[test]
    fn output_is_stable_apart_from_year() {
        let config = SiteConfig::default();
        assert_eq!(render_page(&config, 2026), render_page(&config, 2026));

        let older = render_page(&config, 2025).replace("© 2025", "© 2026");
        assert_eq!(older, page());
    }

    #[test]
    fn renders_section_copy() {
        let html = page();
        for text in [
            "A family operation with a regeneration mandate",
            "Our grazing philosophy",
            "Cattle &amp; custom grazing",
            "Hunting &amp; habitat",
            "Carbon impact",
            "Get in touch",
            "10,000+ acres",
            "Water everywhere",
            "Low‑stress stockmanship",
            "Pack it in, pack it out.",
            "carbon impact reduction",
            "We respect gates—digital and real. No spam.",
        ] {
            assert!(html.contains(text), "missing {text:?}");
        }
    }

    #[test]
    fn write_page_creates_parent_dirs() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("dist").join("index.html");
        write_page(&path, "<!DOCTYPE html>").expect("write");
        assert_eq!(std::fs::read_to_string(&path).expect("read"), "<!DOCTYPE html>");
    }
}
