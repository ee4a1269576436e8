//! CSS and security policy for the landing page.
//!
//! The stylesheet is inlined into `<head>` so the rendered file is
//! self-contained apart from the two photographs.
//!
//! # Customization
//!
//! ```rust
//! use crescent_site::styles::SITE_CSS;
//!
//! let my_css = ".hero-title { letter-spacing: 0; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! assert!(combined.ends_with("}"));
//! ```

use crate::config::SiteConfig;

/// Host serving the hero and cattle photographs.
pub const IMAGE_ORIGIN: &str = "https://images.unsplash.com";

/// Content security policy for the page.
///
/// No scripts run on the page. Images may come from [`IMAGE_ORIGIN`] and the
/// contact form may only post to the configured endpoint's origin.
pub fn content_security_policy(config: &SiteConfig) -> String {
    format!(
        "default-src 'self'; img-src 'self' data: {IMAGE_ORIGIN}; style-src 'self' 'unsafe-inline'; \
script-src 'none'; connect-src 'none'; base-uri 'none'; form-action {};",
        config.form_origin()
    )
}

/// Complete CSS for the page - light, earthy palette.
///
/// Layout is mobile-first: two-column grids and the navigation links only
/// appear from 768px up.
pub const SITE_CSS: &str = r#"
:root {
    --bg: #ffffff;
    --bg-soft: #f9fafb;
    --green-wash: rgba(220, 252, 231, 0.6);
    --green-band: rgba(240, 253, 244, 0.5);
    --amber-band: rgba(255, 251, 235, 0.4);
    --text: #111827;
    --text-body: #374151;
    --text-muted: #4b5563;
    --text-faint: #6b7280;
    --border: #e5e7eb;
    --accent: #166534;
    --accent-hover: #14532d;
    --radius: 1.5rem;
    --container-max: 1120px;
    --font-sans: ui-sans-serif, system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    color: var(--text);
    background: var(--bg);
    line-height: 1.6;
}

h1, h2, h4, p {
    margin: 0;
}

a {
    color: inherit;
    text-decoration: none;
}

.container {
    width: 100%;
    max-width: var(--container-max);
    margin: 0 auto;
    padding-left: 1.5rem;
    padding-right: 1.5rem;
}

/* Navigation */
.site-header {
    position: sticky;
    top: 0;
    z-index: 50;
    background: rgba(255, 255, 255, 0.9);
    border-bottom: 1px solid var(--border);
    backdrop-filter: blur(8px);
}

.site-header .container {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding-top: 0.75rem;
    padding-bottom: 0.75rem;
}

.nav-links {
    display: none;
    align-items: center;
    gap: 1.5rem;
    font-size: 0.875rem;
}

.nav-sections {
    display: flex;
    align-items: center;
    gap: 1.5rem;
}

.nav-links a:hover {
    color: var(--text-body);
}

/* Brand mark */
.brand {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.brand-mark {
    position: relative;
    width: 2rem;
    height: 2rem;
}

.brand-ring {
    position: absolute;
    inset: 0;
    border: 1px solid currentColor;
    border-radius: 9999px;
}

.brand-ring-small {
    position: absolute;
    top: -0.25rem;
    left: -0.25rem;
    width: 1.25rem;
    height: 1.25rem;
    border: 1px solid currentColor;
    border-radius: 9999px;
}

.brand-initial {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 0.75rem;
}

.brand-name {
    font-weight: 600;
    letter-spacing: 0.025em;
}

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    padding: 0.5rem 1rem;
    border-radius: 1rem;
    font-size: 0.875rem;
    font-weight: 500;
    border: 1px solid transparent;
    cursor: pointer;
    transition: background 0.15s ease;
}

.btn-primary {
    background: var(--accent);
    color: #ffffff;
}

.btn-primary:hover {
    background: var(--accent-hover);
}

.btn-outline {
    border-color: var(--border);
    background: var(--bg);
}

.btn-outline:hover {
    background: var(--bg-soft);
}

.actions {
    display: flex;
    gap: 0.75rem;
    margin-top: 1.5rem;
}

/* Sections */
.section {
    padding-top: 4rem;
    padding-bottom: 4rem;
}

.band {
    border-top: 1px solid var(--border);
    border-bottom: 1px solid var(--border);
}

.band-green {
    background: linear-gradient(to bottom, var(--bg), var(--green-band));
}

.band-amber {
    background: linear-gradient(to bottom, var(--bg), var(--amber-band));
}

.band-gray {
    background: linear-gradient(to bottom, var(--bg), var(--bg-soft));
    border-bottom: 0;
}

.two-col {
    display: grid;
    gap: 2.5rem;
    align-items: center;
}

.two-col.align-start {
    align-items: start;
}

.section-title {
    font-size: 1.875rem;
    font-weight: 600;
    letter-spacing: -0.025em;
    line-height: 1.2;
}

.narrative {
    margin-top: 1rem;
    color: var(--text-body);
}

/* Hero */
.hero {
    position: relative;
    overflow: hidden;
}

.hero-wash {
    position: absolute;
    inset: 0;
    background: linear-gradient(to bottom, var(--green-wash), transparent);
}

.hero .two-col {
    position: relative;
}

.hero-title {
    font-size: 2.25rem;
    font-weight: 600;
    letter-spacing: -0.025em;
    line-height: 1.15;
}

.wavy {
    text-decoration: underline wavy;
}

.lead {
    margin-top: 1.25rem;
    max-width: 36rem;
    color: var(--text-body);
}

/* Photographs */
.media {
    position: relative;
    aspect-ratio: 4 / 3;
    border-radius: var(--radius);
    overflow: hidden;
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 8px 10px -6px rgba(0, 0, 0, 0.1);
}

.media-image {
    position: absolute;
    inset: 0;
    background-size: cover;
    background-position: center;
}

.media-sheen {
    position: absolute;
    inset: 0;
    background: linear-gradient(to top right, rgba(255, 255, 255, 0.2), transparent);
}

/* Feature callouts */
.feature-grid {
    display: grid;
    gap: 1.5rem;
    margin-top: 1.5rem;
}

.feature-list {
    display: flex;
    flex-direction: column;
    gap: 1.25rem;
    margin-top: 1.5rem;
}

.feature {
    display: flex;
    align-items: flex-start;
    gap: 1rem;
}

.feature h4 {
    font-weight: 600;
}

.feature p {
    font-size: 0.875rem;
    color: var(--text-body);
}

.badge {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    flex-shrink: 0;
    width: 2.25rem;
    height: 2.25rem;
    border-radius: 9999px;
    background: var(--green-wash);
    color: var(--accent);
}

/* Cards */
.card {
    border: 1px solid var(--border);
    border-radius: var(--radius);
    background: var(--bg);
    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    list-style: none;
}

.card-body {
    padding: 1.5rem;
}

.stack {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    font-size: 0.875rem;
    color: var(--text-body);
}

.stack.tight {
    gap: 0.75rem;
}

.checklist-grid {
    display: grid;
    gap: 1rem;
}

.checklist-grid p {
    font-weight: 500;
}

.topic-grid {
    display: grid;
    gap: 1rem;
    margin: 1.5rem 0 0;
    padding: 0;
    font-size: 0.875rem;
}

/* Contact */
.contact-details {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
    margin-top: 1.5rem;
    font-size: 0.875rem;
    color: var(--text-body);
}

.contact-line {
    display: flex;
    align-items: center;
    gap: 0.5rem;
}

.contact-form,
.form-fields {
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
}

.form-input {
    width: 100%;
    padding: 0.5rem 0.75rem;
    border: 1px solid var(--border);
    border-radius: 0.75rem;
    font: inherit;
}

.form-footer {
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.fine-print {
    font-size: 0.75rem;
    color: var(--text-faint);
}

/* Footer */
.site-footer {
    border-top: 1px solid var(--border);
}

.site-footer .container {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: space-between;
    gap: 0.75rem;
    padding-top: 2rem;
    padding-bottom: 2rem;
    font-size: 0.875rem;
    color: var(--text-muted);
}

@media (min-width: 640px) {
    .feature-grid,
    .checklist-grid,
    .topic-grid {
        grid-template-columns: repeat(2, minmax(0, 1fr));
    }
}

@media (min-width: 768px) {
    .nav-links {
        display: flex;
    }

    .two-col {
        grid-template-columns: repeat(2, minmax(0, 1fr));
    }

    .section-title {
        font-size: 2.25rem;
    }

    .hero .two-col {
        padding-top: 6rem;
        padding-bottom: 6rem;
    }

    .hero-title {
        font-size: 3.75rem;
    }

    .site-footer .container {
        flex-direction: row;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csp_allows_configured_form_origin() {
        let mut config = SiteConfig::default();
        config.contact.form_endpoint = "https://forms.example.com/f/abc".into();
        let csp = content_security_policy(&config);

        assert!(csp.contains("form-action https://forms.example.com;"));
        assert!(csp.contains(IMAGE_ORIGIN));
        assert!(csp.contains("script-src 'none'"));
    }

    #[test]
    fn csp_form_action_drops_query_and_fragment() {
        let mut config = SiteConfig::default();
        for endpoint in ["https://forms.example.com?form=ranch", "https://forms.example.com#top"] {
            config.contact.form_endpoint = endpoint.into();
            let csp = content_security_policy(&config);
            assert!(
                csp.ends_with("form-action https://forms.example.com;"),
                "{endpoint}: {csp}"
            );
        }
    }

    #[test]
    fn css_defines_layout_classes() {
        for class in [".two-col", ".feature", ".card-body", ".contact-form", ".site-footer"] {
            assert!(SITE_CSS.contains(class), "missing {class}");
        }
    }
}
