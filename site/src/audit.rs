//! Structural audit of a rendered landing page.
//!
//! Works on any HTML string, so it can check a fresh render as well as a file
//! that was edited or post-processed after the build. The checks cover the
//! page contract the navigation and the form service depend on:
//!
//! - every section appears once, in page order (`data-section` markers)
//! - every navigation target has exactly one matching `id`
//! - every in-page `href="#..."` resolves
//! - the contact form posts `name`, `email`, `message` (all required) to the
//!   configured endpoint
//! - the footer shows the expected year

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::{CONTACT_FIELDS, NAV_LINKS, SectionId, copyright_line};

static SECTION_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r#"data-section="([^"]*)""#).unwrap());
static ID_ATTR: Lazy<Regex> = Lazy::new(|| Regex::new(r#"\sid="([^"]*)""#).unwrap());
static FRAGMENT_HREF: Lazy<Regex> = Lazy::new(|| Regex::new(r##"\shref="#([^"]*)""##).unwrap());
static FORM_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<form\b([^>]*)>(.*?)</form>").unwrap());
static FIELD_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(?:input|textarea|select)\b([^>]*)>").unwrap());
static ATTR: Lazy<Regex> = Lazy::new(|| Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)="([^"]*)""#).unwrap());
static QUOTED: Lazy<Regex> = Lazy::new(|| Regex::new(r#""[^"]*""#).unwrap());
static REQUIRED_FLAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"\brequired\b").unwrap());

/// A single structural problem found in a page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuditIssue {
    /// A section marker is absent.
    MissingSection { section: SectionId },
    /// A section marker appears more than once.
    DuplicateSection { section: SectionId, count: usize },
    /// Sections are present but not in page order.
    SectionOrder { found: Vec<SectionId> },
    /// A navigation target has no element with that id.
    MissingAnchor { anchor: String },
    /// A navigation target id is used by several elements.
    DuplicateAnchor { anchor: String, count: usize },
    /// An in-page link points at an id that does not exist.
    BrokenLink { href: String },
    /// No contact form was found.
    MissingForm,
    /// More than one form was found.
    ExtraForms { count: usize },
    /// The form posts somewhere other than the configured endpoint.
    FormAction { expected: String, found: Option<String> },
    /// The form does not use POST.
    FormMethod { found: Option<String> },
    /// The form fields are not exactly `name`, `email`, `message`.
    FormFields { found: Vec<String> },
    /// A form field lacks the `required` flag.
    FieldNotRequired { field: String },
    /// The email field is not `type="email"`.
    EmailFieldType { found: Option<String> },
    /// The footer copyright line does not show the expected year.
    FooterYear { expected: i32 },
}

impl fmt::Display for AuditIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditIssue::MissingSection { section } => write!(f, "section '{section}' is missing"),
            AuditIssue::DuplicateSection { section, count } => {
                write!(f, "section '{section}' appears {count} times")
            }
            AuditIssue::SectionOrder { found } => {
                let names: Vec<_> = found.iter().map(|s| s.as_str()).collect();
                write!(f, "sections out of order: {}", names.join(", "))
            }
            AuditIssue::MissingAnchor { anchor } => write!(f, "no element with id '{anchor}'"),
            AuditIssue::DuplicateAnchor { anchor, count } => {
                write!(f, "id '{anchor}' is used {count} times")
            }
            AuditIssue::BrokenLink { href } => write!(f, "link '{href}' has no target"),
            AuditIssue::MissingForm => f.write_str("contact form is missing"),
            AuditIssue::ExtraForms { count } => write!(f, "expected one form, found {count}"),
            AuditIssue::FormAction { expected, found } => write!(
                f,
                "form action is {}, expected '{expected}'",
                describe(found.as_deref())
            ),
            AuditIssue::FormMethod { found } => {
                write!(f, "form method is {}, expected 'post'", describe(found.as_deref()))
            }
            AuditIssue::FormFields { found } => write!(
                f,
                "form fields are [{}], expected [name, email, message]",
                found.join(", ")
            ),
            AuditIssue::FieldNotRequired { field } => {
                write!(f, "form field '{field}' is not required")
            }
            AuditIssue::EmailFieldType { found } => {
                write!(f, "email field type is {}, expected 'email'", describe(found.as_deref()))
            }
            AuditIssue::FooterYear { expected } => {
                write!(f, "footer does not show copyright year {expected}")
            }
        }
    }
}

fn describe(value: Option<&str>) -> String {
    value.map_or_else(|| "unset".to_string(), |v| format!("'{v}'"))
}

/// Result of [`audit_page`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    pub issues: Vec<AuditIssue>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return f.write_str("page structure OK");
        }
        writeln!(f, "{} structural issue(s):", self.issues.len())?;
        for issue in &self.issues {
            writeln!(f, "  - {issue}")?;
        }
        Ok(())
    }
}

/// Check a rendered page against the landing page contract.
///
/// `year` is the copyright year the footer must show; pass `None` to skip
/// that check (e.g. when auditing a file built in an earlier year).
pub fn audit_page(html: &str, config: &SiteConfig, year: Option<i32>) -> AuditReport {
    let mut issues = Vec::new();
    check_sections(html, &mut issues);
    check_anchors(html, &mut issues);
    check_form(html, config, &mut issues);
    if let Some(year) = year {
        if !html.contains(&copyright_line(year)) {
            issues.push(AuditIssue::FooterYear { expected: year });
        }
    }
    AuditReport { issues }
}

fn check_sections(html: &str, issues: &mut Vec<AuditIssue>) {
    let found: Vec<SectionId> = SECTION_MARKER
        .captures_iter(html)
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str();
            SectionId::PAGE_ORDER.into_iter().find(|s| s.as_str() == name)
        })
        .collect();

    for section in SectionId::PAGE_ORDER {
        match found.iter().filter(|s| **s == section).count() {
            0 => issues.push(AuditIssue::MissingSection { section }),
            1 => {}
            count => issues.push(AuditIssue::DuplicateSection { section, count }),
        }
    }

    let mut first_seen: Vec<SectionId> = Vec::new();
    for section in &found {
        if !first_seen.contains(section) {
            first_seen.push(*section);
        }
    }
    let expected: Vec<SectionId> = SectionId::PAGE_ORDER
        .into_iter()
        .filter(|s| first_seen.contains(s))
        .collect();
    if first_seen != expected {
        issues.push(AuditIssue::SectionOrder { found: first_seen });
    }
}

fn check_anchors(html: &str, issues: &mut Vec<AuditIssue>) {
    let mut ids: HashMap<&str, usize> = HashMap::new();
    for caps in ID_ATTR.captures_iter(html) {
        if let Some(id) = caps.get(1) {
            *ids.entry(id.as_str()).or_default() += 1;
        }
    }

    for link in NAV_LINKS {
        let anchor = link.target.as_str();
        match ids.get(anchor).copied().unwrap_or(0) {
            0 => issues.push(AuditIssue::MissingAnchor { anchor: anchor.to_string() }),
            1 => {}
            count => issues.push(AuditIssue::DuplicateAnchor {
                anchor: anchor.to_string(),
                count,
            }),
        }
    }

    let mut reported: Vec<&str> = Vec::new();
    for caps in FRAGMENT_HREF.captures_iter(html) {
        let Some(target) = caps.get(1).map(|m| m.as_str()) else {
            continue;
        };
        // bare "#" scrolls to top
        if target.is_empty() || ids.contains_key(target) || reported.contains(&target) {
            continue;
        }
        reported.push(target);
        issues.push(AuditIssue::BrokenLink { href: format!("#{target}") });
    }
}

fn check_form(html: &str, config: &SiteConfig, issues: &mut Vec<AuditIssue>) {
    let forms: Vec<_> = FORM_BLOCK.captures_iter(html).collect();
    let form = match forms.as_slice() {
        [] => {
            issues.push(AuditIssue::MissingForm);
            return;
        }
        [form] => form,
        _ => {
            issues.push(AuditIssue::ExtraForms { count: forms.len() });
            return;
        }
    };

    let attrs = parse_attrs(form.get(1).map_or("", |m| m.as_str()));
    let body = form.get(2).map_or("", |m| m.as_str());

    let expected = config.contact.form_endpoint.trim();
    let action = attrs.get("action").cloned();
    if action.as_deref() != Some(expected) {
        issues.push(AuditIssue::FormAction {
            expected: expected.to_string(),
            found: action,
        });
    }

    let method = attrs.get("method").cloned();
    if !method.as_deref().is_some_and(|m| m.eq_ignore_ascii_case("post")) {
        issues.push(AuditIssue::FormMethod { found: method });
    }

    let mut names = Vec::new();
    for caps in FIELD_TAG.captures_iter(body) {
        let raw = caps.get(1).map_or("", |m| m.as_str());
        let field_attrs = parse_attrs(raw);
        let name = field_attrs.get("name").cloned().unwrap_or_default();

        // attribute values may mention "required"; only the bare flag counts
        let flags = QUOTED.replace_all(raw, "\"\"");
        if !REQUIRED_FLAG.is_match(&flags) && !field_attrs.contains_key("required") {
            issues.push(AuditIssue::FieldNotRequired { field: name.clone() });
        }
        if name == "email" {
            let input_type = field_attrs.get("type").cloned();
            if input_type.as_deref() != Some("email") {
                issues.push(AuditIssue::EmailFieldType { found: input_type });
            }
        }
        names.push(name);
    }

    let expected_names: Vec<&str> = CONTACT_FIELDS.iter().map(|f| f.name).collect();
    if names != expected_names {
        issues.push(AuditIssue::FormFields { found: names });
    }
}

/// `key="value"` pairs of a tag, with entities in values decoded.
fn parse_attrs(raw: &str) -> HashMap<String, String> {
    ATTR.captures_iter(raw)
        .filter_map(|caps| {
            let key = caps.get(1)?.as_str().to_ascii_lowercase();
            let value = unescape_attr(caps.get(2)?.as_str());
            Some((key, value))
        })
        .collect()
}

fn unescape_attr(value: &str) -> String {
    value
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_page;

    fn rendered() -> (SiteConfig, String) {
        let config = SiteConfig::default();
        let html = render_page(&config, 2026);
        (config, html)
    }

    #[test]
    fn rendered_page_is_clean() {
        let (config, html) = rendered();
        let report = audit_page(&html, &config, Some(2026));
        assert!(report.is_clean(), "{report}");
    }

    #[test]
    fn detects_wrong_year() {
        let (config, html) = rendered();
        let report = audit_page(&html, &config, Some(1999));
        assert_eq!(report.issues, vec![AuditIssue::FooterYear { expected: 1999 }]);
    }

    #[test]
    fn detects_missing_section_and_anchor() {
        let (config, html) = rendered();
        let html = html.replace(r#"id="carbon""#, "").replace(
            r#"data-section="carbon""#,
            "",
        );
        let report = audit_page(&html, &config, None);

        assert!(report.issues.contains(&AuditIssue::MissingSection {
            section: SectionId::Carbon
        }));
        assert!(report.issues.contains(&AuditIssue::MissingAnchor {
            anchor: "carbon".into()
        }));
        assert!(report.issues.contains(&AuditIssue::BrokenLink {
            href: "#carbon".into()
        }));
    }

    #[test]
    fn detects_duplicate_anchor() {
        let (config, html) = rendered();
        let html = html.replacen("<main>", r#"<main><div id="about"></div>"#, 1);
        let report = audit_page(&html, &config, None);
        assert_eq!(
            report.issues,
            vec![AuditIssue::DuplicateAnchor { anchor: "about".into(), count: 2 }]
        );
    }

    #[test]
    fn detects_section_order() {
        let html = r#"<header data-section="nav"></header>
<section data-section="about"></section><section data-section="hero"></section>"#;
        let mut issues = Vec::new();
        check_sections(html, &mut issues);
        assert!(issues.contains(&AuditIssue::SectionOrder {
            found: vec![SectionId::Nav, SectionId::About, SectionId::Hero]
        }));
    }

    #[test]
    fn detects_form_problems() {
        let config = SiteConfig::default();
        let html = r#"<form action="https://elsewhere.example/x" method="get">
<input name="name" placeholder="required" />
<input type="text" name="email" required />
</form>"#;
        let mut issues = Vec::new();
        check_form(html, &config, &mut issues);

        assert!(issues.contains(&AuditIssue::FormAction {
            expected: config.contact.form_endpoint.clone(),
            found: Some("https://elsewhere.example/x".into()),
        }));
        assert!(issues.contains(&AuditIssue::FormMethod { found: Some("get".into()) }));
        assert!(issues.contains(&AuditIssue::FieldNotRequired { field: "name".into() }));
        assert!(issues.contains(&AuditIssue::EmailFieldType { found: Some("text".into()) }));
        assert!(issues.contains(&AuditIssue::FormFields {
            found: vec!["name".into(), "email".into()]
        }));
    }

    #[test]
    fn decodes_escaped_endpoint() {
        let mut config = SiteConfig::default();
        config.contact.form_endpoint = "https://forms.example.com/f?id=1&lang=en".into();
        let html = render_page(&config, 2026);
        let report = audit_page(&html, &config, Some(2026));
        assert!(report.is_clean(), "{report}");
    }

    #[test]
    fn report_serializes_with_kind_tag() {
        let report = AuditReport {
            issues: vec![AuditIssue::MissingForm, AuditIssue::FooterYear { expected: 2026 }],
        };
        let json = serde_json::to_value(&report).expect("json");
        assert_eq!(json["issues"][0]["kind"], "missing_form");
        assert_eq!(json["issues"][1]["expected"], 2026);
    }

    #[test]
    fn display_lists_issues() {
        let report = AuditReport {
            issues: vec![AuditIssue::BrokenLink { href: "#nowhere".into() }],
        };
        let text = report.to_string();
        assert!(text.starts_with("1 structural issue(s):"));
        assert!(text.contains("link '#nowhere' has no target"));
        assert_eq!(AuditReport::default().to_string(), "page structure OK");
    }
}
