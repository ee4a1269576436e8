//! Static page copy and the fixed section structure.
//!
//! Everything the components print lives here so the markup modules only
//! deal with layout. Records are `'static` and `Copy`; nothing is computed.

use serde::Serialize;

/// Brand name used by the brand mark, footer and audit.
pub const BRAND_NAME: &str = "Crescent C Ranch";

/// Letter drawn inside the brand mark.
pub const BRAND_INITIAL: &str = "C";

pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1535242208474-9a2793260ca9?q=80&w=1600&auto=format&fit=crop";

pub const CATTLE_IMAGE: &str =
    "https://images.unsplash.com/photo-1543512214-318c7553f230?q=80&w=1600&auto=format&fit=crop";

/// Top-level blocks of the page, in render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Nav,
    Hero,
    About,
    Grazing,
    Cattle,
    Hunting,
    Carbon,
    Contact,
    Footer,
}

impl SectionId {
    /// Every section exactly once, top to bottom.
    pub const PAGE_ORDER: [SectionId; 9] = [
        SectionId::Nav,
        SectionId::Hero,
        SectionId::About,
        SectionId::Grazing,
        SectionId::Cattle,
        SectionId::Hunting,
        SectionId::Carbon,
        SectionId::Contact,
        SectionId::Footer,
    ];

    /// Value of the `data-section` marker on the section's root element.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Nav => "nav",
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Grazing => "grazing",
            SectionId::Cattle => "cattle",
            SectionId::Hunting => "hunting",
            SectionId::Carbon => "carbon",
            SectionId::Contact => "contact",
            SectionId::Footer => "footer",
        }
    }

    /// In-page anchor id, for sections reachable from the navigation bar.
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            SectionId::About
            | SectionId::Grazing
            | SectionId::Cattle
            | SectionId::Hunting
            | SectionId::Carbon
            | SectionId::Contact => Some(self.as_str()),
            SectionId::Nav | SectionId::Hero | SectionId::Footer => None,
        }
    }

    /// `#anchor` form used in `href` attributes.
    pub fn href(self) -> Option<String> {
        self.anchor().map(|a| format!("#{a}"))
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A navigation bar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub target: SectionId,
    pub label: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.target.as_str())
    }
}

pub const NAV_LINKS: [NavLink; 6] = [
    NavLink { target: SectionId::About, label: "About" },
    NavLink { target: SectionId::Grazing, label: "Grazing" },
    NavLink { target: SectionId::Cattle, label: "Cattle" },
    NavLink { target: SectionId::Hunting, label: "Hunting" },
    NavLink { target: SectionId::Carbon, label: "Carbon" },
    NavLink { target: SectionId::Contact, label: "Contact" },
];

/// The extra button at the end of the navigation bar.
pub const NAV_CTA: NavLink = NavLink { target: SectionId::Contact, label: "Get in touch" };

/// Button style for call-to-action links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CtaStyle {
    Primary,
    Outline,
}

impl CtaStyle {
    pub fn class(self) -> &'static str {
        match self {
            CtaStyle::Primary => "btn btn-primary",
            CtaStyle::Outline => "btn btn-outline",
        }
    }
}

/// In-page call-to-action link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cta {
    pub link: NavLink,
    pub style: CtaStyle,
}

/// Icon shown next to a feature callout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    CheckCircle,
    Trees,
    Leaf,
    Cattle,
    Phone,
    Mail,
    MapPin,
}

/// Icon + title + one sentence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: IconKind,
    pub title: &'static str,
    pub body: &'static str,
}

/// Bold label followed by a sentence, used by cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Topic {
    pub label: &'static str,
    pub body: &'static str,
}

// ---------------------------------------------------------------------------
// Hero
// ---------------------------------------------------------------------------

pub const HERO_HEADLINE: &str = "Stewarding South Texas grasslands with ";
pub const HERO_HEADLINE_EMPHASIS: &str = "AMP grazing";
pub const HERO_COPY: &str = "Crescent C Ranch is a working livestock ranch in La Salle County, Texas. \
We manage cattle with Adaptive Multi‑Paddock grazing to restore native grasslands, improve water \
cycles, and build enduring productivity.";

pub const HERO_CTAS: [Cta; 2] = [
    Cta {
        link: NavLink { target: SectionId::Contact, label: "Contact" },
        style: CtaStyle::Primary,
    },
    Cta {
        link: NavLink { target: SectionId::Grazing, label: "Our approach" },
        style: CtaStyle::Outline,
    },
];

// ---------------------------------------------------------------------------
// About
// ---------------------------------------------------------------------------

pub const ABOUT_HEADING: &str = "A family operation with a regeneration mandate";
pub const ABOUT_COPY: &str = "We run a practical, profitable ranch that puts ecology to work. \
Rotational grazing, water distribution, and rest periods help us grow more grass and produce \
resilient cattle while improving wildlife habitat.";

pub const ABOUT_FEATURES: [Feature; 4] = [
    Feature {
        icon: IconKind::CheckCircle,
        title: "10,000+ acres",
        body: "Managed with planned grazing and water infrastructure.",
    },
    Feature {
        icon: IconKind::Trees,
        title: "Grassland restoration",
        body: "Focused on native mid‑grasses, brush management, and soil health.",
    },
    Feature {
        icon: IconKind::Leaf,
        title: "Adaptive by default",
        body: "Flexible plans that respond to rainfall and forage recovery.",
    },
    Feature {
        icon: IconKind::Cattle,
        title: "Productive cattle",
        body: "Low‑input cows selected for forage efficiency and temperament.",
    },
];

pub const ABOUT_CARD: [Topic; 3] = [
    Topic {
        label: "Grazing:",
        body: "Adaptive multi‑paddock rotations to match stock density with forage supply, \
protecting plants from second‑bite overgrazing and building drought reserves.",
    },
    Topic {
        label: "Wildlife & habitat:",
        body: "Planned rest and water improve cover and diversity for deer, quail, and pollinators.",
    },
    Topic {
        label: "People:",
        body: "We invest in stockmanship, water systems, and fencing so good management is easier \
to do every day.",
    },
];

// ---------------------------------------------------------------------------
// Grazing
// ---------------------------------------------------------------------------

pub const GRAZING_HEADING: &str = "Our grazing philosophy";
pub const GRAZING_COPY: &str = "Overgrazing is about time, not just numbers. We manage for quality \
graze and full recovery, which typically means more animal days per acre, steadier performance, \
and lower feed costs.";

pub const GRAZING_BULLETS: [Feature; 3] = [
    Feature {
        icon: IconKind::CheckCircle,
        title: "Planned rotations",
        body: "Short graze periods, long recovery. We move cattle frequently to let plants rebuild \
leaf and root reserves.",
    },
    Feature {
        icon: IconKind::CheckCircle,
        title: "Stocking to conditions",
        body: "We match cattle numbers to rainfall and forage, creating runway in dry spells and \
capturing abundance after rain.",
    },
    Feature {
        icon: IconKind::CheckCircle,
        title: "Water everywhere",
        body: "Distributed water points reduce trailing, improve manure/urine distribution, and keep \
cattle content.",
    },
];

pub const GRAZING_INFRASTRUCTURE: [&str; 4] = [
    "Reliable water infrastructure",
    "Temporary + permanent fencing",
    "Rested grass reserves",
    "Low‑stress stockmanship",
];

// ---------------------------------------------------------------------------
// Cattle
// ---------------------------------------------------------------------------

pub const CATTLE_HEADING: &str = "Cattle & custom grazing";
pub const CATTLE_COPY: &str = "We market practical, forage‑efficient cattle and consider custom \
grazing partnerships that align with our ecology‑first management. Reach out for availability and \
terms.";

pub const CATTLE_CTAS: [Cta; 2] = [
    Cta {
        link: NavLink { target: SectionId::Contact, label: "Inquire" },
        style: CtaStyle::Primary,
    },
    Cta {
        link: NavLink { target: SectionId::Hunting, label: "Hunting" },
        style: CtaStyle::Outline,
    },
];

// ---------------------------------------------------------------------------
// Hunting
// ---------------------------------------------------------------------------

pub const HUNTING_HEADING: &str = "Hunting & habitat";
pub const HUNTING_COPY: &str = "Planned grazing and brush work support healthy wildlife. We \
maintain a limited hunting program with an emphasis on safety, habitat stewardship, and \
fair‑chase ethics.";

pub const HUNTING_RULES: [&str; 4] = [
    "Access by prior arrangement only.",
    "Safety first—respect stock, gates, and water.",
    "Pack it in, pack it out.",
    "Follow all Texas Parks & Wildlife regulations.",
];

// ---------------------------------------------------------------------------
// Carbon
// ---------------------------------------------------------------------------

pub const CARBON_HEADING: &str = "Carbon impact";
pub const CARBON_COPY_LEAD: &str = "Our grazing builds root depth and soil cover, increasing the \
land’s capacity to store carbon and water. Through reputable standards and monitoring, our \
management contributes measurable ";
pub const CARBON_COPY_EMPHASIS: &str = "carbon impact reduction";
pub const CARBON_COPY_TAIL: &str = " while improving biodiversity.";

pub const CARBON_TOPICS: [Topic; 4] = [
    Topic { label: "Soil health:", body: "Ground cover, litter, aggregation." },
    Topic { label: "Water:", body: "Infiltration, distribution, drought reserves." },
    Topic { label: "Wildlife:", body: "Habitat structure and diversity." },
    Topic { label: "People:", body: "Profitable, resilient ranching." },
];

pub const CARBON_PRACTICES: [&str; 3] = [
    "Adaptive Multi‑Paddock (AMP) grazing planning.",
    "Third‑party measurement & verification as applicable.",
    "Transparent contracts and rancher‑first terms.",
];

// ---------------------------------------------------------------------------
// Contact
// ---------------------------------------------------------------------------

pub const CONTACT_HEADING: &str = "Get in touch";
pub const CONTACT_COPY: &str = "Have a question about cattle, custom grazing, or partnerships? \
Send a note—we’ll get back to you soon.";
pub const CONTACT_NOTE: &str = "We respect gates—digital and real. No spam.";
pub const CONTACT_SUBMIT: &str = "Send";

/// A field of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    /// `None` renders a `<textarea>`
    pub input_type: Option<&'static str>,
    pub placeholder: &'static str,
}

pub const CONTACT_FIELDS: [FormField; 3] = [
    FormField { name: "name", input_type: Some("text"), placeholder: "Your name" },
    FormField { name: "email", input_type: Some("email"), placeholder: "Email" },
    FormField { name: "message", input_type: None, placeholder: "How can we help?" },
];

/// Visible rows of the message textarea.
pub const MESSAGE_ROWS: &str = "5";

/// Copyright line shown in the footer.
pub fn copyright_line(year: i32) -> String {
    format!("© {year} {BRAND_NAME}. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn page_order_lists_each_section_once() {
        let unique: HashSet<_> = SectionId::PAGE_ORDER.iter().collect();
        assert_eq!(unique.len(), SectionId::PAGE_ORDER.len());
        assert_eq!(SectionId::PAGE_ORDER.first(), Some(&SectionId::Nav));
        assert_eq!(SectionId::PAGE_ORDER.last(), Some(&SectionId::Footer));
    }

    #[test]
    fn nav_links_follow_page_order() {
        let anchored: Vec<_> = SectionId::PAGE_ORDER
            .iter()
            .filter(|s| s.anchor().is_some())
            .copied()
            .collect();
        let targets: Vec<_> = NAV_LINKS.iter().map(|l| l.target).collect();
        assert_eq!(targets, anchored);
    }

    #[test]
    fn nav_labels_match_targets() {
        for link in NAV_LINKS {
            assert_eq!(link.label.to_lowercase(), link.target.as_str());
            assert_eq!(Some(link.href()), link.target.href());
        }
    }

    #[test]
    fn every_cta_points_at_an_anchor() {
        let ctas = HERO_CTAS.iter().chain(CATTLE_CTAS.iter()).map(|c| c.link);
        for link in ctas.chain(std::iter::once(NAV_CTA)) {
            assert!(link.target.anchor().is_some(), "{} has no anchor", link.label);
        }
    }

    #[test]
    fn contact_fields_are_name_email_message() {
        let names: Vec<_> = CONTACT_FIELDS.iter().map(|f| f.name).collect();
        assert_eq!(names, ["name", "email", "message"]);
    }

    #[test]
    fn copyright_line_contains_year() {
        assert_eq!(
            copyright_line(2031),
            "© 2031 Crescent C Ranch. All rights reserved."
        );
    }
}
