//! Leptos UI components for rendering the landing page.
//!
//! Each component is a Leptos `#[component]` function rendered once on the
//! server. None of them hold state or read signals.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! ├── Nav            (BrandMark + six section links + call to action)
//! ├── Hero           (CtaLinks, Photo)
//! ├── About          (FeatureCallout x4, Card of TopicLine x3)
//! ├── Grazing        (FeatureCallout x3, Card x4)
//! ├── CattleSales    (CtaLinks, Photo)
//! ├── Hunting        (Card)
//! ├── Carbon         (TopicLine x4, Card)
//! ├── Contact        (Icon x3, form)
//! └── Footer         (BrandMark, copyright line)
//! ```
//!
//! # Usage
//!
//! Components are normally rendered via [`crate::render_page`], but single
//! sections can be rendered on their own:
//!
//! ```rust
//! use leptos::prelude::*;
//! use leptos::tachys::view::RenderHtml;
//! use crescent_site::components::Hunting;
//!
//! let html = view! { <Hunting /> }.to_html();
//! assert!(html.contains(r#"id="hunting""#));
//! ```

mod about;
mod blocks;
mod carbon;
mod cattle;
mod contact;
mod document;
mod footer;
mod grazing;
mod hero;
mod hunting;
mod icons;
mod nav;

pub use about::About;
pub use blocks::{BrandMark, Card, CtaLinks, FeatureCallout, Photo, TopicLine};
pub use carbon::Carbon;
pub use cattle::CattleSales;
pub use contact::Contact;
pub use document::PageDocument;
pub use footer::Footer;
pub use grazing::Grazing;
pub use hero::Hero;
pub use hunting::Hunting;
pub use icons::*;
pub use nav::Nav;
