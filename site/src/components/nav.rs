use leptos::prelude::*;

use super::BrandMark;
use crate::content::{CtaStyle, NAV_CTA, NAV_LINKS, SectionId};

/// Sticky header with the brand mark and the in-page section links.
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <header class="site-header" data-section=SectionId::Nav.as_str()>
            <div class="container">
                <BrandMark />
                <nav class="nav-links" aria-label="Sections">
                    <div class="nav-sections">
                        {NAV_LINKS.into_iter().map(|link| {
                            view! { <a href=link.href()>{link.label}</a> }
                        }).collect::<Vec<_>>()}
                    </div>
                    <a href=NAV_CTA.href() class=CtaStyle::Primary.class()>{NAV_CTA.label}</a>
                </nav>
            </div>
        </header>
    }
}
