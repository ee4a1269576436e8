use leptos::prelude::*;

use super::{CtaLinks, Photo};
use crate::content::{CATTLE_COPY, CATTLE_CTAS, CATTLE_HEADING, CATTLE_IMAGE, SectionId};

/// Cattle sales and custom grazing pitch.
#[component]
pub fn CattleSales() -> impl IntoView {
    let id = SectionId::Cattle.as_str();
    view! {
        <section id=id class="container section" data-section=id>
            <div class="two-col">
                <div>
                    <h2 class="section-title">{CATTLE_HEADING}</h2>
                    <p class="narrative">{CATTLE_COPY}</p>
                    <CtaLinks ctas=CATTLE_CTAS.to_vec() />
                </div>
                <Photo src=CATTLE_IMAGE label="Herd of ranch cattle" />
            </div>
        </section>
    }
}
