use leptos::prelude::*;

use super::{CtaLinks, Photo};
use crate::content::{
    HERO_COPY, HERO_CTAS, HERO_HEADLINE, HERO_HEADLINE_EMPHASIS, HERO_IMAGE, SectionId,
};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero" data-section=SectionId::Hero.as_str()>
            <div class="hero-wash"></div>
            <div class="container section two-col">
                <div>
                    <h1 class="hero-title">
                        {HERO_HEADLINE}
                        <span class="wavy">{HERO_HEADLINE_EMPHASIS}</span>
                    </h1>
                    <p class="lead">{HERO_COPY}</p>
                    <CtaLinks ctas=HERO_CTAS.to_vec() />
                </div>
                <Photo src=HERO_IMAGE label="Cattle grazing on open South Texas grassland" />
            </div>
        </section>
    }
}
