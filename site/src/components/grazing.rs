use leptos::prelude::*;

use super::{Card, FeatureCallout};
use crate::content::{
    GRAZING_BULLETS, GRAZING_COPY, GRAZING_HEADING, GRAZING_INFRASTRUCTURE, SectionId,
};

#[component]
pub fn Grazing() -> impl IntoView {
    let id = SectionId::Grazing.as_str();
    view! {
        <section id=id class="band band-green" data-section=id>
            <div class="container section">
                <div class="two-col align-start">
                    <div>
                        <h2 class="section-title">{GRAZING_HEADING}</h2>
                        <p class="narrative">{GRAZING_COPY}</p>
                        <div class="feature-list">
                            {GRAZING_BULLETS.into_iter().map(|feature| {
                                view! { <FeatureCallout feature=feature /> }
                            }).collect::<Vec<_>>()}
                        </div>
                    </div>
                    <div class="checklist-grid">
                        {GRAZING_INFRASTRUCTURE.into_iter().map(|item| {
                            view! {
                                <Card body_class="card-body">
                                    <p>{item}</p>
                                </Card>
                            }
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}
