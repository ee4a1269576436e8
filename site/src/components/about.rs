use leptos::prelude::*;

use super::{Card, FeatureCallout, TopicLine};
use crate::content::{ABOUT_CARD, ABOUT_COPY, ABOUT_FEATURES, ABOUT_HEADING, SectionId};

/// Mission statement, the four ranch facts and the management card.
#[component]
pub fn About() -> impl IntoView {
    let id = SectionId::About.as_str();
    view! {
        <section id=id class="container section" data-section=id>
            <div class="two-col">
                <div>
                    <h2 class="section-title">{ABOUT_HEADING}</h2>
                    <p class="narrative">{ABOUT_COPY}</p>
                    <div class="feature-grid">
                        {ABOUT_FEATURES.into_iter().map(|feature| {
                            view! { <FeatureCallout feature=feature /> }
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
                <Card>
                    {ABOUT_CARD.into_iter().map(|topic| {
                        view! { <TopicLine topic=topic /> }
                    }).collect::<Vec<_>>()}
                </Card>
            </div>
        </section>
    }
}
