use leptos::prelude::*;

use super::{Card, TopicLine};
use crate::content::{
    CARBON_COPY_EMPHASIS, CARBON_COPY_LEAD, CARBON_COPY_TAIL, CARBON_HEADING, CARBON_PRACTICES,
    CARBON_TOPICS, SectionId,
};

/// Carbon messaging: narrative, topic cards and the practices card.
#[component]
pub fn Carbon() -> impl IntoView {
    let id = SectionId::Carbon.as_str();
    view! {
        <section id=id class="container section" data-section=id>
            <div class="two-col">
                <div>
                    <h2 class="section-title">{CARBON_HEADING}</h2>
                    <p class="narrative">
                        {CARBON_COPY_LEAD}
                        <em>{CARBON_COPY_EMPHASIS}</em>
                        {CARBON_COPY_TAIL}
                    </p>
                    <ul class="topic-grid">
                        {CARBON_TOPICS.into_iter().map(|topic| {
                            view! {
                                <li class="card">
                                    <div class="card-body">
                                        <TopicLine topic=topic />
                                    </div>
                                </li>
                            }
                        }).collect::<Vec<_>>()}
                    </ul>
                </div>
                <Card body_class="card-body stack tight">
                    {CARBON_PRACTICES.into_iter().map(|practice| {
                        view! { <p>{format!("• {practice}")}</p> }
                    }).collect::<Vec<_>>()}
                </Card>
            </div>
        </section>
    }
}
