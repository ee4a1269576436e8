use leptos::prelude::*;

use super::Card;
use crate::content::{HUNTING_COPY, HUNTING_HEADING, HUNTING_RULES, SectionId};

#[component]
pub fn Hunting() -> impl IntoView {
    let id = SectionId::Hunting.as_str();
    view! {
        <section id=id class="band band-amber" data-section=id>
            <div class="container section">
                <div class="two-col align-start">
                    <div>
                        <h2 class="section-title">{HUNTING_HEADING}</h2>
                        <p class="narrative">{HUNTING_COPY}</p>
                    </div>
                    <Card body_class="card-body stack tight">
                        {HUNTING_RULES.into_iter().map(|rule| {
                            view! { <p>{format!("• {rule}")}</p> }
                        }).collect::<Vec<_>>()}
                    </Card>
                </div>
            </div>
        </section>
    }
}
