//! Small building blocks shared by the page sections.

use leptos::prelude::*;

use super::{Icon, icon_path};
use crate::content::{BRAND_INITIAL, BRAND_NAME, Cta, Feature, Topic};

/// Ring logo with the ranch initial plus the ranch name.
#[component]
pub fn BrandMark() -> impl IntoView {
    view! {
        <div class="brand">
            <div class="brand-mark" aria-hidden="true">
                <div class="brand-ring"></div>
                <div class="brand-initial">{BRAND_INITIAL}</div>
                <div class="brand-ring-small"></div>
            </div>
            <span class="brand-name">{BRAND_NAME}</span>
        </div>
    }
}

/// Icon badge next to a title and a short description.
#[component]
pub fn FeatureCallout(feature: Feature) -> impl IntoView {
    view! {
        <div class="feature">
            <div class="badge">
                <Icon path=icon_path(feature.icon) />
            </div>
            <div>
                <h4>{feature.title}</h4>
                <p>{feature.body}</p>
            </div>
        </div>
    }
}

/// `<strong>Label:</strong> sentence` paragraph.
#[component]
pub fn TopicLine(topic: Topic) -> impl IntoView {
    // single text node after the label keeps the markup free of text separators
    let body = format!(" {}", topic.body);
    view! {
        <p>
            <strong>{topic.label}</strong>
            {body}
        </p>
    }
}

/// Bordered card. `body_class` styles the inner padding box.
#[component]
pub fn Card(
    #[prop(default = "card-body stack")]
    body_class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="card">
            <div class=body_class>{children()}</div>
        </div>
    }
}

/// Row of in-page call-to-action buttons.
#[component]
pub fn CtaLinks(ctas: Vec<Cta>) -> impl IntoView {
    view! {
        <div class="actions">
            {ctas.into_iter().map(|cta| {
                view! {
                    <a href=cta.link.href() class=cta.style.class()>
                        {cta.link.label}
                    </a>
                }
            }).collect::<Vec<_>>()}
        </div>
    }
}

/// Rounded 4:3 photograph drawn as a CSS background.
#[component]
pub fn Photo(src: &'static str, label: &'static str) -> impl IntoView {
    let style = format!("background-image: url('{src}')");
    view! {
        <div class="media">
            <div class="media-image" style=style role="img" aria-label=label></div>
            <div class="media-sheen"></div>
        </div>
    }
}
