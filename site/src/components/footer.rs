use leptos::prelude::*;

use super::BrandMark;
use crate::content::{SectionId, copyright_line};

/// Brand mark and copyright line for `year`.
#[component]
pub fn Footer(year: i32) -> impl IntoView {
    view! {
        <footer class="site-footer" data-section=SectionId::Footer.as_str()>
            <div class="container">
                <BrandMark />
                <p class="copyright">{copyright_line(year)}</p>
            </div>
        </footer>
    }
}
