//! Inline SVG icons for feature badges and contact details.
//!
//! Path data is drawn on a 256x256 grid in the style of Phosphor Icons
//! (Regular weight), so every icon shares one `viewBox`.

use leptos::prelude::*;

use crate::content::IconKind;

/// Inline 256x256 SVG filled with `currentColor`, hidden from screen readers.
///
/// `size` is the rendered width and height in pixels.
#[component]
pub fn Icon(
    #[prop(into)]
    path: &'static str,
    #[prop(default = "20")]
    size: &'static str,
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="currentColor"
            viewBox="0 0 256 256"
            class=class
            aria-hidden="true"
        >
            <path d=path></path>
        </svg>
    }
}

/// Path data for an icon kind.
pub fn icon_path(kind: IconKind) -> &'static str {
    match kind {
        IconKind::CheckCircle => ICON_CHECK_CIRCLE,
        IconKind::Trees => ICON_TREES,
        IconKind::Leaf => ICON_LEAF,
        IconKind::Cattle => ICON_CATTLE,
        IconKind::Phone => ICON_PHONE,
        IconKind::Mail => ICON_MAIL,
        IconKind::MapPin => ICON_MAP_PIN,
    }
}

// =============================================================================
// Path data
// =============================================================================

/// Circle with a check mark
pub const ICON_CHECK_CIRCLE: &str = "M173.66,98.34a8,8,0,0,1,0,11.32l-56,56a8,8,0,0,1-11.32,0l-24-24a8,8,0,0,1,11.32-11.32L112,148.69l50.34-50.35A8,8,0,0,1,173.66,98.34ZM232,128A104,104,0,1,1,128,24,104.11,104.11,0,0,1,232,128Zm-16,0a88,88,0,1,0-88,88A88.1,88.1,0,0,0,216,128Z";

/// Two conifers
pub const ICON_TREES: &str = "M96,24,28,140H80v36H56v16h80V176H112V140h52Zm0,32,38,68H58ZM184,64l-28,50h20v74h16V114h20Z";

/// Single leaf with a stem
pub const ICON_LEAF: &str = "M216,40C112,40,48,96,48,176a87.5,87.5,0,0,0,4,24L36,216l12,12,16-16a87.5,87.5,0,0,0,24,4C168,216,216,152,216,40ZM88,200a71.6,71.6,0,0,1-12-1l68-68-12-12L64,187a71.6,71.6,0,0,1-1-11C63,112,112,60,199,56,195,143,152,200,88,200Z";

/// Cow head with horns
pub const ICON_CATTLE: &str = "M40,64l32,16H184l32-16-8,40-24,8v72a32,32,0,0,1-32,32H104a32,32,0,0,1-32-32V112L48,104ZM88,120v64a16,16,0,0,0,16,16h48a16,16,0,0,0,16-16V120Z";

/// Telephone handset
pub const ICON_PHONE: &str = "M222,158.4l-46.9-21a16,16,0,0,0-15.2,1.4l-25.1,16.7a76.5,76.5,0,0,1-35.3-35.1l16.6-25.1a16,16,0,0,0,1.4-15.1L97.6,33.4A16,16,0,0,0,81,24,56.3,56.3,0,0,0,32,80c0,79.4,64.6,144,144,144a56.3,56.3,0,0,0,56-49A16,16,0,0,0,222,158.4Z";

/// Envelope
pub const ICON_MAIL: &str = "M224,48H32a8,8,0,0,0-8,8V192a16,16,0,0,0,16,16H216a16,16,0,0,0,16-16V56A8,8,0,0,0,224,48Zm-20.6,16L128,133.1,52.6,64ZM216,192H40V74.2l82.6,75.7a8,8,0,0,0,10.8,0L216,74.2Z";

/// Map pin
pub const ICON_MAP_PIN: &str = "M128,16a88.1,88.1,0,0,0-88,88c0,75.3,80,132.2,83.4,134.6a8,8,0,0,0,9.2,0C136,236.2,216,179.3,216,104A88.1,88.1,0,0,0,128,16Zm0,56a32,32,0,1,1-32,32A32,32,0,0,1,128,72Z";
