use leptos::html::Div;
use leptos::prelude::*;
use mettamate_site::carousel::{CarouselController, ScrollDirection};
use mettamate_site::reveal::{Stagger, reveal_class};

use crate::dom::DomScroller;
use crate::icons::{ICON_ARROW_RIGHT, Icon};

/// Class list for a reveal-tagged element with extra classes of its own.
pub fn reveal(extra: &str, stagger: Stagger) -> String {
    if extra.is_empty() {
        reveal_class(stagger)
    } else {
        format!("{extra} {}", reveal_class(stagger))
    }
}

/// Pill label, serif title and optional subtitle above a section.
#[component]
pub fn SectionHeader(
    /// Small uppercase pill; hidden when empty
    #[prop(default = "")]
    label: &'static str,
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    #[prop(optional)] centered: bool,
) -> impl IntoView {
    let class = if centered {
        reveal("section-header centered", Stagger::None)
    } else {
        reveal("section-header", Stagger::None)
    };

    view! {
        <div class=class>
            {(!label.is_empty()).then(|| view! { <span class="section-pill">{label}</span> })}
            <h2 class="section-title">{title}</h2>
            {subtitle
                .filter(|text| !text.is_empty())
                .map(|text| view! { <p class="section-subtitle">{text}</p> })}
        </div>
    }
}

/// Back/forward buttons driving a carousel strip.
///
/// Clicks before the strip is mounted are dropped.
#[component]
pub fn CarouselArrows(controller: CarouselController, strip: NodeRef<Div>) -> impl IntoView {
    let scroll = move |direction: ScrollDirection| {
        let element = strip.get_untracked();
        let scroller = element.as_ref().map(|el| DomScroller(el.as_ref()));
        controller.scroll(scroller.as_ref(), direction);
    };

    view! {
        <div class="carousel-arrows">
            <button
                class="carousel-arrow back"
                aria-label="Scroll left"
                on:click=move |_| scroll(ScrollDirection::Left)
            >
                <Icon path=ICON_ARROW_RIGHT />
            </button>
            <button
                class="carousel-arrow"
                aria-label="Scroll right"
                on:click=move |_| scroll(ScrollDirection::Right)
            >
                <Icon path=ICON_ARROW_RIGHT />
            </button>
        </div>
    }
}
