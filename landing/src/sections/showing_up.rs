use leptos::html::Div;
use leptos::prelude::*;
use mettamate_site::SiteConfig;
use mettamate_site::reveal::Stagger;

use super::shared::{CarouselArrows, reveal};

struct Moment {
    title: &'static str,
    image: &'static str,
    caption: &'static str,
}

static MOMENTS: [Moment; 4] = [
    Moment {
        title: "Joyful Gatherings",
        image: "https://images.unsplash.com/photo-1511632765486-a01980e01a18?w=800&q=80",
        caption: "Laughter that doesn't need translation.",
    },
    Moment {
        title: "Quiet Reflection",
        image: "https://images.unsplash.com/photo-1499557354967-2b2d8910bcca?w=800&q=80",
        caption: "Finding peace in our shared silence.",
    },
    Moment {
        title: "Shared History",
        image: "https://images.unsplash.com/photo-1544642899-f0d6e5f6ed6f?w=800&q=80",
        caption: "Honoring the path our ancestors paved.",
    },
    Moment {
        title: "Future Building",
        image: "https://images.unsplash.com/photo-1556761175-5973dc0f32e7?w=800&q=80",
        caption: "Planting seeds for generations to come.",
    },
];

/// Photo carousel of community moments.
#[component]
pub fn ShowingUp() -> impl IntoView {
    let controller = use_context::<SiteConfig>().unwrap_or_default().carousels.moments();
    let strip = NodeRef::<Div>::new();

    view! {
        <section class="moments">
            <div class=reveal("container-custom carousel-head", Stagger::None)>
                <div>
                    <span class="section-label">"Connect"</span>
                    <h3 class="moments-title">"This is what showing up together looks like."</h3>
                </div>
                <CarouselArrows controller=controller strip=strip />
            </div>

            <div node_ref=strip class="carousel-strip hide-scrollbar">
                {MOMENTS
                    .iter()
                    .map(|moment| view! {
                        <div class=reveal("moment-card", Stagger::One)>
                            <img src=moment.image alt=moment.title class="moment-image" />
                            <div class="moment-shade"></div>
                            <div class="moment-body">
                                <h4 class="moment-title">{moment.title}</h4>
                                <p class="moment-caption">{moment.caption}</p>
                            </div>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
