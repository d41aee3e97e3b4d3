use leptos::html::Div;
use leptos::prelude::*;
use mettamate_site::SiteConfig;
use mettamate_site::nav::anchors;
use mettamate_site::reveal::Stagger;

use super::shared::{CarouselArrows, reveal};
use crate::icons::{ICON_ARROW_RIGHT, Icon};

pub(super) const SECTION_ID: &str = anchors::CONNECT;

struct Event {
    day: &'static str,
    month: &'static str,
    title: &'static str,
    kind: &'static str,
    description: &'static str,
    image: &'static str,
}

static EVENTS: [Event; 4] = [
    Event {
        day: "14",
        month: "OCT",
        title: "Dhamma Chakra Day",
        kind: "Celebration",
        description: "Renewing our vows to liberty and equality.",
        image: "https://images.unsplash.com/photo-1596541223130-5d31a73fb6c6?w=600&q=80",
    },
    Event {
        day: "18",
        month: "OCT",
        title: "Healing Circles",
        kind: "Workshop",
        description: "A safe space to process, breathe, and release.",
        image: "https://images.unsplash.com/photo-1544367563-12123d8959bd?w=600&q=80",
    },
    Event {
        day: "02",
        month: "NOV",
        title: "Lit Festival",
        kind: "Gathering",
        description: "Words that shook the world, read by voices of today.",
        image: "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=600&q=80",
    },
    Event {
        day: "15",
        month: "NOV",
        title: "Future Mixer",
        kind: "Gathering",
        description: "Building the future with those who share your past.",
        image: "https://images.unsplash.com/photo-1522071820081-009f0129c71c?w=600&q=80",
    },
];

/// Upcoming events carousel. Target of the "Connect" nav link.
#[component]
pub fn Events() -> impl IntoView {
    let controller = use_context::<SiteConfig>().unwrap_or_default().carousels.events();
    let strip = NodeRef::<Div>::new();

    view! {
        <section id=SECTION_ID class="events">
            <div class="container-custom">
                <div class=reveal("carousel-head", Stagger::None)>
                    <div>
                        <span class="section-label">"Events"</span>
                        <h2 class="events-title">"Gathering with Purpose."</h2>
                    </div>
                    <CarouselArrows controller=controller strip=strip />
                </div>

                <div node_ref=strip class="carousel-strip hide-scrollbar">
                    {EVENTS.iter().map(|event| view! { <EventCard event=event /> }).collect_view()}
                </div>

                <div class=reveal("section-actions", Stagger::None)>
                    <button class="btn-primary">"View all events"</button>
                    <a href="#" class="text-link">"Host an event"</a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn EventCard(event: &'static Event) -> impl IntoView {
    view! {
        <div class=reveal("event-card", Stagger::None)>
            <img src=event.image alt=event.title class="event-image" />
            <div class="event-shade"></div>

            <div class="event-body">
                <div class="event-top">
                    <div class="event-date">
                        <div class="event-month">{event.month}</div>
                        <div class="event-day">{event.day}</div>
                    </div>
                    <span class="event-type">{event.kind}</span>
                </div>

                <div class="event-copy">
                    <h3 class="event-title">{event.title}</h3>
                    <p class="event-desc">{event.description}</p>
                    <div class="event-more">
                        "Details "
                        <Icon path=ICON_ARROW_RIGHT size="14" />
                    </div>
                </div>
            </div>
        </div>
    }
}
