use leptos::prelude::*;
use mettamate_site::reveal::Stagger;

use super::shared::{SectionHeader, reveal};
use crate::icons::QuoteMark;

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    role: &'static str,
    photo: &'static str,
}

static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "I didn't realize how heavy the armor was until I found a place where I could finally take it off. It’s quiet here, in the best way.",
        name: "Anjali",
        role: "Architect",
        photo: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=150&q=80",
    },
    Testimonial {
        quote: "To speak without translation, to exist without justification: this is the dignity we were promised. I have found my breath again.",
        name: "Siddharth",
        role: "Historian",
        photo: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&q=80",
    },
    Testimonial {
        quote: "It’s not just about networking. It’s about finding the people who will hold the ladder steady while you climb. Pure kinship.",
        name: "Kiran",
        role: "Product Designer",
        photo: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?w=150&q=80",
    },
];

#[component]
pub fn Voices() -> impl IntoView {
    view! {
        <section class="voices">
            <div class="voices-glow"></div>

            <div class="container-custom">
                <SectionHeader title="Voices from the community." centered=true />

                <div class="voices-grid">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(i, voice)| view! {
                            <div class=reveal("voice-card", Stagger::nth(i))>
                                <div class="voice-mark">
                                    <QuoteMark />
                                </div>
                                <p class="voice-quote">{format!("\"{}\"", voice.quote)}</p>
                                <div class="voice-person">
                                    <img src=voice.photo alt=voice.name class="voice-avatar" />
                                    <div>
                                        <div class="voice-name">{voice.name}</div>
                                        <div class="voice-role">{voice.role}</div>
                                    </div>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
