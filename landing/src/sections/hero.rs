use leptos::prelude::*;
use mettamate_site::reveal::Stagger;

use super::shared::reveal;
use crate::icons::{ICON_ARROW_RIGHT, Icon};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-backdrop"></div>
            <div class="hero-veil"></div>

            <div class="hero-content container-custom">
                <div class=reveal("hero-badge-row", Stagger::None)>
                    <span class="hero-badge">"Welcome Home"</span>
                </div>

                <h1 class=reveal("hero-title", Stagger::One)>
                    "Where you simply "
                    <br />
                    <span class="hero-accent">"belong."</span>
                </h1>

                <p class=reveal("hero-lede", Stagger::Two)>
                    "A dignified space for Ambedkarites to gather, heal, and grow."
                    <br />
                    "Rooted in shared experience and trust."
                </p>

                <div class=reveal("hero-actions", Stagger::Three)>
                    <button class="btn-primary">
                        "Find Your People "
                        <Icon path=ICON_ARROW_RIGHT />
                    </button>
                    <span class="hero-online">
                        <span class="online-dot"></span>
                        "15,000+ Members Online"
                    </span>
                </div>
            </div>
        </section>
    }
}
