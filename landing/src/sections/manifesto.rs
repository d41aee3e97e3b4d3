use leptos::prelude::*;
use mettamate_site::reveal::Stagger;

use super::shared::{SectionHeader, reveal};

#[component]
pub fn Manifesto() -> impl IntoView {
    view! {
        <section class="manifesto">
            <div class="container-custom">
                <div class="manifesto-grid">
                    <div class="manifesto-figure">
                        <div class="manifesto-photo">
                            <img
                                src="https://images.unsplash.com/photo-1531206715517-5c0ba140b2b8?w=800&q=80"
                                alt="Reading book"
                            />
                            <div class="manifesto-quote">
                                <blockquote>
                                    "\"Cultivation of mind should be the ultimate aim of human existence.\""
                                </blockquote>
                                <p class="quote-author">"Dr. B.R. Ambedkar"</p>
                            </div>
                        </div>
                    </div>

                    <div class="manifesto-copy">
                        <SectionHeader label="Our Story" title="You’ve explained enough." />
                        <h2 class=reveal("manifesto-accent", Stagger::None)>"enough."</h2>

                        <div class="manifesto-body">
                            <p class=reveal("", Stagger::None)>
                                "In most digital spaces, we have to translate our history or justify our presence "
                                "before we can even begin to connect. It is exhausting. MettaMate is the answer to "
                                "that fatigue: a space where context is understood, history is shared, and the "
                                "baseline is dignity."
                            </p>
                            <p class=reveal("", Stagger::None)>
                                "More than just a social network, we are a digital ecosystem designed to nurture "
                                "your growth, protect your peace, and celebrate your joy."
                            </p>
                            <p class=reveal("manifesto-closing", Stagger::None)>
                                "With your roots secure, you are finally free to evolve."
                            </p>
                        </div>

                        <div class=reveal("guidelines-link", Stagger::None)>
                            <button class="underline-btn">"Read our Community Guidelines"</button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
