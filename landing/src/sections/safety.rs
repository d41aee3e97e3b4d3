use leptos::prelude::*;
use mettamate_site::nav::anchors;
use mettamate_site::reveal::Stagger;

use super::shared::reveal;
use crate::icons::{ICON_LOCK, ICON_SHIELD, ICON_SPARKLES, Icon};

pub(super) const SECTION_ID: &str = anchors::SAFETY;

/// Safety promises and the community covenant. Target of the "Safety" nav link.
#[component]
pub fn Safety() -> impl IntoView {
    view! {
        <section id=SECTION_ID class="safety">
            <div class="container-custom">
                <div class="safety-grid">
                    <div class=reveal("", Stagger::None)>
                        <div class="safety-kicker">
                            <Icon path=ICON_SHIELD size="28" />
                            <span>"Safety Anchor"</span>
                        </div>
                        <h2 class="safety-title">
                            "Safety is our "
                            <br />
                            <span class="safety-accent">"love language."</span>
                        </h2>
                        <p class="safety-lede">
                            "True vulnerability requires true safety. MettaMate is not a public square. "
                            "It is a gated community that prioritizes your privacy above engagement metrics. "
                            <strong>"Here, you can finally put your armor down."</strong>
                        </p>

                        <div class="safety-points">
                            <SafetyPoint
                                icon=ICON_LOCK
                                title="Human Verification"
                                text="Every profile is verified by a human to ensure community integrity."
                            />
                            <SafetyPoint
                                icon=ICON_SPARKLES
                                title="Values-Based Moderation"
                                text="Zero tolerance for hate speech or casteism. We protect our peace rigorously."
                            />
                        </div>
                    </div>

                    <div class=reveal("covenant-wrap", Stagger::None)>
                        <div class="covenant">
                            <div class="covenant-head">
                                <div class="live-dot"></div>
                                <span>"Community Covenant"</span>
                            </div>
                            <p class="covenant-text">
                                "\"We agree to treat each other with the dignity we deserve but are often denied "
                                "elsewhere. Here, we lift each other up.\""
                            </p>
                            <button class="covenant-btn">"Read Full Safety Policy"</button>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn SafetyPoint(icon: &'static str, title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="safety-point">
            <div class="safety-point-icon">
                <Icon path=icon />
            </div>
            <div>
                <h4>{title}</h4>
                <p>{text}</p>
            </div>
        </div>
    }
}
