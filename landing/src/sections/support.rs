use leptos::prelude::*;
use mettamate_site::nav::anchors;
use mettamate_site::reveal::Stagger;

use super::shared::{SectionHeader, reveal};
use crate::icons::{ICON_BRIEFCASE, ICON_HEART, ICON_SPARKLES, ICON_USERS, Icon};

pub(super) const SECTION_ID: &str = anchors::SUPPORT;

struct Initiative {
    tag: &'static str,
    title: &'static str,
    blurb: &'static str,
    icon: &'static str,
    /// `tone-*` color class for the icon and tag
    tone: &'static str,
}

static INITIATIVES: [Initiative; 4] = [
    Initiative {
        tag: "Business",
        title: "Community Market",
        blurb: "Support entrepreneurs and creators. Every purchase circulates wealth within our ecosystem.",
        icon: ICON_BRIEFCASE,
        tone: "tone-blue",
    },
    Initiative {
        tag: "Nonprofit",
        title: "Cause & Advocacy",
        blurb: "Donate to organizations fighting for justice, education, and structural change.",
        icon: ICON_HEART,
        tone: "tone-gold",
    },
    Initiative {
        tag: "Mutual Aid",
        title: "Grassroots Relief",
        blurb: "Direct support funds for emergency relief and community care initiatives.",
        icon: ICON_SPARKLES,
        tone: "tone-green",
    },
    Initiative {
        tag: "Collective",
        title: "Community Collectives",
        blurb: "Join volunteer-led circles, reading groups, and local projects.",
        icon: ICON_USERS,
        tone: "tone-dark",
    },
];

/// Community economy cards. Target of the "Support" nav link.
#[component]
pub fn Support() -> impl IntoView {
    view! {
        <section id=SECTION_ID class="support">
            <div class="container-custom">
                <SectionHeader
                    label="Support"
                    title="Support the community economy."
                    subtitle="True wealth is shared well-being. Support the businesses, non-profits, and initiatives that sustain us beyond just commerce."
                    centered=true
                />

                <div class="support-grid">
                    {INITIATIVES
                        .iter()
                        .enumerate()
                        .map(|(i, item)| view! {
                            <div class=reveal("support-card", Stagger::nth(i))>
                                <div class="support-card-head">
                                    <div class=format!("support-icon {}", item.tone)>
                                        <Icon path=item.icon size="24" />
                                    </div>
                                    <span class=format!("support-tag {}", item.tone)>{item.tag}</span>
                                </div>
                                <h3>{item.title}</h3>
                                <p>{item.blurb}</p>
                            </div>
                        })
                        .collect_view()}
                </div>

                <div class=reveal("section-actions", Stagger::None)>
                    <button class="btn-primary">"Explore the ecosystem"</button>
                    <a href="#" class="text-link">"List your initiative"</a>
                </div>
            </div>
        </section>
    }
}
