use leptos::prelude::*;
use mettamate_site::reveal::Stagger;

use super::shared::{SectionHeader, reveal};
use crate::icons::{ICON_BRIEFCASE, ICON_HEART, ICON_STAR, ICON_USERS, Icon};

const PILLARS: [(&str, &str, &str); 4] = [
    ("Meaningful connections", "Friendships rooted in shared understanding.", ICON_USERS),
    ("Career growth with context", "Workplaces where you don't have to hide.", ICON_BRIEFCASE),
    ("Mentorship & giving back", "Guidance from those who have walked the path.", ICON_STAR),
    ("Community initiatives", "Wellness and support, circulated among us.", ICON_HEART),
];

#[component]
pub fn Bridge() -> impl IntoView {
    view! {
        <section class="bridge">
            <div class="container-custom">
                <SectionHeader title="There’s a place for you here." centered=true />

                <div class="bridge-grid">
                    {PILLARS
                        .into_iter()
                        .enumerate()
                        .map(|(i, (title, description, icon))| view! {
                            <div class=reveal("bridge-item", Stagger::nth(i))>
                                <div class="bridge-icon">
                                    <Icon path=icon size="24" />
                                </div>
                                <h3 class="bridge-title">{title}</h3>
                                <p class="bridge-desc">{description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
