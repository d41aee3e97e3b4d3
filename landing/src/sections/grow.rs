use leptos::prelude::*;
use mettamate_site::nav::anchors;
use mettamate_site::reveal::Stagger;

use super::shared::{SectionHeader, reveal};
use crate::icons::{ICON_ARROW_RIGHT, ICON_BOOK_OPEN, ICON_BRIEFCASE, ICON_HEART, ICON_USERS, Icon};

pub(super) const SECTION_ID: &str = anchors::GROW;

const MENTOR_AVATARS: [&str; 3] = [
    "https://i.pravatar.cc/100?img=21",
    "https://i.pravatar.cc/100?img=22",
    "https://i.pravatar.cc/100?img=23",
];

/// Bento grid of growth programs. Target of the "Grow" nav link.
#[component]
pub fn Grow() -> impl IntoView {
    view! {
        <section id=SECTION_ID class="grow">
            <div class="container-custom">
                <SectionHeader
                    label="Grow"
                    title="More than just connection."
                    subtitle="A dedicated ecosystem for your personal and professional evolution."
                    centered=true
                />

                <div class="grow-grid">
                    <div class=reveal("grow-card wide mentorship", Stagger::None)>
                        <div class="grow-tag">"Mentorship"</div>
                        <div class="grow-shade"></div>
                        <img
                            src="https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?w=1200&q=80"
                            alt="Mentorship"
                            class="grow-photo"
                        />
                        <div class="mentorship-body">
                            <div class="mentor-row">
                                <div class="avatar-stack">
                                    {MENTOR_AVATARS
                                        .into_iter()
                                        .map(|src| view! { <img src=src alt="Mentor" /> })
                                        .collect_view()}
                                </div>
                                <span>"Real guidance from those who have walked the path."</span>
                            </div>
                            <h3 class="grow-card-title">"Guidance Rooted in Reality"</h3>
                            <p>
                                "Connect with mentors who understand structural barriers and how to navigate them."
                            </p>
                        </div>
                    </div>

                    <div class=reveal("grow-card career", Stagger::One)>
                        <Icon path=ICON_BRIEFCASE size="40" />
                        <div>
                            <h3 class="grow-card-title">"Career Hub"</h3>
                            <p>"Jobs at inclusive organizations that value your heritage."</p>
                            <div class="stat-box">
                                <strong>"450+"</strong>
                                <span>"Active Listings"</span>
                            </div>
                        </div>
                    </div>

                    <div class=reveal("grow-card stories", Stagger::None)>
                        <Icon path=ICON_BOOK_OPEN size="40" />
                        <h3 class="grow-card-title">"Community Stories"</h3>
                        <p>"Read essays and success stories from members like you."</p>
                        <button class="soft-btn">"Read Blog"</button>
                    </div>

                    <div class=reveal("grow-card wide relationships", Stagger::One)>
                        <div class="relationships-copy">
                            <div class="relationships-kicker">
                                <Icon path=ICON_HEART filled=true />
                                <span>"Relationships"</span>
                            </div>
                            <h3 class="grow-card-title">"Meaningful Connections"</h3>
                            <p>
                                "Whether you are looking for friendship, a co-founder, or a life partner, "
                                "find people who share your values."
                            </p>
                            <button class="arrow-link">
                                "Explore Connections "
                                <Icon path=ICON_ARROW_RIGHT size="18" />
                            </button>
                        </div>
                        <div class="orbit">
                            <div class="orbit-outer">
                                <div class="orbit-inner">
                                    <Icon path=ICON_USERS size="40" />
                                </div>
                            </div>
                            <img src="https://i.pravatar.cc/100?img=5" alt="Member" class="orbit-avatar high" />
                            <img src="https://i.pravatar.cc/100?img=9" alt="Member" class="orbit-avatar low" />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
