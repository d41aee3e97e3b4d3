use leptos::prelude::*;
use mettamate_site::reveal::Stagger;

use super::shared::reveal;

const STATS: [(&str, &str); 4] = [
    ("15k+", "Lives Connected"),
    ("50+", "Cities Active"),
    ("500+", "Mentors Leading"),
    ("∞", "Limitless Worth"),
];

#[component]
pub fn Impact() -> impl IntoView {
    view! {
        <section class="impact">
            <div class="container-custom">
                <div class=reveal("impact-head", Stagger::None)>
                    <h2>"Boundless reach, grounded roots."</h2>
                    <p>"From every corner of the world, we come together to lift each other up."</p>
                </div>

                <div class="impact-grid">
                    {STATS
                        .into_iter()
                        .enumerate()
                        .map(|(i, (value, label))| view! {
                            <div class=reveal("impact-stat", Stagger::nth(i))>
                                <div class="impact-value">{value}</div>
                                <div class="impact-label">{label}</div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
