use leptos::prelude::*;
use mettamate_site::reveal::Stagger;

use super::shared::reveal;

/// A pulsing map node. `x`/`y` are percentages of the map box.
struct City {
    name: &'static str,
    x: u8,
    y: u8,
    delay: &'static str,
}

static CITIES: [City; 8] = [
    City { name: "Toronto", x: 28, y: 35, delay: "0s" },
    City { name: "London", x: 49, y: 26, delay: "1.5s" },
    City { name: "Delhi", x: 69, y: 40, delay: "2.5s" },
    City { name: "Mumbai", x: 68, y: 48, delay: "0.5s" },
    City { name: "Pune", x: 69, y: 50, delay: "3s" },
    City { name: "Bengaluru", x: 70, y: 55, delay: "1s" },
    City { name: "New York", x: 29, y: 39, delay: "2s" },
    City { name: "Singapore", x: 78, y: 60, delay: "3.5s" },
];

const CONTINENTS: [&str; 6] = [
    "M225,127 C211,106 170,105 152,117 C138,126 109,114 100,123 C94,129 100,147 91,155 C77,166 41,154 41,180 C41,200 68,228 85,242 C104,258 123,293 129,317 C133,332 129,360 144,363 C165,367 172,326 178,304 C183,286 211,262 211,262 C211,262 263,248 274,228 C283,212 284,185 277,171 C272,160 252,143 252,143 L225,127 Z",
    "M470,89 C457,93 454,117 447,128 C443,135 431,139 428,148 C425,158 438,168 444,175 C451,183 446,204 446,204 C446,204 471,195 480,188 C495,176 525,170 525,170 C525,170 541,151 528,136 C519,126 498,82 470,89 Z",
    "M578,166 C566,177 568,206 568,206 C568,206 589,223 589,223 C589,223 624,213 624,213 C624,213 668,212 680,199 C691,188 720,165 720,165 C720,165 700,147 687,149 C673,151 645,166 645,166 L578,166 Z",
    "M634,269 C634,269 643,303 652,323 C660,342 667,370 685,373 C702,376 718,349 718,349 C718,349 746,316 754,297 C766,269 778,252 754,233 C732,216 690,227 671,234 C656,239 634,269 634,269 Z",
    "M801,235 C801,235 791,268 791,268 C791,268 823,293 833,285 C843,276 864,256 864,256 C864,256 822,221 801,235 Z",
    "M890,307 C890,307 872,332 878,352 C884,370 917,363 917,363 C917,363 936,336 931,316 C926,298 890,307 890,307 Z",
];

/// (path, animation delay)
const ROUTES: [(&str, &str); 3] = [
    ("M490,260 Q590,350 690,400", "0s"),
    ("M280,350 Q485,300 490,260", "2s"),
    ("M690,400 Q740,450 780,600", "1s"),
];

#[component]
pub fn GlobalGathering() -> impl IntoView {
    view! {
        <section class="gathering">
            <div class="container-custom">
                <div class=reveal("gathering-head", Stagger::None)>
                    <h2>"Gathering across cities. Growing through care."</h2>
                    <p>"From local circles to a shared global fabric."</p>
                </div>

                <div class=reveal("world-map", Stagger::None)>
                    <svg viewBox="0 0 1000 500" class="map-silhouette">
                        {CONTINENTS
                            .into_iter()
                            .map(|d| view! { <path fill="#2A4B9B" d=d></path> })
                            .collect_view()}
                    </svg>

                    <svg class="map-routes">
                        {ROUTES
                            .into_iter()
                            .map(|(d, delay)| view! {
                                <path
                                    d=d
                                    fill="none"
                                    stroke="#2A4B9B"
                                    stroke-width="1"
                                    stroke-dasharray="4 4"
                                    class="animate-pulse-slow"
                                    style=format!("animation-delay: {delay}")
                                ></path>
                            })
                            .collect_view()}
                    </svg>

                    {CITIES.iter().map(|city| view! { <CityNode city=city /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CityNode(city: &'static City) -> impl IntoView {
    view! {
        <div class="city" style=format!("left: {}%; top: {}%", city.x, city.y)>
            <div class="city-ring animate-pulse-ring" style=format!("animation-delay: {}", city.delay)></div>
            <div class="city-dot"></div>
            <div class="city-tip">
                <span class="city-name">{city.name}</span>
                <span class="city-status">"Community Active"</span>
            </div>
        </div>
    }
}
