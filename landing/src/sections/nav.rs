use leptos::ev;
use leptos::prelude::*;
use mettamate_site::SiteConfig;
use mettamate_site::nav::{NAV_ANCHORS, NavState};
use send_wrapper::SendWrapper;

#[component]
pub fn Navigation() -> impl IntoView {
    let settings = use_context::<SiteConfig>().unwrap_or_default().nav;
    let (state, set_state) = signal(NavState::Expanded);

    let listener = window_event_listener(ev::scroll, move |_| {
        let scroll_y = window().scroll_y().unwrap_or_default();
        set_state.set(NavState::from_scroll(scroll_y, &settings));
    });
    let listener = SendWrapper::new(listener);
    on_cleanup(move || listener.take().remove());

    view! {
        <nav class="nav" class:condensed=move || state.get().is_condensed()>
            <div class="container-custom">
                <div class="nav-bar">
                    <div class="nav-brand">"MettaMate"</div>

                    <div class="nav-links">
                        {NAV_ANCHORS
                            .iter()
                            .map(|anchor| view! {
                                <a href=anchor.href() class="nav-link">{anchor.label}</a>
                            })
                            .collect_view()}
                    </div>

                    <button class="nav-cta">"Join Now"</button>
                </div>
            </div>
        </nav>
    }
}
