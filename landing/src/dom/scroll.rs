use mettamate_site::carousel::{ScrollBehavior, ScrollContainer};
use web_sys::{Element, ScrollToOptions};

/// A mounted carousel strip.
pub struct DomScroller<'a>(pub &'a Element);

impl ScrollContainer for DomScroller<'_> {
    fn scroll_by(&self, delta_x: f64, behavior: ScrollBehavior) {
        let options = ScrollToOptions::new();
        options.set_left(delta_x);
        options.set_behavior(match behavior {
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
            ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
            ScrollBehavior::Auto => web_sys::ScrollBehavior::Auto,
        });
        self.0.scroll_by_with_scroll_to_options(&options);
    }
}
