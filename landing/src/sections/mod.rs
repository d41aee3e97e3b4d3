// Landing page sections
// Developed with care by The MettaMate Team (c)2025

mod bridge;
mod events;
mod faq;
mod footer;
mod gathering;
mod grow;
mod hero;
mod impact;
mod manifesto;
mod nav;
mod safety;
mod shared;
mod showing_up;
mod support;
mod voices;

pub use bridge::Bridge;
pub use events::Events;
pub use faq::Faq;
pub use footer::Footer;
pub use gathering::GlobalGathering;
pub use grow::Grow;
pub use hero::Hero;
pub use impact::Impact;
pub use manifesto::Manifesto;
pub use nav::Navigation;
pub use safety::Safety;
pub use showing_up::ShowingUp;
pub use support::Support;
pub use voices::Voices;

#[cfg(test)]
mod tests {
    use super::*;
    use mettamate_site::nav::NAV_ANCHORS;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_nav_anchor_lands_on_a_section() {
        let rendered = [
            events::SECTION_ID,
            grow::SECTION_ID,
            support::SECTION_ID,
            safety::SECTION_ID,
        ];
        let linked: Vec<&str> = NAV_ANCHORS.iter().map(|anchor| anchor.id).collect();
        assert_eq!(linked, rendered);
    }
}
