// Browser adapters for the headless engine
// Developed with care by The MettaMate Team (c)2025

mod reveal;
mod scroll;

pub use reveal::use_scroll_reveal;
pub use scroll::DomScroller;
