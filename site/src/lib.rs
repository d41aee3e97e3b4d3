//! # mettamate-site
//!
//! Headless engine behind the MettaMate landing page.
//!
//! The page itself is a Leptos CSR binary (`mettamate-landing`). Everything
//! in it that behaves, rather than just renders, lives here so it can be
//! driven and tested without a browser:
//!
//! - **Scroll reveal** - elements tagged `reveal-on-scroll` flip to visible
//!   once they cross 10% of the viewport, and never flip back
//! - **Carousels** - directional, fixed-step, smooth horizontal scrolling
//! - **Viewport geometry** - intersection math for hosts without a native
//!   intersection observer
//! - **Site configuration** - TOML-backed, validated, all fields defaulted
//!
//! ## Quick Start
//!
//! ```rust
//! use mettamate_site::carousel::{CarouselController, ScrollBehavior, ScrollContainer, ScrollDirection};
//! use std::cell::Cell;
//!
//! struct Strip(Cell<f64>);
//!
//! impl ScrollContainer for Strip {
//!     fn scroll_by(&self, delta_x: f64, _behavior: ScrollBehavior) {
//!         self.0.set(self.0.get() + delta_x);
//!     }
//! }
//!
//! let controller = CarouselController::new(400.0).unwrap();
//! let strip = Strip(Cell::new(0.0));
//! controller.scroll(Some(&strip), ScrollDirection::Right);
//! assert_eq!(strip.0.get(), 400.0);
//! ```
//!
//! ## Architecture
//!
//! - [`reveal`] - the one-way visibility engine and its watcher capability
//! - [`carousel`] - the scroll controller and its container capability
//! - [`geometry`] - rectangles, root margins, intersection ratios
//! - [`nav`] - navigation bar condensing and in-page anchors
//! - [`subscribe`] - newsletter address validation
//! - [`config`] - [`SiteConfig`] loading and validation
//! - [`styles`] - the global stylesheet
//!
//! ---
//!
//! Developed with care by The MettaMate Team (c)2025

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod carousel;
pub mod config;
pub mod geometry;
pub mod nav;
pub mod reveal;
pub mod styles;
pub mod subscribe;

pub use config::{ConfigError, SiteConfig};
