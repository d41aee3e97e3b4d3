//! Carousel scroll controller.
//!
//! Each carousel on the page is a horizontally scrollable strip with a pair
//! of arrow buttons. A click nudges the strip by a fixed step in one
//! direction; the host's smooth scrolling animates it and clamps the
//! result to the strip's scrollable extent.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::config::ConfigError;

/// Step of the "showing up together" moments carousel.
pub const MOMENTS_STEP: f64 = 400.0;

/// Step of the events carousel.
pub const EVENTS_STEP: f64 = 350.0;

/// Error for a direction that is neither `left` nor `right`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scroll direction `{0}` (expected `left` or `right`)")]
pub struct UnknownDirection(pub String);

/// Which way an arrow button scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    /// Towards the start of the strip
    Left,
    /// Towards the end of the strip
    Right,
}

impl ScrollDirection {
    /// `-1.0` for left, `1.0` for right.
    pub fn sign(self) -> f64 {
        match self {
            ScrollDirection::Left => -1.0,
            ScrollDirection::Right => 1.0,
        }
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            ScrollDirection::Left => "left",
            ScrollDirection::Right => "right",
        }
    }
}

impl fmt::Display for ScrollDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScrollDirection {
    type Err = UnknownDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(ScrollDirection::Left),
            "right" => Ok(ScrollDirection::Right),
            _ => Err(UnknownDirection(s.to_string())),
        }
    }
}

/// How the host animates a scroll request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Animated
    #[default]
    Smooth,
    /// Jump
    Instant,
    /// Whatever the container's CSS `scroll-behavior` says
    Auto,
}

/// Host capability: a horizontally scrollable container.
pub trait ScrollContainer {
    /// Requests a relative horizontal scroll. The host clamps the result.
    fn scroll_by(&self, delta_x: f64, behavior: ScrollBehavior);
}

/// Fixed-step controller bound to one carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselController {
    step: f64,
    behavior: ScrollBehavior,
}

impl CarouselController {
    /// Creates a smooth-scrolling controller moving `step` pixels per click.
    pub fn new(step: f64) -> Result<Self, ConfigError> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::Step(step));
        }
        Ok(Self {
            step,
            behavior: ScrollBehavior::Smooth,
        })
    }

    pub(crate) const fn fixed(step: f64) -> Self {
        Self {
            step,
            behavior: ScrollBehavior::Smooth,
        }
    }

    /// Same controller, different animation.
    pub fn with_behavior(self, behavior: ScrollBehavior) -> Self {
        Self { behavior, ..self }
    }

    /// Pixels per click.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Animation used for requests.
    pub fn behavior(&self) -> ScrollBehavior {
        self.behavior
    }

    /// Signed offset change for one click.
    pub fn delta(&self, direction: ScrollDirection) -> f64 {
        direction.sign() * self.step
    }

    /// Scrolls `container` one step in `direction`.
    ///
    /// `None` means the container is not mounted yet; the click is dropped
    /// without error.
    pub fn scroll<C>(&self, container: Option<&C>, direction: ScrollDirection)
    where
        C: ScrollContainer + ?Sized,
    {
        let Some(container) = container else {
            trace!(%direction, "carousel not mounted, scroll ignored");
            return;
        };
        container.scroll_by(self.delta(direction), self.behavior);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};

    /// Strip that clamps like a browser scroll container.
    struct Strip {
        offset: Cell<f64>,
        max: f64,
        requests: RefCell<Vec<(f64, ScrollBehavior)>>,
    }

    impl Strip {
        fn new(offset: f64, max: f64) -> Self {
            Self {
                offset: Cell::new(offset),
                max,
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl ScrollContainer for Strip {
        fn scroll_by(&self, delta_x: f64, behavior: ScrollBehavior) {
            self.requests.borrow_mut().push((delta_x, behavior));
            self.offset
                .set((self.offset.get() + delta_x).clamp(0.0, self.max));
        }
    }

    #[test]
    fn right_from_zero_moves_one_step() {
        let controller = CarouselController::new(MOMENTS_STEP).unwrap();
        let strip = Strip::new(0.0, 2000.0);

        controller.scroll(Some(&strip), ScrollDirection::Right);

        assert_eq!(strip.offset.get(), 400.0);
        assert_eq!(
            *strip.requests.borrow(),
            vec![(400.0, ScrollBehavior::Smooth)]
        );
    }

    #[test]
    fn left_moves_back_by_same_magnitude() {
        let controller = CarouselController::new(EVENTS_STEP).unwrap();
        let strip = Strip::new(1000.0, 2000.0);

        controller.scroll(Some(&strip), ScrollDirection::Left);
        assert_eq!(strip.offset.get(), 650.0);

        controller.scroll(Some(&strip), ScrollDirection::Right);
        assert_eq!(strip.offset.get(), 1000.0);
    }

    #[test]
    fn host_clamps_short_strips() {
        let controller = CarouselController::new(MOMENTS_STEP).unwrap();
        let strip = Strip::new(0.0, 250.0);

        controller.scroll(Some(&strip), ScrollDirection::Right);
        assert_eq!(strip.offset.get(), 250.0);
        // The request itself is never pre-clamped.
        assert_eq!(strip.requests.borrow()[0].0, 400.0);

        controller.scroll(Some(&strip), ScrollDirection::Left);
        controller.scroll(Some(&strip), ScrollDirection::Left);
        assert_eq!(strip.offset.get(), 0.0);
    }

    #[test]
    fn unmounted_container_is_silent_noop() {
        let controller = CarouselController::new(MOMENTS_STEP).unwrap();
        controller.scroll::<Strip>(None, ScrollDirection::Right);
        controller.scroll::<Strip>(None, ScrollDirection::Left);
    }

    #[test]
    fn rejects_non_positive_steps() {
        assert!(matches!(CarouselController::new(0.0), Err(ConfigError::Step(_))));
        assert!(matches!(CarouselController::new(-350.0), Err(ConfigError::Step(_))));
        assert!(matches!(CarouselController::new(f64::NAN), Err(ConfigError::Step(_))));
    }

    #[test]
    fn behavior_override_is_forwarded() {
        let controller = CarouselController::new(100.0)
            .unwrap()
            .with_behavior(ScrollBehavior::Instant);
        let strip = Strip::new(0.0, 500.0);

        controller.scroll(Some(&strip), ScrollDirection::Right);
        assert_eq!(strip.requests.borrow()[0].1, ScrollBehavior::Instant);
    }

    #[test]
    fn directions_parse_case_insensitively() {
        assert_eq!("left".parse::<ScrollDirection>(), Ok(ScrollDirection::Left));
        assert_eq!(" Right ".parse::<ScrollDirection>(), Ok(ScrollDirection::Right));
        assert_eq!(
            "up".parse::<ScrollDirection>(),
            Err(UnknownDirection("up".into()))
        );
        assert_eq!(ScrollDirection::Left.to_string(), "left");
    }
}
