//! Viewport geometry.
//!
//! Intersection math in CSS pixels, matching what a browser's
//! intersection observer reports. The landing page only needs this when
//! the host has no native observer and reveal has to be driven from
//! scroll events instead.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in CSS pixels (viewport coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width, negative values are treated as zero
    pub width: f64,
    /// Height, negative values are treated as zero
    pub height: f64,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width.max(0.0)
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height.max(0.0)
    }

    /// Area, zero for degenerate rectangles.
    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Overlap of two rectangles.
    ///
    /// Edge-adjacent rectangles intersect with a zero-area result, the same
    /// way browsers report `isIntersecting` for them.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

/// Errors produced while parsing a CSS root-margin shorthand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarginParseError {
    /// Nothing but whitespace
    #[error("root margin is empty")]
    Empty,
    /// Fewer than 1 or more than 4 values
    #[error("root margin takes 1 to 4 values, got {0}")]
    Arity(usize),
    /// A value that is not a pixel length
    #[error("invalid root margin value `{0}` (expected pixels like `-50px` or `0`)")]
    Value(String),
}

/// Root margin in CSS pixels, applied to the viewport before intersecting.
///
/// Positive values grow the root, negative values shrink it. Renders to and
/// parses from the same shorthand an intersection observer accepts, e.g.
/// `"0px 0px -50px 0px"`. Percentages are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RootMargin {
    /// Top margin
    pub top: f64,
    /// Right margin
    pub right: f64,
    /// Bottom margin
    pub bottom: f64,
    /// Left margin
    pub left: f64,
}

impl RootMargin {
    /// Creates a margin in CSS `top right bottom left` order.
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Applies the margin to a root rectangle.
    pub fn apply(&self, root: Rect) -> Rect {
        Rect::new(
            root.x - self.left,
            root.y - self.top,
            (root.width + self.left + self.right).max(0.0),
            (root.height + self.top + self.bottom).max(0.0),
        )
    }
}

fn parse_px(token: &str) -> Result<f64, MarginParseError> {
    let number = token.strip_suffix("px").unwrap_or(token);
    // Unitless lengths are only valid for zero in CSS.
    if number.len() == token.len() && token.parse::<f64>().ok() != Some(0.0) {
        return Err(MarginParseError::Value(token.to_string()));
    }
    number
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| MarginParseError::Value(token.to_string()))
}

impl FromStr for RootMargin {
    type Err = MarginParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split_whitespace()
            .map(parse_px)
            .collect::<Result<Vec<_>, _>>()?;

        match values.as_slice() {
            [] => Err(MarginParseError::Empty),
            [all] => Ok(Self::new(*all, *all, *all, *all)),
            [vertical, horizontal] => Ok(Self::new(*vertical, *horizontal, *vertical, *horizontal)),
            [top, horizontal, bottom] => Ok(Self::new(*top, *horizontal, *bottom, *horizontal)),
            [top, right, bottom, left] => Ok(Self::new(*top, *right, *bottom, *left)),
            more => Err(MarginParseError::Arity(more.len())),
        }
    }
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}px {}px {}px {}px",
            self.top, self.right, self.bottom, self.left
        )
    }
}

impl TryFrom<String> for RootMargin {
    type Error = MarginParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RootMargin> for String {
    fn from(margin: RootMargin) -> Self {
        margin.to_string()
    }
}

/// Fraction of `target` visible inside `root` once `margin` is applied.
///
/// Returns `0.0` when the two do not intersect. A zero-area target that
/// sits inside the root counts as fully visible.
pub fn intersection_ratio(target: Rect, root: Rect, margin: &RootMargin) -> f64 {
    let bounds = margin.apply(root);
    let Some(hit) = target.intersection(&bounds) else {
        return 0.0;
    };

    let area = target.area();
    if area == 0.0 {
        return 1.0;
    }
    (hit.area() / area).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1280.0, 800.0);

    #[test]
    fn parses_every_shorthand_arity() {
        assert_eq!(
            "8px".parse::<RootMargin>(),
            Ok(RootMargin::new(8.0, 8.0, 8.0, 8.0))
        );
        assert_eq!(
            "4px 0".parse::<RootMargin>(),
            Ok(RootMargin::new(4.0, 0.0, 4.0, 0.0))
        );
        assert_eq!(
            "1px 2px 3px".parse::<RootMargin>(),
            Ok(RootMargin::new(1.0, 2.0, 3.0, 2.0))
        );
        assert_eq!(
            "0px 0px -50px 0px".parse::<RootMargin>(),
            Ok(RootMargin::new(0.0, 0.0, -50.0, 0.0))
        );
    }

    #[test]
    fn rejects_malformed_margins() {
        assert_eq!("   ".parse::<RootMargin>(), Err(MarginParseError::Empty));
        assert_eq!(
            "1px 2px 3px 4px 5px".parse::<RootMargin>(),
            Err(MarginParseError::Arity(5))
        );
        assert_eq!(
            "10%".parse::<RootMargin>(),
            Err(MarginParseError::Value("10%".into()))
        );
        assert_eq!(
            "12".parse::<RootMargin>(),
            Err(MarginParseError::Value("12".into()))
        );
    }

    #[test]
    fn displays_as_observer_shorthand() {
        let margin = RootMargin::new(0.0, 0.0, -50.0, 0.0);
        assert_eq!(margin.to_string(), "0px 0px -50px 0px");
        assert_eq!(margin.to_string().parse::<RootMargin>(), Ok(margin));
    }

    #[test]
    fn negative_bottom_margin_shrinks_viewport_from_below() {
        let bounds = RootMargin::new(0.0, 0.0, -50.0, 0.0).apply(VIEWPORT);
        assert_eq!(bounds, Rect::new(0.0, 0.0, 1280.0, 750.0));
    }

    #[test]
    fn disjoint_rects_do_not_intersect() {
        let below = Rect::new(0.0, 900.0, 100.0, 100.0);
        assert_eq!(below.intersection(&VIEWPORT), None);
        assert_eq!(intersection_ratio(below, VIEWPORT, &RootMargin::default()), 0.0);
    }

    #[test]
    fn ratio_is_visible_share_of_target() {
        // Top quarter of a 400px card peeks above the fold.
        let card = Rect::new(100.0, 700.0, 300.0, 400.0);
        let ratio = intersection_ratio(card, VIEWPORT, &RootMargin::default());
        assert!((ratio - 0.25).abs() < 1e-9);

        let with_margin = intersection_ratio(card, VIEWPORT, &RootMargin::new(0.0, 0.0, -50.0, 0.0));
        assert!((with_margin - 0.125).abs() < 1e-9);
    }

    #[test]
    fn element_in_bottom_band_is_hidden_by_margin() {
        let card = Rect::new(0.0, 760.0, 200.0, 200.0);
        assert!(intersection_ratio(card, VIEWPORT, &RootMargin::default()) > 0.0);
        assert_eq!(
            intersection_ratio(card, VIEWPORT, &RootMargin::new(0.0, 0.0, -50.0, 0.0)),
            0.0
        );
    }

    #[test]
    fn zero_area_target_inside_root_is_fully_visible() {
        let marker = Rect::new(10.0, 10.0, 0.0, 0.0);
        assert_eq!(intersection_ratio(marker, VIEWPORT, &RootMargin::default()), 1.0);
    }
}
