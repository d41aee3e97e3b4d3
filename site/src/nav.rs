//! Navigation bar state and in-page anchors.

use serde::{Deserialize, Serialize};

/// Section ids the navigation links to.
pub mod anchors {
    /// Events carousel
    pub const CONNECT: &str = "connect";
    /// Growth grid
    pub const GROW: &str = "grow";
    /// Community economy cards
    pub const SUPPORT: &str = "support";
    /// Safety section
    pub const SAFETY: &str = "safety";
}

/// One navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavAnchor {
    /// Link text
    pub label: &'static str,
    /// Target section id, without `#`
    pub id: &'static str,
}

impl NavAnchor {
    /// `#id` link target.
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Links shown in the navigation bar, in display order.
pub const NAV_ANCHORS: [NavAnchor; 4] = [
    NavAnchor {
        label: "Connect",
        id: anchors::CONNECT,
    },
    NavAnchor {
        label: "Grow",
        id: anchors::GROW,
    },
    NavAnchor {
        label: "Support",
        id: anchors::SUPPORT,
    },
    NavAnchor {
        label: "Safety",
        id: anchors::SAFETY,
    },
];

/// Navigation bar settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavSettings {
    /// Page scroll (px) past which the bar condenses
    pub condensed_after: f64,
}

impl Default for NavSettings {
    fn default() -> Self {
        Self {
            condensed_after: 50.0,
        }
    }
}

/// Presentation of the fixed navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavState {
    /// Transparent, roomy; at the top of the page
    #[default]
    Expanded,
    /// Glass card with a shadow; once the page has scrolled
    Condensed,
}

impl NavState {
    /// State for a vertical page scroll offset.
    pub fn from_scroll(scroll_y: f64, settings: &NavSettings) -> Self {
        if scroll_y > settings.condensed_after {
            NavState::Condensed
        } else {
            NavState::Expanded
        }
    }

    /// Whether the bar is condensed.
    pub fn is_condensed(self) -> bool {
        matches!(self, NavState::Condensed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn condenses_strictly_after_threshold() {
        let settings = NavSettings::default();
        assert_eq!(NavState::from_scroll(0.0, &settings), NavState::Expanded);
        assert_eq!(NavState::from_scroll(50.0, &settings), NavState::Expanded);
        assert_eq!(NavState::from_scroll(50.5, &settings), NavState::Condensed);
        assert!(NavState::from_scroll(900.0, &settings).is_condensed());
    }

    #[test]
    fn anchors_cover_the_linked_sections() {
        let hrefs: Vec<String> = NAV_ANCHORS.iter().map(NavAnchor::href).collect();
        assert_eq!(hrefs, vec!["#connect", "#grow", "#support", "#safety"]);
    }
}
