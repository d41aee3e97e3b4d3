//! Scroll reveal.
//!
//! Elements tagged with [`REVEAL_CLASS`] start hidden (the stylesheet fades
//! and offsets them) and flip to visible the first time an intersection
//! entry reports them at or above the configured threshold. A flip is
//! permanent: revealed targets are unobserved and no later entry can hide
//! them again.
//!
//! The engine is host-agnostic. The host supplies an
//! [`IntersectionWatcher`] (a browser `IntersectionObserver` in the landing
//! page) and feeds its callbacks to [`ScrollReveal::handle`], then applies
//! [`VISIBLE_CLASS`] to whatever comes back.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::geometry::{Rect, RootMargin, intersection_ratio};

/// Class marking an element for reveal.
pub const REVEAL_CLASS: &str = "reveal-on-scroll";

/// Selector matching every reveal-tagged element.
pub const REVEAL_SELECTOR: &str = ".reveal-on-scroll";

/// Class added once an element has been revealed.
pub const VISIBLE_CLASS: &str = "visible";

// Browsers round intersection ratios; an entry delivered for crossing 0.1
// may carry 0.0999...
const RATIO_EPSILON: f64 = 1e-6;

/// Visibility of a reveal-tagged element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Not yet scrolled into view
    #[default]
    Hidden,
    /// Revealed, permanently
    Visible,
}

impl Visibility {
    /// Whether the element has been revealed.
    pub fn is_visible(self) -> bool {
        matches!(self, Visibility::Visible)
    }

    /// Flips to visible. Returns `true` only on the actual transition.
    fn reveal(&mut self) -> bool {
        let changed = !self.is_visible();
        *self = Visibility::Visible;
        changed
    }
}

/// Extra transition delay for grouped reveal elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stagger {
    /// No delay
    #[default]
    None,
    /// 100ms
    One,
    /// 200ms
    Two,
    /// 300ms
    Three,
}

impl Stagger {
    /// Stagger for the `index`-th card of a group, capped at [`Stagger::Three`].
    pub fn nth(index: usize) -> Self {
        match index {
            0 => Stagger::None,
            1 => Stagger::One,
            2 => Stagger::Two,
            _ => Stagger::Three,
        }
    }

    /// CSS class carrying the delay, if any.
    pub fn class(self) -> Option<&'static str> {
        match self {
            Stagger::None => None,
            Stagger::One => Some("stagger-1"),
            Stagger::Two => Some("stagger-2"),
            Stagger::Three => Some("stagger-3"),
        }
    }
}

/// Class list for a reveal-tagged element.
///
/// ```rust
/// use mettamate_site::reveal::{Stagger, reveal_class};
///
/// assert_eq!(reveal_class(Stagger::None), "reveal-on-scroll");
/// assert_eq!(reveal_class(Stagger::Two), "reveal-on-scroll stagger-2");
/// ```
pub fn reveal_class(stagger: Stagger) -> String {
    match stagger.class() {
        Some(delay) => format!("{REVEAL_CLASS} {delay}"),
        None => REVEAL_CLASS.to_string(),
    }
}

/// Observer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RevealOptions {
    /// Visible fraction at which an element is revealed
    pub threshold: f64,
    /// Margin applied to the viewport before intersecting
    pub root_margin: RootMargin,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: RootMargin::new(0.0, 0.0, -50.0, 0.0),
        }
    }
}

/// Host capability that watches targets against the viewport.
///
/// Implementations deliver their observations back to
/// [`ScrollReveal::handle`] on their own schedule.
pub trait IntersectionWatcher {
    /// Handle to an observed element.
    type Target;

    /// Starts watching `target`.
    fn observe(&mut self, target: &Self::Target);

    /// Stops watching `target`.
    fn unobserve(&mut self, target: &Self::Target);

    /// Stops watching everything. No observations arrive afterwards.
    fn disconnect(&mut self);
}

/// One observation of one target.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry<T> {
    /// The observed element
    pub target: T,
    /// Whether the target overlaps the margin-adjusted root at all
    pub is_intersecting: bool,
    /// Visible fraction of the target, `0.0..=1.0`
    pub ratio: f64,
}

impl<T> IntersectionEntry<T> {
    /// Wraps a host-reported observation.
    pub fn new(target: T, is_intersecting: bool, ratio: f64) -> Self {
        Self {
            target,
            is_intersecting,
            ratio,
        }
    }

    /// Computes an observation from layout rectangles.
    pub fn measure(target: T, bounds: Rect, root: Rect, options: &RevealOptions) -> Self {
        let is_intersecting = bounds
            .intersection(&options.root_margin.apply(root))
            .is_some();
        let ratio = intersection_ratio(bounds, root, &options.root_margin);
        Self::new(target, is_intersecting, ratio)
    }

    /// Whether this observation reveals its target.
    pub fn crosses(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio + RATIO_EPSILON >= threshold
    }
}

/// The reveal engine: tracks targets and flips them one way.
pub struct ScrollReveal<W: IntersectionWatcher> {
    watcher: W,
    options: RevealOptions,
    tracked: Vec<(W::Target, Visibility)>,
    connected: bool,
}

impl<W: IntersectionWatcher> ScrollReveal<W> {
    /// Creates an engine around a connected watcher.
    pub fn new(watcher: W, options: RevealOptions) -> Self {
        Self {
            watcher,
            options,
            tracked: Vec::new(),
            connected: true,
        }
    }

    /// Observer configuration.
    pub fn options(&self) -> &RevealOptions {
        &self.options
    }

    /// The host watcher.
    pub fn watcher(&self) -> &W {
        &self.watcher
    }

    /// Whether the watcher is still connected.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Number of tracked targets.
    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    /// Whether nothing is tracked.
    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }

    /// Number of tracked targets still hidden.
    pub fn pending(&self) -> usize {
        self.tracked
            .iter()
            .filter(|(_, state)| !state.is_visible())
            .count()
    }

    /// Tracked targets still hidden.
    pub fn pending_targets(&self) -> impl Iterator<Item = &W::Target> {
        self.tracked
            .iter()
            .filter(|(_, state)| !state.is_visible())
            .map(|(target, _)| target)
    }

    /// Disconnects the watcher. Idempotent; later entries are ignored.
    pub fn teardown(&mut self) {
        if !self.connected {
            return;
        }
        self.connected = false;
        self.watcher.disconnect();
        debug!(
            tracked = self.tracked.len(),
            pending = self.pending(),
            "scroll reveal torn down"
        );
    }
}

impl<W> ScrollReveal<W>
where
    W: IntersectionWatcher,
    W::Target: PartialEq + Clone,
{
    fn position(&self, target: &W::Target) -> Option<usize> {
        self.tracked.iter().position(|(known, _)| known == target)
    }

    /// Registers targets with the watcher.
    ///
    /// Already-tracked targets are skipped. Returns how many were added;
    /// zero targets is a no-op, as is mounting after teardown.
    pub fn mount<I>(&mut self, targets: I) -> usize
    where
        I: IntoIterator<Item = W::Target>,
    {
        if !self.connected {
            trace!("mount after teardown ignored");
            return 0;
        }

        let mut added = 0;
        for target in targets {
            if self.position(&target).is_some() {
                continue;
            }
            self.watcher.observe(&target);
            self.tracked.push((target, Visibility::Hidden));
            added += 1;
        }

        debug!(added, tracked = self.tracked.len(), "reveal targets mounted");
        added
    }

    /// Applies a batch of observations.
    ///
    /// Returns the targets revealed by this batch, in entry order, and
    /// stops watching them. Entries for unknown or already-visible targets
    /// change nothing.
    pub fn handle<I>(&mut self, entries: I) -> Vec<W::Target>
    where
        I: IntoIterator<Item = IntersectionEntry<W::Target>>,
    {
        if !self.connected {
            trace!("intersection entries after teardown ignored");
            return Vec::new();
        }

        let threshold = self.options.threshold;
        let mut revealed = Vec::new();
        for entry in entries {
            if !entry.crosses(threshold) {
                continue;
            }
            let Some(index) = self.position(&entry.target) else {
                continue;
            };
            let (target, state) = &mut self.tracked[index];
            if state.reveal() {
                self.watcher.unobserve(target);
                revealed.push(target.clone());
            }
        }

        if !revealed.is_empty() {
            trace!(
                revealed = revealed.len(),
                pending = self.pending(),
                "reveal batch applied"
            );
        }
        revealed
    }

    /// Visibility of a tracked target.
    pub fn visibility(&self, target: &W::Target) -> Option<Visibility> {
        self.position(target).map(|index| self.tracked[index].1)
    }
}

impl<W: IntersectionWatcher> Drop for ScrollReveal<W> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<W: IntersectionWatcher> fmt::Debug for ScrollReveal<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollReveal")
            .field("options", &self.options)
            .field("tracked", &self.tracked.len())
            .field("pending", &self.pending())
            .field("connected", &self.connected)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct Calls {
        observed: Vec<u32>,
        unobserved: Vec<u32>,
        disconnects: usize,
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Calls>>);

    impl IntersectionWatcher for Recorder {
        type Target = u32;

        fn observe(&mut self, target: &u32) {
            self.0.borrow_mut().observed.push(*target);
        }

        fn unobserve(&mut self, target: &u32) {
            self.0.borrow_mut().unobserved.push(*target);
        }

        fn disconnect(&mut self) {
            self.0.borrow_mut().disconnects += 1;
        }
    }

    fn engine() -> (ScrollReveal<Recorder>, Recorder) {
        let recorder = Recorder::default();
        (
            ScrollReveal::new(recorder.clone(), RevealOptions::default()),
            recorder,
        )
    }

    fn seen(target: u32, ratio: f64) -> IntersectionEntry<u32> {
        IntersectionEntry::new(target, ratio > 0.0, ratio)
    }

    #[test]
    fn default_options_match_landing_observer() {
        let options = RevealOptions::default();
        assert_eq!(options.threshold, 0.1);
        assert_eq!(options.root_margin.to_string(), "0px 0px -50px 0px");
    }

    #[test]
    fn mount_with_no_targets_is_noop() {
        let (mut reveal, recorder) = engine();
        assert_eq!(reveal.mount(Vec::new()), 0);
        assert!(reveal.is_empty());
        assert!(reveal.is_connected());
        assert!(recorder.0.borrow().observed.is_empty());
        assert!(reveal.handle(vec![seen(1, 1.0)]).is_empty());
    }

    #[test]
    fn mount_observes_each_target_once() {
        let (mut reveal, recorder) = engine();
        assert_eq!(reveal.mount([1, 2, 3]), 3);
        assert_eq!(reveal.mount([2, 4]), 1);
        assert_eq!(recorder.0.borrow().observed, vec![1, 2, 3, 4]);
        assert_eq!(reveal.pending(), 4);
    }

    #[test]
    fn crossing_threshold_reveals_and_unobserves() {
        let (mut reveal, recorder) = engine();
        reveal.mount([1, 2, 3]);

        let revealed = reveal.handle(vec![seen(1, 0.05), seen(2, 0.1), seen(3, 0.6)]);

        assert_eq!(revealed, vec![2, 3]);
        assert_eq!(reveal.visibility(&1), Some(Visibility::Hidden));
        assert_eq!(reveal.visibility(&2), Some(Visibility::Visible));
        assert_eq!(recorder.0.borrow().unobserved, vec![2, 3]);
        assert_eq!(reveal.pending_targets().copied().collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn rounded_ratio_just_below_threshold_still_reveals() {
        let (mut reveal, _) = engine();
        reveal.mount([7]);
        assert_eq!(reveal.handle(vec![seen(7, 0.099_999_9)]), vec![7]);
    }

    #[test]
    fn non_intersecting_entry_never_reveals() {
        let (mut reveal, _) = engine();
        reveal.mount([1]);
        assert!(reveal.handle(vec![IntersectionEntry::new(1, false, 0.5)]).is_empty());
        assert_eq!(reveal.visibility(&1), Some(Visibility::Hidden));
    }

    #[test]
    fn visibility_never_reverts() {
        let (mut reveal, recorder) = engine();
        reveal.mount([1]);
        assert_eq!(reveal.handle(vec![seen(1, 0.5)]), vec![1]);

        // Scrolled back out, then in again.
        assert!(reveal.handle(vec![IntersectionEntry::new(1, false, 0.0)]).is_empty());
        assert!(reveal.handle(vec![seen(1, 1.0)]).is_empty());

        assert_eq!(reveal.visibility(&1), Some(Visibility::Visible));
        assert_eq!(recorder.0.borrow().unobserved, vec![1]);
        assert_eq!(reveal.pending(), 0);
    }

    #[test]
    fn unknown_targets_are_ignored() {
        let (mut reveal, _) = engine();
        reveal.mount([1]);
        assert!(reveal.handle(vec![seen(99, 1.0)]).is_empty());
        assert_eq!(reveal.visibility(&99), None);
    }

    #[test]
    fn teardown_disconnects_once_and_freezes_state() {
        let (mut reveal, recorder) = engine();
        reveal.mount([1, 2]);
        reveal.handle(vec![seen(1, 1.0)]);

        reveal.teardown();
        reveal.teardown();

        assert!(!reveal.is_connected());
        assert!(reveal.handle(vec![seen(2, 1.0)]).is_empty());
        assert_eq!(reveal.visibility(&2), Some(Visibility::Hidden));
        assert_eq!(reveal.mount([3]), 0);
        assert_eq!(recorder.0.borrow().disconnects, 1);
    }

    #[test]
    fn dropping_engine_disconnects_watcher() {
        let (mut reveal, recorder) = engine();
        reveal.mount([1]);
        drop(reveal);
        assert_eq!(recorder.0.borrow().disconnects, 1);
    }

    #[test]
    fn measured_entries_respect_bottom_margin() {
        let options = RevealOptions::default();
        let viewport = Rect::new(0.0, 0.0, 1024.0, 768.0);

        let in_band = IntersectionEntry::measure(1, Rect::new(0.0, 730.0, 300.0, 300.0), viewport, &options);
        assert!(!in_band.crosses(options.threshold));

        let risen = IntersectionEntry::measure(1, Rect::new(0.0, 600.0, 300.0, 300.0), viewport, &options);
        assert!(risen.is_intersecting);
        assert!(risen.crosses(options.threshold));
    }

    #[test]
    fn stagger_caps_at_three() {
        assert_eq!(Stagger::nth(0), Stagger::None);
        assert_eq!(Stagger::nth(1).class(), Some("stagger-1"));
        assert_eq!(Stagger::nth(9), Stagger::Three);
        assert_eq!(reveal_class(Stagger::nth(3)), "reveal-on-scroll stagger-3");
    }
}
