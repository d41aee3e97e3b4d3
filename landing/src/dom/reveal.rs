//! Scroll reveal in the browser.
//!
//! Collects every `reveal-on-scroll` element once the page has rendered and
//! feeds a native `IntersectionObserver` into the headless engine. Hosts
//! without the observer get a geometric fallback that re-measures pending
//! elements on scroll and resize.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Function};
use leptos::prelude::*;
use mettamate_site::geometry::Rect;
use mettamate_site::reveal::{
    IntersectionEntry, IntersectionWatcher, REVEAL_SELECTOR, RevealOptions, ScrollReveal,
    VISIBLE_CLASS,
};
use send_wrapper::SendWrapper;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    Window,
};

type Slot<W> = Rc<RefCell<Option<ScrollReveal<W>>>>;

/// Window events that trigger a fallback sweep, with their capture flag.
/// Element scrolls do not bubble, so `scroll` is captured to also see
/// carousel strips moving sideways.
const SWEEP_LISTENERS: [(&str, bool); 2] = [("scroll", true), ("resize", false)];

/// Reveals tagged elements as they scroll into view, for as long as the
/// calling component lives.
pub fn use_scroll_reveal(options: RevealOptions) {
    Effect::new(move || {
        let Some(binding) = RevealBinding::attach(&options) else {
            debug!("no document, scroll reveal skipped");
            return;
        };
        let binding = SendWrapper::new(binding);
        on_cleanup(move || drop(binding));
    });
}

struct ObserverWatcher {
    observer: IntersectionObserver,
}

impl IntersectionWatcher for ObserverWatcher {
    type Target = Element;

    fn observe(&mut self, target: &Element) {
        self.observer.observe(target);
    }

    fn unobserve(&mut self, target: &Element) {
        self.observer.unobserve(target);
    }

    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}

/// Polls pending targets on scroll and resize; observe/unobserve are
/// bookkeeping the engine already does.
struct GeometricWatcher {
    window: Window,
    listener: Function,
}

impl IntersectionWatcher for GeometricWatcher {
    type Target = Element;

    fn observe(&mut self, _target: &Element) {}

    fn unobserve(&mut self, _target: &Element) {}

    fn disconnect(&mut self) {
        for (event, capture) in SWEEP_LISTENERS {
            let _ = self.window.remove_event_listener_with_callback_and_bool(
                event,
                &self.listener,
                capture,
            );
        }
    }
}

enum Binding {
    Observer {
        slot: Slot<ObserverWatcher>,
        _on_intersect: Closure<dyn FnMut(Array, IntersectionObserver)>,
    },
    Geometric {
        slot: Slot<GeometricWatcher>,
        _on_sweep: Closure<dyn FnMut()>,
    },
}

/// Live reveal wiring. Disconnects when dropped.
struct RevealBinding(Binding);

impl RevealBinding {
    /// Registers every reveal-tagged element currently in the document.
    ///
    /// Returns `None` only when there is no window or document. A page
    /// without tagged elements still yields a (idle) binding.
    fn attach(options: &RevealOptions) -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        let targets = reveal_targets(&document);

        match observe_natively(options, targets.clone()) {
            Ok(binding) => Some(binding),
            Err(err) => {
                warn!(?err, "IntersectionObserver unavailable, revealing on scroll");
                Some(observe_geometrically(window, options, targets))
            }
        }
    }

    /// Stops observing. Idempotent.
    fn disconnect(&self) {
        match &self.0 {
            Binding::Observer { slot, .. } => teardown(slot),
            Binding::Geometric { slot, .. } => teardown(slot),
        }
    }
}

impl Drop for RevealBinding {
    fn drop(&mut self) {
        self.disconnect();
    }
}

fn teardown<W: IntersectionWatcher>(slot: &Slot<W>) {
    if let Some(reveal) = slot.borrow_mut().as_mut() {
        reveal.teardown();
    }
}

fn reveal_targets(document: &Document) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(REVEAL_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn mark_visible(revealed: &[Element]) {
    for element in revealed {
        if let Err(err) = element.class_list().add_1(VISIBLE_CLASS) {
            warn!(?err, "failed to mark element visible");
        }
    }
}

fn observe_natively(
    options: &RevealOptions,
    targets: Vec<Element>,
) -> Result<RevealBinding, JsValue> {
    let slot: Slot<ObserverWatcher> = Rc::default();

    let on_intersect = {
        let slot = Rc::clone(&slot);
        Closure::wrap(Box::new(move |records: Array, _observer: IntersectionObserver| {
            let entries: Vec<_> = records
                .iter()
                .filter_map(|record| record.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| {
                    IntersectionEntry::new(
                        entry.target(),
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                    )
                })
                .collect();

            let revealed = match slot.borrow_mut().as_mut() {
                Some(reveal) => reveal.handle(entries),
                None => return,
            };
            mark_visible(&revealed);
        }) as Box<dyn FnMut(Array, IntersectionObserver)>)
    };

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin.to_string());
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &init)?;

    let mut reveal = ScrollReveal::new(ObserverWatcher { observer }, options.clone());
    reveal.mount(targets);
    *slot.borrow_mut() = Some(reveal);

    Ok(RevealBinding(Binding::Observer {
        slot,
        _on_intersect: on_intersect,
    }))
}

fn observe_geometrically(
    window: Window,
    options: &RevealOptions,
    targets: Vec<Element>,
) -> RevealBinding {
    let slot: Slot<GeometricWatcher> = Rc::default();

    let on_sweep = {
        let slot = Rc::clone(&slot);
        let window = window.clone();
        Closure::wrap(Box::new(move || sweep(&window, &slot)) as Box<dyn FnMut()>)
    };
    let listener: Function = on_sweep.as_ref().unchecked_ref::<Function>().clone();
    for (event, capture) in SWEEP_LISTENERS {
        if let Err(err) = window.add_event_listener_with_callback_and_bool(event, &listener, capture)
        {
            warn!(?err, event, "failed to listen for reveal sweeps");
        }
    }

    let watcher = GeometricWatcher {
        window: window.clone(),
        listener,
    };
    let mut reveal = ScrollReveal::new(watcher, options.clone());
    reveal.mount(targets);
    *slot.borrow_mut() = Some(reveal);

    // Elements already on screen never see a scroll event.
    sweep(&window, &slot);

    RevealBinding(Binding::Geometric {
        slot,
        _on_sweep: on_sweep,
    })
}

fn sweep(window: &Window, slot: &Slot<GeometricWatcher>) {
    let Some(root) = viewport(window) else {
        return;
    };

    let revealed = {
        let mut guard = slot.borrow_mut();
        let Some(reveal) = guard.as_mut() else {
            return;
        };
        let options = reveal.options().clone();
        let entries: Vec<_> = reveal
            .pending_targets()
            .map(|element| {
                IntersectionEntry::measure(element.clone(), bounds(element), root, &options)
            })
            .collect();
        reveal.handle(entries)
    };
    mark_visible(&revealed);
}

fn viewport(window: &Window) -> Option<Rect> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Rect::new(0.0, 0.0, width, height))
}

fn bounds(element: &Element) -> Rect {
    let rect = element.get_bounding_client_rect();
    Rect::new(rect.x(), rect.y(), rect.width(), rect.height())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweeps_capture_scrolls_inside_carousels() {
        let scroll = SWEEP_LISTENERS.iter().find(|(event, _)| *event == "scroll");
        assert_eq!(scroll, Some(&("scroll", true)));
        assert!(SWEEP_LISTENERS.iter().any(|(event, _)| *event == "resize"));
    }
}
