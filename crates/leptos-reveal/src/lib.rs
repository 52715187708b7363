//! Leptos Reveal Utilities
//!
//! Scroll-triggered entrance animations for Leptos.
//! A section is observed with an `IntersectionObserver` until it first enters
//! the viewport; after that the latch stays set and the observer is gone.

use std::time::Duration;

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};

/// One-shot visibility latch.
///
/// Fires on the first intersecting observation and ignores everything after.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OneShotLatch {
    fired: bool,
}

impl OneShotLatch {
    /// Feed one observation. Returns true only for the observation that sets the latch.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.fired || !intersecting {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn is_set(&self) -> bool {
        self.fired
    }
}

/// Observer trigger configuration
#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    /// CSS margin around the viewport, e.g. "100px 0px" fires 100px early
    pub root_margin: String,
    /// Visible ratio needed to count as intersecting (0 = any overlap)
    pub threshold: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            root_margin: "0px".to_string(),
            threshold: 0.0,
        }
    }
}

impl RevealOptions {
    pub fn with_root_margin(mut self, margin: impl Into<String>) -> Self {
        self.root_margin = margin.into();
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold.clamp(0.0, 1.0);
        self
    }
}

/// Live observer plus the JS callback it calls into.
/// Dropping the handle disconnects the observer.
struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ObserverHandle {
    fn observe<F>(target: &web_sys::Element, options: &RevealOptions, on_enter: F) -> Result<Self, JsValue>
    where
        F: Fn() + 'static,
    {
        let mut latch = OneShotLatch::default();
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let intersecting = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());
                if latch.observe(intersecting) {
                    observer.disconnect();
                    on_enter();
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&options.root_margin);
        init.set_threshold(&JsValue::from_f64(options.threshold));

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(target);
        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        // Safe to call on an already disconnected observer
        self.observer.disconnect();
    }
}

/// Latch a signal to true the first time `target` enters the viewport.
///
/// Does nothing if the node ref is never attached. The observer is
/// disconnected as soon as the latch fires, and on cleanup of the owner.
pub fn use_reveal(target: NodeRef<html::Div>, options: RevealOptions) -> ReadSignal<bool> {
    let (revealed, set_revealed) = signal(false);
    let handle = StoredValue::new_local(None::<ObserverHandle>);

    Effect::new(move |_| {
        let Some(el) = target.get() else { return };
        if revealed.get_untracked() {
            return;
        }
        match ObserverHandle::observe(&el, &options, move || set_revealed.set(true)) {
            Ok(observer) => handle.set_value(Some(observer)),
            Err(err) => {
                // No observer support: show the content instead of leaving it hidden
                web_sys::console::warn_2(&"[reveal] IntersectionObserver unavailable".into(), &err);
                set_revealed.set(true);
            }
        }
    });

    on_cleanup(move || {
        handle.try_update_value(|h| h.take());
    });

    revealed
}

/// Delay before the card at `index` starts its entrance
pub fn stagger_delay(index: usize, step: Duration) -> Duration {
    step.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
}

/// Inline style carrying a transition's delay and duration
pub fn transition_style(delay: Duration, duration: Duration) -> String {
    format!(
        "transition-delay: {}ms; transition-duration: {}ms;",
        delay.as_millis(),
        duration.as_millis()
    )
}

/// Smooth-scroll an element to the middle of the viewport
pub fn scroll_into_view_centered(el: &web_sys::Element) {
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Center);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// Smooth-scroll to the element with `id`, aligned to the top.
/// Returns false if there is no such element.
pub fn scroll_to_anchor(id: &str) -> bool {
    let Some(el) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(id))
    else {
        return false;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_ignores_non_intersecting() {
        let mut latch = OneShotLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.observe(false));
        assert!(!latch.is_set());
    }

    #[test]
    fn latch_fires_once() {
        let mut latch = OneShotLatch::default();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(latch.is_set());

        // Scrolling out and back in changes nothing
        for intersecting in [false, true, false, true] {
            assert!(!latch.observe(intersecting));
            assert!(latch.is_set());
        }
    }

    #[test]
    fn latch_fires_on_initial_intersection() {
        let mut latch = OneShotLatch::default();
        assert!(latch.observe(true));
    }

    #[test]
    fn stagger_is_step_times_index() {
        let step = Duration::from_millis(150);
        assert_eq!(stagger_delay(0, step), Duration::ZERO);
        assert_eq!(stagger_delay(1, step), Duration::from_millis(150));
        assert_eq!(stagger_delay(4, step), Duration::from_millis(600));
    }

    #[test]
    fn stagger_saturates() {
        let delay = stagger_delay(usize::MAX, Duration::from_secs(u64::MAX / 2));
        assert_eq!(delay, Duration::MAX);
    }

    #[test]
    fn transition_style_in_millis() {
        let style = transition_style(Duration::from_millis(300), Duration::from_millis(600));
        assert_eq!(style, "transition-delay: 300ms; transition-duration: 600ms;");
    }

    #[test]
    fn options_builder() {
        let opts = RevealOptions::default().with_root_margin("100px 0px").with_threshold(1.5);
        assert_eq!(opts.root_margin, "100px 0px");
        assert_eq!(opts.threshold, 1.0);
        assert_eq!(RevealOptions::default().threshold, 0.0);
    }
}
