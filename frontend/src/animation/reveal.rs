use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{js_sys, Element, IntersectionObserver, IntersectionObserverEntry};
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealOptions {
    pub once: bool,
}

impl RevealOptions {
    pub const fn once() -> Self {
        Self { once: true }
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self::once()
    }
}

/// Visibility bookkeeping for a single observed element.
///
/// In `once` mode the signal latches: the first intersecting observation sets
/// it and nothing afterwards clears it. Otherwise it follows the latest
/// observation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealState {
    triggered: bool,
    intersecting: bool,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one observation and returns the resulting signal.
    pub fn observe(&mut self, intersecting: bool, options: RevealOptions) -> bool {
        self.intersecting = intersecting;
        if intersecting {
            self.triggered = true;
        }
        self.visible(options)
    }

    /// Marks the element as revealed without an observation.
    pub fn force(&mut self) {
        self.triggered = true;
        self.intersecting = true;
    }

    pub fn visible(&self, options: RevealOptions) -> bool {
        if options.once {
            self.triggered
        } else {
            self.intersecting
        }
    }

    pub fn triggered(&self) -> bool {
        self.triggered
    }

    /// True once no further observation can change the signal.
    pub fn is_settled(&self, options: RevealOptions) -> bool {
        options.once && self.triggered
    }

    /// Feeds one observer callback and reports what the hook must do next.
    pub fn record(&mut self, intersecting: bool, options: RevealOptions) -> Observation {
        let was_triggered = self.triggered();
        let visible = self.observe(intersecting, options);
        Observation {
            visible,
            newly_triggered: !was_triggered && self.triggered(),
            settled: self.is_settled(options),
        }
    }
}

/// Result of one observer callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Observation {
    pub visible: bool,
    pub newly_triggered: bool,
    /// The observer can be disconnected.
    pub settled: bool,
}

/// Returns whether `node` has entered the viewport.
///
/// The observer lives as long as the calling component; it is disconnected on
/// unmount, and early once a `once` reveal has fired.
#[hook]
pub fn use_in_view(node: NodeRef, options: RevealOptions) -> bool {
    let visible = use_state_eq(|| false);
    let state = use_mut_ref(RevealState::new);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = match node.cast::<Element>() {
                    Some(element) => observe(element, state, visible, options),
                    None => {
                        warn!("reveal target was not mounted, showing it immediately");
                        state.borrow_mut().force();
                        visible.set(true);
                        Box::new(|| ())
                    }
                };
                move || destructor()
            },
            (),
        );
    }

    *visible
}

fn observe(
    element: Element,
    state: Rc<RefCell<RevealState>>,
    visible: UseStateHandle<bool>,
    options: RevealOptions,
) -> Box<dyn FnOnce()> {
    let callback = {
        let state = state.clone();
        let visible = visible.clone();
        Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                let intersecting = entries.iter().any(|entry| {
                    entry
                        .unchecked_into::<IntersectionObserverEntry>()
                        .is_intersecting()
                });
                let outcome = state.borrow_mut().record(intersecting, options);
                if outcome.newly_triggered {
                    debug!("reveal triggered");
                }
                if outcome.settled {
                    observer.disconnect();
                }
                visible.set(outcome.visible);
            },
        )
    };

    match IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => {
            observer.observe(&element);
            Box::new(move || {
                observer.disconnect();
                drop(callback);
            })
        }
        Err(err) => {
            warn!("IntersectionObserver unavailable ({:?}), showing content", err);
            state.borrow_mut().force();
            visible.set(true);
            Box::new(|| ())
        }
    }
}

/// Hidden-state offset of an entrance transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entrance {
    Rise(i32),
    FromLeft(i32),
    FromRight(i32),
    Fade,
}

impl Entrance {
    fn hidden_transform(self) -> String {
        match self {
            Entrance::Rise(px) => format!("translateY({}px)", px),
            Entrance::FromLeft(px) => format!("translateX(-{}px)", px),
            Entrance::FromRight(px) => format!("translateX({}px)", px),
            Entrance::Fade => "none".to_string(),
        }
    }
}

/// Inline style for an element that is (or is not yet) revealed.
pub fn entrance_style(visible: bool, entrance: Entrance, duration_ms: u32, delay_ms: u32) -> String {
    let transition = format!(
        "transition: opacity {d}ms ease-out {delay}ms, transform {d}ms ease-out {delay}ms;",
        d = duration_ms,
        delay = delay_ms
    );
    if visible {
        format!("opacity: 1; transform: none; {}", transition)
    } else {
        format!("opacity: 0; transform: {}; {}", entrance.hidden_transform(), transition)
    }
}

/// Delay for the `index`-th item of a staggered list.
pub fn stagger(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(Entrance::Rise(40))]
    pub entrance: Entrance,
    #[prop_or(600)]
    pub duration_ms: u32,
    #[prop_or(0)]
    pub delay_ms: u32,
    #[prop_or_default]
    pub options: RevealOptions,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), props.options);
    let style = entrance_style(visible, props.entrance, props.duration_ms, props.delay_ms);

    html! {
        <div ref={node} class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_signal_latches_after_first_intersection() {
        let mut state = RevealState::new();
        let opts = RevealOptions::once();

        assert!(!state.observe(false, opts));
        assert!(state.observe(true, opts));
        // Scrolled back out and in again.
        assert!(state.observe(false, opts));
        assert!(state.observe(true, opts));
        assert!(state.observe(false, opts));
        assert!(state.is_settled(opts));
    }

    #[test]
    fn never_intersecting_stays_hidden() {
        let mut state = RevealState::new();
        for _ in 0..10 {
            assert!(!state.observe(false, RevealOptions::once()));
        }
        assert!(!state.triggered());
        assert!(!state.is_settled(RevealOptions::once()));
    }

    #[test]
    fn repeat_mode_follows_latest_observation() {
        let mut state = RevealState::new();
        let opts = RevealOptions { once: false };

        assert!(state.observe(true, opts));
        assert!(!state.observe(false, opts));
        assert!(state.triggered());
        assert!(!state.is_settled(opts));
    }

    #[test]
    fn forced_state_is_visible_in_both_modes() {
        let mut state = RevealState::new();
        state.force();
        assert!(state.visible(RevealOptions::once()));
        assert!(state.visible(RevealOptions { once: false }));
    }

    #[test]
    fn once_observer_disconnects_after_first_hit() {
        let mut state = RevealState::new();
        let options = RevealOptions::once();

        let miss = state.record(false, options);
        assert_eq!(
            miss,
            Observation { visible: false, newly_triggered: false, settled: false }
        );

        let hit = state.record(true, options);
        assert_eq!(
            hit,
            Observation { visible: true, newly_triggered: true, settled: true }
        );

        let after = state.record(false, options);
        assert!(after.visible);
        assert!(!after.newly_triggered);
    }

    #[test]
    fn repeat_observer_never_settles() {
        let mut state = RevealState::new();
        let options = RevealOptions { once: false };

        assert!(state.record(true, options).newly_triggered);
        let left = state.record(false, options);
        assert!(!left.visible);
        assert!(!left.settled);
    }

    #[test]
    fn hidden_style_carries_offset() {
        let style = entrance_style(false, Entrance::Rise(40), 600, 200);
        assert!(style.starts_with("opacity: 0; transform: translateY(40px);"));
        assert!(style.contains("opacity 600ms ease-out 200ms"));

        let left = entrance_style(false, Entrance::FromLeft(40), 600, 0);
        assert!(left.contains("translateX(-40px)"));
    }

    #[test]
    fn visible_style_clears_offset() {
        let style = entrance_style(true, Entrance::FromRight(40), 800, 0);
        assert!(style.starts_with("opacity: 1; transform: none;"));
        assert!(!style.contains("translateX"));
    }

    #[test]
    fn fade_has_no_offset() {
        let style = entrance_style(false, Entrance::Fade, 600, 0);
        assert!(style.starts_with("opacity: 0; transform: none;"));
    }

    #[test]
    fn stagger_scales_with_index() {
        assert_eq!(stagger(0, 100), 0);
        assert_eq!(stagger(3, 100), 300);
        assert_eq!(stagger(2, 150), 300);
        assert_eq!(stagger(usize::MAX, 150), u32::MAX);
    }
}
