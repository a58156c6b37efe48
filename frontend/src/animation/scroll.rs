use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

pub fn is_past(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

fn read_past(threshold_px: f64) -> Option<bool> {
    let window = web_sys::window()?;
    window.scroll_y().ok().map(|y| is_past(y, threshold_px))
}

/// Tracks whether the window is scrolled further than `threshold_px`.
///
/// The scroll listener belongs to the calling component and is removed when it
/// unmounts.
#[hook]
pub fn use_scrolled_past(threshold_px: f64) -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |threshold_px| {
                let threshold_px = *threshold_px;
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let scrolled = scrolled.clone();
                        move || {
                            if let Some(past) = read_past(threshold_px) {
                                scrolled.set(past);
                            }
                        }
                    });
                    match window.add_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    ) {
                        Ok(()) => {
                            // Page may already be scrolled after a reload.
                            if let Some(past) = read_past(threshold_px) {
                                scrolled.set(past);
                            }
                            Box::new(move || {
                                if let Err(err) = window.remove_event_listener_with_callback(
                                    "scroll",
                                    callback.as_ref().unchecked_ref(),
                                ) {
                                    warn!("failed to remove scroll listener: {:?}", err);
                                }
                            })
                        }
                        Err(err) => {
                            warn!("failed to add scroll listener: {:?}", err);
                            Box::new(|| ())
                        }
                    }
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            threshold_px,
        );
    }

    *scrolled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NAV_SCROLL_THRESHOLD_PX;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_past(0.0, NAV_SCROLL_THRESHOLD_PX));
        assert!(!is_past(50.0, NAV_SCROLL_THRESHOLD_PX));
        assert!(is_past(50.5, NAV_SCROLL_THRESHOLD_PX));
        assert!(is_past(1200.0, NAV_SCROLL_THRESHOLD_PX));
    }
}
