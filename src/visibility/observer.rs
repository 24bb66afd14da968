use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

/// Threshold is a fraction of the element's area; the margin uses CSS `rootMargin` syntax.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

impl VisibilityOptions {
    pub const STATS: VisibilityOptions = VisibilityOptions {
        threshold: config::STATS_THRESHOLD,
        root_margin: config::STATS_ROOT_MARGIN,
    };

    /// Fires a little before the element reaches the bottom edge.
    pub const REVEAL: VisibilityOptions = VisibilityOptions {
        threshold: config::REVEAL_THRESHOLD,
        root_margin: config::REVEAL_ROOT_MARGIN,
    };
}

struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

fn observe(
    el: &Element,
    options: &VisibilityOptions,
    on_visible: Callback<()>,
) -> Result<Observation, JsValue> {
    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        let entering = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .filter(|entry| entry.is_intersecting())
            .count();
        for _ in 0..entering {
            on_visible.emit(());
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    observer.observe(el);
    Ok(Observation {
        observer,
        _callback: callback,
    })
}

/// Calls `on_visible` each time the referenced element intersects the viewport
/// past `options`. The observer is disconnected when the component unmounts.
#[hook]
pub fn use_visibility(node: NodeRef, options: VisibilityOptions, on_visible: Callback<()>) {
    use_effect_with_deps(
        move |(node, options)| {
            let observation = match node.cast::<Element>() {
                Some(el) => match observe(&el, options, on_visible) {
                    Ok(observation) => Some(observation),
                    Err(e) => {
                        gloo_console::error!("IntersectionObserver unavailable:", e);
                        None
                    }
                },
                None => {
                    log::warn!("Visibility target is not mounted");
                    None
                }
            };
            move || {
                if let Some(observation) = observation {
                    observation.observer.disconnect();
                }
            }
        },
        (node, options),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_fire_at_half_visibility() {
        assert_eq!(VisibilityOptions::STATS.threshold, 0.5);
        assert_eq!(VisibilityOptions::STATS.root_margin, "0px");
    }

    #[test]
    fn reveal_fires_early_with_negative_bottom_margin() {
        assert_eq!(VisibilityOptions::REVEAL.threshold, 0.1);
        assert_eq!(VisibilityOptions::REVEAL.root_margin, "0px 0px -50px 0px");
    }
}
