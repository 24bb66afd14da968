use std::collections::BTreeMap;
use std::rc::Rc;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = AOS, js_name = init)]
    fn aos_init(options: JsValue);

    type Swiper;

    #[wasm_bindgen(constructor)]
    fn new(el: &Element, options: JsValue) -> Swiper;
}

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct AosOptions {
    pub duration: u32,
    pub once: bool,
    pub offset: u32,
}

impl Default for AosOptions {
    fn default() -> Self {
        AosOptions {
            duration: 1000,
            once: true,
            offset: 100,
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Autoplay {
    pub delay: u32,
    pub disable_on_interaction: bool,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoint {
    pub slides_per_view: u32,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CarouselOptions {
    pub slides_per_view: u32,
    pub space_between: u32,
    #[serde(rename = "loop")]
    pub looped: bool,
    pub autoplay: Autoplay,
    /// Keyed by minimum viewport width in pixels.
    pub breakpoints: BTreeMap<u32, Breakpoint>,
    pub allow_touch_move: bool,
    pub grab_cursor: bool,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        let breakpoints = [(576, 3), (768, 4), (992, 5)]
            .into_iter()
            .map(|(width, slides_per_view)| (width, Breakpoint { slides_per_view }))
            .collect();
        CarouselOptions {
            slides_per_view: 2,
            space_between: 24,
            looped: true,
            autoplay: Autoplay {
                delay: 2000,
                disable_on_interaction: false,
            },
            breakpoints,
            allow_touch_move: true,
            grab_cursor: true,
        }
    }
}

pub trait ScrollAnimator {
    fn init(&self, options: &AosOptions);
}

pub trait CarouselMounter {
    fn mount(&self, el: &Element, options: &CarouselOptions);
}

/// The page's `AOS` global.
pub struct Aos;

impl ScrollAnimator for Aos {
    fn init(&self, options: &AosOptions) {
        match serde_wasm_bindgen::to_value(options) {
            Ok(options) => aos_init(options),
            Err(e) => log::error!("Failed to encode AOS options: {}", e),
        }
    }
}

/// The page's `Swiper` constructor.
pub struct SwiperCarousel;

impl CarouselMounter for SwiperCarousel {
    fn mount(&self, el: &Element, options: &CarouselOptions) {
        // Plain maps keep the numeric breakpoint keys as object properties.
        let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
        match options.serialize(&serializer) {
            Ok(options) => {
                Swiper::new(el, options);
            }
            Err(e) => log::error!("Failed to encode carousel options: {}", e),
        }
    }
}

fn has_global(name: &str) -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str(name)).unwrap_or(false))
        .unwrap_or(false)
}

/// Optional third-party widgets. Absent ones turn their calls into no-ops.
#[derive(Clone, Default)]
pub struct Widgets {
    pub scroll_animator: Option<Rc<dyn ScrollAnimator>>,
    pub carousel: Option<Rc<dyn CarouselMounter>>,
}

impl PartialEq for Widgets {
    fn eq(&self, other: &Self) -> bool {
        fn same<T: ?Sized>(a: &Option<Rc<T>>, b: &Option<Rc<T>>) -> bool {
            match (a, b) {
                (Some(a), Some(b)) => Rc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
        }
        same(&self.scroll_animator, &other.scroll_animator) && same(&self.carousel, &other.carousel)
    }
}

impl Widgets {
    /// Binds whichever of `AOS` and `Swiper` the page loaded.
    pub fn detect() -> Self {
        let scroll_animator: Option<Rc<dyn ScrollAnimator>> = if has_global("AOS") {
            Some(Rc::new(Aos))
        } else {
            log::warn!("AOS is not loaded, scroll animations disabled");
            None
        };
        let carousel: Option<Rc<dyn CarouselMounter>> = if has_global("Swiper") {
            Some(Rc::new(SwiperCarousel))
        } else {
            log::warn!("Swiper is not loaded, partners carousel stays static");
            None
        };
        log::info!(
            "Widgets detected: aos={} swiper={}",
            scroll_animator.is_some(),
            carousel.is_some()
        );
        Widgets {
            scroll_animator,
            carousel,
        }
    }

    pub fn init_scroll_animations(&self) {
        if let Some(animator) = &self.scroll_animator {
            animator.init(&AosOptions::default());
        }
    }

    pub fn mount_carousel(&self, el: &Element) {
        if let Some(carousel) = &self.carousel {
            carousel.mount(el, &CarouselOptions::default());
        }
    }
}
