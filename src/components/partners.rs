use web_sys::Element;
use yew::prelude::*;

use crate::widgets::Widgets;

#[derive(Properties, PartialEq)]
pub struct PartnersProps {
    pub logos: Vec<(&'static str, &'static str)>,
}

/// Partner logo strip. Becomes a carousel when a carousel widget was injected.
#[function_component(PartnersCarousel)]
pub fn partners_carousel(props: &PartnersProps) -> Html {
    let node = use_node_ref();
    let widgets = use_context::<Widgets>().unwrap_or_default();

    {
        let node = node.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(el) = node.cast::<Element>() {
                    widgets.mount_carousel(&el);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="swiper partners-swiper" ref={node}>
            <div class="swiper-wrapper">
                { for props.logos.iter().map(|(name, src)| html! {
                    <div class="swiper-slide">
                        <img src={*src} alt={*name} loading="lazy" />
                    </div>
                }) }
            </div>
        </div>
    }
}
