use yew::prelude::*;

use super::observer::{use_visibility, VisibilityOptions};

const TRANSITION: &str = "transition: all 0.6s ease;";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Shown,
}

impl RevealState {
    /// Once shown, an element stays shown.
    pub fn on_visible(self) -> Self {
        RevealState::Shown
    }

    pub fn style(&self) -> String {
        match self {
            RevealState::Hidden => format!("opacity: 0; transform: translateY(30px); {}", TRANSITION),
            RevealState::Shown => format!("opacity: 1; transform: translateY(0); {}", TRANSITION),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades and slides its children in the first time they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let state = use_state_eq(RevealState::default);

    {
        let state = state.clone();
        let on_visible = Callback::from(move |_| {
            log::debug!("Reveal target visible");
            state.set(state.on_visible());
        });
        use_visibility(node.clone(), VisibilityOptions::REVEAL, on_visible);
    }

    html! {
        <div ref={node} class={props.class.clone()} style={state.style()}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden_and_offset() {
        let style = RevealState::default().style();
        assert!(style.contains("opacity: 0"));
        assert!(style.contains("translateY(30px)"));
        assert!(style.contains("transition: all 0.6s ease"));
    }

    #[test]
    fn becomes_visible_and_untransformed() {
        let style = RevealState::Hidden.on_visible().style();
        assert!(style.contains("opacity: 1"));
        assert!(style.contains("translateY(0)"));
    }

    #[test]
    fn never_resets() {
        assert_eq!(RevealState::Shown.on_visible(), RevealState::Shown);
    }
}
