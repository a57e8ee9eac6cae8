use yew::prelude::*;

use crate::hooks::intersection::use_in_view;
use crate::hooks::reveal::use_reveal;
use crate::reveal::mapper::RevealConfig;
use crate::reveal::trigger::TriggerOptions;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub options: TriggerOptions,
    #[prop_or_default]
    pub class: Classes,
    /// Inline style for the wrapper, e.g. a `transition-delay`.
    #[prop_or_default]
    pub style: Option<AttrValue>,
    pub children: Children,
}

/// Fades its children in with a CSS animation once they scroll into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let is_visible = use_in_view(node.clone(), props.options.clone());

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), is_visible.then(|| "is-visible"))}
            style={props.style.clone()}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollRevealProps {
    pub progress: f64,
    pub config: RevealConfig,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Drives opacity and offset of its children from the page progress.
#[function_component(ScrollReveal)]
pub fn scroll_reveal(props: &ScrollRevealProps) -> Html {
    let visual = use_reveal(props.progress, props.config);

    html! {
        <div
            class={classes!("scroll-reveal", props.class.clone(), visual.is_revealed().then(|| "revealed"))}
            style={visual.to_style()}
        >
            { for props.children.iter() }
        </div>
    }
}
