use stylist::yew::styled_component;
use yew::prelude::*;

use crate::hooks::keyboard::use_escape_key;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    pub children: Children,
}

/// Dialog over a dimmed backdrop. Closes on backdrop click or Escape.
#[styled_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    use_escape_key(props.on_close.clone(), props.open);

    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    let backdrop = css!(
        r#"
        position: fixed;
        inset: 0;
        z-index: 1000;
        display: flex;
        align-items: center;
        justify-content: center;
        background: rgba(0, 0, 0, 0.7);
        backdrop-filter: blur(4px);
        "#
    );
    let dialog = css!(
        r#"
        max-width: 560px;
        width: calc(100% - 2rem);
        padding: 2rem;
        border-radius: 12px;
        background: #1a1a1a;
        border: 1px solid rgba(30, 144, 255, 0.2);
        color: #fff;

        h2 {
            margin-top: 0;
        }

        .modal-close {
            float: right;
            background: none;
            border: none;
            color: #999;
            font-size: 1.5rem;
            cursor: pointer;
        }
        "#
    );

    html! {
        <div class={backdrop} onclick={close.clone()}>
            <div class={dialog} role="dialog" aria-modal="true" onclick={keep_open}>
                <button class="modal-close" aria-label="Close" onclick={close}>{"×"}</button>
                <h2>{&*props.title}</h2>
                { for props.children.iter() }
            </div>
        </div>
    }
}
