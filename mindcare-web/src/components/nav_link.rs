//! In-app anchor that routes through a callback instead of a page load.
use crate::router::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct NavLinkProps {
    pub to: Route,
    pub on_navigate: Callback<Route>,
    #[prop_or_default]
    pub active: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let onclick = {
        let to = props.to.clone();
        let cb = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            // Let the browser handle "open in new tab" gestures.
            if e.ctrl_key() || e.meta_key() || e.shift_key() || e.button() != 0 {
                return;
            }
            e.prevent_default();
            cb.emit(to.clone());
        })
    };
    let class = classes!(props.class.clone(), props.active.then_some("active"));
    html! {
        <a
            id={props.id.clone()}
            href={props.to.href()}
            class={class}
            aria-current={props.active.then_some("page")}
            {onclick}
        >
            { for props.children.iter() }
        </a>
    }
}
