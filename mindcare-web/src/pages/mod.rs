pub mod about;
pub mod compliance;
pub mod home;
pub mod not_found;
pub mod payment;
pub mod services;

use yew::prelude::*;

/// Focus the page heading after a route change so screen readers announce it.
#[hook]
pub(crate) fn use_heading_focus() -> NodeRef {
    let heading = use_node_ref();
    #[cfg(target_arch = "wasm32")]
    {
        let heading = heading.clone();
        use_effect_with((), move |()| {
            if let Some(el) = heading.cast::<web_sys::HtmlElement>() {
                let _ = el.focus();
            }
            || {}
        });
    }
    heading
}
