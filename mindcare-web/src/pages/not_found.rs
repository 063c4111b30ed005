use crate::i18n::use_i18n;
use crate::router::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_navigate: Callback<Route>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let i18n = use_i18n();
    let heading = super::use_heading_focus();
    let go_home = {
        let cb = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| cb.emit(Route::Home))
    };

    html! {
        <section class="panel not-found" aria-live="assertive">
            <h1 ref={heading} tabindex="-1">{ i18n.t("not_found.title") }</h1>
            <p>{ i18n.t("not_found.message") }</p>
            <button type="button" class="btn" onclick={go_home}>
                { i18n.t("not_found.back") }
            </button>
        </section>
    }
}
