use crate::components::nav_link::NavLink;
use crate::i18n::use_i18n;
use crate::router::Route;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct AboutPageProps {
    pub on_navigate: Callback<Route>,
}

#[function_component(AboutPage)]
pub fn about_page(props: &AboutPageProps) -> Html {
    let i18n = use_i18n();
    let heading = super::use_heading_focus();
    html! {
        <section class="page about" data-testid="about-page">
            <h1 ref={heading} tabindex="-1">{ i18n.t("about.title") }</h1>
            <p class="lead">{ i18n.t("about.mission") }</p>
            <p>{ i18n.t("about.body") }</p>
            <NavLink to={Route::Services} on_navigate={props.on_navigate.clone()} class="btn btn-primary">
                { i18n.t("about.cta") }
            </NavLink>
        </section>
    }
}
