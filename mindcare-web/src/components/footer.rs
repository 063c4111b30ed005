use crate::components::nav_link::NavLink;
use crate::dom;
use crate::i18n::use_i18n;
use crate::router::Route;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_navigate: Callback<Route>,
}

#[function_component(Footer)]
pub fn footer(p: &Props) -> Html {
    let i18n = use_i18n();
    let year = dom::current_year().to_string();
    let links = [
        (Route::Home, "footer.link_home"),
        (Route::About, "footer.link_about"),
        (Route::Services, "footer.link_services"),
        (Route::Compliance, "footer.link_legal"),
    ];

    html! {
        <footer role="contentinfo" class="site-footer">
            <p class="emergency-banner" role="note">{ i18n.t("footer.emergency_banner") }</p>
            <div class="footer-grid">
                <section class="footer-brand">
                    <h2>{ i18n.t("brand.full") }</h2>
                    <p>{ i18n.t("footer.description") }</p>
                    <ul class="badges">
                        <li class="badge">{ i18n.t("footer.badge_hipaa") }</li>
                        <li class="badge">{ i18n.t("footer.badge_gdpr") }</li>
                    </ul>
                </section>
                <nav class="footer-links" aria-label={i18n.t("footer.links")}>
                    <h2>{ i18n.t("footer.links") }</h2>
                    <ul>
                        { for links.into_iter().map(|(route, key)| html! {
                            <li>
                                <NavLink to={route} on_navigate={p.on_navigate.clone()}>{ i18n.t(key) }</NavLink>
                            </li>
                        }) }
                    </ul>
                </nav>
                <section class="footer-emergency">
                    <h2>{ i18n.t("footer.emergency") }</h2>
                    <p class="emergency-numbers">{ i18n.t("footer.emergency_numbers") }</p>
                    <p>{ i18n.t("footer.emergency_note") }</p>
                </section>
            </div>
            <div class="footer-bottom">
                <p>{ i18n.t_with("footer.copyright", &[("year", year.as_str())]) }</p>
                <NavLink to={Route::Compliance} on_navigate={p.on_navigate.clone()}>{ i18n.t("footer.terms") }</NavLink>
                <NavLink to={Route::Compliance} on_navigate={p.on_navigate.clone()}>{ i18n.t("footer.cookies") }</NavLink>
            </div>
        </footer>
    }
}
