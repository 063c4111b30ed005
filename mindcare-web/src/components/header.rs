use crate::components::nav_link::NavLink;
use crate::i18n::{use_i18n, use_locale};
use crate::router::Route;
use mindcare_core::Locale;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub route: Route,
    pub on_navigate: Callback<Route>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let i18n = use_i18n();
    let locale_ctx = use_locale();
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    // Mobile links close the menu before routing.
    let navigate_mobile = {
        let menu_open = menu_open.clone();
        let cb = p.on_navigate.clone();
        Callback::from(move |route: Route| {
            menu_open.set(false);
            cb.emit(route);
        })
    };
    let lang_button = |locale: Locale| {
        let set_locale = locale_ctx.set_locale.clone();
        let active = locale_ctx.locale == locale;
        let onclick = Callback::from(move |_: MouseEvent| set_locale.emit(locale));
        html! {
            <button
                type="button"
                class={classes!("lang-btn", active.then_some("active"))}
                lang={locale.code()}
                title={locale.native_name()}
                aria-pressed={active.to_string()}
                {onclick}
            >
                { locale.short_label() }
            </button>
        }
    };
    let toggle_locale = {
        let set_locale = locale_ctx.set_locale.clone();
        let next = locale_ctx.locale.toggled();
        Callback::from(move |_: MouseEvent| set_locale.emit(next))
    };
    let nav_items = |on_navigate: &Callback<Route>| -> Html {
        Route::NAV
            .iter()
            .map(|route| {
                html! {
                    <li>
                        <NavLink to={route.clone()} on_navigate={on_navigate.clone()} active={*route == p.route}>
                            { i18n.t(route.nav_key()) }
                        </NavLink>
                    </li>
                }
            })
            .collect()
    };

    html! {
        <header role="banner" class="site-header">
            <a href="#main" class="sr-only">{ i18n.t("nav.skip_to_content") }</a>
            <div class="header-content">
                <NavLink to={Route::Home} on_navigate={p.on_navigate.clone()} class="brand">
                    <span class="brand__mark" aria-hidden="true">{"✚"}</span>
                    { i18n.t("brand.full") }
                </NavLink>
                <nav aria-label={i18n.t("nav.main")} class="nav-desktop">
                    <ul>{ nav_items(&p.on_navigate) }</ul>
                </nav>
                <div class="header-actions">
                    <div class="lang-switch" role="group" aria-label={i18n.t("nav.language")}>
                        { for Locale::ALL.into_iter().map(lang_button) }
                    </div>
                    <NavLink to={Route::Services} on_navigate={p.on_navigate.clone()} class="btn btn-primary">
                        { i18n.t("nav.book") }
                    </NavLink>
                </div>
                <button
                    type="button"
                    class="menu-toggle"
                    aria-controls="mobile-menu"
                    aria-expanded={menu_open.to_string()}
                    aria-label={if *menu_open { i18n.t("nav.close_menu") } else { i18n.t("nav.open_menu") }}
                    onclick={toggle_menu}
                >
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            if *menu_open {
                <nav id="mobile-menu" class="nav-mobile" aria-label={i18n.t("nav.main")}>
                    <ul>{ nav_items(&navigate_mobile) }</ul>
                    <button type="button" class="lang-toggle" aria-label={i18n.t("nav.switch_language")} onclick={toggle_locale}>
                        { locale_ctx.locale.toggled().native_name() }
                    </button>
                    <NavLink to={Route::Services} on_navigate={navigate_mobile.clone()} class="btn btn-primary">
                        { i18n.t("nav.book") }
                    </NavLink>
                </nav>
            }
        </header>
    }
}
