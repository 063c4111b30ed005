use crate::a11y::{STATUS_REGION_ID, visible_focus_css};
use crate::app::handlers::AppHandlers;
use crate::app::state::AppState;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::legal_notice::LegalNotice;
use crate::i18n::LocaleProvider;
use crate::pages::about::AboutPage;
use crate::pages::compliance::CompliancePage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFound;
use crate::pages::payment::PaymentPage;
use crate::pages::services::ServicesPage;
use crate::router::Route;
use yew::prelude::*;

fn render_page(state: &AppState, handlers: &AppHandlers, route: &Route) -> Html {
    match route {
        Route::Home => html! {
            <HomePage time_zone={(*state.time_zone).clone()} on_navigate={handlers.navigate.clone()} />
        },
        Route::About => html! { <AboutPage on_navigate={handlers.navigate.clone()} /> },
        Route::Services => html! {
            <ServicesPage
                selector={(*state.booking).clone()}
                on_change={handlers.booking_change.clone()}
                on_proceed={handlers.proceed.clone()}
            />
        },
        Route::Payment => html! {
            <PaymentPage
                handoff={(*state.handoff).clone()}
                on_navigate={handlers.navigate.clone()}
                on_consumed={handlers.handoff_consumed.clone()}
                on_confirmed={handlers.payment_confirmed.clone()}
            />
        },
        Route::Compliance => html! { <CompliancePage /> },
        Route::NotFound => html! { <NotFound on_navigate={handlers.navigate.clone()} /> },
    }
}

pub fn render_app(state: &AppState, handlers: &AppHandlers, route: &Route) -> Html {
    html! {
        <LocaleProvider locale={*state.locale} on_change={handlers.locale_change.clone()}>
            <Header route={route.clone()} on_navigate={handlers.navigate.clone()} />
            <LegalNotice
                gate={*state.legal_gate}
                on_age={handlers.legal_age.clone()}
                on_crisis={handlers.legal_crisis.clone()}
                on_confirm={handlers.legal_confirm.clone()}
            />
            <main id="main" role="main" tabindex="-1">
                <style>{ visible_focus_css() }</style>
                <div id={STATUS_REGION_ID} class="sr-only" role="status" aria-live="polite"></div>
                { render_page(state, handlers, route) }
            </main>
            <Footer on_navigate={handlers.navigate.clone()} />
        </LocaleProvider>
    }
}
