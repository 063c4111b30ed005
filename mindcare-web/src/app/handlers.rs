use crate::app::state::AppState;
use crate::dom;
use crate::i18n::apply_document_lang;
use crate::router::Route;
use crate::storage::BrowserStore;
use mindcare_core::{BookingHandoff, BookingSelector, Locale, save_locale};
use yew::prelude::*;

/// Callbacks the shell hands to the chrome and pages.
#[derive(Clone)]
pub struct AppHandlers {
    pub navigate: Callback<Route>,
    pub locale_change: Callback<Locale>,
    pub legal_age: Callback<bool>,
    pub legal_crisis: Callback<bool>,
    pub legal_confirm: Callback<()>,
    pub booking_change: Callback<BookingSelector>,
    pub proceed: Callback<BookingHandoff>,
    pub handoff_consumed: Callback<()>,
    pub payment_confirmed: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState, navigate: Callback<Route>) -> Self {
        Self {
            locale_change: build_locale_change(state),
            legal_age: build_legal_age(state),
            legal_crisis: build_legal_crisis(state),
            legal_confirm: build_legal_confirm(state),
            booking_change: build_booking_change(state),
            proceed: build_proceed(state, navigate.clone()),
            handoff_consumed: build_handoff_consumed(state),
            payment_confirmed: build_payment_confirmed(state, navigate.clone()),
            navigate,
        }
    }
}

pub fn build_locale_change(state: &AppState) -> Callback<Locale> {
    let locale = state.locale.clone();
    Callback::from(move |next: Locale| {
        if let Err(err) = save_locale(&BrowserStore, next) {
            log::warn!("locale preference not saved: {err}");
        }
        apply_document_lang(next);
        locale.set(next);
    })
}

pub fn build_legal_age(state: &AppState) -> Callback<bool> {
    let gate = state.legal_gate.clone();
    Callback::from(move |value: bool| {
        let mut next = *gate;
        next.set_age_confirmed(value);
        gate.set(next);
    })
}

pub fn build_legal_crisis(state: &AppState) -> Callback<bool> {
    let gate = state.legal_gate.clone();
    Callback::from(move |value: bool| {
        let mut next = *gate;
        next.set_crisis_acknowledged(value);
        gate.set(next);
    })
}

pub fn build_legal_confirm(state: &AppState) -> Callback<()> {
    let gate = state.legal_gate.clone();
    Callback::from(move |()| {
        let mut next = *gate;
        // A storage failure still hides the gate for this visit; core logs it.
        if let Err(err) = next.confirm(&BrowserStore) {
            log::debug!("legal acknowledgement: {err}");
        }
        gate.set(next);
    })
}

pub fn build_booking_change(state: &AppState) -> Callback<BookingSelector> {
    let booking = state.booking.clone();
    Callback::from(move |next: BookingSelector| booking.set(next))
}

fn handoff_setter(state: &AppState) -> Callback<Option<BookingHandoff>> {
    let handoff = state.handoff.clone();
    Callback::from(move |next: Option<BookingHandoff>| handoff.set(next))
}

pub fn build_proceed(state: &AppState, navigate: Callback<Route>) -> Callback<BookingHandoff> {
    proceed_to_checkout(handoff_setter(state), navigate)
}

/// Park the selection for the checkout route and switch to it.
pub fn proceed_to_checkout(
    set_handoff: Callback<Option<BookingHandoff>>,
    navigate: Callback<Route>,
) -> Callback<BookingHandoff> {
    Callback::from(move |next: BookingHandoff| {
        log::info!(
            "booking {} at {} on {}",
            next.service_id,
            next.slot_id,
            next.date
        );
        set_handoff.emit(Some(next));
        navigate.emit(Route::Payment);
    })
}

pub fn build_handoff_consumed(state: &AppState) -> Callback<()> {
    consume_handoff(handoff_setter(state))
}

/// Checkout has copied the selection; later mounts start without one.
pub fn consume_handoff(set_handoff: Callback<Option<BookingHandoff>>) -> Callback<()> {
    Callback::from(move |()| set_handoff.emit(None))
}

pub fn build_payment_confirmed(state: &AppState, navigate: Callback<Route>) -> Callback<()> {
    let booking = state.booking.clone();
    finish_checkout(
        handoff_setter(state),
        Callback::from(move |next: BookingSelector| booking.set(next)),
        (*state.time_zone).clone(),
        navigate,
    )
}

/// Drop any leftover selection, start a fresh booking and go home.
pub fn finish_checkout(
    set_handoff: Callback<Option<BookingHandoff>>,
    set_booking: Callback<BookingSelector>,
    time_zone: AttrValue,
    navigate: Callback<Route>,
) -> Callback<()> {
    Callback::from(move |()| {
        set_handoff.emit(None);
        set_booking.emit(BookingSelector::new(dom::today(), time_zone.as_str()));
        navigate.emit(Route::Home);
    })
}
