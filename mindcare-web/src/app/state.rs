use crate::dom;
use crate::storage::BrowserStore;
use mindcare_core::constants::DEFAULT_TIME_ZONE;
use mindcare_core::{BookingHandoff, BookingSelector, LegalGate, Locale, load_locale};
use yew::prelude::*;

/// State owned by the composition root and handed down through props and context.
#[derive(Clone)]
pub struct AppState {
    pub locale: UseStateHandle<Locale>,
    pub legal_gate: UseStateHandle<LegalGate>,
    pub time_zone: UseStateHandle<AttrValue>,
    pub booking: UseStateHandle<BookingSelector>,
    pub handoff: UseStateHandle<Option<BookingHandoff>>,
}

/// Browser time zone, or UTC when it cannot be detected.
#[must_use]
pub fn initial_time_zone() -> AttrValue {
    match dom::detect_time_zone() {
        Ok(tz) => AttrValue::from(tz),
        Err(err) => {
            log::debug!("time zone detection failed, using {DEFAULT_TIME_ZONE}: {err:#}");
            AttrValue::from(DEFAULT_TIME_ZONE)
        }
    }
}

#[hook]
pub fn use_app_state() -> AppState {
    let time_zone = use_state(initial_time_zone);
    let booking = {
        let tz = (*time_zone).clone();
        use_state(move || BookingSelector::new(dom::today(), tz.as_str()))
    };
    AppState {
        locale: use_state(|| load_locale(&BrowserStore)),
        legal_gate: use_state(|| LegalGate::load(&BrowserStore)),
        time_zone,
        booking,
        handoff: use_state(|| None::<BookingHandoff>),
    }
}
