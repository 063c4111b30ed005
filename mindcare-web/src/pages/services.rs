//! Two-step booking: pick a service, then a date and time.
use crate::i18n::{use_i18n, use_locale};
use chrono::NaiveDate;
use mindcare_core::{BookingHandoff, BookingSelector, catalog};
#[cfg(target_arch = "wasm32")]
use yew::html::TargetCast;
use yew::prelude::*;

/// Apply a raw `<input type="date">` value, returning the updated selector.
/// Unparseable or past dates are logged and ignored.
#[must_use]
pub fn apply_date(selector: &BookingSelector, raw: &str) -> Option<BookingSelector> {
    let date = match raw.parse::<NaiveDate>() {
        Ok(date) => date,
        Err(err) => {
            log::debug!("ignoring date input `{raw}`: {err}");
            return None;
        }
    };
    let mut next = selector.clone();
    match next.set_date(date) {
        Ok(()) => Some(next),
        Err(err) => {
            log::warn!("{err}");
            None
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ServicesPageProps {
    pub selector: BookingSelector,
    pub on_change: Callback<BookingSelector>,
    pub on_proceed: Callback<BookingHandoff>,
}

#[function_component(ServicesPage)]
pub fn services_page(props: &ServicesPageProps) -> Html {
    let i18n = use_i18n();
    let locale = use_locale().locale;
    let heading = super::use_heading_focus();
    let selector = &props.selector;
    let slot_step = selector.slot_step_enabled();

    let service_cards = catalog().services().iter().map(|service| {
        let selected = selector.service_id() == Some(service.id.as_str());
        let onclick = {
            let selector = selector.clone();
            let on_change = props.on_change.clone();
            let id = service.id.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = selector.clone();
                match next.select_service(catalog(), &id) {
                    Ok(()) => on_change.emit(next),
                    Err(err) => log::warn!("{err}"),
                }
            })
        };
        html! {
            <li>
                <button
                    type="button"
                    class={classes!("service-card", selected.then_some("selected"))}
                    aria-pressed={selected.to_string()}
                    data-service={service.id.clone()}
                    {onclick}
                >
                    <span class="service-card__head">
                        <strong>{ service.title(locale) }</strong>
                        <span class="price">{ service.display_price() }</span>
                    </span>
                    <span class="service-card__meta">
                        { format!("{} · {}", service.duration, i18n.t("services.video_call")) }
                    </span>
                    <span class="service-card__desc">{ service.description(locale) }</span>
                </button>
            </li>
        }
    });

    let slot_buttons = selector.slots().into_iter().map(|slot| {
        let selected = selector.slot_id() == Some(slot.id.as_str());
        let onclick = {
            let selector = selector.clone();
            let on_change = props.on_change.clone();
            let id = slot.id.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = selector.clone();
                match next.select_slot(&id) {
                    Ok(()) => on_change.emit(next),
                    Err(err) => log::warn!("{err}"),
                }
            })
        };
        html! {
            <li>
                <button
                    type="button"
                    class={classes!("slot", selected.then_some("selected"), (!slot.available).then_some("slot--unavailable"))}
                    disabled={!slot_step || !slot.available}
                    aria-pressed={selected.to_string()}
                    data-slot={slot.id.clone()}
                    {onclick}
                >
                    { slot.time.clone() }
                    if !slot.available {
                        <span class="slot__note">{ i18n.t("services.unavailable") }</span>
                    }
                </button>
            </li>
        }
    });

    let on_date = {
        let selector = selector.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>()
                    && let Some(next) = apply_date(&selector, &input.value())
                {
                    on_change.emit(next);
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (&e, &selector, &on_change);
            }
        })
    };

    let on_proceed = {
        let selector = selector.clone();
        let cb = props.on_proceed.clone();
        Callback::from(move |_: MouseEvent| match selector.proceed() {
            Ok(handoff) => cb.emit(handoff),
            Err(err) => log::warn!("{err}"),
        })
    };

    html! {
        <section class="page services" data-testid="services-page">
            <header class="page-header">
                <h1 ref={heading} tabindex="-1">{ i18n.t("services.title") }</h1>
                <p>{ i18n.t("services.subtitle") }</p>
            </header>

            <section class="step" aria-labelledby="step-service">
                <h2 id="step-service">{ format!("1. {}", i18n.t("services.step_service")) }</h2>
                <ul class="service-list">{ for service_cards }</ul>
            </section>

            <section
                class={classes!("step", (!slot_step).then_some("step--disabled"))}
                aria-labelledby="step-time"
                aria-disabled={(!slot_step).to_string()}
            >
                <h2 id="step-time">
                    { format!("2. {}", i18n.t("services.step_time")) }
                    <span class="tz">
                        { format!(" ({})", i18n.t_with("services.detected", &[("tz", selector.time_zone())])) }
                    </span>
                </h2>
                <label for="booking-date">{ i18n.t("services.date_label") }</label>
                <input
                    id="booking-date"
                    type="date"
                    min={selector.min_date().to_string()}
                    value={selector.date().to_string()}
                    disabled={!slot_step}
                    onchange={on_date}
                />
                <ul class="slot-grid">{ for slot_buttons }</ul>
            </section>

            <button
                type="button"
                class="btn btn-primary"
                disabled={!selector.can_proceed()}
                onclick={on_proceed}
            >
                { i18n.t("services.proceed") }
            </button>
        </section>
    }
}
