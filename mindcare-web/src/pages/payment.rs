//! Simulated checkout for a booked consultation.
use crate::a11y;
use crate::components::consent_checkbox::ConsentCheckbox;
use crate::components::nav_link::NavLink;
use crate::dom;
use crate::i18n::{fmt_date, fmt_price, use_i18n, use_locale};
use crate::router::Route;
use gloo::timers::callback::Timeout;
use mindcare_core::constants::PAYMENT_DELAY_MS;
use mindcare_core::slots::{find_slot, generate_slots};
use mindcare_core::{BookingHandoff, Checkout, CheckoutPhase, PaymentTicket};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutAction {
    SetConsent(bool),
    Begin,
    Complete(PaymentTicket),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutState(pub Checkout);

impl Reducible for CheckoutState {
    type Action = CheckoutAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut checkout = self.0.clone();
        let outcome = match action {
            CheckoutAction::SetConsent(value) => checkout.set_consent(value),
            CheckoutAction::Begin => checkout.begin_payment().map(|ticket| {
                log::info!("processing demo payment {}", ticket.id());
            }),
            CheckoutAction::Complete(ticket) => {
                if !checkout.complete(ticket) {
                    log::debug!("ignoring stale payment {}", ticket.id());
                    return self;
                }
                Ok(())
            }
        };
        if let Err(err) = outcome {
            log::warn!("checkout: {err}");
            return self;
        }
        Rc::new(Self(checkout))
    }
}

/// Arm the processing timer, or report a confirmed payment.
fn enter_phase(
    phase: CheckoutPhase,
    complete: Callback<PaymentTicket>,
    on_confirmed: &Callback<()>,
    confirmed_msg: &str,
) -> Option<Timeout> {
    match phase {
        CheckoutPhase::Processing { ticket } => Some(Timeout::new(PAYMENT_DELAY_MS, move || {
            complete.emit(ticket);
        })),
        CheckoutPhase::Confirmed => {
            dom::alert(confirmed_msg);
            on_confirmed.emit(());
            None
        }
        CheckoutPhase::Reviewing { .. } => None,
    }
}

/// Slot label such as `14:00` for the order summary.
fn slot_time(handoff: &BookingHandoff) -> Option<String> {
    let slots = generate_slots(Some(&handoff.service_id), handoff.date);
    find_slot(&slots, &handoff.slot_id).map(|slot| slot.time.clone())
}

#[derive(Properties, Clone, PartialEq)]
pub struct PaymentPageProps {
    #[prop_or_default]
    pub handoff: Option<BookingHandoff>,
    pub on_navigate: Callback<Route>,
    /// Fired once on mount when a handoff was taken into the checkout.
    #[prop_or_default]
    pub on_consumed: Callback<()>,
    pub on_confirmed: Callback<()>,
}

#[function_component(PaymentPage)]
pub fn payment_page(props: &PaymentPageProps) -> Html {
    let i18n = use_i18n();
    let locale = use_locale().locale;
    let heading = super::use_heading_focus();
    let checkout = {
        let handoff = props.handoff.clone();
        use_reducer(move || CheckoutState(Checkout::new(handoff)))
    };

    {
        let took_handoff = props.handoff.is_some();
        let on_consumed = props.on_consumed.clone();
        use_effect_with((), move |()| {
            if took_handoff {
                on_consumed.emit(());
            }
            || ()
        });
    }

    {
        let dispatcher = checkout.dispatcher();
        let on_confirmed = props.on_confirmed.clone();
        let confirmed_msg = i18n.t("payment.confirmed");
        use_effect_with(checkout.0.phase(), move |phase| {
            let complete =
                Callback::from(move |ticket| dispatcher.dispatch(CheckoutAction::Complete(ticket)));
            let timer = enter_phase(*phase, complete, &on_confirmed, &confirmed_msg);
            move || drop(timer)
        });
    }

    let on_consent = {
        let checkout = checkout.clone();
        Callback::from(move |value: bool| checkout.dispatch(CheckoutAction::SetConsent(value)))
    };
    let on_pay = {
        let checkout = checkout.clone();
        let processing = i18n.t("payment.processing");
        Callback::from(move |_: MouseEvent| {
            a11y::announce(&processing);
            checkout.dispatch(CheckoutAction::Begin);
        })
    };

    let state = &checkout.0;
    let price = fmt_price(state.price_cents());
    let processing = state.is_processing();
    let details = state.handoff().map(|handoff| {
        let when = match slot_time(handoff) {
            Some(time) => format!("{} · {time}", fmt_date(handoff.date, locale)),
            None => fmt_date(handoff.date, locale),
        };
        html! {
            <dl class="summary__details">
                <dt>{ i18n.t("payment.date") }</dt>
                <dd>{ when }</dd>
                <dt>{ i18n.t("payment.time_zone") }</dt>
                <dd>{ handoff.time_zone.clone() }</dd>
            </dl>
        }
    });

    html! {
        <section class="page payment" data-testid="payment-page">
            <h1 ref={heading} tabindex="-1">{ i18n.t("payment.checkout") }</h1>
            <div class="payment-grid">
                <aside class="summary" aria-labelledby="summary-title">
                    <h2 id="summary-title">{ i18n.t("payment.summary") }</h2>
                    <p class="summary__line">
                        <span>{ i18n.t(state.tier().title_key()) }</span>
                        <strong>{ price.clone() }</strong>
                    </p>
                    { details.unwrap_or_default() }
                </aside>
                <form class="payment-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                    <label for="card-number">{ i18n.t("payment.card_label") }</label>
                    <input
                        id="card-number"
                        type="text"
                        placeholder={i18n.t("payment.card_placeholder")}
                        disabled={true}
                    />
                    <ConsentCheckbox
                        id="payment-consent"
                        label={i18n.t("payment.consent")}
                        checked={state.consent_given()}
                        disabled={processing || !matches!(state.phase(), CheckoutPhase::Reviewing { .. })}
                        on_toggle={on_consent}
                    >
                        <NavLink to={Route::Compliance} on_navigate={props.on_navigate.clone()} class="link">
                            { i18n.t("payment.view_terms") }
                        </NavLink>
                    </ConsentCheckbox>
                    if processing {
                        <p class="processing" role="status" aria-live="polite">
                            <span class="spinner" aria-hidden="true"></span>
                            { i18n.t("payment.processing") }
                        </p>
                    } else {
                        <button
                            type="button"
                            class="btn btn-primary"
                            disabled={!state.can_pay()}
                            onclick={on_pay}
                        >
                            { i18n.t_with("payment.pay_button", &[("amount", price.as_str())]) }
                        </button>
                    }
                    <p class="encryption">{ i18n.t("payment.encryption") }</p>
                </form>
            </div>
            <section class="policy">
                <h2>{ i18n.t("payment.policy_title") }</h2>
                <p>{ i18n.t("payment.policy_text") }</p>
            </section>
            <NavLink to={Route::Services} on_navigate={props.on_navigate.clone()} class="link">
                { i18n.t("payment.cancel") }
            </NavLink>
        </section>
    }
}
