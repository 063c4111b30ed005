//! Priority video session dialog: consent and pay, then the room label.
use crate::components::consent_checkbox::ConsentCheckbox;
use crate::components::modal::Modal;
use crate::i18n::{fmt_price, use_i18n};
use mindcare_core::InstantPhase;
use mindcare_core::constants::INSTANT_SESSION_FEE_CENTS;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub phase: InstantPhase,
    pub on_close: Callback<()>,
    pub on_consent: Callback<bool>,
    pub on_pay: Callback<()>,
    pub on_launch: Callback<()>,
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
}

#[function_component(InstantSessionModal)]
pub fn instant_session_modal(p: &Props) -> Html {
    let i18n = use_i18n();
    let fee = fmt_price(INSTANT_SESSION_FEE_CENTS);

    let (title, body) = match &p.phase {
        InstantPhase::Closed => (i18n.t("instant.pay_title"), Html::default()),
        InstantPhase::AwaitingPayment {
            consent, pending, ..
        } => {
            let processing = pending.is_some();
            let on_pay = {
                let cb = p.on_pay.clone();
                Callback::from(move |_: MouseEvent| cb.emit(()))
            };
            let body = html! {
                <div class="instant-pay">
                    <p>{ i18n.t("instant.pay_desc") }</p>
                    <p class="note">{ i18n.t("instant.no_pills") }</p>
                    <div class="fee-row">
                        <span>{ i18n.t("instant.fee_label") }</span>
                        <strong>{ fee.clone() }</strong>
                    </div>
                    <ConsentCheckbox
                        id="instant-consent"
                        label={i18n.t("instant.consent")}
                        checked={*consent}
                        disabled={processing}
                        on_toggle={p.on_consent.clone()}
                    />
                    if processing {
                        <p class="processing" role="status" aria-live="polite">
                            <span class="spinner" aria-hidden="true"></span>
                            { i18n.t("instant.processing") }
                        </p>
                    } else {
                        <button
                            type="button"
                            class="btn btn-primary"
                            disabled={!*consent}
                            onclick={on_pay}
                        >
                            { i18n.t_with("instant.pay_button", &[("amount", fee.as_str())]) }
                        </button>
                    }
                </div>
            };
            (i18n.t("instant.pay_title"), body)
        }
        InstantPhase::Revealed { token } => {
            let on_launch = {
                let cb = p.on_launch.clone();
                Callback::from(move |_: MouseEvent| cb.emit(()))
            };
            let body = html! {
                <div class="instant-reveal">
                    <p>{ i18n.t("instant.meet_desc") }</p>
                    <p class="room-label">
                        <span>{ i18n.t("instant.room_label") }</span>
                        <code>{ token.room_label() }</code>
                    </p>
                    <button type="button" class="btn btn-primary" onclick={on_launch}>
                        { i18n.t("instant.meet_button") }
                    </button>
                </div>
            };
            (i18n.t("instant.meet_title"), body)
        }
    };

    html! {
        <Modal
            open={!matches!(p.phase, InstantPhase::Closed)}
            title={title}
            on_close={p.on_close.clone()}
            return_focus_id={p.return_focus_id.clone()}
            class="instant-session"
        >
            { body }
        </Modal>
    }
}
