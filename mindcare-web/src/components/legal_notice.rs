//! First-visit safety gate.
use crate::components::consent_checkbox::ConsentCheckbox;
use crate::components::modal::Modal;
use crate::i18n::use_i18n;
use mindcare_core::LegalGate;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub gate: LegalGate,
    pub on_age: Callback<bool>,
    pub on_crisis: Callback<bool>,
    pub on_confirm: Callback<()>,
}

#[function_component(LegalNotice)]
pub fn legal_notice(p: &Props) -> Html {
    let i18n = use_i18n();
    let on_confirm = {
        let cb = p.on_confirm.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <Modal open={p.gate.is_visible()} title={i18n.t("legal.title")} dismissible={false} class="legal-notice">
            <div class="warning" role="alert">
                <h3>{ i18n.t("legal.emergency_title") }</h3>
                <p>{ i18n.t("legal.emergency_body") }</p>
            </div>
            <ConsentCheckbox
                id="legal-age"
                label={i18n.t("legal.age_check")}
                checked={p.gate.age_confirmed()}
                on_toggle={p.on_age.clone()}
            />
            <ConsentCheckbox
                id="legal-crisis"
                label={i18n.t("legal.crisis_check")}
                checked={p.gate.crisis_acknowledged()}
                on_toggle={p.on_crisis.clone()}
            />
            <button
                type="button"
                class="btn btn-primary"
                disabled={!p.gate.can_confirm()}
                onclick={on_confirm}
            >
                { i18n.t("legal.confirm") }
            </button>
        </Modal>
    }
}
