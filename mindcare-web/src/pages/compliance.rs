//! Legal disclosures.
use crate::dom;
use crate::i18n::use_i18n;
use yew::prelude::*;

const POLICY_SECTIONS: [(&str, &str); 5] = [
    ("hipaa", "🔒"),
    ("prescription", "💊"),
    ("jurisdiction", "⚖"),
    ("records", "📁"),
    ("consent", "📝"),
];

#[function_component(CompliancePage)]
pub fn compliance_page() -> Html {
    let i18n = use_i18n();
    let heading = super::use_heading_focus();
    let year = dom::current_year().to_string();

    html! {
        <section class="page compliance" data-testid="compliance-page">
            <header class="page-header">
                <h1 ref={heading} tabindex="-1">{ i18n.t("compliance.title") }</h1>
                <p>{ i18n.t("compliance.subtitle") }</p>
            </header>
            <div class="warning" role="note">
                <h2>{ i18n.t("compliance.emergency_title") }</h2>
                <p>{ i18n.t("compliance.emergency_body") }</p>
            </div>
            { for POLICY_SECTIONS.iter().map(|(key, icon)| html! {
                <section class="policy" id={format!("policy-{key}")}>
                    <h2>
                        <span aria-hidden="true">{ *icon }</span>
                        { i18n.t(&format!("compliance.{key}.title")) }
                    </h2>
                    <p>{ i18n.t(&format!("compliance.{key}.body")) }</p>
                </section>
            }) }
            <p class="legal-footer">
                { i18n.t_with("compliance.legal_footer", &[("year", year.as_str())]) }
            </p>
        </section>
    }
}
