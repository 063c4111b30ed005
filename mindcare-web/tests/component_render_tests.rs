use futures::executor::block_on;
use mindcare_core::{
    HeroImage, InstantPhase, LegalGate, MemoryStore, PaymentTicket, SessionToken,
};
use mindcare_web::components::{
    consent_checkbox::{ConsentCheckbox, ConsentCheckboxProps},
    feature_card::{FeatureCard, FeatureCardProps},
    footer::{Footer, Props as FooterProps},
    header::{Header, Props as HeaderProps},
    hero_image::{HeroImageView, HeroImageViewProps},
    instant_session_modal::{InstantSessionModal, Props as InstantProps},
    legal_notice::{LegalNotice, Props as LegalProps},
    modal::{Modal, Props as ModalProps},
    nav_link::{NavLink, NavLinkProps},
};
use mindcare_web::router::Route;
use yew::{Callback, Children, LocalServerRenderer, html};

fn token() -> SessionToken {
    SessionToken::parse("AB12CD").unwrap()
}

fn instant_props(phase: InstantPhase) -> InstantProps {
    InstantProps {
        phase,
        on_close: Callback::noop(),
        on_consent: Callback::noop(),
        on_pay: Callback::noop(),
        on_launch: Callback::noop(),
        return_focus_id: None,
    }
}

fn legal_props(gate: LegalGate) -> LegalProps {
    LegalProps {
        gate,
        on_age: Callback::noop(),
        on_crisis: Callback::noop(),
        on_confirm: Callback::noop(),
    }
}

#[test]
fn modal_hides_when_closed_and_blocks_when_not_dismissible() {
    let closed = ModalProps {
        open: false,
        title: "Hidden".into(),
        on_close: Callback::noop(),
        dismissible: true,
        description: None,
        return_focus_id: None,
        class: yew::Classes::new(),
        children: Children::default(),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(closed.clone()).render());
    assert!(!html.contains("Hidden"));

    let open = ModalProps {
        open: true,
        description: Some("Body text".into()),
        ..closed.clone()
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(open.clone()).render());
    assert!(html.contains("role=\"dialog\""));
    assert!(html.contains("aria-modal=\"true\""));
    assert!(html.contains("Body text"));
    assert!(html.contains("Close dialog"));

    let blocking = ModalProps {
        dismissible: false,
        ..open
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(blocking).render());
    assert!(html.contains("Hidden"));
    assert!(!html.contains("Close dialog"));
}

fn first_visit_gate() -> LegalGate {
    LegalGate::load(&MemoryStore::default())
}

#[test]
fn legal_notice_shows_until_acknowledged() {
    let html = block_on(
        LocalServerRenderer::<LegalNotice>::with_props(legal_props(first_visit_gate())).render(),
    );
    assert!(html.contains("THIS IS NOT AN EMERGENCY SERVICE"));
    assert!(html.contains("at least 18 years"));
    assert!(html.contains("Confirm &amp; Enter Site"));
    assert!(html.contains("disabled"));

    let mut ready = first_visit_gate();
    ready.set_age_confirmed(true);
    ready.set_crisis_acknowledged(true);
    let html = block_on(LocalServerRenderer::<LegalNotice>::with_props(legal_props(ready)).render());
    assert!(html.contains("Confirm &amp; Enter Site"));
    assert!(!html.contains("disabled"));

    let mut confirmed = ready;
    confirmed.confirm(&MemoryStore::default()).unwrap();
    let html =
        block_on(LocalServerRenderer::<LegalNotice>::with_props(legal_props(confirmed)).render());
    assert!(!html.contains("Clinical Safety Notice"));
}

#[test]
fn consent_checkbox_renders_label_and_children() {
    let props = ConsentCheckboxProps {
        id: "c1".into(),
        label: "I agree".into(),
        checked: false,
        disabled: true,
        on_toggle: Callback::noop(),
        children: Children::new(vec![html! { <a href="/compliance">{"terms"}</a> }]),
    };
    let html = block_on(LocalServerRenderer::<ConsentCheckbox>::with_props(props).render());
    assert!(html.contains("for=\"c1\""));
    assert!(html.contains("I agree"));
    assert!(html.contains("consent--disabled"));
    assert!(html.contains("terms"));
}

#[test]
fn instant_modal_walks_its_phases() {
    let html = block_on(
        LocalServerRenderer::<InstantSessionModal>::with_props(instant_props(InstantPhase::Closed))
            .render(),
    );
    assert!(!html.contains("Instant Consultation Access"));

    let awaiting = InstantPhase::AwaitingPayment {
        token: token(),
        consent: false,
        pending: None,
    };
    let html = block_on(
        LocalServerRenderer::<InstantSessionModal>::with_props(instant_props(awaiting)).render(),
    );
    assert!(html.contains("Instant Consultation Access"));
    assert!(html.contains("$150.00"));
    assert!(html.contains("Join Room"));
    assert!(!html.contains("MIND-CARE-"));

    let processing = InstantPhase::AwaitingPayment {
        token: token(),
        consent: true,
        pending: Some(PaymentTicket::new(1)),
    };
    let html = block_on(
        LocalServerRenderer::<InstantSessionModal>::with_props(instant_props(processing)).render(),
    );
    assert!(html.contains("Verifying Transaction..."));
    assert!(!html.contains("Join Room"));

    let revealed = InstantPhase::Revealed { token: token() };
    let html = block_on(
        LocalServerRenderer::<InstantSessionModal>::with_props(instant_props(revealed)).render(),
    );
    assert!(html.contains("Payment Successful"));
    assert!(html.contains("MIND-CARE-AB12CD"));
    assert!(html.contains("Launch Google Meet"));
}

#[test]
fn hero_view_covers_each_state() {
    let render = |image: HeroImage| {
        block_on(
            LocalServerRenderer::<HeroImageView>::with_props(HeroImageViewProps { image }).render(),
        )
    };
    assert!(render(HeroImage::Loading).contains("Generating Your Private Hero Space"));
    let generated = render(HeroImage::Generated("https://img.example/hero.png".into()));
    assert!(generated.contains("https://img.example/hero.png"));
    let fallback = render(HeroImage::Fallback);
    assert!(fallback.contains("picsum.photos/1200/600"));
    assert!(fallback.contains("Secure Online Consultation"));
}

#[test]
fn feature_card_becomes_button_when_actionable() {
    let base = FeatureCardProps {
        icon: "🎥".into(),
        title: "Video Sessions".into(),
        body: "Start now".into(),
        badge: Some("Live Now".into()),
        id: Some("trigger".into()),
        on_activate: None,
    };
    let html = block_on(LocalServerRenderer::<FeatureCard>::with_props(base.clone()).render());
    assert!(html.contains("<article"));
    assert!(html.contains("Live Now"));

    let action = FeatureCardProps {
        on_activate: Some(Callback::noop()),
        ..base
    };
    let html = block_on(LocalServerRenderer::<FeatureCard>::with_props(action).render());
    assert!(html.contains("<button"));
    assert!(html.contains("id=\"trigger\""));
}

#[test]
fn header_marks_active_route_and_offers_both_languages() {
    let props = HeaderProps {
        route: Route::Services,
        on_navigate: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<Header>::with_props(props).render());
    assert!(html.contains("Skip to content"));
    assert!(html.contains("Services &amp; Booking"));
    assert!(html.contains("aria-current=\"page\""));
    assert!(html.contains("lang=\"en\""));
    assert!(html.contains("lang=\"es\""));
    assert!(html.contains("Book Consultation"));
    assert!(html.contains("href=\"/compliance\""));
}

#[test]
fn footer_carries_emergency_information() {
    let html = block_on(
        LocalServerRenderer::<Footer>::with_props(FooterProps {
            on_navigate: Callback::noop(),
        })
        .render(),
    );
    assert!(html.contains("NOT FOR EMERGENCIES"));
    assert!(html.contains("911 / 999 / 112"));
    assert!(html.contains("HIPAA Compliant"));
    let year = mindcare_web::dom::current_year().to_string();
    assert!(html.contains(&year));
}

#[test]
fn nav_link_renders_href_for_route() {
    let props = NavLinkProps {
        to: Route::About,
        on_navigate: Callback::noop(),
        active: false,
        class: yew::Classes::new(),
        id: None,
        children: Children::new(vec![html! { <span>{ "About" }</span> }]),
    };
    let html = block_on(LocalServerRenderer::<NavLink>::with_props(props).render());
    assert!(html.contains("href=\"/about\""));
    assert!(!html.contains("aria-current"));
}
