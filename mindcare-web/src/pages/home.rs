//! Landing page and the instant video session it launches.
use crate::components::feature_card::FeatureCard;
use crate::components::hero_image::HeroBanner;
use crate::components::instant_session_modal::InstantSessionModal;
use crate::components::nav_link::NavLink;
use crate::dom;
use crate::i18n::use_i18n;
use crate::router::Route;
use gloo::timers::callback::Timeout;
use mindcare_core::constants::{INSTANT_PAYMENT_DELAY_MS, MEETING_URL};
use mindcare_core::{InstantSession, PaymentTicket};
use std::rc::Rc;
use yew::prelude::*;

const INSTANT_TRIGGER_ID: &str = "instant-session-trigger";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstantAction {
    Open,
    Close,
    Consent(bool),
    Pay,
    Complete(PaymentTicket),
}

/// Reducer wrapper so timers dispatch against the latest session.
#[derive(Debug, Clone)]
pub struct InstantSessionState(pub InstantSession);

impl Reducible for InstantSessionState {
    type Action = InstantAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut session = self.0.clone();
        let outcome = match action {
            InstantAction::Open => {
                session.open();
                Ok(())
            }
            InstantAction::Close => {
                session.close();
                Ok(())
            }
            InstantAction::Consent(value) => session.set_consent(value),
            InstantAction::Pay => session.begin_payment().map(|ticket| {
                log::debug!("instant payment {} started", ticket.id());
            }),
            InstantAction::Complete(ticket) => {
                if !session.complete(ticket) {
                    log::debug!("ignoring stale instant payment {}", ticket.id());
                    return self;
                }
                Ok(())
            }
        };
        if let Err(err) = outcome {
            log::warn!("instant session: {err}");
            return self;
        }
        Rc::new(Self(session))
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct HomePageProps {
    pub time_zone: AttrValue,
    pub on_navigate: Callback<Route>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let i18n = use_i18n();
    let session = use_reducer(|| InstantSessionState(InstantSession::with_seed(dom::random_seed())));

    {
        let dispatcher = session.dispatcher();
        use_effect_with(session.0.pending_ticket(), move |pending| {
            let timer = pending.map(|ticket| {
                Timeout::new(INSTANT_PAYMENT_DELAY_MS, move || {
                    dispatcher.dispatch(InstantAction::Complete(ticket));
                })
            });
            move || drop(timer)
        });
    }

    let dispatch = |action: InstantAction| {
        let session = session.clone();
        Callback::from(move |()| session.dispatch(action))
    };
    let on_consent = {
        let session = session.clone();
        Callback::from(move |value: bool| session.dispatch(InstantAction::Consent(value)))
    };
    let on_launch = Callback::from(|()| {
        if let Err(err) = dom::open_in_new_tab(MEETING_URL) {
            log::error!("could not open the meeting room: {err:#}");
        }
    });

    html! {
        <div class="page home">
            <section class="hero">
                <div class="hero__copy">
                    <h1>{ i18n.t("home.title") }</h1>
                    <p class="lead">{ i18n.t("home.subtitle") }</p>
                    <div class="hero__actions">
                        <NavLink to={Route::Services} on_navigate={props.on_navigate.clone()} class="btn btn-primary">
                            { i18n.t("home.book") }
                        </NavLink>
                        <NavLink to={Route::Compliance} on_navigate={props.on_navigate.clone()} class="btn btn-outline">
                            { i18n.t("home.emergency_info") }
                        </NavLink>
                    </div>
                    <p class="hero__note">{ i18n.t("home.emergency_prompt") }</p>
                </div>
                <HeroBanner />
            </section>

            <section class="features" aria-labelledby="features-title">
                <h2 id="features-title">{ i18n.t("home.features_title") }</h2>
                <p>{ i18n.t("home.features_sub") }</p>
                <div class="feature-grid">
                    <FeatureCard
                        icon="🌐"
                        title={i18n.t("home.feature.scheduling.title")}
                        body={i18n.t_with("home.feature.scheduling.body", &[("tz", props.time_zone.as_str())])}
                    />
                    <FeatureCard
                        icon="🛡"
                        title={i18n.t("home.feature.security.title")}
                        body={i18n.t("home.feature.security.body")}
                    />
                    <FeatureCard
                        id={INSTANT_TRIGGER_ID}
                        icon="🎥"
                        title={i18n.t("home.feature.video.title")}
                        body={i18n.t("home.feature.video.body")}
                        badge={i18n.t("home.live_now")}
                        on_activate={dispatch(InstantAction::Open)}
                    />
                    <FeatureCard
                        icon="💬"
                        title={i18n.t("home.feature.language.title")}
                        body={i18n.t("home.feature.language.body")}
                    />
                </div>
            </section>

            <section class="cta">
                <h2>{ i18n.t("home.cta_title") }</h2>
                <p>{ i18n.t("home.cta_sub") }</p>
                <NavLink to={Route::Services} on_navigate={props.on_navigate.clone()} class="btn btn-primary">
                    { i18n.t("home.cta_button") }
                </NavLink>
            </section>

            <InstantSessionModal
                phase={session.0.phase().clone()}
                on_close={dispatch(InstantAction::Close)}
                on_consent={on_consent}
                on_pay={dispatch(InstantAction::Pay)}
                on_launch={on_launch}
                return_focus_id={AttrValue::from(INSTANT_TRIGGER_ID)}
            />
        </div>
    }
}
