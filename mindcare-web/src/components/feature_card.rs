use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FeatureCardProps {
    pub icon: AttrValue,
    pub title: AttrValue,
    pub body: AttrValue,
    #[prop_or_default]
    pub badge: Option<AttrValue>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Makes the whole card a button.
    #[prop_or_default]
    pub on_activate: Option<Callback<()>>,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    let content = html! {
        <>
            <span class="feature-card__icon" aria-hidden="true">{ props.icon.clone() }</span>
            <h3>{ props.title.clone() }</h3>
            <p>{ props.body.clone() }</p>
            { props.badge.as_ref().map(|badge| html! {
                <span class="badge badge--live">{ badge.clone() }</span>
            }).unwrap_or_default() }
        </>
    };
    match props.on_activate.clone() {
        Some(cb) => {
            let onclick = Callback::from(move |_: MouseEvent| cb.emit(()));
            html! {
                <button type="button" id={props.id.clone()} class="feature-card feature-card--action" {onclick}>
                    { content }
                </button>
            }
        }
        None => html! {
            <article id={props.id.clone()} class="feature-card">{ content }</article>
        },
    }
}
