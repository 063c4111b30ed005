#[cfg(target_arch = "wasm32")]
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ConsentCheckboxProps {
    pub id: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub checked: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub on_toggle: Callback<bool>,
    /// Extra content after the label, such as a link to the terms.
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ConsentCheckbox)]
pub fn consent_checkbox(props: &ConsentCheckboxProps) -> Html {
    let on_change = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: Event| {
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                    on_toggle.emit(input.checked());
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (&e, &on_toggle);
            }
        })
    };
    html! {
        <div class={classes!("consent", props.disabled.then_some("consent--disabled"))}>
            <label for={props.id.clone()} class="consent__label">
                <input
                    id={props.id.clone()}
                    type="checkbox"
                    checked={props.checked}
                    disabled={props.disabled}
                    onchange={on_change}
                />
                <span>{ props.label.clone() }</span>
            </label>
            { for props.children.iter() }
        </div>
    }
}
