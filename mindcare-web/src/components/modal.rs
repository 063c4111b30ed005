use crate::a11y::{focus_first_in, restore_focus, trap_focus_in};
use crate::i18n::use_i18n;
use std::sync::atomic::{AtomicUsize, Ordering};
use yew::prelude::*;

static MODAL_IDS: AtomicUsize = AtomicUsize::new(0);

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub title: AttrValue,
    #[prop_or_default]
    pub on_close: Callback<()>,
    /// Blocking dialogs ignore Escape and backdrop clicks and hide the close button.
    #[prop_or(true)]
    pub dismissible: bool,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub return_focus_id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &Props) -> Html {
    let i18n = use_i18n();
    let modal_id = use_state(|| MODAL_IDS.fetch_add(1, Ordering::Relaxed));
    let container_id = format!("modal-{}", *modal_id);
    let title_id = format!("modal-title-{}", *modal_id);
    let desc_id: Option<String> = props
        .description
        .as_ref()
        .map(|_| format!("modal-desc-{}", *modal_id));

    let prev_open = use_mut_ref(|| props.open);
    {
        let container_id = container_id.clone();
        use_effect_with(
            (props.open, props.return_focus_id.clone()),
            move |(is_open, return_focus_id)| {
                let was_open = *prev_open.borrow();
                *prev_open.borrow_mut() = *is_open;
                if *is_open {
                    focus_first_in(&container_id);
                } else if was_open && let Some(id) = return_focus_id.as_ref() {
                    restore_focus(id);
                }
                || {}
            },
        );
    }

    if !props.open {
        return Html::default();
    }

    let dismissible = props.dismissible;
    let on_backdrop = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            if dismissible {
                cb.emit(());
            }
        })
    };
    let on_close_click = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let swallow_click = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_keydown = {
        let cb = props.on_close.clone();
        let container_id = container_id.clone();
        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "Escape" if dismissible => {
                e.prevent_default();
                cb.emit(());
            }
            "Tab" if trap_focus_in(&container_id, e.shift_key()) => e.prevent_default(),
            _ => {}
        })
    };

    html! {
        <div class="modal-backdrop" role="presentation" onclick={on_backdrop}>
            <div
                id={container_id}
                class={classes!("modal", props.class.clone())}
                role="dialog"
                aria-modal="true"
                aria-labelledby={title_id.clone()}
                aria-describedby={desc_id.clone().unwrap_or_default()}
                onkeydown={on_keydown}
                onclick={swallow_click}
            >
                <div class="modal__header">
                    <h2 id={title_id}>{ props.title.clone() }</h2>
                    if dismissible {
                        <button type="button" class="modal__close" aria-label={i18n.t("modal.close")} onclick={on_close_click}>
                            {"✕"}
                        </button>
                    }
                </div>
                { props.description.as_ref().map(|desc| {
                    let id = desc_id.clone().unwrap_or_default();
                    html! {
                        <p id={id} class="modal__description">{ desc.clone() }</p>
                    }
                }).unwrap_or_default() }
                <div class="modal__body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
