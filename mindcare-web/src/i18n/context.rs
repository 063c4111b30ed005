//! Locale context shared by every view.
use crate::i18n::bundle::{I18nBundle, bundle};
use mindcare_core::Locale;
use yew::prelude::*;

/// Current display language plus the setter owned by the app root.
#[derive(Clone, Debug, PartialEq)]
pub struct LocaleContext {
    pub locale: Locale,
    pub set_locale: Callback<Locale>,
}

#[derive(Properties, PartialEq)]
pub struct LocaleProviderProps {
    pub locale: Locale,
    #[prop_or_default]
    pub on_change: Callback<Locale>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(LocaleProvider)]
pub fn locale_provider(props: &LocaleProviderProps) -> Html {
    let context = LocaleContext {
        locale: props.locale,
        set_locale: props.on_change.clone(),
    };
    html! {
        <ContextProvider<LocaleContext> context={context}>
            { for props.children.iter() }
        </ContextProvider<LocaleContext>>
    }
}

/// Active locale; English outside a provider.
#[hook]
pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>().unwrap_or_else(|| LocaleContext {
        locale: Locale::default(),
        set_locale: Callback::noop(),
    })
}

/// Translation bundle for the active locale.
#[hook]
pub fn use_i18n() -> &'static I18nBundle {
    let context = use_locale();
    bundle(context.locale)
}

/// Mirror the locale onto `<html lang>`.
pub fn apply_document_lang(locale: Locale) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = crate::dom::document().and_then(|doc| doc.document_element())
            && let Err(err) = el.set_attribute("lang", locale.code())
        {
            log::warn!(
                "could not set document language: {}",
                crate::dom::js_error_message(&err)
            );
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        log::trace!("document language is {}", locale.code());
    }
}
