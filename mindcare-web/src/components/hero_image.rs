//! Landing hero visual backed by the optional image service.
use crate::i18n::use_i18n;
use anyhow::Context;
use mindcare_core::{HeroImage, parse_hero_response};
use yew::prelude::*;

/// Ask the image service for a hero URL.
///
/// # Errors
/// Fails when the request fails or the body is not the expected JSON.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn load_hero(endpoint: &str) -> anyhow::Result<Option<String>> {
    let body = crate::dom::fetch_text(endpoint).await?;
    parse_hero_response(&body).context("hero endpoint returned malformed JSON")
}

#[derive(Properties, PartialEq, Clone)]
pub struct HeroImageViewProps {
    pub image: HeroImage,
}

#[function_component(HeroImageView)]
pub fn hero_image_view(props: &HeroImageViewProps) -> Html {
    let i18n = use_i18n();
    match &props.image {
        HeroImage::Loading => html! {
            <div class="hero-image hero-image--loading" role="status" aria-live="polite">
                <span class="spinner" aria-hidden="true"></span>
                <p>{ i18n.t("hero.loading") }</p>
            </div>
        },
        HeroImage::Generated(url) => html! {
            <img class="hero-image" src={url.clone()} alt={i18n.t("hero.generated_alt")} />
        },
        HeroImage::Fallback => html! {
            <figure class="hero-image hero-image--fallback">
                <img src={props.image.src().unwrap_or_default().to_string()} alt={i18n.t("hero.fallback_alt")} />
                <figcaption>
                    <strong>{ i18n.t("hero.fallback_title") }</strong>
                    <span>{ i18n.t("hero.fallback_sub") }</span>
                </figcaption>
            </figure>
        },
    }
}

/// Issues one request on mount; without a configured endpoint it goes
/// straight to the placeholder.
#[function_component(HeroBanner)]
pub fn hero_banner() -> Html {
    let image = use_state(HeroImage::default);
    {
        let image = image.clone();
        use_effect_with((), move |()| {
            match crate::config::hero_endpoint() {
                None => {
                    log::debug!("no hero endpoint configured");
                    image.set(HeroImage::Fallback);
                }
                Some(endpoint) => {
                    #[cfg(target_arch = "wasm32")]
                    wasm_bindgen_futures::spawn_local(async move {
                        image.set(HeroImage::resolve(load_hero(endpoint).await));
                    });
                    #[cfg(not(target_arch = "wasm32"))]
                    image.set(HeroImage::resolve(Err::<Option<String>, _>(
                        anyhow::anyhow!("cannot fetch {endpoint} outside a browser"),
                    )));
                }
            }
            || {}
        });
    }
    html! { <HeroImageView image={(*image).clone()} /> }
}
