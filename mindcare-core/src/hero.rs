//! Hero visual resolution.
//!
//! The web shell asks an image service for a generated visual once; this
//! module turns whatever came back into a displayable state.
use crate::constants::FALLBACK_HERO_URL;
use serde::Deserialize;
use std::fmt::Display;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum HeroImage {
    #[default]
    Loading,
    Generated(String),
    Fallback,
}

#[derive(Debug, Deserialize)]
struct HeroResponse {
    #[serde(default)]
    url: Option<String>,
}

/// Pull the image URL out of a `{"url": ...}` body. Blank URLs count as absent.
///
/// # Errors
///
/// Returns an error if the body is not a JSON object.
pub fn parse_hero_response(body: &str) -> Result<Option<String>, serde_json::Error> {
    let response: HeroResponse = serde_json::from_str(body)?;
    Ok(response
        .url
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty()))
}

impl HeroImage {
    /// Collapse a finished request into `Generated` or `Fallback`.
    pub fn resolve<E: Display>(outcome: Result<Option<String>, E>) -> Self {
        match outcome {
            Ok(Some(url)) if !url.trim().is_empty() => Self::Generated(url),
            Ok(_) => Self::Fallback,
            Err(err) => {
                log::warn!("hero image request failed, using placeholder: {err}");
                Self::Fallback
            }
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback)
    }

    /// Image source to render, `None` while loading.
    #[must_use]
    pub fn src(&self) -> Option<&str> {
        match self {
            Self::Loading => None,
            Self::Generated(url) => Some(url),
            Self::Fallback => Some(FALLBACK_HERO_URL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_url_field() {
        assert_eq!(
            parse_hero_response(r#"{"url":" https://img.example/a.png "}"#).unwrap(),
            Some("https://img.example/a.png".to_string())
        );
        assert_eq!(parse_hero_response(r#"{"url":""}"#).unwrap(), None);
        assert_eq!(parse_hero_response(r#"{"url":null}"#).unwrap(), None);
        assert_eq!(parse_hero_response("{}").unwrap(), None);
        assert!(parse_hero_response("<html>").is_err());
    }

    #[test]
    fn every_failure_resolves_to_fallback() {
        assert_eq!(HeroImage::resolve::<String>(Ok(None)), HeroImage::Fallback);
        assert_eq!(
            HeroImage::resolve::<String>(Ok(Some("  ".into()))),
            HeroImage::Fallback
        );
        assert_eq!(
            HeroImage::resolve(Err::<Option<String>, _>("503")),
            HeroImage::Fallback
        );
        assert_eq!(
            HeroImage::resolve::<String>(Ok(Some("https://x/y.png".into()))),
            HeroImage::Generated("https://x/y.png".into())
        );
    }

    #[test]
    fn src_tracks_state() {
        assert!(HeroImage::default().is_loading());
        assert_eq!(HeroImage::Loading.src(), None);
        assert_eq!(HeroImage::Fallback.src(), Some(FALLBACK_HERO_URL));
        assert_eq!(HeroImage::Generated("u".into()).src(), Some("u"));
    }
}
