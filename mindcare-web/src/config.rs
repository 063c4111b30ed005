//! Build-time settings.
//!
//! Everything here is read with `option_env!`, so values are fixed when the
//! bundle is compiled:
//!
//! - `PUBLIC_URL`: base path the site is served under (e.g. `/care`)
//! - `MINDCARE_HERO_ENDPOINT`: image service queried for the landing visual
//! - `MINDCARE_LOG`: console log level (`error` .. `trace`, default `info`)
use log::LevelFilter;

const PUBLIC_URL: Option<&str> = option_env!("PUBLIC_URL");
const HERO_ENDPOINT: Option<&str> = option_env!("MINDCARE_HERO_ENDPOINT");
const LOG_LEVEL: Option<&str> = option_env!("MINDCARE_LOG");

/// Prefix an app path with the deployment base.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    join_base(PUBLIC_URL.unwrap_or(""), relative)
}

/// Router basename, `None` when served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    non_empty(PUBLIC_URL)
        .map(|base| base.trim_end_matches('/').to_string())
        .filter(|base| !base.is_empty())
}

/// Image service URL, `None` when not configured.
#[must_use]
pub fn hero_endpoint() -> Option<&'static str> {
    non_empty(HERO_ENDPOINT)
}

#[must_use]
pub fn log_level() -> LevelFilter {
    parse_level(LOG_LEVEL)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn join_base(base: &str, relative: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let rel = relative.trim_start_matches('/');
    format!("{base}/{rel}")
}

fn parse_level(raw: Option<&str>) -> LevelFilter {
    non_empty(raw)
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_root_anchored_without_base() {
        assert_eq!(join_base("", "services"), "/services");
        assert_eq!(join_base("", "/"), "/");
    }

    #[test]
    fn paths_respect_public_base() {
        assert_eq!(join_base("/care/", "/payment"), "/care/payment");
        assert_eq!(join_base("/care", "compliance"), "/care/compliance");
    }

    #[test]
    fn log_level_parses_or_defaults_to_info() {
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some(" WARN ")), LevelFilter::Warn);
        assert_eq!(parse_level(Some("loud")), LevelFilter::Info);
        assert_eq!(parse_level(None), LevelFilter::Info);
    }

    #[test]
    fn blank_settings_count_as_unset() {
        assert_eq!(non_empty(Some("  ")), None);
        assert_eq!(non_empty(Some(" https://img ")), Some("https://img"));
    }
}
