use mindcare_core::Locale;
use serde_json::Value;

const EN_TABLE: &str = include_str!("../../i18n/en.json");
const ES_TABLE: &str = include_str!("../../i18n/es.json");

/// Embedded translation document for `locale`.
#[must_use]
pub const fn raw_table(locale: Locale) -> &'static str {
    match locale {
        Locale::En => EN_TABLE,
        Locale::Es => ES_TABLE,
    }
}

pub fn load_translations(locale: Locale) -> Option<Value> {
    serde_json::from_str(raw_table(locale))
        .map_err(|err| log::error!("translation table `{}` is invalid: {err}", locale.code()))
        .ok()
}
