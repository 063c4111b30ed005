use crate::i18n::locales::load_translations;
use crate::i18n::render::resolve;
use mindcare_core::Locale;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::BTreeMap;

pub struct I18nBundle {
    locale: Locale,
    pub(super) translations: Value,
    pub(super) fallback: Value,
}

fn empty_table() -> Value {
    Value::Object(serde_json::Map::new())
}

impl I18nBundle {
    fn build(locale: Locale) -> Self {
        let fallback = load_translations(Locale::En).unwrap_or_else(empty_table);
        let translations = if locale == Locale::En {
            fallback.clone()
        } else {
            load_translations(locale).unwrap_or_else(empty_table)
        };
        Self {
            locale,
            translations,
            fallback,
        }
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Translate `key`, falling back to English and then to the key itself.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.tr(key, None)
    }

    /// Translate with `{var}` / `{{var}}` substitution.
    #[must_use]
    pub fn tr(&self, key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
        resolve(self, key, args).unwrap_or_else(|| key.to_string())
    }

    /// Shorthand for [`I18nBundle::tr`] with inline pairs.
    #[must_use]
    pub fn t_with(&self, key: &str, pairs: &[(&str, &str)]) -> String {
        let args: BTreeMap<&str, &str> = pairs.iter().copied().collect();
        self.tr(key, Some(&args))
    }
}

static EN: Lazy<I18nBundle> = Lazy::new(|| I18nBundle::build(Locale::En));
static ES: Lazy<I18nBundle> = Lazy::new(|| I18nBundle::build(Locale::Es));

/// Parsed bundle for `locale`, built on first use.
#[must_use]
pub fn bundle(locale: Locale) -> &'static I18nBundle {
    match locale {
        Locale::En => &*EN,
        Locale::Es => &*ES,
    }
}
