mod bundle;
mod context;
mod format;
mod locales;
mod render;

pub use bundle::{I18nBundle, bundle};
pub use context::{
    LocaleContext, LocaleProvider, LocaleProviderProps, apply_document_lang, use_i18n, use_locale,
};
pub use format::{fmt_date, fmt_price};
pub use locales::{load_translations, raw_table};
