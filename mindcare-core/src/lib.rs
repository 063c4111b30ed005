//! MindCare Core
//!
//! Platform-agnostic booking, checkout and consent logic for the MindCare
//! Global telehealth front end. This crate provides every state machine the
//! site runs on without UI or browser dependencies.

pub mod booking;
pub mod catalog;
pub mod checkout;
pub mod constants;
pub mod hero;
pub mod instant;
pub mod legal;
pub mod locale;
pub mod slots;
pub mod storage;

// Re-export commonly used types
pub use booking::{BookingError, BookingHandoff, BookingSelector, BookingStep};
pub use catalog::{CatalogError, Service, ServiceCatalog, catalog};
pub use checkout::{Checkout, CheckoutError, CheckoutPhase, PaymentTicket, PriceTier};
pub use hero::{HeroImage, parse_hero_response};
pub use instant::{InstantPhase, InstantSession, InstantSessionError, SessionToken};
pub use legal::{LegalGate, LegalGateError};
pub use locale::{Locale, LocaleError, Localized};
pub use slots::{TimeSlot, generate_slots};
pub use storage::{MemoryStore, StorageError};

/// Trait for abstracting durable string storage.
/// Platform-specific implementations should provide this
pub trait KeyValueStore {
    type Error: std::error::Error + 'static;

    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be reached.
    fn read(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be persisted.
    fn write(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// Read the persisted locale preference, defaulting when absent or unreadable.
#[must_use]
pub fn load_locale<S: KeyValueStore>(store: &S) -> Locale {
    match store.read(constants::LOCALE_KEY) {
        Ok(Some(code)) => Locale::from_code_or_default(&code),
        Ok(None) => Locale::default(),
        Err(err) => {
            log::warn!("locale preference unreadable, using default: {err}");
            Locale::default()
        }
    }
}

/// Persist the locale preference.
///
/// # Errors
///
/// Returns the store error when the preference cannot be written.
pub fn save_locale<S: KeyValueStore>(store: &S, locale: Locale) -> Result<(), S::Error> {
    store.write(constants::LOCALE_KEY, locale.code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_preference_roundtrips_through_store() {
        let store = MemoryStore::default();
        assert_eq!(load_locale(&store), Locale::En);
        save_locale(&store, Locale::Es).unwrap();
        assert_eq!(load_locale(&store), Locale::Es);
    }

    #[test]
    fn unreadable_or_garbage_locale_falls_back_to_english() {
        let store = MemoryStore::unavailable();
        assert_eq!(load_locale(&store), Locale::En);

        let store = MemoryStore::default();
        store.write(constants::LOCALE_KEY, "klingon").unwrap();
        assert_eq!(load_locale(&store), Locale::En);
    }
}
