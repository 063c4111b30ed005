//! Static service catalog
use crate::locale::{Locale, Localized};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// A bookable consultation type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Service {
    pub id: String,
    pub title: Localized,
    /// Human-readable duration label, e.g. `60 min`
    pub duration: String,
    /// Display price in cents
    pub price_cents: i64,
    pub description: Localized,
}

impl Service {
    #[must_use]
    pub fn title(&self, locale: Locale) -> &str {
        self.title.get(locale)
    }

    #[must_use]
    pub fn description(&self, locale: Locale) -> &str {
        self.description.get(locale)
    }

    /// Whole-dollar price badge such as `$250`.
    #[must_use]
    pub fn display_price(&self) -> String {
        let dollars = self.price_cents / 100;
        let cents = self.price_cents % 100;
        if cents == 0 {
            format!("${dollars}")
        } else {
            format!("${dollars}.{cents:02}")
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("JSON parsing error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog contains no services")]
    Empty,
    #[error("duplicate service id `{0}`")]
    DuplicateId(String),
    #[error("service `{0}` has a negative price")]
    NegativePrice(String),
}

/// Ordered, immutable list of services.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceCatalog {
    services: Vec<Service>,
}

impl ServiceCatalog {
    /// Parse and validate a catalog document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, empty, repeats an id or
    /// carries a negative price.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.services.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen = HashSet::new();
        for service in &self.services {
            if !seen.insert(service.id.as_str()) {
                return Err(CatalogError::DuplicateId(service.id.clone()));
            }
            if service.price_cents < 0 {
                return Err(CatalogError::NegativePrice(service.id.clone()));
            }
        }
        Ok(())
    }

    /// Load the catalog embedded in the binary.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(include_str!("../data/services.json")).unwrap_or_else(|err| {
            log::error!("embedded service catalog rejected: {err}");
            Self::default()
        })
    }

    #[must_use]
    pub fn services(&self) -> &[Service] {
        &self.services
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|service| service.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }
}

static CATALOG: Lazy<ServiceCatalog> = Lazy::new(ServiceCatalog::load_from_static);

/// Process-wide catalog, parsed on first use.
pub fn catalog() -> &'static ServiceCatalog {
    &CATALOG
}
