//! Two-step booking selection and the checkout handoff message.
use crate::catalog::ServiceCatalog;
use crate::constants::DEFAULT_TIME_ZONE;
use crate::slots::{TimeSlot, find_slot, generate_slots};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Selection handed from the booking view to checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingHandoff {
    pub service_id: String,
    pub slot_id: String,
    pub date: NaiveDate,
    pub time_zone: String,
}

impl BookingHandoff {
    /// Decode a handoff carried as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is missing or the date is not ISO formatted.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("unknown service `{0}`")]
    UnknownService(String),
    #[error("a service must be chosen before a time")]
    ServiceRequired,
    #[error("unknown slot `{0}`")]
    UnknownSlot(String),
    #[error("slot `{0}` is not available")]
    SlotUnavailable(String),
    #[error("{date} is before the earliest bookable day {min}")]
    DateInPast { date: NaiveDate, min: NaiveDate },
    #[error("choose a service and a time before continuing")]
    Incomplete,
}

/// Where the user is in the two dependent choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingStep {
    NoServiceSelected,
    ServiceSelected { service_id: String },
    SlotSelected { service_id: String, slot_id: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSelector {
    step: BookingStep,
    date: NaiveDate,
    min_date: NaiveDate,
    time_zone: String,
}

impl BookingSelector {
    /// Start a selection on `today`, which is also the earliest bookable date.
    #[must_use]
    pub fn new(today: NaiveDate, time_zone: impl Into<String>) -> Self {
        let time_zone = time_zone.into();
        Self {
            step: BookingStep::NoServiceSelected,
            date: today,
            min_date: today,
            time_zone: if time_zone.trim().is_empty() {
                DEFAULT_TIME_ZONE.to_string()
            } else {
                time_zone
            },
        }
    }

    #[must_use]
    pub const fn step(&self) -> &BookingStep {
        &self.step
    }

    #[must_use]
    pub fn service_id(&self) -> Option<&str> {
        match &self.step {
            BookingStep::NoServiceSelected => None,
            BookingStep::ServiceSelected { service_id }
            | BookingStep::SlotSelected { service_id, .. } => Some(service_id.as_str()),
        }
    }

    #[must_use]
    pub fn slot_id(&self) -> Option<&str> {
        match &self.step {
            BookingStep::SlotSelected { slot_id, .. } => Some(slot_id.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub const fn min_date(&self) -> NaiveDate {
        self.min_date
    }

    #[must_use]
    pub fn time_zone(&self) -> &str {
        &self.time_zone
    }

    /// Slots for the current service and date.
    #[must_use]
    pub fn slots(&self) -> Vec<TimeSlot> {
        generate_slots(self.service_id(), self.date)
    }

    /// The time step stays disabled until a service exists.
    #[must_use]
    pub const fn slot_step_enabled(&self) -> bool {
        !matches!(self.step, BookingStep::NoServiceSelected)
    }

    /// Choose a service. Switching to a different service drops the slot.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::UnknownService`] if the id is not in the catalog.
    pub fn select_service(
        &mut self,
        catalog: &ServiceCatalog,
        service_id: &str,
    ) -> Result<(), BookingError> {
        if !catalog.contains(service_id) {
            return Err(BookingError::UnknownService(service_id.to_string()));
        }
        if self.service_id() == Some(service_id) {
            return Ok(());
        }
        self.step = BookingStep::ServiceSelected {
            service_id: service_id.to_string(),
        };
        Ok(())
    }

    /// Choose one of the generated slots.
    ///
    /// # Errors
    ///
    /// Fails without a service, for ids that are not generated and for
    /// unavailable slots.
    pub fn select_slot(&mut self, slot_id: &str) -> Result<(), BookingError> {
        let service_id = self
            .service_id()
            .ok_or(BookingError::ServiceRequired)?
            .to_string();
        let slots = self.slots();
        let slot = find_slot(&slots, slot_id)
            .ok_or_else(|| BookingError::UnknownSlot(slot_id.to_string()))?;
        if !slot.available {
            return Err(BookingError::SlotUnavailable(slot_id.to_string()));
        }
        self.step = BookingStep::SlotSelected {
            service_id,
            slot_id: slot.id.clone(),
        };
        Ok(())
    }

    /// Change the appointment date. Availability does not depend on the
    /// date, so a chosen slot survives the change.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::DateInPast`] for dates before the minimum.
    pub fn set_date(&mut self, date: NaiveDate) -> Result<(), BookingError> {
        if date < self.min_date {
            return Err(BookingError::DateInPast {
                date,
                min: self.min_date,
            });
        }
        self.date = date;
        Ok(())
    }

    pub fn set_time_zone(&mut self, time_zone: impl Into<String>) {
        let time_zone = time_zone.into();
        if !time_zone.trim().is_empty() {
            self.time_zone = time_zone;
        }
    }

    #[must_use]
    pub const fn can_proceed(&self) -> bool {
        matches!(self.step, BookingStep::SlotSelected { .. })
    }

    /// Package the finished selection for checkout.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Incomplete`] unless both service and slot are set.
    pub fn proceed(&self) -> Result<BookingHandoff, BookingError> {
        match &self.step {
            BookingStep::SlotSelected {
                service_id,
                slot_id,
            } => Ok(BookingHandoff {
                service_id: service_id.clone(),
                slot_id: slot_id.clone(),
                date: self.date,
                time_zone: self.time_zone.clone(),
            }),
            _ => Err(BookingError::Incomplete),
        }
    }
}
