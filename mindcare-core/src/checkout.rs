//! Simulated checkout
//!
//! Checkout never talks to a payment provider. It prices the handed-off
//! selection from a fixed table, waits for consent, and after the caller's
//! timer fires reports the booking as confirmed.
use crate::booking::BookingHandoff;
use crate::constants::{
    EMERGENCY_PRICE_CENTS, FOLLOWUP_PRICE_CENTS, INITIAL_PRICE_CENTS, SERVICE_EMERGENCY,
    SERVICE_INITIAL,
};
use thiserror::Error;

/// Price bucket used by checkout. Unrecognized services fall into `FollowUp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceTier {
    Initial,
    Emergency,
    FollowUp,
}

impl PriceTier {
    #[must_use]
    pub fn for_service(service_id: Option<&str>) -> Self {
        match service_id {
            Some(SERVICE_INITIAL) => Self::Initial,
            Some(SERVICE_EMERGENCY) => Self::Emergency,
            _ => Self::FollowUp,
        }
    }

    #[must_use]
    pub const fn price_cents(self) -> i64 {
        match self {
            Self::Initial => INITIAL_PRICE_CENTS,
            Self::Emergency => EMERGENCY_PRICE_CENTS,
            Self::FollowUp => FOLLOWUP_PRICE_CENTS,
        }
    }

    #[must_use]
    pub const fn price_dollars(self) -> i64 {
        self.price_cents() / 100
    }

    /// Translation key for the short order-summary title.
    #[must_use]
    pub const fn title_key(self) -> &'static str {
        match self {
            Self::Initial => "payment.tier.initial",
            Self::Emergency => "payment.tier.emergency",
            Self::FollowUp => "payment.tier.followup",
        }
    }
}

/// Identifies one pending simulated payment so a late timer can be told apart
/// from the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaymentTicket(u64);

impl PaymentTicket {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutPhase {
    Reviewing { consent: bool },
    Processing { ticket: PaymentTicket },
    Confirmed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("consent must be given before paying")]
    ConsentRequired,
    #[error("a payment is already being processed")]
    AlreadyProcessing,
    #[error("the booking is already confirmed")]
    AlreadyConfirmed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkout {
    handoff: Option<BookingHandoff>,
    tier: PriceTier,
    phase: CheckoutPhase,
    next_ticket: u64,
}

impl Checkout {
    /// Start checkout. A missing handoff prices at the default tier.
    #[must_use]
    pub fn new(handoff: Option<BookingHandoff>) -> Self {
        let tier = PriceTier::for_service(handoff.as_ref().map(|h| h.service_id.as_str()));
        Self {
            handoff,
            tier,
            phase: CheckoutPhase::Reviewing { consent: false },
            next_ticket: 1,
        }
    }

    #[must_use]
    pub const fn handoff(&self) -> Option<&BookingHandoff> {
        self.handoff.as_ref()
    }

    #[must_use]
    pub const fn tier(&self) -> PriceTier {
        self.tier
    }

    #[must_use]
    pub const fn price_cents(&self) -> i64 {
        self.tier.price_cents()
    }

    #[must_use]
    pub const fn phase(&self) -> CheckoutPhase {
        self.phase
    }

    /// Consent is implied once payment has started.
    #[must_use]
    pub const fn consent_given(&self) -> bool {
        match self.phase {
            CheckoutPhase::Reviewing { consent } => consent,
            CheckoutPhase::Processing { .. } | CheckoutPhase::Confirmed => true,
        }
    }

    #[must_use]
    pub const fn can_pay(&self) -> bool {
        matches!(self.phase, CheckoutPhase::Reviewing { consent: true })
    }

    #[must_use]
    pub const fn is_processing(&self) -> bool {
        matches!(self.phase, CheckoutPhase::Processing { .. })
    }

    /// Toggle the consent checkbox.
    ///
    /// # Errors
    ///
    /// Fails once payment has started.
    pub fn set_consent(&mut self, consent: bool) -> Result<(), CheckoutError> {
        match self.phase {
            CheckoutPhase::Reviewing { .. } => {
                self.phase = CheckoutPhase::Reviewing { consent };
                Ok(())
            }
            CheckoutPhase::Processing { .. } => Err(CheckoutError::AlreadyProcessing),
            CheckoutPhase::Confirmed => Err(CheckoutError::AlreadyConfirmed),
        }
    }

    /// Enter the processing phase. The caller schedules a timer and hands the
    /// ticket back to [`Checkout::complete`].
    ///
    /// # Errors
    ///
    /// Fails without consent or when a payment is already underway.
    pub fn begin_payment(&mut self) -> Result<PaymentTicket, CheckoutError> {
        match self.phase {
            CheckoutPhase::Reviewing { consent: false } => Err(CheckoutError::ConsentRequired),
            CheckoutPhase::Reviewing { consent: true } => {
                let ticket = PaymentTicket::new(self.next_ticket);
                self.next_ticket += 1;
                self.phase = CheckoutPhase::Processing { ticket };
                Ok(ticket)
            }
            CheckoutPhase::Processing { .. } => Err(CheckoutError::AlreadyProcessing),
            CheckoutPhase::Confirmed => Err(CheckoutError::AlreadyConfirmed),
        }
    }

    /// Resolve the pending payment. Returns `false` for a ticket that is not
    /// the one currently processing.
    pub fn complete(&mut self, ticket: PaymentTicket) -> bool {
        match self.phase {
            CheckoutPhase::Processing { ticket: pending } if pending == ticket => {
                self.phase = CheckoutPhase::Confirmed;
                true
            }
            _ => false,
        }
    }
}
