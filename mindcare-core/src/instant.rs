//! Instant video session: consent and pay, then reveal a room label.
//!
//! Tokens are cosmetic and drawn from a seeded `ChaCha8Rng`, so hosts pick
//! the entropy and tests stay reproducible.
use crate::checkout::PaymentTicket;
use crate::constants::{ROOM_PREFIX, SESSION_TOKEN_ALPHABET, SESSION_TOKEN_LEN};
use once_cell::sync::Lazy;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use regex::Regex;
use std::fmt;
use thiserror::Error;

/// Display-only identifier shown inside the room label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^[0-9A-Z]{{{SESSION_TOKEN_LEN}}}$"))
        .unwrap_or_else(|_| unreachable!("token pattern is a valid literal"))
});

impl SessionToken {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let token = (0..SESSION_TOKEN_LEN)
            .map(|_| {
                let idx = rng.gen_range(0..SESSION_TOKEN_ALPHABET.len());
                char::from(SESSION_TOKEN_ALPHABET[idx])
            })
            .collect();
        Self(token)
    }

    /// Accept an existing token if it matches the alphabet and length contract.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        TOKEN_PATTERN
            .is_match(raw)
            .then(|| Self(raw.to_string()))
    }

    #[must_use]
    pub fn is_valid(raw: &str) -> bool {
        TOKEN_PATTERN.is_match(raw)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `MIND-CARE-<token>`
    #[must_use]
    pub fn room_label(&self) -> String {
        format!("{ROOM_PREFIX}-{}", self.0)
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstantPhase {
    Closed,
    AwaitingPayment {
        token: SessionToken,
        consent: bool,
        pending: Option<PaymentTicket>,
    },
    Revealed {
        token: SessionToken,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstantSessionError {
    #[error("the instant session dialog is not open")]
    NotOpen,
    #[error("consent must be given before paying")]
    ConsentRequired,
    #[error("a payment is already being processed")]
    AlreadyProcessing,
    #[error("the room has already been revealed")]
    AlreadyRevealed,
}

#[derive(Debug, Clone)]
pub struct InstantSession {
    phase: InstantPhase,
    rng: ChaCha8Rng,
    last_token: Option<SessionToken>,
    next_ticket: u64,
}

impl InstantSession {
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            phase: InstantPhase::Closed,
            rng: ChaCha8Rng::seed_from_u64(seed),
            last_token: None,
            next_ticket: 1,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> &InstantPhase {
        &self.phase
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self.phase, InstantPhase::Closed)
    }

    #[must_use]
    pub const fn is_processing(&self) -> bool {
        matches!(
            self.phase,
            InstantPhase::AwaitingPayment {
                pending: Some(_),
                ..
            }
        )
    }

    /// Ticket of the payment currently being simulated, if any.
    #[must_use]
    pub const fn pending_ticket(&self) -> Option<PaymentTicket> {
        match &self.phase {
            InstantPhase::AwaitingPayment { pending, .. } => *pending,
            _ => None,
        }
    }

    #[must_use]
    pub const fn consent_given(&self) -> bool {
        match &self.phase {
            InstantPhase::AwaitingPayment { consent, .. } => *consent,
            InstantPhase::Revealed { .. } => true,
            InstantPhase::Closed => false,
        }
    }

    #[must_use]
    pub const fn can_pay(&self) -> bool {
        matches!(
            self.phase,
            InstantPhase::AwaitingPayment {
                consent: true,
                pending: None,
                ..
            }
        )
    }

    #[must_use]
    pub const fn token(&self) -> Option<&SessionToken> {
        match &self.phase {
            InstantPhase::Closed => None,
            InstantPhase::AwaitingPayment { token, .. } | InstantPhase::Revealed { token } => {
                Some(token)
            }
        }
    }

    /// Room label, only once payment has gone through.
    #[must_use]
    pub fn room_label(&self) -> Option<String> {
        match &self.phase {
            InstantPhase::Revealed { token } => Some(token.room_label()),
            _ => None,
        }
    }

    /// Open (or reopen) the dialog at the payment step with a fresh token.
    pub fn open(&mut self) {
        let mut token = SessionToken::generate(&mut self.rng);
        while self.last_token.as_ref() == Some(&token) {
            token = SessionToken::generate(&mut self.rng);
        }
        self.last_token = Some(token.clone());
        self.phase = InstantPhase::AwaitingPayment {
            token,
            consent: false,
            pending: None,
        };
    }

    /// Close from any phase. The token and any pending payment are discarded.
    pub fn close(&mut self) {
        self.phase = InstantPhase::Closed;
    }

    /// # Errors
    ///
    /// Fails when closed, revealed, or while a payment is pending.
    pub fn set_consent(&mut self, value: bool) -> Result<(), InstantSessionError> {
        match &mut self.phase {
            InstantPhase::Closed => Err(InstantSessionError::NotOpen),
            InstantPhase::Revealed { .. } => Err(InstantSessionError::AlreadyRevealed),
            InstantPhase::AwaitingPayment {
                pending: Some(_), ..
            } => Err(InstantSessionError::AlreadyProcessing),
            InstantPhase::AwaitingPayment { consent, .. } => {
                *consent = value;
                Ok(())
            }
        }
    }

    /// Start the simulated payment and return the ticket the timer must
    /// present to [`InstantSession::complete`].
    ///
    /// # Errors
    ///
    /// Fails when closed, without consent, or when already paying/revealed.
    pub fn begin_payment(&mut self) -> Result<PaymentTicket, InstantSessionError> {
        let ticket = PaymentTicket::new(self.next_ticket);
        match &mut self.phase {
            InstantPhase::Closed => Err(InstantSessionError::NotOpen),
            InstantPhase::Revealed { .. } => Err(InstantSessionError::AlreadyRevealed),
            InstantPhase::AwaitingPayment {
                pending: Some(_), ..
            } => Err(InstantSessionError::AlreadyProcessing),
            InstantPhase::AwaitingPayment { consent: false, .. } => {
                Err(InstantSessionError::ConsentRequired)
            }
            InstantPhase::AwaitingPayment { pending, .. } => {
                *pending = Some(ticket);
                self.next_ticket += 1;
                Ok(ticket)
            }
        }
    }

    /// Reveal the room if `ticket` belongs to the payment still pending.
    /// A ticket from a dialog that was closed in the meantime is ignored.
    pub fn complete(&mut self, ticket: PaymentTicket) -> bool {
        let InstantPhase::AwaitingPayment {
            token,
            pending: Some(pending),
            ..
        } = &self.phase
        else {
            return false;
        };
        if *pending != ticket {
            return false;
        }
        self.phase = InstantPhase::Revealed {
            token: token.clone(),
        };
        true
    }
}
