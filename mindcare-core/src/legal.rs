//! First-visit legal acknowledgement gate.
use crate::KeyValueStore;
use crate::constants::{LEGAL_ACK_KEY, LEGAL_ACK_VALUE};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LegalGateError {
    #[error("both confirmations are required")]
    Incomplete,
    #[error("acknowledgement could not be saved: {0}")]
    Storage(String),
}

/// Blocking notice shown until the visitor confirms age and non-crisis status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LegalGate {
    visible: bool,
    age_confirmed: bool,
    crisis_acknowledged: bool,
}

impl LegalGate {
    /// Decide visibility from the stored flag. An unreadable store shows the gate.
    #[must_use]
    pub fn load<S: KeyValueStore>(store: &S) -> Self {
        let acknowledged = match store.read(LEGAL_ACK_KEY) {
            Ok(value) => value.is_some_and(|v| !v.is_empty()),
            Err(err) => {
                log::warn!("legal acknowledgement unreadable: {err}");
                false
            }
        };
        Self {
            visible: !acknowledged,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub const fn age_confirmed(&self) -> bool {
        self.age_confirmed
    }

    #[must_use]
    pub const fn crisis_acknowledged(&self) -> bool {
        self.crisis_acknowledged
    }

    pub const fn set_age_confirmed(&mut self, value: bool) {
        self.age_confirmed = value;
    }

    pub const fn set_crisis_acknowledged(&mut self, value: bool) {
        self.crisis_acknowledged = value;
    }

    #[must_use]
    pub const fn can_confirm(&self) -> bool {
        self.age_confirmed && self.crisis_acknowledged
    }

    /// Record the acknowledgement and hide the gate.
    ///
    /// A failed write still hides the gate for this session; the error is
    /// returned so the caller can report it, and the gate comes back on the
    /// next visit.
    ///
    /// # Errors
    ///
    /// [`LegalGateError::Incomplete`] when either box is unchecked,
    /// [`LegalGateError::Storage`] when the flag could not be written.
    pub fn confirm<S: KeyValueStore>(&mut self, store: &S) -> Result<(), LegalGateError> {
        if !self.can_confirm() {
            return Err(LegalGateError::Incomplete);
        }
        self.visible = false;
        store.write(LEGAL_ACK_KEY, LEGAL_ACK_VALUE).map_err(|err| {
            log::warn!("legal acknowledgement not persisted: {err}");
            LegalGateError::Storage(err.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    fn checked(store: &MemoryStore) -> LegalGate {
        let mut gate = LegalGate::load(store);
        gate.set_age_confirmed(true);
        gate.set_crisis_acknowledged(true);
        gate
    }

    #[test]
    fn shown_only_when_flag_absent() {
        let store = MemoryStore::default();
        assert!(LegalGate::load(&store).is_visible());

        store.write(LEGAL_ACK_KEY, LEGAL_ACK_VALUE).unwrap();
        assert!(!LegalGate::load(&store).is_visible());
    }

    #[test]
    fn empty_flag_counts_as_absent() {
        let store = MemoryStore::default();
        store.write(LEGAL_ACK_KEY, "").unwrap();
        assert!(LegalGate::load(&store).is_visible());
    }

    #[test]
    fn confirm_needs_both_boxes() {
        let store = MemoryStore::default();
        let mut gate = LegalGate::load(&store);
        assert!(!gate.can_confirm());

        gate.set_age_confirmed(true);
        assert_eq!(gate.confirm(&store), Err(LegalGateError::Incomplete));
        assert!(gate.is_visible());
        assert!(store.is_empty());

        gate.set_age_confirmed(false);
        gate.set_crisis_acknowledged(true);
        assert!(!gate.can_confirm());
    }

    #[test]
    fn confirmation_persists_across_visits() {
        let store = MemoryStore::default();
        let mut gate = checked(&store);
        gate.confirm(&store).unwrap();
        assert!(!gate.is_visible());
        assert_eq!(
            store.read(LEGAL_ACK_KEY).unwrap().as_deref(),
            Some(LEGAL_ACK_VALUE)
        );
        assert!(!LegalGate::load(&store).is_visible());
    }

    #[test]
    fn failed_write_hides_for_session_only() {
        let store = MemoryStore::read_only();
        let mut gate = checked(&store);
        assert!(matches!(gate.confirm(&store), Err(LegalGateError::Storage(_))));
        assert!(!gate.is_visible());
        assert!(LegalGate::load(&store).is_visible());
    }

    #[test]
    fn unreadable_store_shows_gate() {
        assert!(LegalGate::load(&MemoryStore::unavailable()).is_visible());
    }
}
