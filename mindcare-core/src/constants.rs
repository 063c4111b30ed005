//! Fixed values shared by the booking, checkout and consent flows.
//!
//! Prices, delays and storage keys are compiled in rather than loaded from
//! assets so they can only change through reviewed code.

// Storage keys -------------------------------------------------------------
pub const LEGAL_ACK_KEY: &str = "mindcare_legal_ack_v2";
pub const LEGAL_ACK_VALUE: &str = "true";
pub const LOCALE_KEY: &str = "mindcare.locale";

// Simulated payment timing (milliseconds) -----------------------------------
pub const PAYMENT_DELAY_MS: u32 = 2_000;
pub const INSTANT_PAYMENT_DELAY_MS: u32 = 1_800;

// Pricing (cents) -----------------------------------------------------------
pub const INITIAL_PRICE_CENTS: i64 = 25_000;
pub const EMERGENCY_PRICE_CENTS: i64 = 30_000;
pub const FOLLOWUP_PRICE_CENTS: i64 = 12_000;
pub const INSTANT_SESSION_FEE_CENTS: i64 = 15_000;

// Service identifiers -------------------------------------------------------
pub const SERVICE_INITIAL: &str = "initial";
pub const SERVICE_FOLLOWUP: &str = "followup";
pub const SERVICE_EMERGENCY: &str = "emergency";

// Scheduling ----------------------------------------------------------------
pub const SLOT_TIMES: [&str; 6] = ["09:00", "10:00", "11:30", "14:00", "15:30", "16:30"];
pub const UNAVAILABLE_SLOT_INDICES: [usize; 2] = [2, 4];
pub const DEFAULT_TIME_ZONE: &str = "UTC";

// Instant session -----------------------------------------------------------
pub const ROOM_PREFIX: &str = "MIND-CARE";
pub const SESSION_TOKEN_LEN: usize = 6;
pub const SESSION_TOKEN_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// External collaborators ----------------------------------------------------
pub const MEETING_URL: &str = "https://meet.google.com/new";
pub const FALLBACK_HERO_URL: &str = "https://picsum.photos/1200/600?grayscale&blur=2";
