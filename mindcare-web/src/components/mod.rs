pub mod consent_checkbox;
pub mod feature_card;
pub mod footer;
pub mod header;
pub mod hero_image;
pub mod instant_session_modal;
pub mod legal_notice;
pub mod modal;
pub mod nav_link;
